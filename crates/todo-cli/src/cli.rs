use clap::Parser;

/// Top-level CLI parser for the `todo` binary.
///
/// The tracker itself is an interactive menu; the only switches control
/// logging.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Terminal task tracker")]
pub struct Cli {
    /// Quiet mode (errors only in the log)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_the_default() {
        let cli = Cli::try_parse_from(["todo"]).expect("cli should parse");
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_flag_parses() {
        let cli = Cli::try_parse_from(["todo", "-v"]).expect("cli should parse");
        assert!(cli.verbose);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["todo", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["todo", "add"]).is_err());
    }
}
