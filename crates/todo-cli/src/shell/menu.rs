/// Menu printed before every choice prompt.
pub const MENU: &str = "\n=== TODO Application ===\n\
1. Add Task\n\
2. View Tasks\n\
3. Edit Task\n\
4. Delete Task\n\
5. Exit\n";

pub const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    Add,
    View,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Map a typed line to a menu entry. Anything other than `1`–`5` is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Edit),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MenuChoice;

    #[test]
    fn parses_every_entry() {
        let parsed: Vec<_> = ["1", "2", "3", "4", "5"]
            .into_iter()
            .map(MenuChoice::parse)
            .collect();
        assert_eq!(
            parsed,
            vec![
                Some(MenuChoice::Add),
                Some(MenuChoice::View),
                Some(MenuChoice::Edit),
                Some(MenuChoice::Delete),
                Some(MenuChoice::Exit),
            ]
        );
    }

    #[test]
    fn unknown_input_is_none() {
        for raw in ["", "0", "6", "exit", "1 2"] {
            assert_eq!(MenuChoice::parse(raw), None, "input {raw:?}");
        }
    }
}
