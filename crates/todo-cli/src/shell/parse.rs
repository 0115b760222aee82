use thiserror::Error;

/// A line that should have been a task id but was not a number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid task ID '{raw}': expected a number")]
pub struct InputParseError {
    raw: String,
}

/// Parse a task id typed at a prompt.
pub fn parse_task_id(raw: &str) -> Result<i64, InputParseError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| InputParseError {
        raw: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_task_id;

    #[test]
    fn parses_plain_number() {
        assert_eq!(parse_task_id("42"), Ok(42));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_task_id("  7 \r"), Ok(7));
    }

    #[test]
    fn errors_on_non_numeric() {
        let err = parse_task_id("abc").expect_err("should fail");
        assert_eq!(err.to_string(), "Invalid task ID 'abc': expected a number");
    }

    #[test]
    fn errors_on_empty_and_fractional() {
        assert!(parse_task_id("").is_err());
        assert!(parse_task_id("1.5").is_err());
    }
}
