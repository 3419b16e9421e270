use std::fmt;

/// Returns true if every character of `candidate` is an ASCII letter.
///
/// The empty string is accepted.
pub fn is_valid_name(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_alphabetic())
}

/// A player name that passed [`is_valid_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Parse a raw input line. Surrounding whitespace (including the
    /// trailing newline) is stripped before validation.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        is_valid_name(trimmed).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("Alice"));
        assert!(is_valid_name("bob"));
        assert!(is_valid_name("ZED"));
        assert!(is_valid_name("")); // vacuously true
        assert!(!is_valid_name("Al1ce"));
        assert!(!is_valid_name("Mary Ann"));
        assert!(!is_valid_name("o'neil"));
        assert!(!is_valid_name("Zoë")); // non-ASCII letter
    }

    #[test]
    fn test_parse_trims_line_ending() {
        let name = PlayerName::parse("Alice\n").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(name.to_string(), "Alice");

        assert!(PlayerName::parse("  Bob \r\n").is_some());
        assert!(PlayerName::parse("Al1ce\n").is_none());
        assert_eq!(PlayerName::parse("\n").unwrap().as_str(), "");
    }
}
