//! Password strength policy.

use serde::{Deserialize, Serialize};

use super::ErrorKind;

fn default_min_length() -> usize {
    8
}

fn default_true() -> bool {
    true
}

/// Character-class policy applied to the password field.
///
/// `special_characters: None` treats every character that is neither
/// alphanumeric nor whitespace as special.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_true")]
    pub require_uppercase: bool,
    #[serde(default = "default_true")]
    pub require_lowercase: bool,
    #[serde(default = "default_true")]
    pub require_digit: bool,
    #[serde(default = "default_true")]
    pub require_special: bool,
    #[serde(default)]
    pub special_characters: Option<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
            special_characters: None,
        }
    }
}

/// A character class the policy may demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordPolicy {
    fn is_special(&self, c: char) -> bool {
        match &self.special_characters {
            Some(set) => set.contains(c),
            None => !c.is_alphanumeric() && !c.is_whitespace(),
        }
    }

    /// Required classes that `password` does not contain, in a fixed order.
    pub fn missing_classes(&self, password: &str) -> Vec<CharacterClass> {
        let mut missing = Vec::new();
        if self.require_uppercase && !password.chars().any(char::is_uppercase) {
            missing.push(CharacterClass::Uppercase);
        }
        if self.require_lowercase && !password.chars().any(char::is_lowercase) {
            missing.push(CharacterClass::Lowercase);
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            missing.push(CharacterClass::Digit);
        }
        if self.require_special && !password.chars().any(|c| self.is_special(c)) {
            missing.push(CharacterClass::Special);
        }
        missing
    }

    /// First rule `password` breaks, if any.
    ///
    /// Length is measured in characters, not bytes.
    pub fn check(&self, password: &str) -> Option<ErrorKind> {
        if password.is_empty() {
            return Some(ErrorKind::EmptyValue);
        }
        if password.chars().count() < self.min_length {
            return Some(ErrorKind::LengthTooShort);
        }
        if !self.missing_classes(password).is_empty() {
            return Some(ErrorKind::MissingCharacterClass);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_examples() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.check("ZAQ!1qaz"), None);
        assert_eq!(
            policy.check("12345678"),
            Some(ErrorKind::MissingCharacterClass)
        );
        assert_eq!(policy.check("123"), Some(ErrorKind::LengthTooShort));
        assert_eq!(policy.check(""), Some(ErrorKind::EmptyValue));
    }

    #[test]
    fn test_length_boundary() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.check("Aa1!aaa"), Some(ErrorKind::LengthTooShort));
        assert_eq!(policy.check("Aa1!aaaa"), None);
    }

    #[test]
    fn test_length_counts_characters() {
        let policy = PasswordPolicy::default();
        // 7 characters, 9 bytes
        assert_eq!(policy.check("Źą1!aaa"), Some(ErrorKind::LengthTooShort));
        assert_eq!(policy.check("Źą1!aaaa"), None);
    }

    #[test]
    fn test_each_class_is_required() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.missing_classes("zaq!1qaz"),
            vec![CharacterClass::Uppercase]
        );
        assert_eq!(
            policy.missing_classes("ZAQ!1QAZ"),
            vec![CharacterClass::Lowercase]
        );
        assert_eq!(
            policy.missing_classes("ZAQ!Wqaz"),
            vec![CharacterClass::Digit]
        );
        assert_eq!(
            policy.missing_classes("ZAQ11qaz"),
            vec![CharacterClass::Special]
        );
    }

    #[test]
    fn test_whitespace_is_not_special() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.check("ZAQ 1qaz"),
            Some(ErrorKind::MissingCharacterClass)
        );
    }

    #[test]
    fn test_non_ascii_symbol_counts_as_special() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.check("ZAQ€1qaz"), None);
    }

    #[test]
    fn test_explicit_special_set() {
        let policy = PasswordPolicy {
            special_characters: Some("!@#".to_string()),
            ..PasswordPolicy::default()
        };
        assert_eq!(policy.check("ZAQ!1qaz"), None);
        assert_eq!(
            policy.check("ZAQ%1qaz"),
            Some(ErrorKind::MissingCharacterClass)
        );
    }

    #[test]
    fn test_relaxed_policy() {
        let policy = PasswordPolicy {
            min_length: 4,
            require_uppercase: false,
            require_lowercase: false,
            require_digit: true,
            require_special: false,
            special_characters: None,
        };
        assert_eq!(policy.check("12345678"), None);
        assert_eq!(policy.check("abcd"), Some(ErrorKind::MissingCharacterClass));
    }
}
