//! Per-field validation rules.
//!
//! Each field is checked against its current (already masked) value. The
//! confirm-password rule is the only cross-field check; the password it is
//! compared against is passed in explicitly as `sibling`.
//!
//! Invalid input is an expected state, so verdicts are plain values rather
//! than errors.

pub mod email;
pub mod password;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::{FieldKind, RoleOptions};
use crate::formatter::{PHONE_MASK, TAX_ID_MASK};

pub use password::{CharacterClass, PasswordPolicy};

/// Why a field is currently invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyValue,
    MalformedShape,
    LengthTooShort,
    /// Password only.
    MissingCharacterClass,
    /// Confirm-password only.
    Mismatch,
    /// Role only.
    NotSelected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "empty_value"),
            Self::MalformedShape => write!(f, "malformed_shape"),
            Self::LengthTooShort => write!(f, "length_too_short"),
            Self::MissingCharacterClass => write!(f, "missing_character_class"),
            Self::Mismatch => write!(f, "mismatch"),
            Self::NotSelected => write!(f, "not_selected"),
        }
    }
}

/// Validity of one field at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub reason: Option<ErrorKind>,
}

impl ValidationVerdict {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn fail(reason: ErrorKind) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    fn from_check(failure: Option<ErrorKind>) -> Self {
        match failure {
            Some(reason) => Self::fail(reason),
            None => Self::ok(),
        }
    }
}

/// Validation rules for every registration field.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    password: PasswordPolicy,
    roles: RoleOptions,
    phone_required: bool,
}

impl FieldValidator {
    pub fn new(password: PasswordPolicy, roles: RoleOptions) -> Self {
        Self {
            password,
            roles,
            phone_required: false,
        }
    }

    /// Treat an empty phone number as invalid instead of as "not provided".
    pub fn with_phone_required(mut self, required: bool) -> Self {
        self.phone_required = required;
        self
    }

    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.password
    }

    pub fn roles(&self) -> &RoleOptions {
        &self.roles
    }

    pub fn phone_required(&self) -> bool {
        self.phone_required
    }

    /// Validate `value` as the current content of `kind`.
    ///
    /// `sibling` is only consulted for [`FieldKind::ConfirmPassword`], where it
    /// carries the current password; `None` is treated as an empty password.
    pub fn validate(
        &self,
        kind: FieldKind,
        value: &str,
        sibling: Option<&str>,
    ) -> ValidationVerdict {
        let failure = match kind {
            FieldKind::Email => check_email(value),
            FieldKind::Password => self.password.check(value),
            FieldKind::ConfirmPassword => check_confirmation(value, sibling.unwrap_or("")),
            FieldKind::TaxId => check_tax_id(value),
            FieldKind::Phone => self.check_phone(value),
            FieldKind::Role => self.check_role(value),
        };
        ValidationVerdict::from_check(failure)
    }

    fn check_phone(&self, value: &str) -> Option<ErrorKind> {
        if value.is_empty() {
            return self.phone_required.then_some(ErrorKind::EmptyValue);
        }
        if !PHONE_MASK.is_complete(value) {
            return Some(ErrorKind::MalformedShape);
        }
        None
    }

    fn check_role(&self, value: &str) -> Option<ErrorKind> {
        if value.is_empty() {
            return Some(ErrorKind::NotSelected);
        }
        if !self.roles.contains(value) {
            return Some(ErrorKind::MalformedShape);
        }
        None
    }
}

fn check_email(value: &str) -> Option<ErrorKind> {
    if value.is_empty() {
        return Some(ErrorKind::EmptyValue);
    }
    if !email::is_well_formed(value) {
        return Some(ErrorKind::MalformedShape);
    }
    None
}

fn check_confirmation(value: &str, password: &str) -> Option<ErrorKind> {
    if value.is_empty() {
        return Some(ErrorKind::EmptyValue);
    }
    // Byte-for-byte: no trimming, no normalization.
    if value.as_bytes() != password.as_bytes() {
        return Some(ErrorKind::Mismatch);
    }
    None
}

fn check_tax_id(value: &str) -> Option<ErrorKind> {
    if value.is_empty() {
        return Some(ErrorKind::EmptyValue);
    }
    if !TAX_ID_MASK.is_complete(value) {
        return Some(ErrorKind::MalformedShape);
    }
    None
}
