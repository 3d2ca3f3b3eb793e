//! Registration form fields.
//!
//! The set of fields is closed: five text inputs and one role selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named input of the registration form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Email,
    Password,
    ConfirmPassword,
    TaxId,
    Phone,
    Role,
}

impl FieldKind {
    /// Every field in display order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
        FieldKind::TaxId,
        FieldKind::Phone,
        FieldKind::Role,
    ];

    /// Fields edited as free text (everything except the role selection).
    pub const TEXT_FIELDS: [FieldKind; 5] = [
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
        FieldKind::TaxId,
        FieldKind::Phone,
    ];

    /// Position of this field in [`FieldKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            FieldKind::Email => 0,
            FieldKind::Password => 1,
            FieldKind::ConfirmPassword => 2,
            FieldKind::TaxId => 3,
            FieldKind::Phone => 4,
            FieldKind::Role => 5,
        }
    }

    /// Whether typed input for this field is reformatted through a mask.
    pub fn is_masked(self) -> bool {
        matches!(self, FieldKind::TaxId | FieldKind::Phone)
    }

    /// Whether the value must never be echoed back in clear text.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldKind::Password | FieldKind::ConfirmPassword)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Email => write!(f, "email"),
            FieldKind::Password => write!(f, "password"),
            FieldKind::ConfirmPassword => write!(f, "confirm_password"),
            FieldKind::TaxId => write!(f, "tax_id"),
            FieldKind::Phone => write!(f, "phone"),
            FieldKind::Role => write!(f, "role"),
        }
    }
}

/// The fixed set of roles a user may pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOptions {
    options: Vec<String>,
}

impl RoleOptions {
    pub fn new(options: Vec<String>) -> Self {
        Self { options }
    }

    /// Look up an option by exact name.
    pub fn find(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.as_str() == name)
            .map(|o| o.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for RoleOptions {
    fn default() -> Self {
        Self::new(crate::config::default_roles())
    }
}
