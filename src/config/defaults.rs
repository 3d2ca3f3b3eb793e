//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub fn $name() -> $type {
            $value
        }
    };
}

default_fn!(
    default_roles,
    Vec<String>,
    vec!["Administrator".to_string(), "Pracownik".to_string()]
);
default_fn!(default_phone_required, bool, false);

/// Phone number settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhoneConfig {
    /// Whether an empty phone number blocks submission (default: false)
    #[serde(default = "default_phone_required")]
    pub required: bool,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            required: default_phone_required(),
        }
    }
}
