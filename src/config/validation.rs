//! Sanity checks for loaded configuration.

use anyhow::Result;
use std::collections::HashSet;

use super::Config;
use crate::validation::PasswordPolicy;

impl Config {
    /// Validate the whole config
    pub fn validate(&self) -> Result<()> {
        validate_password_policy(&self.password)?;

        if self.roles.is_empty() {
            anyhow::bail!("roles must list at least one option");
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            if role.trim().is_empty() {
                anyhow::bail!("roles must not contain blank entries");
            }
            if !seen.insert(role.as_str()) {
                anyhow::bail!("roles contains '{}' more than once", role);
            }
        }

        Ok(())
    }
}

fn validate_password_policy(policy: &PasswordPolicy) -> Result<()> {
    if policy.min_length == 0 {
        anyhow::bail!("password.min_length must be greater than 0");
    }

    if let Some(specials) = &policy.special_characters {
        if specials.is_empty() && policy.require_special {
            anyhow::bail!(
                "password.special_characters is empty but password.require_special is true"
            );
        }
        if let Some(c) = specials
            .chars()
            .find(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            anyhow::bail!(
                "password.special_characters must not contain letters, digits or whitespace, got {:?}",
                c
            );
        }
    }

    Ok(())
}
