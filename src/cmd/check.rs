//! `regform check`: fill in the form from flags and report the result.

use anyhow::{Context, Result};
use std::path::Path;

use regform::field::FieldKind;
use regform::form::{FieldChange, RegistrationForm};
use regform::ui;

/// Values passed on the command line; `None` leaves the field untouched.
#[derive(Debug, Default)]
pub struct CheckInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl CheckInput {
    /// Changes in form order.
    pub fn into_changes(self) -> Vec<FieldChange> {
        let text = [
            (FieldKind::Email, self.email),
            (FieldKind::Password, self.password),
            (FieldKind::ConfirmPassword, self.confirm_password),
            (FieldKind::TaxId, self.tax_id),
            (FieldKind::Phone, self.phone),
        ];

        let mut changes: Vec<FieldChange> = text
            .into_iter()
            .filter_map(|(kind, value)| value.map(|v| FieldChange::input(kind, v)))
            .collect();
        if let Some(role) = self.role {
            changes.push(FieldChange::select_role(role));
        }
        changes
    }
}

pub fn cmd_check(config_path: Option<&Path>, input: CheckInput, json: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let mut form = RegistrationForm::from_config(&config);
    let snapshot = form.apply_all(input.into_changes());

    if json {
        let out = serde_json::to_string_pretty(&snapshot).context("Failed to serialize form state")?;
        println!("{}", out);
    } else if ui::is_quiet() {
        println!("{}", snapshot.status);
    } else {
        println!("{}", ui::render_snapshot(&snapshot, config.password.min_length));
    }

    if !snapshot.submittable {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_changes_keeps_form_order() {
        let input = CheckInput {
            role: Some("Administrator".into()),
            tax_id: Some("1234567890".into()),
            email: Some("www@ww.pl".into()),
            ..CheckInput::default()
        };
        let changes = input.into_changes();
        assert_eq!(
            changes,
            vec![
                FieldChange::input(FieldKind::Email, "www@ww.pl"),
                FieldChange::input(FieldKind::TaxId, "1234567890"),
                FieldChange::select_role("Administrator"),
            ]
        );
    }

    #[test]
    fn test_into_changes_empty() {
        assert!(CheckInput::default().into_changes().is_empty());
    }
}
