//! Registration form controller.
//!
//! [`RegistrationForm`] owns the field values and drives the pipeline for
//! each change, always in the same order:
//!
//! 1. mask the raw input
//! 2. store the masked value
//! 3. validate the changed field (plus confirm-password when the password
//!    changed and the confirmation has already been edited)
//! 4. rebuild the error set
//! 5. re-evaluate the submit gate
//!
//! Only masked values are ever validated. A form instance is meant to be
//! driven from one thread; hosts that share it must serialize calls.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::aggregate::{aggregate, ErrorSet, Verdicts};
use crate::config::Config;
use crate::field::FieldKind;
use crate::formatter;
use crate::gate::{self, FormStatus, RequiredFields};
use crate::validation::{FieldValidator, ValidationVerdict};

/// Current value of every field. Role holds the selected option name, or
/// stays empty until one is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: [String; 6],
}

impl FormValues {
    pub fn get(&self, kind: FieldKind) -> &str {
        &self.values[kind.index()]
    }

    pub fn set(&mut self, kind: FieldKind, value: impl Into<String>) {
        self.values[kind.index()] = value.into();
    }

    pub fn clear(&mut self, kind: FieldKind) {
        self.values[kind.index()].clear();
    }

    /// Value as shown to the user; secrets are replaced by one bullet per character.
    pub fn display(&self, kind: FieldKind) -> String {
        let value = self.get(kind);
        if kind.is_secret() {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FieldKind::ALL.len()))?;
        for kind in FieldKind::ALL {
            map.serialize_entry(&kind, &self.display(kind))?;
        }
        map.end()
    }
}

/// A single input event delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// New raw content of a field, before masking.
    Input { kind: FieldKind, raw: String },
    /// A role option was clicked.
    SelectRole(String),
    /// The field was emptied.
    Clear(FieldKind),
}

impl FieldChange {
    pub fn input(kind: FieldKind, raw: impl Into<String>) -> Self {
        Self::Input {
            kind,
            raw: raw.into(),
        }
    }

    pub fn select_role(role: impl Into<String>) -> Self {
        Self::SelectRole(role.into())
    }

    fn into_parts(self) -> (FieldKind, String) {
        match self {
            Self::Input { kind, raw } => (kind, raw),
            Self::SelectRole(role) => (FieldKind::Role, role),
            Self::Clear(kind) => (kind, String::new()),
        }
    }
}

/// Everything a renderer needs after one change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub values: FormValues,
    pub errors: ErrorSet,
    pub error_count: usize,
    pub status: FormStatus,
    pub submittable: bool,
}

/// Field store plus the validation pipeline that runs on every change.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    validator: FieldValidator,
    required: RequiredFields,
    values: FormValues,
    verdicts: Verdicts,
    errors: ErrorSet,
    status: FormStatus,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(FieldValidator::default(), RequiredFields::default())
    }
}

impl RegistrationForm {
    pub fn new(validator: FieldValidator, required: RequiredFields) -> Self {
        Self {
            validator,
            required,
            values: FormValues::default(),
            verdicts: Verdicts::new(),
            errors: ErrorSet::default(),
            status: FormStatus::Incomplete,
        }
    }

    /// Build a form using the password policy, roles and phone requirement from `config`.
    pub fn from_config(config: &Config) -> Self {
        let validator = FieldValidator::new(config.password.clone(), config.role_options())
            .with_phone_required(config.phone.required);
        Self::new(validator, RequiredFields::new(config.phone.required))
    }

    /// Run one change through the pipeline and return the resulting state.
    pub fn apply(&mut self, change: FieldChange) -> FormSnapshot {
        let (kind, raw) = change.into_parts();
        let formatted = formatter::format(kind, &raw);
        self.values.set(kind, formatted);

        self.revalidate(kind);
        if kind == FieldKind::Password && self.verdicts.is_touched(FieldKind::ConfirmPassword) {
            self.revalidate(FieldKind::ConfirmPassword);
        }

        self.errors = aggregate(&self.verdicts);
        let status = gate::status(&self.errors, &self.values, &self.required);
        if status != self.status {
            debug!(from = %self.status, to = %status, "form status changed");
            self.status = status;
        }

        self.snapshot()
    }

    /// Apply a sequence of changes, returning the final state.
    pub fn apply_all<I>(&mut self, changes: I) -> FormSnapshot
    where
        I: IntoIterator<Item = FieldChange>,
    {
        for change in changes {
            self.apply(change);
        }
        self.snapshot()
    }

    fn revalidate(&mut self, kind: FieldKind) {
        let sibling = match kind {
            FieldKind::ConfirmPassword => Some(self.values.get(FieldKind::Password)),
            _ => None,
        };
        let verdict = self.validator.validate(kind, self.values.get(kind), sibling);
        let previous = self.verdicts.record(kind, verdict);
        if previous.map(|p| p.valid) != Some(verdict.valid) {
            debug!(
                field = %kind,
                valid = verdict.valid,
                reason = ?verdict.reason,
                "field verdict changed"
            );
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.errors.clone(),
            error_count: self.errors.len(),
            status: self.status,
            submittable: self.status == FormStatus::Submittable,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, kind: FieldKind) -> &str {
        self.values.get(kind)
    }

    pub fn verdict(&self, kind: FieldKind) -> Option<ValidationVerdict> {
        self.verdicts.get(kind)
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submittable(&self) -> bool {
        self.status == FormStatus::Submittable
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn required(&self) -> &RequiredFields {
        &self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ErrorKind;

    #[test]
    fn test_masks_before_storing() {
        let mut form = RegistrationForm::default();
        form.apply(FieldChange::input(FieldKind::Phone, "453543543"));
        form.apply(FieldChange::input(FieldKind::TaxId, "1234567890"));
        assert_eq!(form.value(FieldKind::Phone), "453 543 543");
        assert_eq!(form.value(FieldKind::TaxId), "123-456-78-90");
        assert!(form.verdict(FieldKind::TaxId).unwrap().valid);
    }

    #[test]
    fn test_untouched_fields_have_no_verdict() {
        let mut form = RegistrationForm::default();
        let snapshot = form.apply(FieldChange::input(FieldKind::Email, "www"));
        assert_eq!(snapshot.error_count, 1);
        assert!(form.verdict(FieldKind::Password).is_none());
        assert_eq!(snapshot.status, FormStatus::Incomplete);
    }

    #[test]
    fn test_password_change_rechecks_touched_confirmation() {
        let mut form = RegistrationForm::default();
        form.apply(FieldChange::input(FieldKind::Password, "ZAQ!1qaz"));
        let snapshot = form.apply(FieldChange::input(FieldKind::ConfirmPassword, "ZAQ!1qaz"));
        assert!(snapshot.errors.is_empty());

        let snapshot = form.apply(FieldChange::input(FieldKind::Password, "ZAQ!1qazX"));
        assert_eq!(
            snapshot.errors.reason(FieldKind::ConfirmPassword),
            Some(ErrorKind::Mismatch)
        );

        let snapshot = form.apply(FieldChange::input(FieldKind::Password, "ZAQ!1qaz"));
        assert!(!snapshot.errors.contains(FieldKind::ConfirmPassword));
    }

    #[test]
    fn test_password_change_leaves_untouched_confirmation_alone() {
        let mut form = RegistrationForm::default();
        let snapshot = form.apply(FieldChange::input(FieldKind::Password, "123"));
        assert_eq!(snapshot.error_count, 1);
        assert!(form.verdict(FieldKind::ConfirmPassword).is_none());
    }

    #[test]
    fn test_clear_marks_field_empty() {
        let mut form = RegistrationForm::default();
        form.apply(FieldChange::input(FieldKind::Email, "www@ww.pl"));
        let snapshot = form.apply(FieldChange::Clear(FieldKind::Email));
        assert_eq!(form.value(FieldKind::Email), "");
        assert_eq!(
            snapshot.errors.reason(FieldKind::Email),
            Some(ErrorKind::EmptyValue)
        );
    }

    #[test]
    fn test_role_selection() {
        let mut form = RegistrationForm::default();
        form.apply(FieldChange::select_role("Administrator"));
        assert_eq!(form.value(FieldKind::Role), "Administrator");
        assert!(form.verdict(FieldKind::Role).unwrap().valid);

        let snapshot = form.apply(FieldChange::select_role("Root"));
        assert_eq!(
            snapshot.errors.reason(FieldKind::Role),
            Some(ErrorKind::MalformedShape)
        );
    }

    #[test]
    fn test_snapshot_hides_passwords() {
        let mut form = RegistrationForm::default();
        let snapshot = form.apply(FieldChange::input(FieldKind::Password, "ZAQ!1qaz"));
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["values"]["password"], "••••••••");
        assert_eq!(json["status"], "incomplete");
        assert_eq!(json["error_count"], 0);
    }

    #[test]
    fn test_apply_all_returns_final_state() {
        let mut form = RegistrationForm::default();
        let snapshot = form.apply_all([
            FieldChange::input(FieldKind::Email, "www@ww.pl"),
            FieldChange::input(FieldKind::Password, "ZAQ!1qaz"),
            FieldChange::input(FieldKind::ConfirmPassword, "ZAQ!1qaz"),
            FieldChange::input(FieldKind::TaxId, "1234567890"),
            FieldChange::select_role("Administrator"),
        ]);
        assert!(snapshot.submittable);
        assert_eq!(snapshot.status, FormStatus::Submittable);
    }
}
