//! Submit gating.
//!
//! The gate is a level, not a sequence: its value is recomputed from the
//! current error set and field values after every change, and any edit can
//! move it in either direction.
//!
//! Status logic:
//! - Incomplete: at least one required field is empty (or no role selected)
//! - Invalid: every required field is filled but some field fails validation
//! - Submittable: every required field is filled and nothing fails

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::ErrorSet;
use crate::field::FieldKind;
use crate::form::FormValues;

/// Overall form status derived from the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    Incomplete,
    Invalid,
    Submittable,
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "incomplete"),
            Self::Invalid => write!(f, "invalid"),
            Self::Submittable => write!(f, "submittable"),
        }
    }
}

/// Fields that must hold a value before the form can be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    fields: Vec<FieldKind>,
}

impl RequiredFields {
    /// Email, both passwords, tax id and role; phone only when `phone_required`.
    pub fn new(phone_required: bool) -> Self {
        let fields = FieldKind::ALL
            .into_iter()
            .filter(|&kind| kind != FieldKind::Phone || phone_required)
            .collect();
        Self { fields }
    }

    pub fn contains(&self, kind: FieldKind) -> bool {
        self.fields.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.fields.iter().copied()
    }
}

impl Default for RequiredFields {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Required fields that are still empty, in field order.
pub fn missing_fields(values: &FormValues, required: &RequiredFields) -> Vec<FieldKind> {
    required
        .iter()
        .filter(|&kind| values.get(kind).is_empty())
        .collect()
}

/// Derive the form status from the current error set and values.
pub fn status(errors: &ErrorSet, values: &FormValues, required: &RequiredFields) -> FormStatus {
    if !missing_fields(values, required).is_empty() {
        FormStatus::Incomplete
    } else if !errors.is_empty() {
        FormStatus::Invalid
    } else {
        FormStatus::Submittable
    }
}

/// True iff nothing fails and every required field holds a value.
pub fn is_submittable(errors: &ErrorSet, values: &FormValues, required: &RequiredFields) -> bool {
    status(errors, values, required) == FormStatus::Submittable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, Verdicts};
    use crate::validation::{ErrorKind, ValidationVerdict};

    fn filled_values() -> FormValues {
        let mut values = FormValues::default();
        values.set(FieldKind::Email, "www@ww.pl");
        values.set(FieldKind::Password, "ZAQ!1qaz");
        values.set(FieldKind::ConfirmPassword, "ZAQ!1qaz");
        values.set(FieldKind::TaxId, "123-456-78-90");
        values.set(FieldKind::Role, "Administrator");
        values
    }

    #[test]
    fn test_default_required_set_excludes_phone() {
        let required = RequiredFields::default();
        assert!(!required.contains(FieldKind::Phone));
        assert!(required.contains(FieldKind::Role));
        assert_eq!(required.iter().count(), 5);
        assert!(RequiredFields::new(true).contains(FieldKind::Phone));
    }

    #[test]
    fn test_empty_form_is_incomplete() {
        let required = RequiredFields::default();
        let values = FormValues::default();
        assert_eq!(
            status(&ErrorSet::default(), &values, &required),
            FormStatus::Incomplete
        );
        assert_eq!(missing_fields(&values, &required).len(), 5);
    }

    #[test]
    fn test_filled_and_valid_is_submittable() {
        let required = RequiredFields::default();
        let values = filled_values();
        assert!(is_submittable(&ErrorSet::default(), &values, &required));
    }

    #[test]
    fn test_filled_with_errors_is_invalid() {
        let required = RequiredFields::default();
        let values = filled_values();
        let mut verdicts = Verdicts::new();
        verdicts.record(FieldKind::Phone, ValidationVerdict::fail(ErrorKind::MalformedShape));
        let errors = aggregate(&verdicts);

        assert_eq!(status(&errors, &values, &required), FormStatus::Invalid);
        assert!(!is_submittable(&errors, &values, &required));
    }

    #[test]
    fn test_missing_role_is_incomplete() {
        let required = RequiredFields::default();
        let mut values = filled_values();
        values.clear(FieldKind::Role);
        assert_eq!(
            status(&ErrorSet::default(), &values, &required),
            FormStatus::Incomplete
        );
        assert_eq!(missing_fields(&values, &required), vec![FieldKind::Role]);
    }

    #[test]
    fn test_required_phone_blocks_submission() {
        let required = RequiredFields::new(true);
        let values = filled_values();
        assert_eq!(
            status(&ErrorSet::default(), &values, &required),
            FormStatus::Incomplete
        );
    }
}
