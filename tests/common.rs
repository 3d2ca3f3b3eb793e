//! Common test helpers for integration tests

#![allow(dead_code)]

use regform::field::FieldKind;
use regform::form::{FieldChange, FormSnapshot, RegistrationForm};

/// Type a raw value into a field.
pub fn type_into(form: &mut RegistrationForm, kind: FieldKind, raw: &str) -> FormSnapshot {
    form.apply(FieldChange::input(kind, raw))
}

/// A form filled with the values of the happy-path registration.
pub fn submittable_form() -> RegistrationForm {
    let mut form = RegistrationForm::default();
    type_into(&mut form, FieldKind::Email, "www@ww.pl");
    type_into(&mut form, FieldKind::Password, "ZAQ!1qaz");
    type_into(&mut form, FieldKind::ConfirmPassword, "ZAQ!1qaz");
    type_into(&mut form, FieldKind::TaxId, "1234567890");
    form.apply(FieldChange::select_role("Administrator"));
    form
}
