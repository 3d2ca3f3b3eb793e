//! # regform - registration form input pipeline
//!
//! Masks, validates and gates the input of a registration form with five
//! text fields (e-mail, password, password confirmation, tax identifier,
//! phone number) and a role selection.
//!
//! ## Overview
//!
//! Every change runs through the same one-directional pipeline:
//!
//! raw input → [`formatter`] → stored value → [`validation`] →
//! [`aggregate`] → [`gate`]
//!
//! The pipeline stages are pure functions. [`form::RegistrationForm`] is a
//! reference controller that owns the field values and runs the stages in
//! order for each change.
//!
//! ## Modules
//!
//! - [`field`] - The closed set of form fields and role options
//! - [`formatter`] - Phone and tax identifier input masks
//! - [`validation`] - Per-field rules and the password policy
//! - [`aggregate`] - Error set rebuilt from the current verdicts
//! - [`gate`] - Submittable signal and form status
//! - [`form`] - Field store driving the pipeline
//! - [`config`] - Configuration loading from `.regform/config.md`
//! - [`replay`] - Scripted input with expectations
//!
//! ## Example
//!
//! ```
//! use regform::field::FieldKind;
//! use regform::form::{FieldChange, RegistrationForm};
//!
//! let mut form = RegistrationForm::default();
//! form.apply(FieldChange::input(FieldKind::Email, "www@ww.pl"));
//! form.apply(FieldChange::input(FieldKind::Password, "ZAQ!1qaz"));
//! form.apply(FieldChange::input(FieldKind::ConfirmPassword, "ZAQ!1qaz"));
//! form.apply(FieldChange::input(FieldKind::TaxId, "1234567890"));
//! let snapshot = form.apply(FieldChange::select_role("Administrator"));
//!
//! assert_eq!(form.value(FieldKind::TaxId), "123-456-78-90");
//! assert!(snapshot.submittable);
//! ```

pub mod aggregate;
pub mod config;
pub mod field;
pub mod form;
pub mod formatter;
pub mod gate;
pub mod messages;
pub mod replay;
pub mod ui;
pub mod validation;

/// Default path constants for the regform directory structure.
pub mod paths {
    /// Directory holding project files: `.regform`
    pub const CONFIG_DIR: &str = ".regform";
    /// Form configuration: `.regform/config.md`
    pub const CONFIG_FILE: &str = ".regform/config.md";
}
