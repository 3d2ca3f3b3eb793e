//! Collects the currently failing fields into an [`ErrorSet`].
//!
//! The set is always rebuilt from the full verdict mapping, never patched,
//! so a field that becomes valid again cannot leave a stale entry behind.

use serde::Serialize;

use crate::field::FieldKind;
use crate::validation::{ErrorKind, ValidationVerdict};

/// Latest verdict per field. A field without a verdict has not been edited yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdicts {
    slots: [Option<ValidationVerdict>; 6],
}

impl Verdicts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `verdict` for `kind`, returning the verdict it replaced.
    pub fn record(
        &mut self,
        kind: FieldKind,
        verdict: ValidationVerdict,
    ) -> Option<ValidationVerdict> {
        self.slots[kind.index()].replace(verdict)
    }

    pub fn get(&self, kind: FieldKind) -> Option<ValidationVerdict> {
        self.slots[kind.index()]
    }

    pub fn is_touched(&self, kind: FieldKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Recorded verdicts in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, ValidationVerdict)> + '_ {
        FieldKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|verdict| (kind, verdict)))
    }
}

/// One failing field and the reason it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldKind,
    pub reason: ErrorKind,
}

/// Fields currently failing validation, in canonical field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    errors: Vec<FieldError>,
}

impl ErrorSet {
    /// Displayed error count.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, kind: FieldKind) -> bool {
        self.errors.iter().any(|e| e.field == kind)
    }

    pub fn reason(&self, kind: FieldKind) -> Option<ErrorKind> {
        self.errors
            .iter()
            .find(|e| e.field == kind)
            .map(|e| e.reason)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Compute the error set for the given verdicts.
pub fn aggregate(verdicts: &Verdicts) -> ErrorSet {
    let errors = verdicts
        .iter()
        .filter(|(_, verdict)| !verdict.valid)
        .map(|(field, verdict)| FieldError {
            field,
            // Verdicts built with `fail` always carry a reason.
            reason: verdict.reason.unwrap_or(ErrorKind::MalformedShape),
        })
        .collect();
    ErrorSet { errors }
}
