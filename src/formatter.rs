//! Input masks for the phone number and tax identifier fields.
//!
//! Masking keeps the ASCII digits of the raw input, truncates them to the
//! mask capacity and re-inserts separators between digit groups. A separator
//! is only emitted once a digit follows it, so partial input formats
//! progressively (`"1234"` -> `"123 4"`, never `"123 "`).

use crate::field::FieldKind;

/// A digit-group mask such as `ddd ddd ddd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    groups: &'static [usize],
    separator: char,
}

/// Nine-digit phone number: `453 543 543`.
pub const PHONE_MASK: Mask = Mask::new(&[3, 3, 3], ' ');

/// Ten-digit tax identifier (NIP): `123-456-78-90`.
pub const TAX_ID_MASK: Mask = Mask::new(&[3, 3, 2, 2], '-');

impl Mask {
    pub const fn new(groups: &'static [usize], separator: char) -> Self {
        Self { groups, separator }
    }

    /// Total number of digits the mask accepts.
    pub fn capacity(&self) -> usize {
        self.groups.iter().sum()
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// ASCII digits of `value`, in order, without truncation.
    pub fn digits(value: &str) -> String {
        value.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Render `raw` through the mask.
    pub fn apply(&self, raw: &str) -> String {
        let digits: Vec<char> = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(self.capacity())
            .collect();

        let mut out = String::with_capacity(digits.len() + self.groups.len());
        let mut rest = digits.as_slice();
        for &len in self.groups {
            if rest.is_empty() {
                break;
            }
            if !out.is_empty() {
                out.push(self.separator);
            }
            let take = len.min(rest.len());
            out.extend(&rest[..take]);
            rest = &rest[take..];
        }
        out
    }

    /// True when `value` is exactly a full rendering of the mask.
    pub fn is_complete(&self, value: &str) -> bool {
        Self::digits(value).len() == self.capacity() && self.apply(value) == value
    }
}

/// The mask used for a field, if the field is masked at all.
pub fn mask_for(kind: FieldKind) -> Option<Mask> {
    match kind {
        FieldKind::Phone => Some(PHONE_MASK),
        FieldKind::TaxId => Some(TAX_ID_MASK),
        FieldKind::Email | FieldKind::Password | FieldKind::ConfirmPassword | FieldKind::Role => {
            None
        }
    }
}

/// Map a raw field string to its displayed value.
///
/// Unmasked fields are returned as typed.
pub fn format(kind: FieldKind, raw: &str) -> String {
    let formatted = match mask_for(kind) {
        Some(mask) => mask.apply(raw),
        None => raw.to_string(),
    };
    if kind.is_masked() {
        tracing::trace!(field = %kind, raw, formatted = %formatted, "applied input mask");
    }
    formatted
}
