//! User-facing text for the registration form (Polish).

use crate::field::FieldKind;
use crate::gate::FormStatus;
use crate::validation::ErrorKind;

/// Heading shown above the form.
pub const FORM_TITLE: &str = "Rejestracja";

/// Field label as rendered next to the input.
pub fn label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "E-mail",
        FieldKind::Password => "Hasło",
        FieldKind::ConfirmPassword => "Powtórz hasło",
        FieldKind::TaxId => "NIP",
        FieldKind::Phone => "Numer telefonu",
        FieldKind::Role => "Rola",
    }
}

/// Input hint showing the expected shape, for fields that have one.
pub fn placeholder(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Email => Some("jan.kowalski@example.pl"),
        FieldKind::TaxId => Some("123-456-78-90"),
        FieldKind::Phone => Some("123 456 789"),
        FieldKind::Password | FieldKind::ConfirmPassword | FieldKind::Role => None,
    }
}

/// Error message for a failing field.
pub fn error_message(kind: FieldKind, reason: ErrorKind) -> &'static str {
    match (kind, reason) {
        (FieldKind::Role, _) => "Wybierz rolę",
        (_, ErrorKind::EmptyValue) => "To pole jest wymagane",
        (FieldKind::Email, _) => "Podaj poprawny adres e-mail",
        (FieldKind::Password, ErrorKind::LengthTooShort) => {
            "Hasło musi mieć co najmniej 8 znaków"
        }
        (FieldKind::Password, _) => {
            "Hasło musi zawierać wielką i małą literę, cyfrę oraz znak specjalny"
        }
        (FieldKind::ConfirmPassword, _) => "Hasła muszą być identyczne",
        (FieldKind::TaxId, _) => "NIP musi składać się z 10 cyfr",
        (FieldKind::Phone, _) => "Numer telefonu musi składać się z 9 cyfr",
    }
}

/// Length message that reflects a configured minimum.
pub fn password_length_message(min_length: usize) -> String {
    format!("Hasło musi mieć co najmniej {} znaków", min_length)
}

/// Caption of the submit button for the current status.
pub fn submit_caption(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Incomplete => "Uzupełnij formularz",
        FormStatus::Invalid => "Popraw błędy",
        FormStatus::Submittable => "Dalej",
    }
}
