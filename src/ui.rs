//! Terminal rendering of form state.
//!
//! Shared by the `check`, `replay` and `register` commands.

use colored::{ColoredString, Colorize};

use crate::field::FieldKind;
use crate::form::FormSnapshot;
use crate::gate::FormStatus;
use crate::messages;
use crate::validation::ErrorKind;

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("REGFORM_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for the given form status.
///
/// Icons:
/// - Incomplete: ○ (dimmed)
/// - Invalid: ✗ (red)
/// - Submittable: ● (green)
pub fn status_icon(status: FormStatus) -> ColoredString {
    match status {
        FormStatus::Incomplete => "○".dimmed(),
        FormStatus::Invalid => "✗".red(),
        FormStatus::Submittable => "●".green(),
    }
}

/// Error text for a failing field, using the configured password length.
pub fn error_text(kind: FieldKind, reason: ErrorKind, min_password_length: usize) -> String {
    if kind == FieldKind::Password && reason == ErrorKind::LengthTooShort {
        messages::password_length_message(min_password_length)
    } else {
        messages::error_message(kind, reason).to_string()
    }
}

/// One line per field: label, displayed value and the error, if any.
pub fn render_fields(snapshot: &FormSnapshot, min_password_length: usize) -> Vec<String> {
    FieldKind::ALL
        .iter()
        .map(|&kind| {
            let label = format!("{:<16}", messages::label(kind));
            let value = snapshot.values.display(kind);
            let value = if value.is_empty() {
                "(puste)".dimmed().to_string()
            } else {
                value
            };
            match snapshot.errors.reason(kind) {
                Some(reason) => format!(
                    "  {} {} {}  {}",
                    "✗".red(),
                    label,
                    value,
                    error_text(kind, reason, min_password_length).red()
                ),
                None => format!("  {} {} {}", "✓".green(), label, value),
            }
        })
        .collect()
}

/// Summary line: status icon, error count and submit caption.
pub fn render_summary(snapshot: &FormSnapshot) -> String {
    let caption = messages::submit_caption(snapshot.status);
    let caption = if snapshot.submittable {
        caption.green().bold()
    } else {
        caption.dimmed()
    };
    format!(
        "{} {} ({} błędów)  [{}]",
        status_icon(snapshot.status),
        snapshot.status,
        snapshot.error_count,
        caption
    )
}

/// Full block: title, fields and summary.
pub fn render_snapshot(snapshot: &FormSnapshot, min_password_length: usize) -> String {
    let mut lines = vec![messages::FORM_TITLE.bold().to_string()];
    lines.extend(render_fields(snapshot, min_password_length));
    lines.push(String::new());
    lines.push(render_summary(snapshot));
    lines.join("\n")
}
