//! Email shape check: `local-part@domain.tld`.

use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Whether `value` has the shape of an email address.
pub fn is_well_formed(value: &str) -> bool {
    email_regex().is_match(value)
}
