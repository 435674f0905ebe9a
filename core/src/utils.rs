//! Utility functions and types.

use std::fmt::{Debug, Display, Formatter};

/// Redacts a secret so it can be printed in `Debug` output or logs.
///
/// - An empty input renders as `EMPTY`.
/// - Inputs shorter than 12 characters are entirely redacted.
/// - Longer inputs keep only their first three and last three characters.
///
/// Consumer keys are usually long enough to stay distinguishable, while shared
/// secrets and token secrets usually end up fully hidden.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let chars: Vec<char> = self.0.chars().collect();
        let length = chars.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[length - 3..].iter().collect();
            write!(f, "{head}***{tail}")
        }
    }
}
