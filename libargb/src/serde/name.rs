use std::sync::LazyLock;

use regex::Regex;

use super::error::Error;

static NON_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Za-z0-9_]").expect("hard-coded regex is valid"));

/// Removes every character of `name` that is not an ASCII letter, digit or underscore
///
/// The result may start with a digit, which is fine inside an include guard.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] if no character is left
pub fn strip_name(name: &str) -> Result<String, Error> {
    let stripped = NON_IDENTIFIER.replace_all(name, "");
    if stripped.is_empty() {
        return Err(Error::InvalidName(name.to_owned()));
    }
    Ok(stripped.into_owned())
}

/// Turns a stripped name into a C identifier, prepending `_` if it starts with a digit
#[must_use]
pub fn to_ident(stripped: &str) -> String {
    if stripped.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{stripped}")
    } else {
        stripped.to_owned()
    }
}

/// Turns a file name (usually the stem) into a C identifier
///
/// Shorthand for [`strip_name`] followed by [`to_ident`].
///
/// # Errors
///
/// Returns [`Error::InvalidName`] if no character is left
pub fn c_compatible_name(name: &str) -> Result<String, Error> {
    strip_name(name).map(|stripped| to_ident(&stripped))
}
