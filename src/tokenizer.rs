//! Splitting of a raw input line into command tokens.
//!
//! Lines are raw bytes, not text: a token is a maximal run of bytes that are not in
//! [`DELIMITERS`], and it reaches `chdir` or the launched program unchanged. There is no
//! quoting or escaping.

use std::borrow::Cow;
use std::ffi::OsStr;

/// Bytes that separate tokens: space, tab, carriage return, newline and bell.
pub const DELIMITERS: &[u8] = b" \t\r\n\x07";

/// Split `line` into tokens borrowing from it.
///
/// Runs of delimiters collapse, so no token is ever empty. An empty or all-delimiter
/// line yields an empty vector.
pub fn split_into_tokens(line: &[u8]) -> Vec<&[u8]> {
    line.split(|b| DELIMITERS.contains(b))
        .filter(|token| !token.is_empty())
        .collect()
}

/// View a token as an OS string, byte for byte.
#[cfg(unix)]
pub fn to_os_str(token: &[u8]) -> Cow<'_, OsStr> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(OsStr::from_bytes(token))
}

/// View a token as an OS string. Platforms without byte-based OS strings only accept
/// UTF-8, so other bytes are replaced.
#[cfg(not(unix))]
pub fn to_os_str(token: &[u8]) -> Cow<'_, OsStr> {
    match String::from_utf8_lossy(token) {
        Cow::Borrowed(s) => Cow::Borrowed(OsStr::new(s)),
        Cow::Owned(s) => Cow::Owned(s.into()),
    }
}
