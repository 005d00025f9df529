//! Token-level parsing helpers for the coordinate text format

use alloc::string::ToString;
use core::num::ParseIntError;
use core::str::FromStr;

use crate::error::FormatError;
use crate::format::constants::HEADER_SEPARATOR;

/// Parse a trimmed integer token
///
/// `line` is only used to locate the failure in the returned error.
pub fn parse_integer<T>(token: &str, line: usize) -> Result<T, FormatError>
where
    T: FromStr<Err = ParseIntError>,
{
    let token = token.trim();
    token.parse().map_err(|source| FormatError::InvalidInteger {
        line,
        token: token.to_string(),
        source,
    })
}

/// Split a `key=value` header line and return the trimmed value
///
/// Fails when the separator is missing or the key does not match.
pub fn split_header<'a>(
    content: &'a str,
    key: &'static str,
    line: usize,
) -> Result<&'a str, FormatError> {
    match content.split_once(HEADER_SEPARATOR) {
        Some((found, value)) if found.trim() == key => Ok(value.trim()),
        _ => Err(FormatError::MalformedHeader {
            line,
            key,
            content: content.to_string(),
        }),
    }
}
