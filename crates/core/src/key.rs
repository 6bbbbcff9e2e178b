//! Key codec
//!
//! Multiplexes an attribute name and its type tag into one flat string key.
//!
//! ## Format
//!
//! ```text
//! escaped-name ":" type-tag
//! ```
//!
//! Every literal colon of the name is doubled. The type tag never contains a
//! colon, so the rightmost colon that is followed only by non-colon
//! characters always marks the boundary.
//!
//! | Name | Type | Encoded |
//! |------|------|---------|
//! | `key` | `type` | `key:type` |
//! | `a:b:c` | `t` | `a::b::c:t` |
//! | `a:b:c:` | `t` | `a::b::c:::t` |
//! | `:` | `t` | `:::t` |

use crate::error::{FreezerError, FreezerResult};

/// Separator between the escaped name and the type tag
pub const KEY_SEPARATOR: char = ':';

const ESCAPED_SEPARATOR: &str = "::";

/// Encode an attribute name and type tag into a flat key
///
/// Any string is a valid name; there is no length limit.
///
/// # Examples
///
/// ```
/// use freezer_core::key::encode_key;
///
/// assert_eq!(encode_key("greetings", "string"), "greetings:string");
/// assert_eq!(encode_key("a:b:c", "t"), "a::b::c:t");
/// ```
pub fn encode_key(name: &str, type_tag: &str) -> String {
    let mut encoded = String::with_capacity(name.len() + type_tag.len() + 1);
    encoded.push_str(&name.replace(KEY_SEPARATOR, ESCAPED_SEPARATOR));
    encoded.push(KEY_SEPARATOR);
    encoded.push_str(type_tag);
    encoded
}

/// Split a flat key back into its attribute name and type tag
///
/// # Errors
///
/// Returns `MalformedKey` when the key has no colon, or when it ends in a
/// colon (no type tag follows the boundary).
///
/// # Examples
///
/// ```
/// use freezer_core::key::decode_key;
///
/// let (name, tag) = decode_key("a::b::c:t").unwrap();
/// assert_eq!(name, "a:b:c");
/// assert_eq!(tag, "t");
///
/// assert!(decode_key("no-boundary").is_err());
/// ```
pub fn decode_key(encoded: &str) -> FreezerResult<(String, String)> {
    let boundary = encoded
        .rfind(KEY_SEPARATOR)
        .filter(|&idx| idx + 1 < encoded.len())
        .ok_or_else(|| FreezerError::MalformedKey {
            key: encoded.to_string(),
        })?;

    let escaped_name = &encoded[..boundary];
    let type_tag = &encoded[boundary + 1..];

    Ok((
        escaped_name.replace(ESCAPED_SEPARATOR, ":"),
        type_tag.to_string(),
    ))
}
