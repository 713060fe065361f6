//! Helpers for base64 urlsafe encoded stuff

use base64ct::{Base64UrlUnpadded, Encoding};
use thiserror::Error;

/// Error type indicating that a field or input was not a valid, unpadded
/// Base64Url string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{field}` is not a valid Base64Url representation")]
pub struct NoBase64UrlString {
    /// The JWK member or command line input the string came from
    pub field: &'static str,
}

/// Encode the given bytes using unpadded Base64Url format.
#[inline]
pub fn encode(x: impl AsRef<[u8]>) -> String {
    Base64UrlUnpadded::encode_string(x.as_ref())
}

/// Decodes an unpadded Base64Url string into its raw byte representation.
///
/// The empty string decodes to zero bytes.
///
/// # Errors
///
/// Returns [`NoBase64UrlString`] carrying `field` if `s` contains characters
/// outside the urlsafe alphabet, padding or a truncated final group.
pub fn decode(field: &'static str, s: &str) -> Result<Vec<u8>, NoBase64UrlString> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    Base64UrlUnpadded::decode_vec(s).map_err(|_| NoBase64UrlString { field })
}
