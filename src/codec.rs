//! Conversion between raw Ed25519 key bytes and [`Ed25519Jwk`]s
//!
//! Raw key material is either the 32 byte public key on its own, or the
//! 32 byte private key followed by the 32 byte public key. The bytes are
//! never checked to be a valid point or scalar.
use core::fmt;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::{
    base64_url::{self, NoBase64UrlString},
    jwk::Ed25519Jwk,
};

/// Length of an Ed25519 public key and of an Ed25519 private key.
pub const KEY_LENGTH: usize = 32;

/// Raw key bytes, `private || public` or `public` on its own.
///
/// The bytes are zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct RawKeyMaterial(Zeroizing<Vec<u8>>);

impl RawKeyMaterial {
    /// Wraps the given bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// The raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no bytes at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is a public key on its own.
    pub fn is_public_only(&self) -> bool {
        self.len() <= KEY_LENGTH
    }
}

impl fmt::Debug for RawKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawKeyMaterial([REDACTED; {}])", self.len())
    }
}

/// Builds a JWK from raw key bytes.
///
/// The first 32 bytes become `d` and everything after them becomes `x`. If
/// nothing follows the first block, the input is a public key and goes into
/// `x` with `d` left empty.
///
/// Lengths other than 32 and 64 are not rejected, the resulting members are
/// just the slices produced by the split.
pub fn encode(bytes: &[u8]) -> Ed25519Jwk {
    if bytes.len() != KEY_LENGTH && bytes.len() != 2 * KEY_LENGTH {
        warn!(
            len = bytes.len(),
            "key material is neither 32 nor 64 bytes long"
        );
    }

    let (first, rest) = bytes.split_at(bytes.len().min(KEY_LENGTH));
    let (private, public) = if rest.is_empty() {
        (&first[..0], first)
    } else {
        (first, rest)
    };
    debug!(
        private = !private.is_empty(),
        public_len = public.len(),
        "encoding raw key material"
    );

    Ed25519Jwk::new(base64_url::encode(public), base64_url::encode(private))
}

/// Concatenates the decoded `d` and `x` members of `jwk`, in that order.
///
/// An empty `d` contributes nothing, so a public key decodes to `x` alone.
///
/// # Errors
///
/// Returns [`NoBase64UrlString`] naming `d` or `x` if either member is not
/// valid unpadded Base64Url.
pub fn decode(jwk: &Ed25519Jwk) -> Result<RawKeyMaterial, NoBase64UrlString> {
    if !jwk.is_ed25519() {
        warn!(
            kty = jwk.key_type(),
            crv = jwk.curve(),
            "decoding a key that does not declare itself as OKP/Ed25519"
        );
    }

    let d = Zeroizing::new(base64_url::decode("d", jwk.d())?);
    let x = base64_url::decode("x", jwk.x())?;
    debug!(private_len = d.len(), public_len = x.len(), "decoded JWK");

    let mut raw = Zeroizing::new(Vec::with_capacity(d.len() + x.len()));
    raw.extend_from_slice(&d);
    raw.extend_from_slice(&x);
    Ok(RawKeyMaterial(raw))
}

impl Ed25519Jwk {
    /// Shorthand for [`decode`].
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn to_raw(&self) -> Result<RawKeyMaterial, NoBase64UrlString> {
        decode(self)
    }
}
