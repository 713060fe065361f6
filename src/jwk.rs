//! The Ed25519 JSON Web Key record (`kty` = `OKP`, `crv` = `Ed25519`)
//!
//! Key material is kept in its Base64Url form here. Turning it into bytes and
//! back is the job of the [`codec`](crate::codec) module.
use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use zeroize::Zeroize;

use crate::Error;

/// The `kty` value of every key written by this crate.
pub const KTY: &str = "OKP";
/// The `crv` value of every key written by this crate.
pub const CRV: &str = "Ed25519";
/// The `use` value of every key written by this crate.
pub const USE: &str = "sig";

/// An Ed25519 key in its JSON Web Key form, as defined in [RFC 8037].
///
/// Parsing is lenient: every member is optional, `null` counts as the empty
/// string, unknown members are ignored and `kty`/`crv`/`use` are not
/// enforced. Serialization always writes all six members in the order
/// `kty`, `crv`, `x`, `d`, `use`, `kid`.
///
/// The private part `d` is zeroized when the key is dropped.
///
/// [RFC 8037]: <https://datatracker.ietf.org/doc/html/rfc8037#section-2>
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ed25519Jwk {
    #[serde(default, deserialize_with = "null_as_empty")]
    kty: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    crv: String,
    /// `x` parameter, the Base64Url encoded public key
    #[serde(default, deserialize_with = "null_as_empty")]
    x: String,
    /// `d` parameter, the Base64Url encoded private key or the empty string
    #[serde(default, deserialize_with = "null_as_empty")]
    d: String,
    #[serde(rename = "use", default, deserialize_with = "null_as_empty")]
    key_use: String,
    /// `kid` parameter, never filled in by this crate
    #[serde(default, deserialize_with = "null_as_empty")]
    kid: String,
}

/// Helper for string members that may also be `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Ed25519Jwk {
    /// Creates a signing key from the already encoded public part `x` and
    /// private part `d`. Pass an empty `d` for a public key.
    pub fn new(x: String, d: String) -> Self {
        Self {
            kty: KTY.into(),
            crv: CRV.into(),
            x,
            d,
            key_use: USE.into(),
            kid: String::new(),
        }
    }

    /// Parses a key from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `json` is not a JSON object of the expected
    /// shape.
    pub fn from_json(json: impl AsRef<[u8]>) -> Result<Self, Error> {
        // a derived `Deserialize` would also take the members from an array
        let object: Map<String, Value> =
            serde_json::from_slice(json.as_ref()).map_err(Error::Json)?;
        serde_json::from_value(Value::Object(object)).map_err(Error::Json)
    }

    /// Serializes this key into compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if `serde_json` fails to write the key.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::Serialize)
    }

    /// The `kty` member as it was parsed
    pub fn key_type(&self) -> &str {
        &self.kty
    }

    /// The `crv` member as it was parsed
    pub fn curve(&self) -> &str {
        &self.crv
    }

    /// The Base64Url encoded public key
    pub fn x(&self) -> &str {
        &self.x
    }

    /// The Base64Url encoded private key, empty for public keys
    pub fn d(&self) -> &str {
        &self.d
    }

    /// The `use` member as it was parsed
    pub fn key_usage(&self) -> &str {
        &self.key_use
    }

    /// The `kid` member
    pub fn key_id(&self) -> &str {
        &self.kid
    }

    /// Whether this key carries private key material.
    pub fn is_private(&self) -> bool {
        !self.d.is_empty()
    }

    /// Whether `kty` and `crv` name an Ed25519 key.
    pub fn is_ed25519(&self) -> bool {
        self.kty == KTY && self.crv == CRV
    }
}

impl fmt::Debug for Ed25519Jwk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Jwk")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("x", &self.x)
            .field("d", &if self.is_private() { "[REDACTED]" } else { "" })
            .field("use", &self.key_use)
            .field("kid", &self.kid)
            .finish()
    }
}

impl Drop for Ed25519Jwk {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}
