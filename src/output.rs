//! Rendering of conversion results
use std::io::{self, Write};

use zeroize::Zeroizing;

use crate::base64_url;

/// Text written in front of every result.
pub const PREFIX: &str = "Output: ";

/// How a result is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lowercase hex for bytes, the text itself for JSON
    #[default]
    Plain,
    /// Unpadded Base64Url of the bytes or of the whole JSON text
    Base64Url,
}

/// A conversion result, before rendering.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// Raw key bytes
    Bytes(&'a [u8]),
    /// A serialized JWK
    Json(&'a str),
}

impl OutputFormat {
    /// Renders `payload` without the [`PREFIX`].
    pub fn render(self, payload: Payload<'_>) -> Zeroizing<String> {
        Zeroizing::new(match (self, payload) {
            (Self::Plain, Payload::Bytes(bytes)) => hex::encode(bytes),
            (Self::Plain, Payload::Json(json)) => json.to_owned(),
            (Self::Base64Url, Payload::Bytes(bytes)) => base64_url::encode(bytes),
            (Self::Base64Url, Payload::Json(json)) => base64_url::encode(json),
        })
    }
}

/// Writes `Output: <value>` and a line break to `out`.
///
/// # Errors
///
/// Propagates any error from writing to `out`.
pub fn write_output<W>(out: &mut W, format: OutputFormat, payload: Payload<'_>) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let rendered = format.render(payload);
    writeln!(out, "{PREFIX}{}", rendered.as_str())
}
