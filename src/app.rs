use std::io::Write;

use tracing::debug;
use zeroize::Zeroizing;

use crate::{
    base64_url, codec,
    config::Config,
    input::Input,
    jwk::Ed25519Jwk,
    output::{self, OutputFormat, Payload},
    Error,
};

/// Runs one conversion as described by `config` and writes the
/// `Output: ...` line to `out`.
///
/// A JWK input (`--jwk`, `--interchange`) is turned into raw key bytes, a
/// raw input (`--bytes`, `--b64bytes`) into a JWK. Nothing is written unless
/// the conversion succeeds.
///
/// # Errors
///
/// Fails if the inputs are ambiguous or missing, if the JSON or any
/// Base64Url content cannot be decoded, or if writing to `out` fails.
pub fn run<W>(config: &Config, out: &mut W) -> Result<(), Error>
where
    W: Write + ?Sized,
{
    let input = config.selector().select(config.inputs().iter().cloned())?;
    let format = config.output_format();

    match input {
        Input::Interchange(encoded) => {
            let json = Zeroizing::new(base64_url::decode("interchange", &encoded)?);
            jwk_to_bytes(&json, format, out)
        }
        Input::Jwk(json) => jwk_to_bytes(json.as_bytes(), format, out),
        Input::Bytes(bytes) => bytes_to_jwk(&bytes, format, out),
        Input::Base64Bytes(encoded) => {
            let bytes = Zeroizing::new(base64_url::decode("b64bytes", &encoded)?);
            bytes_to_jwk(&bytes, format, out)
        }
    }
}

fn jwk_to_bytes<W>(json: &[u8], format: OutputFormat, out: &mut W) -> Result<(), Error>
where
    W: Write + ?Sized,
{
    let jwk = Ed25519Jwk::from_json(json)?;
    let raw = codec::decode(&jwk)?;
    debug!(len = raw.len(), ?format, "converted JWK to raw key material");

    output::write_output(out, format, Payload::Bytes(raw.as_bytes()))?;
    Ok(())
}

fn bytes_to_jwk<W>(bytes: &[u8], format: OutputFormat, out: &mut W) -> Result<(), Error>
where
    W: Write + ?Sized,
{
    let jwk = codec::encode(bytes);
    let json = Zeroizing::new(jwk.to_json()?);
    debug!(private = jwk.is_private(), ?format, "converted raw key material to JWK");

    output::write_output(out, format, Payload::Json(&json))?;
    Ok(())
}
