//! Common test helpers.
#![allow(dead_code)]

use ed25519_jwk::{input::Input, output::OutputFormat, Config};
use zeroize::Zeroizing;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// The RFC 8032 test 1 secret key, as used in RFC 8037 appendix A.1.
pub const SECRET_HEX: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
/// The public key belonging to [`SECRET_HEX`].
pub const PUBLIC_HEX: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

/// Reads a key file from the `tests/vectors/jwk` directory.
pub fn read_jwk(name: &str) -> TestResult<String> {
    let json = std::fs::read_to_string(format!(
        "{}/tests/vectors/jwk/{name}.json",
        env!("CARGO_MANIFEST_DIR"),
    ))?;

    Ok(json)
}

pub fn jwk(json: &str) -> Input {
    Input::Jwk(Zeroizing::new(json.to_owned()))
}

pub fn interchange(encoded: &str) -> Input {
    Input::Interchange(Zeroizing::new(encoded.to_owned()))
}

pub fn bytes(hex: &str) -> Input {
    Input::Bytes(Zeroizing::new(::hex::decode(hex).unwrap()))
}

pub fn b64bytes(encoded: &str) -> Input {
    Input::Base64Bytes(Zeroizing::new(encoded.to_owned()))
}

/// Runs a conversion with the full selector and returns what was written.
pub fn convert(format: OutputFormat, inputs: Vec<Input>) -> Result<String, ed25519_jwk::Error> {
    let config = Config::new(format, Default::default(), inputs);
    let mut out = Vec::new();
    let result = ed25519_jwk::run(&config, &mut out);
    let written = String::from_utf8(out).unwrap();

    match result {
        Ok(()) => Ok(written),
        Err(e) => {
            assert_eq!(written, "", "nothing may be written on failure");
            Err(e)
        }
    }
}
