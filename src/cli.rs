//! Command line arguments of the `ed25519-jwk` binary
use core::fmt;

use clap::Parser;
use zeroize::Zeroizing;

use crate::{
    config::Config,
    input::{Input, InputSelector},
    output::OutputFormat,
};

/// Converts Ed25519 keys between JSON Web Keys and raw key bytes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Encode the output in base64.
    #[arg(short = 'e', long = "base64")]
    pub base64: bool,

    /// The JWK to convert, but in interchange format.
    #[arg(long, value_name = "B64URL")]
    pub interchange: Option<String>,

    /// The JWK to convert.
    #[arg(long, value_name = "JSON")]
    pub jwk: Option<String>,

    /// The public or private key bytes to parse.
    #[arg(long, value_name = "HEX", value_parser = parse_hex)]
    pub bytes: Option<HexBytes>,

    /// The public or private key bytes to parse, but encoded in base64.
    #[arg(long, value_name = "B64URL")]
    pub b64bytes: Option<String>,
}

/// Key bytes given as a hex string.
#[derive(Clone)]
pub struct HexBytes(pub Zeroizing<Vec<u8>>);

impl fmt::Debug for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexBytes([REDACTED; {}])", self.0.len())
    }
}

fn parse_hex(s: &str) -> Result<HexBytes, hex::FromHexError> {
    hex::decode(s).map(|bytes| HexBytes(Zeroizing::new(bytes)))
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let output_format = if args.base64 {
            OutputFormat::Base64Url
        } else {
            OutputFormat::Plain
        };

        let inputs = [
            args.interchange.map(|s| Input::Interchange(Zeroizing::new(s))),
            args.jwk.map(|s| Input::Jwk(Zeroizing::new(s))),
            args.bytes.map(|b| Input::Bytes(b.0)),
            args.b64bytes.map(|s| Input::Base64Bytes(Zeroizing::new(s))),
        ];

        Config::new(output_format, InputSelector::full(), inputs.into_iter().flatten())
    }
}
