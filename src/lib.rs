//! Conversion of Ed25519 keys between JSON Web Keys and raw key bytes.
//!
//! Raw key material is either a 32 byte public key, or a 32 byte private key
//! followed by its 32 byte public key. In the JWK form the private part is
//! the `d` member and the public part the `x` member, both unpadded
//! Base64Url. The [`codec`] module converts between the two, [`run`] drives
//! one conversion for the `ed25519-jwk` command line tool.
//!
//! ```
//! use ed25519_jwk::codec;
//!
//! let jwk = codec::encode(&[0u8; 64]);
//! assert!(jwk.is_private());
//! assert_eq!(codec::decode(&jwk)?.as_bytes(), &[0u8; 64]);
//! # Ok::<(), ed25519_jwk::Error>(())
//! ```
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    explicit_outlives_requirements,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc
)]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    macro_use_extern_crate,
    non_ascii_idents,
    elided_lifetimes_in_paths
)]
#![forbid(unsafe_code)]

mod app;
pub use app::run;

mod error;
pub use error::Error;

pub(crate) mod base64_url;
pub use base64_url::NoBase64UrlString;

pub mod cli;
pub mod codec;
pub mod config;
pub mod input;
pub mod jwk;
pub mod output;

pub use codec::RawKeyMaterial;
pub use config::Config;
pub use jwk::Ed25519Jwk;
