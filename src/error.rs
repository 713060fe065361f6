use std::io;

use thiserror::Error;

use crate::{base64_url::NoBase64UrlString, input::InputKind};

/// Everything that can stop a conversion before its output is written.
///
/// The [`Display`](core::fmt::Display) of each variant is the one-line
/// diagnostic shown to the user.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// None or more than one input source was supplied
    #[error("You must provide 1 and only 1 input type.")]
    InputSelection {
        /// How many non-empty inputs were found
        supplied: usize,
    },
    /// An input was supplied that the active
    /// [`InputSelector`](crate::input::InputSelector) does not accept
    #[error("`{0}` is not accepted as an input here.")]
    UnsupportedInput(InputKind),
    /// The JWK text is not valid JSON or not a JSON object
    #[error("Provided JSON was unparsable.")]
    Json(#[source] serde_json::Error),
    /// A key member or input was not valid unpadded Base64Url
    #[error(transparent)]
    Base64(#[from] NoBase64UrlString),
    /// The generated JWK could not be serialized
    #[error("failed to serialize the JSON Web Key")]
    Serialize(#[source] serde_json::Error),
    /// Writing the output line failed
    #[error("failed to write the output")]
    Io(#[from] io::Error),
}
