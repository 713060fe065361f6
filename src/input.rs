//! Selection of the single input a conversion starts from
use core::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use crate::Error;

/// The kinds of input a key can be supplied as.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum InputKind {
    /// A JWK as JSON text, itself Base64Url encoded
    Interchange,
    /// A JWK as JSON text
    Jwk,
    /// Raw key bytes, given as hex on the command line
    Bytes,
    /// Raw key bytes as a Base64Url string
    Base64Bytes,
}

impl InputKind {
    /// Every kind, in the order the command line lists them.
    pub const ALL: &'static [InputKind] = &[
        InputKind::Interchange,
        InputKind::Jwk,
        InputKind::Bytes,
        InputKind::Base64Bytes,
    ];

    /// The command line flag that supplies this kind.
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Interchange => "--interchange",
            Self::Jwk => "--jwk",
            Self::Bytes => "--bytes",
            Self::Base64Bytes => "--b64bytes",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// A supplied input value.
#[derive(Clone, PartialEq, Eq)]
pub enum Input {
    /// See [`InputKind::Interchange`]
    Interchange(Zeroizing<String>),
    /// See [`InputKind::Jwk`]
    Jwk(Zeroizing<String>),
    /// See [`InputKind::Bytes`]
    Bytes(Zeroizing<Vec<u8>>),
    /// See [`InputKind::Base64Bytes`]
    Base64Bytes(Zeroizing<String>),
}

impl Input {
    /// The kind of this input
    pub const fn kind(&self) -> InputKind {
        match self {
            Self::Interchange(_) => InputKind::Interchange,
            Self::Jwk(_) => InputKind::Jwk,
            Self::Bytes(_) => InputKind::Bytes,
            Self::Base64Bytes(_) => InputKind::Base64Bytes,
        }
    }

    /// An empty string or zero-length byte sequence counts as not supplied.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Interchange(s) | Self::Jwk(s) | Self::Base64Bytes(s) => s.is_empty(),
            Self::Bytes(b) => b.is_empty(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Interchange(s) | Self::Jwk(s) | Self::Base64Bytes(s) => s.len(),
            Self::Bytes(b) => b.len(),
        }
    }
}

// the values may be private keys
impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("kind", &self.kind())
            .field("len", &self.len())
            .finish()
    }
}

/// Checks that exactly one input was supplied among a fixed set of accepted
/// [`InputKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSelector {
    accepted: &'static [InputKind],
}

impl InputSelector {
    /// A selector accepting the given kinds.
    pub const fn new(accepted: &'static [InputKind]) -> Self {
        Self { accepted }
    }

    /// Accepts every [`InputKind`].
    pub const fn full() -> Self {
        Self::new(InputKind::ALL)
    }

    /// Accepts only [`InputKind::Jwk`] and [`InputKind::Bytes`].
    pub const fn reduced() -> Self {
        Self::new(&[InputKind::Jwk, InputKind::Bytes])
    }

    /// The kinds this selector accepts
    pub const fn accepted(&self) -> &'static [InputKind] {
        self.accepted
    }

    /// Whether `kind` is accepted
    pub fn accepts(&self, kind: InputKind) -> bool {
        self.accepted.contains(&kind)
    }

    /// Picks the one supplied input out of `inputs`, ignoring empty ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedInput`] if a supplied input has a kind this
    /// selector does not accept, and [`Error::InputSelection`] if the number
    /// of supplied inputs is not exactly one.
    pub fn select<I>(&self, inputs: I) -> Result<Input, Error>
    where
        I: IntoIterator<Item = Input>,
    {
        let mut supplied = 0;
        let mut selected = None;

        for input in inputs.into_iter().filter(|i| !i.is_empty()) {
            if !self.accepts(input.kind()) {
                return Err(Error::UnsupportedInput(input.kind()));
            }
            supplied += 1;
            selected.get_or_insert(input);
        }

        match selected {
            Some(input) if supplied == 1 => {
                debug!(kind = %input.kind(), "selected input");
                Ok(input)
            }
            _ => Err(Error::InputSelection { supplied }),
        }
    }
}

impl Default for InputSelector {
    fn default() -> Self {
        Self::full()
    }
}
