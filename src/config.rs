//! The immutable configuration of a single conversion
use crate::{
    input::{Input, InputSelector},
    output::OutputFormat,
};

/// Everything a single conversion needs to know, fixed once the command
/// line has been parsed.
#[derive(Debug, Clone, Default)]
pub struct Config {
    output_format: OutputFormat,
    selector: InputSelector,
    inputs: Vec<Input>,
}

impl Config {
    /// Creates a configuration from the inputs given on the command line.
    ///
    /// `inputs` may contain empty values, the selector treats them as not
    /// supplied.
    pub fn new(
        output_format: OutputFormat,
        selector: InputSelector,
        inputs: impl IntoIterator<Item = Input>,
    ) -> Self {
        Self {
            output_format,
            selector,
            inputs: inputs.into_iter().collect(),
        }
    }

    /// Replaces the input selector, e.g. with [`InputSelector::reduced`].
    #[must_use]
    pub fn with_selector(self, selector: InputSelector) -> Self {
        Self { selector, ..self }
    }

    /// How the result is rendered
    pub const fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// The selector deciding which input is used
    pub const fn selector(&self) -> InputSelector {
        self.selector
    }

    /// All inputs given, including empty ones
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }
}
