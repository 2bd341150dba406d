use std::num::ParseIntError;
use thiserror::Error;

/// Invalid value inside a template document.
///
/// Only affects the single item carrying the value; the rest of the template is still
/// applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Role color is not a hexadecimal number.
    #[error("Invalid role color '{value}': {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Role color does not fit in 24 bits.
    #[error("Role color '{0}' exceeds 0xffffff")]
    ColorOutOfRange(String),
}
