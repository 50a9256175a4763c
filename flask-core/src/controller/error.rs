use std::num::ParseFloatError;

use thiserror::Error;

use super::Field;

/// Errors raised while reading an amount from a form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The field holds no text.
    #[error("enter a {field} amount")]
    Empty { field: Field },

    /// The field text is not a number.
    #[error("`{input}` is not a valid {field} amount")]
    Malformed {
        field: Field,
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

impl InputError {
    /// Returns the field the bad input came from.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Empty { field } | Self::Malformed { field, .. } => *field,
        }
    }
}
