//! Error types for palette derivation and theme control
//!
//! All three conditions are local and recoverable: the caller keeps the
//! previously active theme and logs the rejection.

use thiserror::Error;

/// Errors raised by the palette engine and the theme controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Input is not a 3- or 6-digit hex color (or a CSS color a preset expects)
    #[error("invalid color format: {input:?}")]
    InvalidColorFormat { input: String },

    /// A resolved palette is missing a role or carries an unresolvable value
    #[error("incomplete palette for theme '{theme}': {detail}")]
    IncompletePalette { theme: String, detail: String },

    /// Requested theme is not one of the known identifiers
    #[error("unknown theme identifier: {0:?}")]
    UnknownThemeIdentifier(String),
}

impl ThemeError {
    pub(crate) fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ThemeError::invalid_color("#zzz");
        assert_eq!(err.to_string(), "invalid color format: \"#zzz\"");

        let err = ThemeError::UnknownThemeIdentifier("neon".into());
        assert!(err.to_string().contains("neon"));
    }
}
