//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building style values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A colour string could not be parsed.
    #[error("Invalid color '{input}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor { input: String },

    /// A font cannot be constructed at this size.
    #[error("Invalid font size {size}: must be finite and greater than zero")]
    InvalidFontSize { size: f32 },
}

impl Error {
    /// Create a colour parse error.
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }
}
