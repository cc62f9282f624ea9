//! Error types for cell views.

/// Errors returned by cell view lifecycle operations.
///
/// Update paths never fail; these only surface from binding and
/// configuration, where the caller can act on them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CellError {
    /// The view has been disposed and can no longer be bound or attached.
    #[error("Cell view has been disposed")]
    Disposed,

    /// The cell model the view was created for no longer exists.
    #[error("Cell model has been dropped")]
    ModelDropped,

    /// A configuration value is out of range.
    #[error("Invalid cell view configuration: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },
}

/// A specialized Result type for cell view operations.
pub type Result<T> = std::result::Result<T, CellError>;
