//! Overridable style values.

/// A cell-level style value that is either explicitly set or left unset.
///
/// `Unset` is the single reserved sentinel meaning "inherit from the
/// container". It is a distinct variant, so an explicit value equal to any
/// concrete colour (black, transparent, ...) is never mistaken for it.
///
/// # Example
///
/// ```
/// use settingsview_style::{Color, StyleValue};
///
/// let explicit: StyleValue<Color> = Color::BLACK.into();
/// assert!(explicit.is_set());
///
/// let inherited: StyleValue<Color> = StyleValue::Unset;
/// assert_eq!(inherited.or(Some(&Color::RED)), Some(Color::RED));
/// assert_eq!(explicit.or(Some(&Color::RED)), Some(Color::BLACK));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue<T> {
    /// An explicit value.
    Set(T),
    /// No explicit value; fall back to the container.
    #[default]
    Unset,
}

impl<T: Clone> StyleValue<T> {
    /// Check if this value is explicitly set.
    pub fn is_set(&self) -> bool {
        matches!(self, StyleValue::Set(_))
    }

    /// Get the inner value if set.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            StyleValue::Set(v) => Some(v),
            StyleValue::Unset => None,
        }
    }

    /// The explicit value, else the fallback (if any).
    pub fn or(&self, fallback: Option<&T>) -> Option<T> {
        self.as_set().or(fallback).cloned()
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        StyleValue::Set(value)
    }
}
