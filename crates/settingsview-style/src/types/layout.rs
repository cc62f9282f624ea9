//! Layout hints understood by native views.

/// Horizontal text alignment within a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    /// Leading edge for the current writing direction.
    #[default]
    Natural,
    Left,
    Center,
    Right,
}

/// A layout axis for sizing-priority hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}
