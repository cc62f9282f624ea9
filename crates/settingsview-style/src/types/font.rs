//! Font representation.

use bitflags::bitflags;

use crate::error::{Error, Result};

/// A font family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The platform's default UI font.
    #[default]
    System,
    /// A specific font family by name.
    Name(String),
}

impl FontFamily {
    /// Create a named font family.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Check if this is the platform default family.
    pub fn is_system(&self) -> bool {
        matches!(self, FontFamily::System)
    }
}

bitflags! {
    /// Bold/italic styling applied on top of a family.
    ///
    /// The empty set is regular text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontAttributes: u8 {
        const BOLD = 0b01;
        const ITALIC = 0b10;
    }
}

/// A complete font specification: family, size, and attributes.
///
/// Native fonts are always constructed from all three at once, which is why
/// the resolver produces a whole `Font` rather than individual parts.
///
/// # Example
///
/// ```
/// use settingsview_style::{Font, FontAttributes, FontFamily};
///
/// let font = Font::try_new(FontFamily::name("Menlo"), 13.0, FontAttributes::BOLD).unwrap();
/// assert_eq!(font.size(), 13.0);
/// assert!(font.is_bold());
///
/// assert!(Font::try_new(FontFamily::System, 0.0, FontAttributes::empty()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    attributes: FontAttributes,
}

impl Font {
    /// Create a font, rejecting sizes that cannot be rendered.
    pub fn try_new(family: FontFamily, size: f32, attributes: FontAttributes) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::InvalidFontSize { size });
        }
        Ok(Self {
            family,
            size,
            attributes,
        })
    }

    /// The platform default font at the given size.
    pub fn system(size: f32) -> Result<Self> {
        Self::try_new(FontFamily::System, size, FontAttributes::empty())
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the font size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Get the bold/italic attributes.
    pub fn attributes(&self) -> FontAttributes {
        self.attributes
    }

    pub fn is_bold(&self) -> bool {
        self.attributes.contains(FontAttributes::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.attributes.contains(FontAttributes::ITALIC)
    }
}

/// The 17 pt platform body font.
impl Default for Font {
    fn default() -> Self {
        Self {
            family: FontFamily::System,
            size: 17.0,
            attributes: FontAttributes::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unrenderable_sizes() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(Font::try_new(FontFamily::System, size, FontAttributes::empty()).is_err());
        }
    }

    #[test]
    fn attributes_combine() {
        let font = Font::try_new(
            FontFamily::name("Avenir"),
            15.0,
            FontAttributes::BOLD | FontAttributes::ITALIC,
        )
        .unwrap();
        assert!(font.is_bold());
        assert!(font.is_italic());
        assert_eq!(font.family(), &FontFamily::Name("Avenir".into()));
    }
}
