//! Font resolution.
//!
//! Family and attributes each fall back independently; size uses a
//! positivity check (`0` is the cell's "unset" encoding). The three are then
//! combined into one [`Font`], because native fonts are built in one step.

use settingsview_core::logging::targets;

use crate::types::{Font, FontAttributes, FontFamily};

/// The font-related attributes a cell may override.
///
/// `None` family/attributes and a non-positive size mean "unset".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontSpec {
    pub family: Option<FontFamily>,
    pub size: f32,
    pub attributes: Option<FontAttributes>,
}

/// The container's concrete font defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDefaults {
    pub family: FontFamily,
    pub size: f32,
    pub attributes: FontAttributes,
}

impl Default for FontDefaults {
    fn default() -> Self {
        Self {
            family: FontFamily::System,
            size: 17.0,
            attributes: FontAttributes::empty(),
        }
    }
}

/// Resolve the effective font for a cell attribute.
///
/// Returns `None` when no size can be determined (cell size unset and no
/// container attached), or when the chosen size cannot produce a font.
pub fn resolve_font(cell: &FontSpec, container: Option<&FontDefaults>) -> Option<Font> {
    let family = cell
        .family
        .clone()
        .or_else(|| container.map(|c| c.family.clone()))
        .unwrap_or_default();
    let attributes = cell
        .attributes
        .or_else(|| container.map(|c| c.attributes))
        .unwrap_or_default();

    let size = if cell.size > 0.0 {
        cell.size
    } else if let Some(container) = container {
        container.size
    } else {
        tracing::trace!(target: targets::RESOLVE, "no font size available, leaving view untouched");
        return None;
    };

    match Font::try_new(family, size, attributes) {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::trace!(target: targets::RESOLVE, %err, "skipping font update");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    }

    fn defaults() -> FontDefaults {
        FontDefaults {
            family: FontFamily::name("Georgia"),
            size: 17.0,
            attributes: FontAttributes::ITALIC,
        }
    }

    #[test]
    fn unset_cell_takes_everything_from_container() {
        let font = resolve_font(&FontSpec::default(), Some(&defaults())).unwrap();
        assert_eq!(font, Font::try_new(FontFamily::name("Georgia"), 17.0, FontAttributes::ITALIC).unwrap());
    }

    #[test]
    fn fully_specified_cell_ignores_container() {
        let cell = FontSpec {
            family: Some(FontFamily::name("Menlo")),
            size: 11.0,
            attributes: Some(FontAttributes::BOLD),
        };
        let expected = Font::try_new(FontFamily::name("Menlo"), 11.0, FontAttributes::BOLD).unwrap();
        assert_eq!(resolve_font(&cell, Some(&defaults())), Some(expected.clone()));
        assert_eq!(resolve_font(&cell, None), Some(expected));
    }

    #[test]
    fn parts_fall_back_independently() {
        let cell = FontSpec {
            family: None,
            size: 0.0,
            attributes: Some(FontAttributes::empty()),
        };
        let font = resolve_font(&cell, Some(&defaults())).unwrap();
        assert_eq!(font.family(), &FontFamily::name("Georgia"));
        assert_eq!(font.size(), 17.0);
        // An explicit empty set is an override, not "unset".
        assert_eq!(font.attributes(), FontAttributes::empty());
    }

    #[test]
    fn negative_cell_size_counts_as_unset() {
        let cell = FontSpec { size: -4.0, ..FontSpec::default() };
        assert_eq!(resolve_font(&cell, Some(&defaults())).map(|f| f.size()), Some(17.0));
    }

    #[test]
    fn no_size_and_no_container_is_a_no_op() {
        setup();
        let cell = FontSpec {
            family: Some(FontFamily::name("Menlo")),
            size: 0.0,
            attributes: Some(FontAttributes::BOLD),
        };
        assert_eq!(resolve_font(&cell, None), None);
    }

    #[test]
    fn cell_size_without_container_uses_platform_family() {
        let cell = FontSpec { size: 12.0, ..FontSpec::default() };
        let font = resolve_font(&cell, None).unwrap();
        assert!(font.family().is_system());
        assert_eq!(font.attributes(), FontAttributes::empty());
    }

    #[test]
    fn unusable_container_size_is_a_no_op() {
        setup();
        let container = FontDefaults { size: 0.0, ..defaults() };
        assert_eq!(resolve_font(&FontSpec::default(), Some(&container)), None);
    }
}
