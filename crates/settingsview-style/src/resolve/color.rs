//! Text colour resolution.

use settingsview_core::logging::targets;

use crate::types::{Color, StyleValue};

/// Resolve the effective colour for a cell attribute.
///
/// - An explicit cell colour always wins.
/// - Otherwise the container's colour is used, when a container is attached
///   and its own colour is set.
/// - Otherwise `None`: the native view keeps whatever colour it already has.
pub fn resolve_color(
    cell: &StyleValue<Color>,
    container: Option<&StyleValue<Color>>,
) -> Option<Color> {
    let resolved = cell.or(container.and_then(StyleValue::as_set));
    if resolved.is_none() {
        tracing::trace!(
            target: targets::RESOLVE,
            attached = container.is_some(),
            "no colour available, leaving view untouched"
        );
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET: StyleValue<Color> = StyleValue::Unset;

    fn setup() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    }

    #[test]
    fn cell_colour_wins_over_container() {
        let cell = StyleValue::Set(Color::BLUE);
        assert_eq!(resolve_color(&cell, Some(&StyleValue::Set(Color::RED))), Some(Color::BLUE));
        assert_eq!(resolve_color(&cell, Some(&UNSET)), Some(Color::BLUE));
        assert_eq!(resolve_color(&cell, None), Some(Color::BLUE));
    }

    #[test]
    fn unset_cell_falls_back_to_container() {
        let container = StyleValue::Set(Color::GREEN);
        assert_eq!(resolve_color(&UNSET, Some(&container)), Some(Color::GREEN));
    }

    #[test]
    fn nothing_set_is_a_no_op() {
        setup();
        assert_eq!(resolve_color(&UNSET, Some(&UNSET)), None);
        assert_eq!(resolve_color(&UNSET, None), None);
    }

    #[test]
    fn explicit_default_looking_colour_is_still_an_override() {
        let cell = StyleValue::Set(Color::TRANSPARENT);
        let container = StyleValue::Set(Color::RED);
        assert_eq!(resolve_color(&cell, Some(&container)), Some(Color::TRANSPARENT));
    }
}
