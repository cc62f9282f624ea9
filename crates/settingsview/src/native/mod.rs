//! The native view layer that cell views drive.
//!
//! Cell views never draw. They own text-display elements created by a
//! [`NativePlatform`] and insert them into a [`ContentStack`] owned by the
//! hosting list. Platform backends implement these traits; [`headless`]
//! provides an in-memory implementation.

pub mod headless;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use settingsview_style::{Axis, Color, Font, TextAlign};

/// Identity of a native view within its parent stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Allocate a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A native text-display element.
///
/// Dropping the box releases the native resource.
pub trait TextLabel: Send {
    fn view_id(&self) -> ViewId;

    fn text(&self) -> Option<&str>;
    fn set_text(&mut self, text: Option<&str>);

    fn text_color(&self) -> Color;
    fn set_text_color(&mut self, color: Color);

    /// The current font, or `None` if the native font is not realized yet.
    fn font(&self) -> Option<&Font>;
    fn set_font(&mut self, font: Font);

    /// Opacity in `0.0..=1.0`.
    fn opacity(&self) -> f32;
    fn set_opacity(&mut self, opacity: f32);

    fn text_alignment(&self) -> TextAlign;
    fn set_text_alignment(&mut self, align: TextAlign);

    /// How strongly the view resists growing beyond its content along `axis`.
    fn content_hugging_priority(&self, axis: Axis) -> f32;
    fn set_content_hugging_priority(&mut self, priority: f32, axis: Axis);

    /// How strongly the view resists shrinking below its content along `axis`.
    fn compression_resistance_priority(&self, axis: Axis) -> f32;
    fn set_compression_resistance_priority(&mut self, priority: f32, axis: Axis);
}

/// A copy of a label's observable state.
///
/// Read accessors mirror [`TextLabel`], so inspection code reads the same
/// against a live label or a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSnapshot {
    view_id: ViewId,
    text: Option<String>,
    text_color: Color,
    font: Option<Font>,
    opacity: f32,
    alignment: TextAlign,
    hugging: [f32; 2],
    compression: [f32; 2],
}

impl LabelSnapshot {
    pub fn capture(label: &dyn TextLabel) -> Self {
        let per_axis = |get: &dyn Fn(Axis) -> f32| [get(Axis::Horizontal), get(Axis::Vertical)];
        Self {
            view_id: label.view_id(),
            text: label.text().map(str::to_owned),
            text_color: label.text_color(),
            font: label.font().cloned(),
            opacity: label.opacity(),
            alignment: label.text_alignment(),
            hugging: per_axis(&|axis| label.content_hugging_priority(axis)),
            compression: per_axis(&|axis| label.compression_resistance_priority(axis)),
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn text_alignment(&self) -> TextAlign {
        self.alignment
    }

    pub fn content_hugging_priority(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.hugging[0],
            Axis::Vertical => self.hugging[1],
        }
    }

    pub fn compression_resistance_priority(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.compression[0],
            Axis::Vertical => self.compression[1],
        }
    }
}

/// An ordered layout container owned by the hosting list.
pub trait ContentStack: Send {
    /// Append a view to the arrangement.
    fn add_arranged(&mut self, view: ViewId);

    /// Remove a view from the arrangement, returning whether it was present.
    fn remove_arranged(&mut self, view: ViewId) -> bool;

    /// Schedule a layout pass, e.g. after a child's measured size changed.
    fn set_needs_layout(&mut self);

    fn set_background_color(&mut self, color: Color);
}

/// Shared handle to a stack that cell views insert themselves into.
pub type SharedStack = Arc<Mutex<dyn ContentStack>>;

/// Factory for native views.
pub trait NativePlatform: Send + Sync {
    fn create_label(&self) -> Box<dyn TextLabel>;
}
