//! In-memory native views.
//!
//! The headless backend keeps every native attribute in plain fields and
//! counts the side effects a real toolkit would perform (layout passes,
//! removals, live labels). It backs off-screen rendering of settings lists
//! and the test suite.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use settingsview::native::headless::{HeadlessPlatform, HeadlessStack};
//! use settingsview::native::{NativePlatform, SharedStack};
//!
//! let platform = HeadlessPlatform::new();
//! let stack = Arc::new(Mutex::new(HeadlessStack::new()));
//! let shared: SharedStack = stack.clone();
//!
//! let label = platform.create_label();
//! shared.lock().add_arranged(label.view_id());
//! assert_eq!(stack.lock().arranged(), &[label.view_id()]);
//! assert_eq!(platform.live_labels(), 1);
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use settingsview_style::{Axis, Color, Font, TextAlign};

use super::{ContentStack, NativePlatform, TextLabel, ViewId};

const DEFAULT_HUGGING_PRIORITY: f32 = 250.0;
const DEFAULT_COMPRESSION_RESISTANCE: f32 = 750.0;

/// State a platform shares with every label it created.
#[derive(Debug)]
struct PlatformState {
    live_labels: AtomicUsize,
    font_updates: AtomicUsize,
    fonts_realized: AtomicBool,
}

impl Default for PlatformState {
    fn default() -> Self {
        Self {
            live_labels: AtomicUsize::new(0),
            font_updates: AtomicUsize::new(0),
            fonts_realized: AtomicBool::new(true),
        }
    }
}

/// Creates [`HeadlessLabel`]s and tracks what happens to them.
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    state: Arc<PlatformState>,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with native fonts unrealized.
    ///
    /// Mirrors a toolkit that is mid-reload: font reads on every label of
    /// this platform return `None` until [`realize_fonts`](Self::realize_fonts)
    /// is called.
    pub fn with_unrealized_fonts(self) -> Self {
        self.state.fonts_realized.store(false, Ordering::SeqCst);
        self
    }

    /// Finish the reload: fonts of all labels become readable again.
    pub fn realize_fonts(&self) {
        self.state.fonts_realized.store(true, Ordering::SeqCst);
    }

    /// Number of labels created by this platform that have not been dropped.
    pub fn live_labels(&self) -> usize {
        self.state.live_labels.load(Ordering::SeqCst)
    }

    /// Number of `set_font` calls across all labels of this platform.
    pub fn font_updates(&self) -> usize {
        self.state.font_updates.load(Ordering::SeqCst)
    }
}

impl NativePlatform for HeadlessPlatform {
    fn create_label(&self) -> Box<dyn TextLabel> {
        let mut label = HeadlessLabel::new();
        self.state.live_labels.fetch_add(1, Ordering::SeqCst);
        label.platform = Some(self.state.clone());
        Box::new(label)
    }
}

/// An in-memory text label.
#[derive(Debug)]
pub struct HeadlessLabel {
    id: ViewId,
    text: Option<String>,
    text_color: Color,
    font: Font,
    opacity: f32,
    alignment: TextAlign,
    hugging: [f32; 2],
    compression: [f32; 2],
    platform: Option<Arc<PlatformState>>,
}

impl Default for HeadlessLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessLabel {
    /// Create a standalone label with black text in the platform font.
    pub fn new() -> Self {
        Self {
            id: ViewId::next(),
            text: None,
            text_color: Color::BLACK,
            font: Font::default(),
            opacity: 1.0,
            alignment: TextAlign::Natural,
            hugging: [DEFAULT_HUGGING_PRIORITY; 2],
            compression: [DEFAULT_COMPRESSION_RESISTANCE; 2],
            platform: None,
        }
    }

    fn font_realized(&self) -> bool {
        self.platform
            .as_ref()
            .is_none_or(|state| state.fonts_realized.load(Ordering::SeqCst))
    }
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::Horizontal => 0,
        Axis::Vertical => 1,
    }
}

impl TextLabel for HeadlessLabel {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set_text(&mut self, text: Option<&str>) {
        self.text = text.map(str::to_owned);
    }

    fn text_color(&self) -> Color {
        self.text_color
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn font(&self) -> Option<&Font> {
        self.font_realized().then_some(&self.font)
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
        if let Some(state) = &self.platform {
            state.font_updates.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn text_alignment(&self) -> TextAlign {
        self.alignment
    }

    fn set_text_alignment(&mut self, align: TextAlign) {
        self.alignment = align;
    }

    fn content_hugging_priority(&self, axis: Axis) -> f32 {
        self.hugging[axis_index(axis)]
    }

    fn set_content_hugging_priority(&mut self, priority: f32, axis: Axis) {
        self.hugging[axis_index(axis)] = priority;
    }

    fn compression_resistance_priority(&self, axis: Axis) -> f32 {
        self.compression[axis_index(axis)]
    }

    fn set_compression_resistance_priority(&mut self, priority: f32, axis: Axis) {
        self.compression[axis_index(axis)] = priority;
    }
}

impl Drop for HeadlessLabel {
    fn drop(&mut self) {
        if let Some(state) = &self.platform {
            state.live_labels.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

/// An in-memory ordered stack.
#[derive(Debug, Default)]
pub struct HeadlessStack {
    arranged: Vec<ViewId>,
    background: Option<Color>,
    layout_requests: usize,
    removals: usize,
}

impl HeadlessStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arranged children in order.
    pub fn arranged(&self) -> &[ViewId] {
        &self.arranged
    }

    /// The last background colour applied, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Number of layout passes requested so far.
    pub fn layout_requests(&self) -> usize {
        self.layout_requests
    }

    /// Number of successful removals so far.
    pub fn removals(&self) -> usize {
        self.removals
    }
}

impl ContentStack for HeadlessStack {
    fn add_arranged(&mut self, view: ViewId) {
        if !self.arranged.contains(&view) {
            self.arranged.push(view);
        }
    }

    fn remove_arranged(&mut self, view: ViewId) -> bool {
        let before = self.arranged.len();
        self.arranged.retain(|v| *v != view);
        let removed = self.arranged.len() != before;
        if removed {
            self.removals += 1;
        }
        removed
    }

    fn set_needs_layout(&mut self) {
        self.layout_requests += 1;
    }

    fn set_background_color(&mut self, color: Color) {
        self.background = Some(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_tracks_live_labels() {
        let platform = HeadlessPlatform::new();
        let a = platform.create_label();
        let b = platform.create_label();
        assert_ne!(a.view_id(), b.view_id());
        assert_eq!(platform.live_labels(), 2);

        drop(a);
        assert_eq!(platform.live_labels(), 1);
        drop(b);
        assert_eq!(platform.live_labels(), 0);
    }

    #[test]
    fn unrealized_platform_labels_have_no_font() {
        let platform = HeadlessPlatform::new().with_unrealized_fonts();
        assert!(platform.create_label().font().is_none());
    }

    #[test]
    fn stack_counts_only_real_removals() {
        let mut stack = HeadlessStack::new();
        let id = ViewId::next();
        stack.add_arranged(id);
        stack.add_arranged(id);
        assert_eq!(stack.arranged(), &[id]);

        assert!(stack.remove_arranged(id));
        assert!(!stack.remove_arranged(id));
        assert_eq!(stack.removals(), 1);
    }

    #[test]
    fn label_priorities_are_per_axis() {
        let mut label = HeadlessLabel::new();
        label.set_content_hugging_priority(100.0, Axis::Horizontal);
        assert_eq!(label.content_hugging_priority(Axis::Horizontal), 100.0);
        assert_eq!(label.content_hugging_priority(Axis::Vertical), DEFAULT_HUGGING_PRIORITY);
    }

    #[test]
    fn realizing_fonts_reaches_every_label_of_the_platform() {
        let platform = HeadlessPlatform::new().with_unrealized_fonts();
        let mut label = platform.create_label();
        assert!(label.font().is_none());

        platform.realize_fonts();
        assert_eq!(label.font(), Some(&Font::default()));

        label.set_font(Font::system(20.0).unwrap());
        assert_eq!(platform.font_updates(), 1);
        assert_eq!(label.font().map(Font::size), Some(20.0));
    }

    #[test]
    fn standalone_labels_always_have_a_font() {
        let label = HeadlessLabel::new();
        assert_eq!(label.font(), Some(&Font::default()));
    }
}
