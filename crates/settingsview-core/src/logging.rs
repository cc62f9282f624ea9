//! Tracing targets used throughout SettingsView.
//!
//! SettingsView uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("settingsview=debug,settingsview_core=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "settingsview_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "settingsview_core::property";
    /// Attribute resolution target.
    pub const RESOLVE: &str = "settingsview_style::resolve";
    /// Cell view lifecycle and dispatch target.
    pub const CELL: &str = "settingsview::cell";
}
