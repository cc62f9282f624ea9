//! Cell views: adapters between cell models and native views.

mod base;
mod config;
mod label_cell;

pub use base::CellBaseView;
pub use config::CellViewConfig;
pub use label_cell::LabelCellView;

/// Lifecycle state of a cell view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Native views exist but nothing has been applied yet.
    Constructed,
    /// At least one full refresh has run; the view tracks its sources live.
    Bound,
    /// Native views have been released. Terminal.
    Disposed,
}
