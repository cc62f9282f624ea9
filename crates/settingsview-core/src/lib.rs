//! Core systems for SettingsView.
//!
//! This crate provides the observable plumbing that cell models and cell
//! views share:
//!
//! - **Signal/Slot System**: Synchronous, type-safe change notification
//! - **Scoped Connections**: Revocable subscription tokens
//! - **Property System**: Change-detecting model storage
//!
//! # Example
//!
//! ```
//! use settingsview_core::{Property, Signal};
//!
//! let value = Property::new(0);
//! let value_changed = Signal::<i32>::new();
//!
//! let guard = value_changed.connect_scoped(|v| println!("now {v}"));
//!
//! if value.set(5) {
//!     value_changed.emit(5);
//! }
//!
//! drop(guard);
//! assert_eq!(value_changed.connection_count(), 0);
//! ```

pub mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{Result, SignalError};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
