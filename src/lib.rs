//! Dirpick - a scroll-aware directory browser and file picker.
//!
//! Dirpick provides a small, self-contained browse dialog: a list of
//! directory entries navigated with a handful of buttons, showing only the
//! rows that fit and scrolling long names sideways on demand.
//!
//! # Features
//!
//! - Wrapping single-step and clamping page navigation
//! - Viewport that follows the selection with a dead zone
//! - Parent-directory navigation that re-selects the folder just left
//! - Pluggable directory sources, drawing surfaces and input devices
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use dirpick::browser::{BrowseContext, BrowseDialog};
//! use dirpick::config::BrowseConfig;
//! use dirpick::input::ScriptedInput;
//! use dirpick::source::MemorySource;
//! use dirpick::ui::RecordingSurface;
//!
//! let source = MemorySource::from_paths(["/docs/a.txt"]);
//! let context = BrowseContext::new(source, RecordingSurface::new(10, 40), ScriptedInput::default());
//! let mut dialog = BrowseDialog::new(context, BrowseConfig::new("Open").with_start_path("/docs"));
//! let confirmed = dialog.run()?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod browser;
pub mod config;
pub mod error;
pub mod input;
pub mod source;
pub mod ui;

pub use error::{DirpickError, Result};
