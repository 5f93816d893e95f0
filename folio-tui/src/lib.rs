//! Folio TUI — a single-page personal portfolio rendered in the terminal.
//!
//! Layout, top to bottom:
//! - scroll progress bar (smoothed, spring-eased)
//! - the page: six sections in one scrollable column
//! - status bar with key hints and transient messages
//!
//! A collapsible navigation overlay sits on top of the page, and the
//! Decisions section cross-fades between records with animated metric bars.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
