//! Folio core — static content catalog plus the three state machines that
//! drive the rendered page:
//!
//! 1. [`ScrollProgressTracker`] — smoothed scroll-position progress fraction
//! 2. [`NavDisclosure`] — open/closed navigation overlay with reveal animation
//! 3. [`DecisionSelector`] — single-selection decision panel with swap
//!    transitions and metric bar animation
//!
//! The machines are independent and own their state exclusively; the front
//! end composes their outputs positionally.

pub mod catalog;
pub mod decisions;
pub mod disclosure;
pub mod scroll;

pub use catalog::{Catalog, CatalogError, DecisionRecord, Metric, Section};
pub use decisions::{DecisionSelector, Transition};
pub use disclosure::NavDisclosure;
pub use scroll::ScrollProgressTracker;
