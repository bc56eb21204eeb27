//! Leading-marker detection for list and blockquote lines.
//!
//! Each marker family gets its own small parser function so the edge cases of
//! the three families stay auditable in isolation.

pub mod markers;

pub use markers::{IndentedMarker, LeadingMarker, OrderedMarker};
