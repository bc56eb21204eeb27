//! Data model and rewrite algorithm for list/blockquote prefix editing.
//!
//! The model is deliberately plain: a [`Selection`] is an inclusive pair of
//! line indices, an [`EditOp`] is a per-line prefix replacement, and
//! [`rewrite`] is a pure function from (lines, selections, marker kind) to a
//! batch of edit ops. The host editor owns the buffer and applies the batch
//! atomically; nothing here mutates anything.

pub mod edit;
pub mod rewrite;
pub mod selection;

pub use edit::EditOp;
pub use rewrite::{MarkerKind, rewrite};
pub use selection::Selection;
