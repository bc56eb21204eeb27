pub mod editing;
pub mod host;
pub mod parsing;

// Re-export key types for easier usage
pub use editing::{edit::*, rewrite::*, selection::*};
pub use host::{ActiveContext, Command, CommandError, EditorHost, ScratchBuffer};
