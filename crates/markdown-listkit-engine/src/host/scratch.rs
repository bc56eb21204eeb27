use anyhow::bail;

use crate::editing::{EditOp, Selection};
use crate::host::{ActiveContext, EditorHost};

/// In-memory [`EditorHost`] over owned lines.
///
/// Used by the engine's own tests, and by embedders that want to run the
/// rewrite against plain text without a live editor. A buffer with no
/// selections has no active context, mirroring an editor without focus.
#[derive(Debug, Clone, Default)]
pub struct ScratchBuffer {
    lines: Vec<String>,
    selections: Vec<Selection>,
}

impl ScratchBuffer {
    /// Splits `text` into lines. Line terminators are not kept; `text()`
    /// joins with `\n`.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
            selections: Vec::new(),
        }
    }

    pub fn select(&mut self, selections: impl IntoIterator<Item = Selection>) {
        self.selections = selections.into_iter().collect();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl EditorHost for ScratchBuffer {
    fn active_context(&self) -> Option<ActiveContext> {
        if self.selections.is_empty() {
            return None;
        }
        Some(ActiveContext {
            lines: self.lines.clone(),
            selections: self.selections.clone(),
        })
    }

    fn apply(&mut self, batch: &[EditOp]) -> anyhow::Result<()> {
        for op in batch {
            let Some(line) = self.lines.get_mut(op.line) else {
                bail!("edit targets line {} beyond buffer end", op.line);
            };
            *line = op.apply_to(line);
        }
        Ok(())
    }
}
