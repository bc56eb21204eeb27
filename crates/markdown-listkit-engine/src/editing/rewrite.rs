use serde::{Deserialize, Serialize};

use crate::editing::{EditOp, Selection};
use crate::parsing::markers;

/// The marker family a rewrite turns selected lines into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Numbered list: `1. `, `2. `, ...
    Ordered,
    /// Bullet list, always emitted as `- `.
    Unordered,
    /// Blockquote: `> `.
    Blockquote,
}

/// Base indent and starting number inherited from a selection's predecessor
/// line. `number` is only meaningful for ordered rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Base {
    indent: String,
    number: u64,
}

impl Base {
    fn default_base() -> Self {
        Self {
            indent: String::new(),
            number: 1,
        }
    }
}

/// Derives the base indent (and, for ordered, the starting number) from the
/// line immediately above a selection.
///
/// Only that single line is consulted. A predecessor without a recognized
/// marker of the relevant family yields the defaults: empty indent, number 1.
fn infer_base(predecessor: Option<&str>, kind: MarkerKind) -> Base {
    let Some(text) = predecessor else {
        return Base::default_base();
    };
    match kind {
        MarkerKind::Ordered => match markers::ordered_marker(text) {
            Some(m) => Base {
                indent: m.indent.to_string(),
                number: m.number.saturating_add(1),
            },
            None => Base::default_base(),
        },
        MarkerKind::Unordered => match markers::bullet_marker(text) {
            Some(m) => Base {
                indent: m.indent.to_string(),
                number: 1,
            },
            None => Base::default_base(),
        },
        MarkerKind::Blockquote => match markers::quote_marker(text) {
            Some(m) => Base {
                indent: m.indent.to_string(),
                number: 1,
            },
            None => Base::default_base(),
        },
    }
}

/// Computes the rewrite batch for a set of selections.
///
/// Emits one [`EditOp`] per line covered by a selection: the computed prefix
/// replaces the line's existing leading marker if one is recognized, and is
/// inserted at column 0 otherwise. Each selection infers its own base from
/// its own predecessor line; ops never depend on each other.
///
/// Lines referenced past the end of `lines` contribute no ops. The function
/// is pure: it only reads `lines` and returns data.
pub fn rewrite<S: AsRef<str>>(
    lines: &[S],
    selections: &[Selection],
    kind: MarkerKind,
) -> Vec<EditOp> {
    let mut batch = Vec::new();

    for selection in selections {
        let predecessor = selection
            .predecessor_line()
            .and_then(|i| lines.get(i))
            .map(AsRef::as_ref);
        let base = infer_base(predecessor, kind);

        for (offset, line) in selection.lines().enumerate() {
            let Some(text) = lines.get(line) else {
                break;
            };
            let text = text.as_ref();

            let prefix = match kind {
                MarkerKind::Ordered => {
                    let number = base.number.saturating_add(offset as u64);
                    format!("{}{}. ", base.indent, number)
                }
                MarkerKind::Unordered => format!("{}- ", base.indent),
                MarkerKind::Blockquote => format!("{}> ", base.indent),
            };

            let op = match markers::leading_marker(text) {
                Some(existing) => EditOp::replace_prefix(line, existing.len, prefix),
                None => EditOp::insert(line, prefix),
            };
            batch.push(op);
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_from_numbered_predecessor() {
        let base = infer_base(Some("  7. item"), MarkerKind::Ordered);
        assert_eq!(base.indent, "  ");
        assert_eq!(base.number, 8);
    }

    #[test]
    fn base_defaults_without_predecessor() {
        assert_eq!(infer_base(None, MarkerKind::Ordered), Base::default_base());
    }

    #[test]
    fn base_defaults_on_plain_predecessor() {
        let base = infer_base(Some("hello"), MarkerKind::Ordered);
        assert_eq!(base, Base::default_base());
    }

    #[test]
    fn unordered_base_ignores_bullet_style() {
        let base = infer_base(Some("    * item"), MarkerKind::Unordered);
        assert_eq!(base.indent, "    ");
    }

    #[test]
    fn unordered_base_accepts_numbered_predecessor() {
        let base = infer_base(Some("  3) item"), MarkerKind::Unordered);
        assert_eq!(base.indent, "  ");
    }

    #[test]
    fn quote_base_rejects_bullet_predecessor() {
        let base = infer_base(Some("- item"), MarkerKind::Blockquote);
        assert_eq!(base.indent, "");
    }

    #[test]
    fn out_of_range_lines_emit_nothing() {
        let lines = ["only line"];
        let batch = rewrite(&lines, &[Selection::new(0, 5)], MarkerKind::Unordered);
        assert_eq!(batch, vec![EditOp::insert(0, "- ")]);
    }

    #[test]
    fn empty_selection_list_is_empty_batch() {
        let lines = ["a", "b"];
        assert!(rewrite(&lines, &[], MarkerKind::Ordered).is_empty());
    }
}
