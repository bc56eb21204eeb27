use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A contiguous run of selected lines, both endpoints inclusive.
///
/// Line indices are zero-based. A caret with no extent is the single-line
/// selection of the line it sits on. `start_line <= end_line` is expected;
/// an inverted pair simply covers no lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start_line: usize,
    pub end_line: usize,
}

impl Selection {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Selection covering exactly one line.
    pub fn line(line: usize) -> Self {
        Self::new(line, line)
    }

    /// The covered line indices, in order.
    pub fn lines(&self) -> RangeInclusive<usize> {
        self.start_line..=self.end_line
    }

    /// Index of the line immediately above the selection, if any.
    pub fn predecessor_line(&self) -> Option<usize> {
        self.start_line.checked_sub(1)
    }
}
