//! Byte spans inside tag text

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A byte offset span in the text of a single tag
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// First byte covered by the span
    pub start: u32,
    /// One past the last byte covered by the span
    pub end: u32,
}

impl Span {
    /// Create a span from byte offsets
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a span from a `usize` range, as produced by `char_indices`
    pub fn from_range(range: Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }

    /// The span as a range usable for slicing
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Length in bytes
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start as usize, span.len() as usize).into()
    }
}
