//! Source ingestion: comment/literal stripping and offset bookkeeping.
//!
//! Every analysis runs against an [`AnalysisSnapshot`], built once from the raw
//! text. The stripped view has the same byte length as the raw text, so an offset
//! into one is meaningful in the other; the newtypes keep the two apart anyway.

mod position;
mod strip;

pub use position::PositionMap;
pub use strip::{CommentRegion, RegionKind, Stripped, strip};

use tracing::trace;

/// Byte offset into the raw (original) text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawOffset(usize);

impl RawOffset {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Byte offset into the stripped text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrippedOffset(usize);

impl StrippedOffset {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Offset `n` bytes further into the buffer.
    #[must_use]
    pub const fn forward(self, n: usize) -> Self {
        Self(self.0 + n)
    }
}

/// Immutable view of one loaded file: raw text, stripped text and the map
/// between them.
#[derive(Debug, Clone)]
pub struct AnalysisSnapshot {
    raw: String,
    stripped: String,
    map: PositionMap,
}

impl Default for AnalysisSnapshot {
    fn default() -> Self {
        Self::prepare("")
    }
}

impl AnalysisSnapshot {
    /// Strip comments and literals from `raw` and build the position map.
    #[must_use]
    pub fn prepare(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let Stripped { text, regions } = strip(&raw);
        trace!(bytes = raw.len(), regions = regions.len(), "stripped buffer");
        let map = PositionMap::new(&raw, regions);
        Self {
            raw,
            stripped: text,
            map,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    #[must_use]
    pub fn stripped_bytes(&self) -> &[u8] {
        self.stripped.as_bytes()
    }

    #[must_use]
    pub const fn map(&self) -> &PositionMap {
        &self.map
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of lines in the original text. A trailing newline does not start
    /// an extra line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.map.line_count()
    }

    /// Original text of a 1-based line, without its line terminator.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&str> {
        let span = self.map.line_span(number)?;
        self.raw.get(span)
    }

    /// Stripped text of a 1-based line, without its line terminator.
    #[must_use]
    pub fn stripped_line(&self, number: usize) -> Option<&str> {
        let span = self.map.line_span(number)?;
        self.stripped.get(span)
    }

    /// Iterate `(line number, raw line)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        (1..=self.line_count()).filter_map(|n| self.line(n).map(|line| (n, line)))
    }

    /// Iterate `(line number, stripped line)` pairs.
    pub fn stripped_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        (1..=self.line_count()).filter_map(|n| self.stripped_line(n).map(|line| (n, line)))
    }

    /// 1-based line of an offset into the stripped text.
    #[must_use]
    pub fn line_of(&self, offset: StrippedOffset) -> usize {
        self.map.line_of(offset)
    }

    /// Stripped text in `[start, end)`, empty when the range is out of bounds.
    #[must_use]
    pub fn slice(&self, start: StrippedOffset, end: StrippedOffset) -> &str {
        self.stripped.get(start.get()..end.get()).unwrap_or("")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
