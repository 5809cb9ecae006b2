use std::ops::Range;

use super::{CommentRegion, RawOffset, StrippedOffset};

/// Maps offsets in either buffer to original line numbers and stripped spans.
///
/// Both lookups are binary searches: line starts and regions are sorted and
/// regions never overlap.
#[derive(Debug, Clone)]
pub struct PositionMap {
    regions: Vec<CommentRegion>,
    line_starts: Vec<usize>,
    /// positions of `\n` bytes preceded by `\r`
    crlf_newlines: Vec<usize>,
    len: usize,
    ends_with_newline: bool,
}

impl PositionMap {
    #[must_use]
    pub fn new(raw: &str, regions: Vec<CommentRegion>) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                raw.bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        let bytes = raw.as_bytes();
        let crlf_newlines = (1..bytes.len())
            .filter(|&i| bytes[i] == b'\n' && bytes[i - 1] == b'\r')
            .collect();
        Self {
            regions,
            line_starts,
            crlf_newlines,
            len: raw.len(),
            ends_with_newline: raw.ends_with('\n'),
        }
    }

    #[must_use]
    pub fn regions(&self) -> &[CommentRegion] {
        &self.regions
    }

    #[must_use]
    pub fn to_raw(&self, offset: StrippedOffset) -> RawOffset {
        RawOffset::new(offset.get().min(self.len))
    }

    #[must_use]
    pub fn to_stripped(&self, offset: RawOffset) -> StrippedOffset {
        StrippedOffset::new(offset.get().min(self.len))
    }

    /// The stripped span covering `offset`, if any.
    #[must_use]
    pub fn region_at(&self, offset: RawOffset) -> Option<&CommentRegion> {
        let idx = self.regions.partition_point(|r| r.end <= offset);
        self.regions.get(idx).filter(|r| r.contains(offset))
    }

    #[must_use]
    pub fn is_stripped(&self, offset: StrippedOffset) -> bool {
        self.region_at(self.to_raw(offset)).is_some()
    }

    /// 1-based line of a raw offset: one more than the number of newline bytes
    /// in `[0, offset)`. Offsets past the end are clamped.
    #[must_use]
    pub fn line_of_raw(&self, offset: RawOffset) -> usize {
        let offset = offset.get().min(self.len);
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// 1-based line of a stripped offset. Agrees with [`Self::line_of_raw`]
    /// everywhere, including inside stripped spans.
    #[must_use]
    pub fn line_of(&self, offset: StrippedOffset) -> usize {
        self.line_of_raw(self.to_raw(offset))
    }

    /// First and last line touched by a region.
    #[must_use]
    pub fn region_lines(&self, region: &CommentRegion) -> (usize, usize) {
        let first = self.line_of_raw(region.start);
        let last_byte = region.end.get().saturating_sub(1).max(region.start.get());
        (first, self.line_of_raw(RawOffset::new(last_byte)))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        if self.len == 0 {
            0
        } else if self.ends_with_newline {
            self.line_starts.len() - 1
        } else {
            self.line_starts.len()
        }
    }

    /// Offset of the first byte of a 1-based line.
    #[must_use]
    pub fn line_start(&self, number: usize) -> Option<RawOffset> {
        if number == 0 || number > self.line_count() {
            return None;
        }
        Some(RawOffset::new(self.line_starts[number - 1]))
    }

    /// Byte range of a 1-based line, excluding `\n` and a preceding `\r`.
    #[must_use]
    pub fn line_span(&self, number: usize) -> Option<Range<usize>> {
        let start = self.line_start(number)?.get();
        let mut end = self
            .line_starts
            .get(number)
            .map_or(self.len, |&next| next - 1);
        if end > start && self.crlf_newlines.binary_search(&end).is_ok() {
            end -= 1;
        }
        Some(start..end)
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
