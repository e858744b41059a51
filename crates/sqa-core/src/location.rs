//! Source locations.
//!
//! Lines are 1-based, columns 0-based, matching tree-sitter's row/column
//! convention after the row is shifted by one. Byte offsets are computed
//! lazily from `(line, column)` and the source text rather than carried by
//! every capture, since most callers never need them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Location {
    /// Builds a location from tree-sitter's 0-based `(row, column)` pairs.
    pub fn from_ts_positions(start: (usize, usize), end: (usize, usize)) -> Self {
        Self {
            line: start.0 as u32 + 1,
            column: start.1 as u32,
            end_line: end.0 as u32 + 1,
            end_column: end.1 as u32,
        }
    }

    /// Byte offset of the start of this location within `source`, computed by
    /// walking lines. Returns `None` if `line` is past the end of `source`.
    pub fn byte_offset(&self, source: &str) -> Option<usize> {
        offset_of(source, self.line, self.column)
    }

    /// Byte offset of the end of this location within `source`.
    pub fn end_offset(&self, source: &str) -> Option<usize> {
        offset_of(source, self.end_line, self.end_column)
    }

    /// `true` if this location could plausibly lexically contain `other`
    /// (same start line or earlier, same end line or later).
    pub fn contains(&self, other: &Location) -> bool {
        (self.line, self.column) <= (other.line, other.column)
            && (self.end_line, self.end_column) >= (other.end_line, other.end_column)
    }
}

fn offset_of(source: &str, line: u32, column: u32) -> Option<usize> {
    let mut offset = 0usize;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx as u32 + 1 == line {
            return Some(offset + column as usize);
        }
        offset += text.len();
    }
    if line == 1 && source.is_empty() {
        return Some(0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_first_line() {
        let loc = Location {
            line: 1,
            column: 3,
            end_line: 1,
            end_column: 5,
        };
        assert_eq!(loc.byte_offset("abcdef"), Some(3));
        assert_eq!(loc.end_offset("abcdef"), Some(5));
    }

    #[test]
    fn offset_of_second_line() {
        let src = "abc\ndefgh\n";
        let loc = Location {
            line: 2,
            column: 2,
            end_line: 2,
            end_column: 4,
        };
        assert_eq!(loc.byte_offset(src), Some(6));
        assert_eq!(loc.end_offset(src), Some(8));
    }

    #[test]
    fn from_ts_positions_shifts_line_to_one_based() {
        let loc = Location::from_ts_positions((0, 0), (2, 4));
        assert_eq!(loc.line, 1);
        assert_eq!(loc.end_line, 3);
    }

    #[test]
    fn contains_nested_range() {
        let outer = Location {
            line: 1,
            column: 0,
            end_line: 5,
            end_column: 1,
        };
        let inner = Location {
            line: 2,
            column: 0,
            end_line: 3,
            end_column: 0,
        };
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }
}
