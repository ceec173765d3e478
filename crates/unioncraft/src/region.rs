//! Storage regions produced by layout resolution.

use std::fmt;

/// Half-open byte interval `[position, position + length)` of the data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub position: usize,
    pub length: usize,
}

impl Range {
    pub fn new(position: usize, length: usize) -> Self {
        Range { position, length }
    }

    /// First byte past the end of the range.
    pub fn end(&self) -> usize {
        self.position + self.length
    }

    pub fn contains(&self, byte: usize) -> bool {
        self.position <= byte && byte < self.end()
    }

    /// Byte indices spanned by the range.
    pub fn bytes(&self) -> std::ops::Range<usize> {
        self.position..self.end()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.position, self.end())
    }
}

/// Per-byte preserve-mask: set bits are left untouched when a union's storage
/// is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskEntry {
    pub position: usize,
    pub mask: u8,
}

impl MaskEntry {
    pub fn new(position: usize, mask: u8) -> Self {
        MaskEntry { position, mask }
    }
}

impl fmt::Display for MaskEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#010b}", self.position, self.mask)
    }
}
