use core::fmt;
use core::ops::Range;

use serde::Serialize;

/// A span of source text: where a token came from and how long it is.
///
/// Lines and columns are 1-based, the byte offset is 0-based. Together with
/// `length` the offset maps a leaf straight back to `&source[range]`, which is
/// what highlighters need to recolor e.g. the contents of an `href`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    file: String,
    line: usize,
    column: usize,
    offset: usize,
    length: usize,
}

impl Location {
    /// Create a location from its five source fields.
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        line: usize,
        column: usize,
        offset: usize,
        length: usize,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset,
            length,
        }
    }

    /// The source the token was read from (usually a path).
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based line of the first byte.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the first byte.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Byte offset of the first byte.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the token in bytes.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Byte offset one past the last byte, clamped to `usize::MAX`.
    #[must_use]
    pub const fn end_offset(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// The byte range covered, suitable for slicing the source.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end_offset()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Where a leaf of the tree comes from.
///
/// Either a [`Location`] in real source text, or a synthetic marker for nodes
/// built by tooling. There is deliberately no `PartialEq`: positions are
/// metadata and never take part in comparing trees.
#[derive(Debug, Clone, Serialize)]
pub enum Position {
    /// A token read from source text.
    Real(Location),

    /// A token made up by tooling.
    Fake {
        /// Free-form description of what the token stands for.
        hint: Option<String>,
        /// The real location this token was placed next to, if any.
        next_to: Option<Location>,
    },
}

impl Position {
    /// A real position from its five source fields.
    #[must_use]
    pub fn from_source(
        file: impl Into<String>,
        line: usize,
        column: usize,
        offset: usize,
        length: usize,
    ) -> Self {
        Self::Real(Location::new(file, line, column, offset, length))
    }

    /// A synthetic position.
    ///
    /// `next_to` anchors the new token beside an existing one. Anchoring to a
    /// fake position reuses that position's own anchor, so a chain of
    /// synthetic tokens still points at real source whenever one exists.
    #[must_use]
    pub fn fake(hint: Option<&str>, next_to: Option<&Self>) -> Self {
        Self::Fake {
            hint: hint.map(str::to_owned),
            next_to: next_to.and_then(Self::anchor).cloned(),
        }
    }

    /// Returns true if this position was made up by tooling.
    #[must_use]
    pub const fn is_fake(&self) -> bool {
        matches!(self, Self::Fake { .. })
    }

    /// The source location, for real positions only.
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        match self {
            Self::Real(location) => Some(location),
            Self::Fake { .. } => None,
        }
    }

    /// The closest real location: our own, or the one a fake was placed next to.
    #[must_use]
    pub const fn anchor(&self) -> Option<&Location> {
        match self {
            Self::Real(location) => Some(location),
            Self::Fake { next_to, .. } => next_to.as_ref(),
        }
    }

    /// The hint of a fake position.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Real(_) => None,
            Self::Fake { hint, .. } => hint.as_deref(),
        }
    }
}

impl From<Location> for Position {
    fn from(location: Location) -> Self {
        Self::Real(location)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(location) => write!(f, "{location}"),
            Self::Fake { hint, next_to } => {
                write!(f, "<fake")?;
                if let Some(h) = hint {
                    write!(f, " {h}")?;
                }
                if let Some(anchor) = next_to {
                    write!(f, " near {anchor}")?;
                }
                write!(f, ">")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_range() {
        let loc = Location::new("index.html", 3, 9, 40, 5);
        assert_eq!(loc.end_offset(), 45);
        assert_eq!(loc.range(), 40..45);
    }

    #[test]
    fn test_location_range_saturates_at_usize_max() {
        let loc = Location::new("a.html", 1, 1, usize::MAX, 1);
        assert_eq!(loc.end_offset(), usize::MAX);
        assert!(loc.range().is_empty());
    }

    #[test]
    fn test_fake_anchored_to_fake_inherits_anchor() {
        let real = Position::from_source("a.html", 1, 1, 0, 4);
        let first = Position::fake(Some("first"), Some(&real));
        let second = Position::fake(Some("second"), Some(&first));
        assert_eq!(second.anchor(), real.location());
    }

    #[test]
    fn test_fake_anchored_to_unanchored_fake() {
        let floating = Position::fake(None, None);
        let chained = Position::fake(None, Some(&floating));
        assert!(chained.anchor().is_none());
    }

    #[test]
    fn test_display() {
        let real = Position::from_source("a.html", 2, 7, 15, 3);
        assert_eq!(real.to_string(), "a.html:2:7");
        let fake = Position::fake(Some("implied tbody"), Some(&real));
        assert_eq!(fake.to_string(), "<fake implied tbody near a.html:2:7>");
        assert_eq!(Position::fake(None, None).to_string(), "<fake>");
    }
}
