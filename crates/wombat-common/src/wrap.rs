use core::hash::{Hash, Hasher};
use core::ops::Deref;

use serde::Serialize;

use crate::position::Position;

/// A leaf value together with the position it was read from.
///
/// Every string a tree stores (tag names, attribute names and values, text
/// runs) is wrapped, so a consumer can always point back at the source. The
/// fields are private: there is no way to take the value out and leave the
/// position behind except by asking for both with [`Wrap::into_parts`].
///
/// Equality and hashing look at the value only.
#[derive(Debug, Clone, Serialize)]
pub struct Wrap<T> {
    value: T,
    pos: Position,
}

impl<T> Wrap<T> {
    /// Pair a value with its position.
    #[must_use]
    pub const fn new(value: T, pos: Position) -> Self {
        Self { value, pos }
    }

    /// Pair a value with a synthetic position carrying `hint`.
    #[must_use]
    pub fn fake(value: T, hint: &str) -> Self {
        Self::new(value, Position::fake(Some(hint), None))
    }

    /// The wrapped value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Where the value came from.
    #[must_use]
    pub const fn pos(&self) -> &Position {
        &self.pos
    }

    /// Borrow the value, cloning the position.
    #[must_use]
    pub fn borrowed(&self) -> Wrap<&T> {
        Wrap::new(&self.value, self.pos.clone())
    }

    /// Transform the value, keeping the position.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Wrap<U> {
        Wrap::new(f(self.value), self.pos)
    }

    /// Split into value and position.
    #[must_use]
    pub fn into_parts(self) -> (T, Position) {
        (self.value, self.pos)
    }
}

impl Wrap<String> {
    /// The wrapped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> Deref for Wrap<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for Wrap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Wrap<T> {}

impl<T: Hash> Hash for Wrap<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_position() {
        let real = Wrap::new("href", Position::from_source("a.html", 1, 4, 3, 4));
        let fake = Wrap::fake("href", "rewritten");
        assert_eq!(real, fake);
        assert_ne!(real, Wrap::fake("src", "rewritten"));
    }

    #[test]
    fn test_map_keeps_position() {
        let w = Wrap::new("DIV".to_string(), Position::from_source("a.html", 1, 2, 1, 3));
        let lowered = w.map(|s| s.to_ascii_lowercase());
        assert_eq!(lowered.as_str(), "div");
        assert_eq!(lowered.pos().location().map(|l| l.offset()), Some(1));
    }
}
