use core::iter::{self, Chain, Once};
use core::slice;
use std::vec;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// One or more items: a head plus a possibly empty tail.
///
/// Content models such as `<ul>` (`(LI)+`) require at least one child. Storing
/// the first child outside the tail makes an empty list unrepresentable, so
/// no consumer has to handle it and no constructor has to check for it. A
/// `Vec` from unchecked input goes through [`NonEmpty::try_from`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

// `is_empty` would always be false.
#[allow(clippy::len_without_is_empty)]
impl<T> NonEmpty<T> {
    /// A list holding exactly `head`.
    #[must_use]
    pub const fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// A list of `head` followed by `tail`.
    #[must_use]
    pub const fn with_tail(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Build from a `Vec`, naming what it was meant for in the error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyList`] if `items` is empty.
    pub fn from_vec_in(context: &'static str, items: Vec<T>) -> Result<Self> {
        let mut items = items.into_iter();
        match items.next() {
            Some(head) => Ok(Self::with_tail(head, items.collect())),
            None => Err(Error::EmptyList { context }),
        }
    }

    /// The first item. Always present.
    #[must_use]
    pub const fn first(&self) -> &T {
        &self.head
    }

    /// Everything after the first item.
    #[must_use]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last item. Always present.
    #[must_use]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of items, at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Append an item.
    pub fn push(&mut self, item: T) {
        self.tail.push(item);
    }

    /// Iterate over all items in order.
    pub fn iter(&self) -> Chain<Once<&T>, slice::Iter<'_, T>> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    /// Transform every item, preserving order and non-emptiness.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> NonEmpty<U> {
        NonEmpty {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    /// Flatten into a `Vec`, which is never empty.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.tail.len() + 1);
        items.push(self.head);
        items.extend(self.tail);
        items
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::from_vec_in("list", items)
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(list: NonEmpty<T>) -> Self {
        list.into_vec()
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = Chain<Once<T>, vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = Chain<Once<&'a T>, slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for NonEmpty<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
