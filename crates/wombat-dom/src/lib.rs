//! Permissive HTML tree for the Wombat representation.
//!
//! This crate provides the two low-fidelity representations of a document:
//! - [`HtmlRaw`] - markup kept as an opaque string
//! - [`HtmlTree`] - a loose Element/Data tree, comparable to a minimal DOM
//!   where any tag may contain any children
//! - [`MarkupDocument`] - an external html5ever DOM, aliased rather than
//!   reimplemented
//!
//! # Design
//!
//! Unlike a browser DOM there are no node ids and no parent links: each node
//! owns its children outright and is never mutated after construction. Every
//! leaf string is a [`Wrap`], so highlighters can map any part of the tree
//! back to source text.
//!
//! Names are normalized on the way in. [`Tag::new`] and [`Attributes::push`]
//! lowercase ASCII letters, following
//! [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state),
//! while attribute values are stored verbatim: no character references are
//! decoded and no whitespace is collapsed.

/// Ordered, case-normalized attribute lists.
pub mod attributes;
/// Debug outline of a tree.
pub mod print;

use serde::Serialize;
use wombat_common::Wrap;
use wombat_common::warning::warn_once;

pub use attributes::{Attribute, Attributes};
pub use print::print_tree;

/// Markup kept as a string, for callers that need no structure at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct HtmlRaw(String);

impl HtmlRaw {
    /// Wrap raw markup.
    #[must_use]
    pub const fn new(markup: String) -> Self {
        Self(markup)
    }

    /// The markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the markup back.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for HtmlRaw {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

impl From<&str> for HtmlRaw {
    fn from(markup: &str) -> Self {
        Self(markup.to_owned())
    }
}

/// An element's tag name, lowercased on construction.
///
/// HTML tag names are ASCII case-insensitive, so `"DIV"` and `"div"` yield
/// the same stored tag. The position of the original spelling
/// is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tag(Wrap<String>);

impl Tag {
    /// Normalize `name` into a tag.
    #[must_use]
    pub fn new(name: Wrap<String>) -> Self {
        if name.is_empty() {
            warn_once("DOM", "element with empty tag name");
        }
        Self(name.map(|n| n.to_ascii_lowercase()))
    }

    /// The lowercased name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The name with its position.
    #[must_use]
    pub const fn name(&self) -> &Wrap<String> {
        &self.0
    }
}

/// A reference-counted DOM from the html5ever family.
///
/// Tools that already speak html5ever can hand their documents around under
/// this name; no conversion to or from [`HtmlTree`] is provided.
pub type MarkupDocument = markup5ever_rcdom::RcDom;

/// A node of the generic tree.
///
/// There is no schema: a [`HtmlTree::Element`] may hold any children, in any
/// order. Use the grammar-faithful AST when the content model matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HtmlTree {
    /// A tag with its attributes and children.
    Element(Element),
    /// A run of character data, kept verbatim.
    Data(Wrap<String>),
}

impl HtmlTree {
    /// Shorthand for `HtmlTree::Element(Element::new(..))`.
    #[must_use]
    pub fn element(tag: Wrap<String>, attrs: Attributes, children: Vec<Self>) -> Self {
        Self::Element(Element::new(tag, attrs, children))
    }

    /// Shorthand for `HtmlTree::Data(..)`.
    #[must_use]
    pub const fn data(text: Wrap<String>) -> Self {
        Self::Data(text)
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Data(_) => None,
        }
    }

    /// Get text if this node is character data.
    #[must_use]
    pub const fn as_data(&self) -> Option<&Wrap<String>> {
        match self {
            Self::Data(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

/// An element of the generic tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// The lowercased tag name.
    pub tag: Tag,
    /// Attributes in source order.
    pub attrs: Attributes,
    /// Child nodes in source order.
    pub children: Vec<HtmlTree>,
}

impl Element {
    /// Build an element, normalizing the tag name.
    #[must_use]
    pub fn new(tag: Wrap<String>, attrs: Attributes, children: Vec<HtmlTree>) -> Self {
        Self {
            tag: Tag::new(tag),
            attrs,
            children,
        }
    }

    /// The lowercased tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        self.tag.as_str()
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&Wrap<String>> {
        self.attrs.get("id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_lowercased() {
        let upper = Tag::new(Wrap::fake("DIV".to_string(), "test"));
        let lower = Tag::new(Wrap::fake("div".to_string(), "test"));
        assert_eq!(upper.as_str(), "div");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_tag_lowercasing_leaves_non_ascii_alone() {
        let tag = Tag::new(Wrap::fake("ÄRGER".to_string(), "test"));
        assert_eq!(tag.as_str(), "Ärger");
    }

    #[test]
    fn test_raw_round_trips() {
        let raw = HtmlRaw::from("<p>unparsed</p>");
        assert_eq!(raw.as_str(), "<p>unparsed</p>");
        assert_eq!(raw.into_inner(), "<p>unparsed</p>");
    }
}
