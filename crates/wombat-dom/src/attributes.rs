use core::hash::{Hash, Hasher};
use core::slice;

use serde::Serialize;
use wombat_common::Wrap;
use wombat_common::warning::warn_once;

/// A single `name="value"` pair.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
///
/// The name is lowercased, the value is kept exactly as written.
///
/// A valueless attribute compares equal to its long form: `hidden` and
/// `hidden="hidden"` are the same attribute.
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    name: Wrap<String>,
    value: Wrap<String>,
    #[serde(skip)]
    valueless: bool,
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for Attribute {}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash(state);
    }
}

impl Attribute {
    /// Create an attribute, lowercasing its name.
    #[must_use]
    pub fn new(name: Wrap<String>, value: Wrap<String>) -> Self {
        Self {
            name: name.map(|n| n.to_ascii_lowercase()),
            value,
            valueless: false,
        }
    }

    /// A valueless attribute such as `multiple`.
    ///
    /// The name doubles as the value, mirroring the long form
    /// `multiple="multiple"`. Both halves share the name's position.
    #[must_use]
    pub fn boolean(name: Wrap<String>) -> Self {
        let name = name.map(|n| n.to_ascii_lowercase());
        Self {
            value: name.clone(),
            name,
            valueless: true,
        }
    }

    /// Returns true if the attribute was written without a value.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        self.valueless
    }

    /// The lowercased name with its position.
    #[must_use]
    pub const fn name(&self) -> &Wrap<String> {
        &self.name
    }

    /// The verbatim value with its position.
    #[must_use]
    pub const fn value(&self) -> &Wrap<String> {
        &self.value
    }
}

/// The attributes of an element, in source order.
///
/// Order is kept because it is observable when the tree is rendered again.
/// Names are unique after normalization:
/// "if there is already an attribute on the token with the exact same name,
/// then this is a duplicate-attribute parse error and the new attribute must
/// be removed from the token." ([§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state))
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// An empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from `(name, value)` pairs, keeping the first of any duplicates.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Wrap<String>, Wrap<String>)>) -> Self {
        pairs
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value))
            .collect()
    }

    /// Append an attribute unless one with the same name is already present.
    pub fn push(&mut self, attribute: Attribute) {
        if self.contains(attribute.name()) {
            warn_once(
                "DOM",
                &format!("duplicate attribute '{}' dropped", attribute.name().as_str()),
            );
            return;
        }
        self.0.push(attribute);
    }

    /// Look up a value by name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Wrap<String>> {
        self.0
            .iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
            .map(Attribute::value)
    }

    /// Returns true if an attribute with this name (ignoring ASCII case) exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in source order.
    pub fn iter(&self) -> slice::Iter<'_, Attribute> {
        self.0.iter()
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for attribute in iter {
            attrs.push(attribute);
        }
        attrs
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
