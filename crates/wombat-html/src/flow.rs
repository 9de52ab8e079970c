use core::slice;

use serde::Serialize;
use wombat_dom::Attributes;

use crate::block::Block;
use crate::text::Text;

/// `<!ENTITY % flow "(%text; | %block;)*">`
///
/// The most general mixed content: any sequence of blocks and text, as held
/// by list items, `<del>`/`<ins>` and `<iframe>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Flow(pub Vec<FlowContent>);

impl Flow {
    /// An empty flow.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The items in source order.
    #[must_use]
    pub fn items(&self) -> &[FlowContent] {
        &self.0
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the flow holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in source order.
    pub fn iter(&self) -> slice::Iter<'_, FlowContent> {
        self.0.iter()
    }
}

impl FromIterator<FlowContent> for Flow {
    fn from_iter<I: IntoIterator<Item = FlowContent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Flow {
    type Item = &'a FlowContent;
    type IntoIter = slice::Iter<'a, FlowContent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One item of a [`Flow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FlowContent {
    /// Block-level content.
    Block(Block),
    /// Text-level content.
    Text(Text),
}

impl From<Block> for FlowContent {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<Text> for FlowContent {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// `<!ELEMENT LI - O %flow;>`
///
/// An item of `<ul>`, `<ol>`, `<menu>` or `<dir>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Attributes in source order.
    pub attrs: Attributes,
    /// The item's content.
    pub flow: Flow,
}

impl ListItem {
    /// Create a list item.
    #[must_use]
    pub const fn new(attrs: Attributes, flow: Flow) -> Self {
        Self { attrs, flow }
    }
}
