use serde::Serialize;
use wombat_dom::Attributes;

use crate::block::Block;
use crate::flow::Flow;
use crate::heading::Heading;
use crate::placeholder::Area;
use crate::text::Text;

/// `<!ENTITY % body.content "(%heading; | %text; | %block; | ADDRESS)*">`
///
/// What `<body>` and the block containers (`<div>`, `<center>`,
/// `<blockquote>`) may hold, together with the HTML 4 edits `<del>`/`<ins>`,
/// client-side image maps and the Netscape/Explorer extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BodyContent {
    /// `<hr>`
    Hr(Attributes),
    /// `<h1>` .. `<h6>`
    Heading(Heading),
    /// Block-level content.
    Block(Block),
    /// Text-level content.
    Text(Text),
    /// `<del>`: removed content, which may be block or text.
    Del(Attributes, Flow),
    /// `<ins>`: inserted content, which may be block or text.
    Ins(Attributes, Flow),
    /// `<address>`
    Address(Attributes, Vec<AddressContent>),
    /// `<map>`; its areas are not modeled yet.
    Map(Attributes, Vec<Area>),
    /// `<marquee>` (Explorer)
    Marquee(Attributes, Vec<Text>),
    /// `<layer>` (Netscape)
    Layer(Attributes, Vec<BodyContent>),
    /// `<bgsound>` (Explorer)
    Bgsound(Attributes),
}

impl BodyContent {
    /// The tag name, or `None` for character data.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'static str> {
        match self {
            Self::Hr(_) => Some("hr"),
            Self::Heading(heading) => Some(heading.tag_name()),
            Self::Block(block) => Some(block.tag_name()),
            Self::Text(text) => text.tag_name(),
            Self::Del(..) => Some("del"),
            Self::Ins(..) => Some("ins"),
            Self::Address(..) => Some("address"),
            Self::Map(..) => Some("map"),
            Self::Marquee(..) => Some("marquee"),
            Self::Layer(..) => Some("layer"),
            Self::Bgsound(_) => Some("bgsound"),
        }
    }
}

impl From<Block> for BodyContent {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<Text> for BodyContent {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Heading> for BodyContent {
    fn from(heading: Heading) -> Self {
        Self::Heading(heading)
    }
}

/// `<!ELEMENT ADDRESS - - ((%text;) | P)*>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AddressContent {
    /// A paragraph inside the address.
    P(Attributes, Vec<Text>),
    /// Text-level content.
    Text(Text),
}
