use serde::Serialize;
use wombat_dom::Attributes;

use crate::body::BodyContent;

/// `<!ELEMENT FRAMESET - - ((FRAMESET|FRAME)+ & NOFRAMES?)>`
///
/// Replaces `<body>` in a frameset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FramesetElement {
    /// Attributes in source order.
    pub attrs: Attributes,
    /// Frames, nested framesets and the fallback, in source order.
    pub content: Vec<Frameset>,
}

/// One child of a `<frameset>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Frameset {
    /// `<frame>`
    Frame(Attributes),
    /// `<noframes>`: what user agents without frame support render instead.
    Noframes(Attributes, Vec<BodyContent>),
    /// A nested `<frameset>`.
    Frameset(FramesetElement),
}

impl Frameset {
    /// The tag name, e.g. `"frame"`.
    #[must_use]
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Self::Frame(_) => "frame",
            Self::Noframes(..) => "noframes",
            Self::Frameset(_) => "frameset",
        }
    }
}
