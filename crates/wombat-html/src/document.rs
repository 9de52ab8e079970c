use serde::Serialize;
use wombat_dom::Attributes;

use crate::body::BodyContent;
use crate::frameset::FramesetElement;
use crate::head::HeadContent;

/// `<!ELEMENT HTML O O (%html.content;)>`
///
/// The root of a grammar-faithful document: a head, then either a body or,
/// in a frameset document, a frameset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Html {
    /// Attributes of `<html>`.
    pub attrs: Attributes,
    /// The `<head>`.
    pub head: Head,
    /// The `<body>` or `<frameset>`.
    pub body: BodyOrFrameset,
}

/// `<!ELEMENT HEAD O O (%head.content;)>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Head {
    /// Attributes of `<head>`.
    pub attrs: Attributes,
    /// Head elements in source order.
    pub content: Vec<HeadContent>,
}

/// `<!ELEMENT BODY O O %body.content>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Body {
    /// Attributes of `<body>`.
    pub attrs: Attributes,
    /// Body content in source order.
    pub content: Vec<BodyContent>,
}

/// What follows the head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BodyOrFrameset {
    /// A regular document.
    Body(Body),
    /// A frameset document.
    Frameset(FramesetElement),
}

impl BodyOrFrameset {
    /// The tag name, `"body"` or `"frameset"`.
    #[must_use]
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Self::Body(_) => "body",
            Self::Frameset(_) => "frameset",
        }
    }
}
