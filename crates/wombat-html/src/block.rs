use serde::Serialize;
use strum_macros::IntoStaticStr;
use wombat_common::{NonEmpty, Wrap};
use wombat_dom::Attributes;

use crate::body::BodyContent;
use crate::flow::ListItem;
use crate::placeholder::{ColGroupContent, DlContent, FormContent, TableContent};
use crate::text::Text;

/// Block-level elements.
///
/// `<!ENTITY % block "P | %list; | PRE | DL | DIV | CENTER | BLOCKQUOTE |
/// FORM | ISINDEX | HR | TABLE">` (HTML 3.2), plus `LISTING`/`XMP` from
/// HTML 2.0 and the Netscape `MULTICOL`, `NOBR` and `BASEFONT`.
///
/// Lists that the DTD declares as `(LI)+` take a [`NonEmpty`], so an empty
/// `<ul>` is a type error rather than a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Block {
    /// `<blockquote>`
    Blockquote(Attributes, Vec<BodyContent>),
    /// `<center>`
    Center(Attributes, Vec<BodyContent>),
    /// `<div>`
    Div(Attributes, Vec<BodyContent>),
    /// `<form>`; its controls are not modeled yet.
    Form(Attributes, Vec<FormContent>),
    /// `<table>`
    Table(Table),
    /// `<pre>`
    Pre(Attributes, Vec<Text>),
    /// `<listing>`: literal text, markup inside is not recognized.
    Listing(Attributes, Wrap<String>),
    /// `<xmp>`: literal text, markup inside is not recognized.
    Xmp(Attributes, Wrap<String>),
    /// `<menu>`
    Menu(Attributes, NonEmpty<ListItem>),
    /// `<dir>`
    Dir(Attributes, NonEmpty<ListItem>),
    /// `<multicol>` (Netscape)
    Multicol(Attributes, Vec<BodyContent>),
    /// `<dl>`; its terms and definitions are not modeled yet.
    Dl(Attributes, NonEmpty<DlContent>),
    /// `<ol>`
    Ol(Attributes, NonEmpty<ListItem>),
    /// `<ul>`
    Ul(Attributes, NonEmpty<ListItem>),
    /// `<p>`
    P(Attributes, Vec<Text>),
    /// `<basefont>`
    Basefont(Attributes),
    /// `<isindex>` in the body.
    Isindex(Attributes),
    /// `<nobr>` (Netscape)
    Nobr(Attributes, Vec<Text>),
}

impl Block {
    /// The tag name, e.g. `"blockquote"`.
    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        self.into()
    }

    /// The element's attributes.
    #[must_use]
    pub const fn attrs(&self) -> &Attributes {
        match self {
            Self::Table(table) => &table.attrs,
            Self::Blockquote(attrs, _)
            | Self::Center(attrs, _)
            | Self::Div(attrs, _)
            | Self::Multicol(attrs, _)
            | Self::Form(attrs, _)
            | Self::Pre(attrs, _)
            | Self::P(attrs, _)
            | Self::Nobr(attrs, _)
            | Self::Listing(attrs, _)
            | Self::Xmp(attrs, _)
            | Self::Menu(attrs, _)
            | Self::Dir(attrs, _)
            | Self::Ol(attrs, _)
            | Self::Ul(attrs, _)
            | Self::Dl(attrs, _)
            | Self::Basefont(attrs)
            | Self::Isindex(attrs) => attrs,
        }
    }
}

/// `<!ELEMENT TABLE - - (CAPTION?, (COL*|COLGROUP*), THEAD?, TFOOT?, TBODY+)>`
///
/// Only the caption is modeled. Column groups and row content are kept as
/// counted placeholders so the shape of the table is still visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Attributes in source order.
    pub attrs: Attributes,
    /// `<caption>`, if any.
    pub caption: Option<Caption>,
    /// `<colgroup>`/`<col>` entries.
    pub colgroups: Vec<ColGroupContent>,
    /// `<thead>`/`<tfoot>`/`<tbody>`/`<tr>` entries.
    pub content: Vec<TableContent>,
}

/// `<!ELEMENT CAPTION - - (%inline;)*>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caption {
    /// Attributes in source order.
    pub attrs: Attributes,
    /// The caption text.
    pub content: Vec<Text>,
}
