use serde::Serialize;
use strum_macros::IntoStaticStr;
use wombat_common::Wrap;
use wombat_dom::Attributes;

/// `<!ENTITY % head.content "TITLE & ISINDEX? & BASE? & STYLE? & SCRIPT* & META* & LINK*">`
///
/// Plus `NEXTID` from HTML 2.0. `<script>` is not part of this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum HeadContent {
    /// `<title>`: plain text, no markup.
    Title(Attributes, Wrap<String>),
    /// `<style>`: the style sheet as unparsed text.
    Style(Attributes, Wrap<String>),
    /// `<meta>`
    Meta(Attributes),
    /// `<link>`
    Link(Attributes),
    /// `<base>`
    Base(Attributes),
    /// `<isindex>` in the head.
    Isindex(Attributes),
    /// `<nextid>`
    Nextid(Attributes),
}

impl HeadContent {
    /// The tag name, e.g. `"meta"`.
    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        self.into()
    }

    /// The element's attributes.
    #[must_use]
    pub const fn attrs(&self) -> &Attributes {
        match self {
            Self::Title(attrs, _)
            | Self::Style(attrs, _)
            | Self::Meta(attrs)
            | Self::Link(attrs)
            | Self::Base(attrs)
            | Self::Isindex(attrs)
            | Self::Nextid(attrs) => attrs,
        }
    }
}
