use serde::Serialize;
use strum_macros::IntoStaticStr;
use wombat_common::Wrap;
use wombat_dom::Attributes;

use crate::body::BodyContent;
use crate::flow::Flow;
use crate::heading::Heading;
use crate::placeholder::Param;

/// Text-level content: what may appear inside a paragraph.
///
/// `<!ENTITY % text "#PCDATA | %font; | %phrase; | %special; | %form;">`
/// (HTML 3.2), extended with the HTML 4 and vendor elements of the era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Text {
    /// Character data, verbatim: no references decoded, no whitespace folded.
    Plain(Wrap<String>),
    /// Font-style elements such as `<b>` or `<tt>`.
    Physical(PhysicalStyle),
    /// Phrase elements such as `<em>` or `<code>`.
    Semantic(SemanticStyle),
    /// `<a>`; may also wrap a heading.
    Anchor(Attributes, Vec<AnchorContent>),
    /// `<br>`
    Br(Attributes),
    /// `<img>`
    Img(Attributes),
    /// `<iframe>`, whose content is the fallback for user agents without frames.
    Iframe(Attributes, Flow),
    /// `<noscript>`
    Noscript(Attributes, Vec<BodyContent>),
    /// `<embed>`
    Embed(Attributes),
    /// `<applet>`: parameters, then alternate text.
    Applet(Attributes, Vec<Param>, Vec<Text>),
    /// `<object>`: parameters, then alternate text.
    Object(Attributes, Vec<Param>, Vec<Text>),
    /// `<spacer>` (Netscape)
    Spacer(Attributes),
    /// `<wbr>` (Netscape)
    Wbr(Attributes),
    /// `<ilayer>` (Netscape)
    Ilayer(Attributes, Vec<BodyContent>),
}

impl Text {
    /// The tag name, or `None` for character data.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'static str> {
        let name = match self {
            Self::Plain(_) => return None,
            Self::Physical(style) => style.tag_name(),
            Self::Semantic(style) => style.tag_name(),
            Self::Anchor(..) => "a",
            Self::Br(_) => "br",
            Self::Img(_) => "img",
            Self::Iframe(..) => "iframe",
            Self::Noscript(..) => "noscript",
            Self::Embed(_) => "embed",
            Self::Applet(..) => "applet",
            Self::Object(..) => "object",
            Self::Spacer(_) => "spacer",
            Self::Wbr(_) => "wbr",
            Self::Ilayer(..) => "ilayer",
        };
        Some(name)
    }

    /// Shorthand for `Text::Plain(text)`.
    #[must_use]
    pub const fn plain(text: Wrap<String>) -> Self {
        Self::Plain(text)
    }
}

/// Font-style ("physical") elements.
///
/// `<!ENTITY % font "TT | I | B | U | STRIKE | BIG | SMALL | SUB | SUP">`
///
/// They say how text looks, not what it means. Each wraps more text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum PhysicalStyle {
    /// `<b>`
    B(Attributes, Vec<Text>),
    /// `<i>`
    I(Attributes, Vec<Text>),
    /// `<tt>`
    Tt(Attributes, Vec<Text>),
    /// `<big>`
    Big(Attributes, Vec<Text>),
    /// `<small>`
    Small(Attributes, Vec<Text>),
    /// `<blink>`
    Blink(Attributes, Vec<Text>),
    /// `<s>`
    S(Attributes, Vec<Text>),
    /// `<u>`
    U(Attributes, Vec<Text>),
    /// `<font>`
    Font(Attributes, Vec<Text>),
    /// `<sub>`
    Sub(Attributes, Vec<Text>),
    /// `<sup>`
    Sup(Attributes, Vec<Text>),
    /// `<span>`
    Span(Attributes, Vec<Text>),
    /// `<bdo>`
    Bdo(Attributes, Vec<Text>),
    /// `<strike>`
    Strike(Attributes, Vec<Text>),
}

impl PhysicalStyle {
    /// The tag name, e.g. `"tt"`.
    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        self.into()
    }

    /// The attributes and wrapped text, whichever style this is.
    #[must_use]
    pub fn parts(&self) -> (&Attributes, &[Text]) {
        match self {
            Self::B(attrs, content)
            | Self::I(attrs, content)
            | Self::Tt(attrs, content)
            | Self::Big(attrs, content)
            | Self::Small(attrs, content)
            | Self::Blink(attrs, content)
            | Self::S(attrs, content)
            | Self::U(attrs, content)
            | Self::Font(attrs, content)
            | Self::Sub(attrs, content)
            | Self::Sup(attrs, content)
            | Self::Span(attrs, content)
            | Self::Bdo(attrs, content)
            | Self::Strike(attrs, content) => (attrs, content),
        }
    }
}

/// Phrase ("semantic" or content-based) elements.
///
/// `<!ENTITY % phrase "EM | STRONG | DFN | CODE | SAMP | KBD | VAR | CITE">`
///
/// They say what text means and leave its look to the user agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SemanticStyle {
    /// `<em>`
    Em(Attributes, Vec<Text>),
    /// `<strong>`
    Strong(Attributes, Vec<Text>),
    /// `<abbr>`
    Abbr(Attributes, Vec<Text>),
    /// `<acronym>`
    Acronym(Attributes, Vec<Text>),
    /// `<cite>`
    Cite(Attributes, Vec<Text>),
    /// `<code>`
    Code(Attributes, Vec<Text>),
    /// `<dfn>`
    Dfn(Attributes, Vec<Text>),
    /// `<kbd>`
    Kbd(Attributes, Vec<Text>),
    /// `<q>`
    Q(Attributes, Vec<Text>),
    /// `<var>`
    Var(Attributes, Vec<Text>),
}

impl SemanticStyle {
    /// The tag name, e.g. `"kbd"`.
    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        self.into()
    }

    /// The attributes and wrapped text, whichever phrase this is.
    #[must_use]
    pub fn parts(&self) -> (&Attributes, &[Text]) {
        match self {
            Self::Em(attrs, content)
            | Self::Strong(attrs, content)
            | Self::Abbr(attrs, content)
            | Self::Acronym(attrs, content)
            | Self::Cite(attrs, content)
            | Self::Code(attrs, content)
            | Self::Dfn(attrs, content)
            | Self::Kbd(attrs, content)
            | Self::Q(attrs, content)
            | Self::Var(attrs, content) => (attrs, content),
        }
    }
}

/// What an `<a>` may hold.
///
/// HTML 3.2 lets an anchor wrap a whole heading as well as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnchorContent {
    /// `<a><h2>..</h2></a>`
    Heading(Heading),
    /// Any text-level content.
    Text(Text),
}
