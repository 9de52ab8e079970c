use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};
use wombat_common::Error;
use wombat_dom::Attributes;

use crate::text::Text;

/// The rank of a heading element.
///
/// [HTML 4.01 § 7.5.5 Headings](https://www.w3.org/TR/html401/struct/global.html#h-7.5.5)
///
/// "There are six levels of headings in HTML with H1 as the most important
/// and H6 as the least."
///
/// Displays and parses as the tag name (`"h1"` .. `"h6"`), ignoring case on
/// parse.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HeadingLevel {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
}

impl HeadingLevel {
    /// The level as a number from 1 to 6.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(rank: u8) -> Result<Self, Error> {
        match rank {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            5 => Ok(Self::H5),
            6 => Ok(Self::H6),
            other => Err(Error::NotAHeadingLevel(other)),
        }
    }
}

/// `<!ELEMENT (%heading;) - - (%inline;)*>`
///
/// A heading holds text-level content only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Which of `h1` .. `h6`.
    pub level: HeadingLevel,
    /// Attributes in source order.
    pub attrs: Attributes,
    /// The heading text.
    pub content: Vec<Text>,
}

impl Heading {
    /// The tag name, `"h1"` .. `"h6"`.
    #[must_use]
    pub fn tag_name(&self) -> &'static str {
        self.level.into()
    }
}
