//! Grammar-faithful HTML AST for the Wombat representation.
//!
//! # Scope
//!
//! This crate mirrors the content models of the historical HTML DTDs
//! ([HTML 3.2](https://www.w3.org/TR/2018/SPSD-html32-20180315/),
//! [HTML 4.01](https://www.w3.org/TR/html401/sgml/dtd.html)) plus the
//! widely deployed vendor extensions of the time, as a family of mutually
//! recursive enums:
//! - **Document** ([`Html`], [`Head`], [`Body`], [`BodyOrFrameset`])
//! - **Head content** ([`HeadContent`])
//! - **Body content** ([`BodyContent`], [`AddressContent`])
//! - **Block content** ([`Block`], [`Table`], [`Caption`])
//! - **Flow** ([`Flow`], [`FlowContent`], [`ListItem`])
//! - **Text content** ([`Text`], [`PhysicalStyle`], [`SemanticStyle`], [`AnchorContent`])
//! - **Headings** ([`Heading`], [`HeadingLevel`])
//! - **Framesets** ([`FramesetElement`], [`Frameset`])
//!
//! Each constructor's payload is exactly what the DTD lets that element
//! contain. A `<table>` holding free text, or a `<ul>` without an `<li>`,
//! cannot be built. There is no runtime validation because there is nothing
//! left to validate.
//!
//! # Not Yet Modeled
//!
//! These content models are explicit [`placeholder`] types. Consumers must
//! match them, and can only learn that nothing more is known:
//! - Form internals
//! - Table rows, sections and column groups
//! - Definition list terms and definitions
//! - Image map areas
//! - Applet and object parameters

/// Block-level content.
pub mod block;
/// Body content.
pub mod body;
/// The document, its head and body.
pub mod document;
/// Mixed block and text content, and list items.
pub mod flow;
/// Legacy framesets.
pub mod frameset;
/// Head content.
pub mod head;
/// `<h1>` through `<h6>`.
pub mod heading;
pub mod placeholder;
/// Text-level content.
pub mod text;

pub use block::{Block, Caption, Table};
pub use body::{AddressContent, BodyContent};
pub use document::{Body, BodyOrFrameset, Head, Html};
pub use flow::{Flow, FlowContent, ListItem};
pub use frameset::{Frameset, FramesetElement};
pub use head::HeadContent;
pub use heading::{Heading, HeadingLevel};
pub use placeholder::{
    Area, ColGroupContent, DlContent, FormContent, Param, TableContent, Unmodeled,
};
pub use text::{AnchorContent, PhysicalStyle, SemanticStyle, Text};

pub use wombat_common::{NonEmpty, Position, Wrap};
pub use wombat_dom::{Attribute, Attributes};
