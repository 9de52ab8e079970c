//! Content models that are not modeled yet.
//!
//! Each type here stands in for a whole category of children whose DTD
//! entry has not been translated. They are unit structs rather than missing
//! fields so that every consumer sees the gap, and so that filling one in
//! later is a change to a single type.
//!
//! A placeholder carries no information. Traversals should treat it as a
//! leaf with nothing inside.

use serde::Serialize;

/// Describes which content model a placeholder stands in for.
pub trait Unmodeled {
    /// The HTML elements whose content would live here, e.g. `"form"`.
    const CONTENT_OF: &'static str;
}

/// Contents of `<form>`: `INPUT`, `SELECT`, `TEXTAREA` mixed with body content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct FormContent;

impl Unmodeled for FormContent {
    const CONTENT_OF: &'static str = "form";
}

/// Rows and row groups of `<table>`: `THEAD`, `TFOOT`, `TBODY`, `TR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TableContent;

impl Unmodeled for TableContent {
    const CONTENT_OF: &'static str = "table";
}

/// Column groups of `<table>`: `COLGROUP`, `COL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ColGroupContent;

impl Unmodeled for ColGroupContent {
    const CONTENT_OF: &'static str = "colgroup";
}

/// Items of `<dl>`: `DT` and `DD` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DlContent;

impl Unmodeled for DlContent {
    const CONTENT_OF: &'static str = "dl";
}

/// Regions of `<map>`: `AREA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Area;

impl Unmodeled for Area {
    const CONTENT_OF: &'static str = "map";
}

/// Parameters of `<applet>` and `<object>`: `PARAM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Param;

impl Unmodeled for Param {
    const CONTENT_OF: &'static str = "applet, object";
}
