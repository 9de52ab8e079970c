//! Integration tests for the generic Element/Data tree.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use wombat_common::{Position, Wrap, warning::has_warned};
use wombat_dom::{Attribute, Attributes, Element, HtmlRaw, HtmlTree, MarkupDocument, Tag};

/// Helper to wrap a string at a real position inside `index.html`
fn at(text: &str, offset: usize) -> Wrap<String> {
    Wrap::new(
        text.to_string(),
        Position::from_source("index.html", 1, offset + 1, offset, text.len()),
    )
}

/// Helper to wrap a string at a synthetic position
fn fake(text: &str) -> Wrap<String> {
    Wrap::fake(text.to_string(), "test")
}

/// Helper to read a tree back as (tag, [(name, value)], children) for elements
fn element_parts(tree: &HtmlTree) -> (&str, Vec<(&str, &str)>, &[HtmlTree]) {
    let element = tree.as_element().expect("expected an element");
    let attrs = element
        .attrs
        .iter()
        .map(|a| (a.name().as_str(), a.value().as_str()))
        .collect();
    (element.tag_name(), attrs, &element.children)
}

/// Collect every wrapped leaf of a tree, depth-first
fn leaves<'a>(tree: &'a HtmlTree, out: &mut Vec<&'a Wrap<String>>) {
    match tree {
        HtmlTree::Data(text) => out.push(text),
        HtmlTree::Element(element) => {
            out.push(element.tag.name());
            for attr in &element.attrs {
                out.push(attr.name());
                out.push(attr.value());
            }
            for child in &element.children {
                leaves(child, out);
            }
        }
    }
}

fn assert_send_sync<T: Send + Sync>() {}

// ========== construction ==========

#[test]
fn test_paragraph_with_class() {
    // <p class="a">hi</p>
    let tree = HtmlTree::element(
        at("p", 1),
        Attributes::from_pairs([(at("class", 3), at("a", 10))]),
        vec![HtmlTree::data(at("hi", 13))],
    );

    let (tag, attrs, children) = element_parts(&tree);
    assert_eq!(tag, "p");
    assert_eq!(attrs, vec![("class", "a")]);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].as_data().map(|d| d.as_str()), Some("hi"));

    // Structural equality ignores positions.
    let synthetic = HtmlTree::element(
        fake("p"),
        Attributes::from_pairs([(fake("class"), fake("a"))]),
        vec![HtmlTree::data(fake("hi"))],
    );
    assert_eq!(tree, synthetic);
}

#[test]
fn test_leaf_positions_survive_construction() {
    let tree = HtmlTree::element(
        at("P", 1),
        Attributes::from_pairs([(at("CLASS", 3), at("a", 10))]),
        vec![HtmlTree::data(at("hi", 13))],
    );
    let mut found = Vec::new();
    leaves(&tree, &mut found);

    let offsets: Vec<_> = found
        .iter()
        .map(|leaf| leaf.pos().location().map(wombat_common::Location::offset))
        .collect();
    assert_eq!(offsets, vec![Some(1), Some(3), Some(10), Some(13)]);
}

#[test]
fn test_tag_and_attribute_case_normalization() {
    let upper = Element::new(
        fake("DIV"),
        Attributes::from_pairs([(fake("ID"), fake("Main"))]),
        vec![],
    );
    let lower = Element::new(
        fake("div"),
        Attributes::from_pairs([(fake("id"), fake("Main"))]),
        vec![],
    );
    assert_eq!(upper.tag, lower.tag);
    assert_eq!(upper.tag_name(), "div");
    assert_eq!(upper.attrs, lower.attrs);
    // Values keep their case.
    assert_eq!(upper.id().map(|v| v.as_str()), Some("Main"));
}

#[test]
fn test_attribute_order_is_preserved() {
    let attrs = Attributes::from_pairs([(fake("a"), fake("1")), (fake("b"), fake("2"))]);
    let pairs: Vec<_> = attrs
        .iter()
        .map(|a| (a.name().as_str(), a.value().as_str()))
        .collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
}

#[test]
fn test_duplicate_attribute_keeps_first() {
    let mut attrs = Attributes::new();
    attrs.push(Attribute::new(fake("title"), fake("first")));
    attrs.push(Attribute::new(fake("TITLE"), fake("second")));
    attrs.push(Attribute::new(fake("lang"), fake("en")));

    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("Title").map(|v| v.as_str()), Some("first"));
    assert!(attrs.contains("LANG"));
}

#[test]
fn test_boolean_attribute() {
    // <select MULTIPLE>
    let tree = HtmlTree::element(
        at("select", 1),
        [Attribute::boolean(at("MULTIPLE", 8))].into_iter().collect(),
        vec![],
    );
    let (_, attrs, _) = element_parts(&tree);
    assert_eq!(attrs, vec![("multiple", "multiple")]);
}

#[test]
fn test_empty_tag_name_warns() {
    let tag = Tag::new(at("", 3));
    assert_eq!(tag.as_str(), "");
    assert!(tag.name().pos().location().is_some());
    assert!(has_warned("DOM", "element with empty tag name"));
}

#[test]
fn test_raw_from_owned_string() {
    let markup = String::from("<P>kept <b>as is</p>");
    let raw = HtmlRaw::from(markup.clone());
    assert_eq!(raw.as_str(), markup);
    assert_eq!(raw.into_inner(), markup);
}

#[test]
fn test_markup_document_alias_starts_empty() {
    let dom = MarkupDocument::default();
    assert!(dom.document.children.borrow().is_empty());
}

#[test]
fn test_any_nesting_is_allowed() {
    // A table directly holding text is fine in the generic tree.
    let tree = HtmlTree::element(
        fake("table"),
        Attributes::new(),
        vec![
            HtmlTree::data(fake("stray")),
            HtmlTree::element(fake("table"), Attributes::new(), vec![]),
        ],
    );
    let (_, _, children) = element_parts(&tree);
    assert_eq!(children.len(), 2);
}

#[test]
fn test_trees_are_send_and_sync() {
    assert_send_sync::<HtmlTree>();
    assert_send_sync::<HtmlRaw>();
    assert_send_sync::<Tag>();
}

// ========== serialization ==========

#[test]
fn test_serialized_shape() {
    let tree = HtmlTree::element(
        at("p", 1),
        Attributes::from_pairs([(at("class", 3), at("a", 10))]),
        vec![HtmlTree::data(fake("hi"))],
    );
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["Element"]["tag"]["value"], "p");
    assert_eq!(json["Element"]["tag"]["pos"]["Real"]["offset"], 1);
    assert_eq!(json["Element"]["attrs"][0]["name"]["value"], "class");
    assert_eq!(json["Element"]["attrs"][0]["value"]["value"], "a");
    assert_eq!(json["Element"]["children"][0]["Data"]["value"], "hi");
    assert_eq!(
        json["Element"]["children"][0]["Data"]["pos"]["Fake"]["hint"],
        "test"
    );
}

// ========== properties ==========

/// A random tree with a mix of real and fake positions
#[derive(Clone, Debug)]
struct ArbTree(HtmlTree);

fn arbitrary_pos(g: &mut Gen) -> Position {
    if bool::arbitrary(g) {
        Position::from_source(
            "gen.html",
            usize::from(u16::arbitrary(g)),
            usize::from(u16::arbitrary(g)),
            usize::from(u16::arbitrary(g)),
            usize::from(u8::arbitrary(g)),
        )
    } else {
        Position::fake(Some("generated"), None)
    }
}

fn arbitrary_tree(g: &mut Gen, depth: usize) -> HtmlTree {
    if depth == 0 || bool::arbitrary(g) {
        return HtmlTree::data(Wrap::new(String::arbitrary(g), arbitrary_pos(g)));
    }
    let attr_count = usize::from(u8::arbitrary(g) % 3);
    let attrs = (0..attr_count)
        .map(|i| {
            (
                Wrap::new(format!("data-{i}"), arbitrary_pos(g)),
                Wrap::new(String::arbitrary(g), arbitrary_pos(g)),
            )
        })
        .collect::<Vec<_>>();
    let child_count = usize::from(u8::arbitrary(g) % 4);
    let children = (0..child_count)
        .map(|_| arbitrary_tree(g, depth - 1))
        .collect();
    HtmlTree::element(
        Wrap::new("span".to_string(), arbitrary_pos(g)),
        Attributes::from_pairs(attrs),
        children,
    )
}

impl Arbitrary for ArbTree {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_tree(g, 3))
    }
}

#[quickcheck]
fn prop_every_leaf_has_a_position(tree: ArbTree) -> bool {
    let mut found = Vec::new();
    leaves(&tree.0, &mut found);
    !found.is_empty()
        && found
            .iter()
            .all(|leaf| leaf.pos().is_fake() || leaf.pos().location().is_some())
}

#[quickcheck]
fn prop_tag_case_is_normalized(name: String) -> bool {
    let upper = Tag::new(fake(&name.to_ascii_uppercase()));
    let lower = Tag::new(fake(&name.to_ascii_lowercase()));
    upper == lower && upper.as_str() == name.to_ascii_lowercase()
}

#[quickcheck]
fn prop_attribute_order_is_preserved(values: Vec<String>) -> bool {
    let attrs = Attributes::from_pairs(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (fake(&format!("a{i}")), fake(v))),
    );
    attrs
        .iter()
        .map(|a| a.value().as_str())
        .eq(values.iter().map(String::as_str))
}
