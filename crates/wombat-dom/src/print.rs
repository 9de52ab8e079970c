use crate::HtmlTree;

/// Render an indented outline of `tree`, one node per line.
///
/// Elements print as `<tag name="value">`, valueless attributes print as the
/// bare name, and data prints quoted with newlines escaped and spaces shown
/// as `·` so whitespace-only runs stay visible. Backslashes and double quotes
/// inside quoted strings are escaped with a backslash.
#[must_use]
pub fn print_tree(tree: &HtmlTree) -> String {
    let mut out = String::new();
    outline(tree, 0, &mut out);
    out
}

fn outline(tree: &HtmlTree, indent: usize, out: &mut String) {
    out.push_str(&"  ".repeat(indent));
    match tree {
        HtmlTree::Element(element) => {
            out.push('<');
            out.push_str(element.tag_name());
            for attr in &element.attrs {
                out.push(' ');
                out.push_str(attr.name());
                if !attr.is_boolean() {
                    out.push_str("=\"");
                    out.push_str(&escape(attr.value()));
                    out.push('"');
                }
            }
            out.push_str(">\n");
            for child in &element.children {
                outline(child, indent + 1, out);
            }
        }
        HtmlTree::Data(text) => {
            let display = escape(text).replace('\n', "\\n").replace(' ', "\u{00B7}");
            out.push('"');
            out.push_str(&display);
            out.push_str("\"\n");
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attribute, Attributes};
    use wombat_common::Wrap;

    fn w(s: &str) -> Wrap<String> {
        Wrap::fake(s.to_string(), "test")
    }

    #[test]
    fn test_print_nested() {
        let attrs: Attributes = [
            Attribute::new(w("id"), w("x")),
            Attribute::boolean(w("hidden")),
        ]
        .into_iter()
        .collect();
        let tree = HtmlTree::element(
            w("DIV"),
            attrs,
            vec![HtmlTree::element(
                w("p"),
                Attributes::new(),
                vec![HtmlTree::data(w("a b\n"))],
            )],
        );
        assert_eq!(
            print_tree(&tree),
            "<div id=\"x\" hidden>\n  <p>\n    \"a\u{00B7}b\\n\"\n"
        );
    }

    #[test]
    fn test_print_explicit_value_equal_to_name() {
        let attrs: Attributes = [Attribute::new(w("Value"), w("value"))]
            .into_iter()
            .collect();
        let tree = HtmlTree::element(w("option"), attrs, Vec::new());
        assert_eq!(print_tree(&tree), "<option value=\"value\">\n");
    }

    #[test]
    fn test_print_escapes_quotes_and_backslashes() {
        let attrs: Attributes = [Attribute::new(w("title"), w("x\" y=\"z"))]
            .into_iter()
            .collect();
        let tree = HtmlTree::element(
            w("a"),
            attrs,
            vec![HtmlTree::data(w("a\\nb")), HtmlTree::data(w("a\nb"))],
        );
        assert_eq!(
            print_tree(&tree),
            "<a title=\"x\\\" y=\\\"z\">\n  \"a\\\\nb\"\n  \"a\\nb\"\n"
        );
    }
}
