//! Indented text dump of a parsed tree, for debugging and the CLI.

use std::fmt::Write;

use thicket_dom::{DomTree, NodeId, NodeType};

/// Render the tree below the document node as indented markup.
///
/// Elements print as `<tag name='value'>` followed by their children and a
/// closing `</tag>`, or as `<tag/>` when they have no children. Text has its
/// whitespace runs collapsed to a single space, and whitespace-only text is
/// skipped. One tab per level.
#[must_use]
pub fn format_tree(tree: &DomTree) -> String {
    let mut out = String::new();
    for &child in tree.children(tree.root()) {
        write_node(tree, child, 0, &mut out);
    }
    out
}

/// Print [`format_tree`] to stdout.
pub fn print_tree(tree: &DomTree) {
    print!("{}", format_tree(tree));
}

fn write_node(tree: &DomTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let indent = "\t".repeat(depth);

    match &node.node_type {
        NodeType::Document => {}
        NodeType::Text(text) => {
            let collapsed = collapse_whitespace(text);
            if !collapsed.trim().is_empty() {
                let _ = writeln!(out, "{indent}{collapsed}");
            }
        }
        NodeType::Comment(text) => {
            let _ = writeln!(out, "{indent}<!-- {} -->", collapse_whitespace(text));
        }
        NodeType::Element(data) => {
            let attrs: String = data
                .attrs
                .iter()
                .map(|(name, value)| format!(" {name}='{value}'"))
                .collect();
            let slash = if node.children.is_empty() { "/" } else { "" };
            let _ = writeln!(out, "{indent}<{}{attrs}{slash}>", data.tag_name);
        }
    }

    for &child in &node.children {
        write_node(tree, child, depth + 1, out);
    }
    if let NodeType::Element(data) = &node.node_type
        && !node.children.is_empty()
    {
        let _ = writeln!(out, "{indent}</{}>", data.tag_name);
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                collapsed.push(' ');
            }
            in_space = true;
        } else {
            collapsed.push(c);
            in_space = false;
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a \n\t b"), "a b");
        assert_eq!(collapse_whitespace("  "), " ");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_format_nested_tree() {
        let document =
            parse_document("<ul class=menu>\n  <li>One<li>Two</ul><!-- end --><br>").expect("parses");
        let expected = "\
<ul class='menu'>
\t<li>
\t\tOne
\t</li>
\t<li>
\t\tTwo
\t</li>
</ul>
<!-- end -->
<br/>
";
        assert_eq!(format_tree(&document.tree), expected);
    }

    #[test]
    fn test_boolean_attribute_prints_true() {
        let document = parse_document("<input disabled>").expect("parses");
        assert_eq!(format_tree(&document.tree), "<input disabled='true'/>\n");
    }
}
