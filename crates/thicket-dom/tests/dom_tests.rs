//! Tests for the arena tree: construction, links and attribute handling.

use thicket_dom::{AttributeValue, DomTree, ElementData, NodeId, NodeType};

/// Helper to append an element and return its NodeId.
fn append_element(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
    let data = ElementData::new(tag).expect("non-empty tag");
    tree.append_child(parent, NodeType::Element(data))
}

#[test]
fn test_new_tree_has_only_document() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.root(), NodeId::ROOT);
    assert!(matches!(
        tree.get(NodeId::ROOT).map(|n| &n.node_type),
        Some(NodeType::Document)
    ));
    assert_eq!(tree.parent(NodeId::ROOT), None);
    assert!(tree.children(NodeId::ROOT).is_empty());
}

#[test]
fn test_append_child_links_both_directions() {
    let mut tree = DomTree::new();
    let html = append_element(&mut tree, NodeId::ROOT, "html");
    let body = append_element(&mut tree, html, "body");
    let text = tree.append_child(body, NodeType::Text("hi".to_string()));

    assert_eq!(tree.children(NodeId::ROOT), &[html]);
    assert_eq!(tree.children(html), &[body]);
    assert_eq!(tree.children(body), &[text]);
    assert_eq!(tree.parent(text), Some(body));
    assert_eq!(tree.parent(body), Some(html));
    assert_eq!(tree.as_text(text), Some("hi"));
}

#[test]
fn test_children_keep_document_order() {
    let mut tree = DomTree::new();
    let ul = append_element(&mut tree, NodeId::ROOT, "ul");
    let a = append_element(&mut tree, ul, "li");
    let comment = tree.append_child(ul, NodeType::Comment("note".to_string()));
    let b = append_element(&mut tree, ul, "li");

    assert_eq!(tree.children(ul), &[a, comment, b]);
    assert_eq!(tree.as_comment(comment), Some("note"));
    assert_eq!(tree.as_comment(a), None);
}

#[test]
fn test_ancestors_walk_to_root() {
    let mut tree = DomTree::new();
    let div = append_element(&mut tree, NodeId::ROOT, "div");
    let p = append_element(&mut tree, div, "p");
    let span = append_element(&mut tree, p, "span");

    let ancestors: Vec<NodeId> = tree.ancestors(span).collect();
    assert_eq!(ancestors, vec![p, div, NodeId::ROOT]);
    assert_eq!(tree.ancestors(NodeId::ROOT).count(), 0);
}

#[test]
fn test_unknown_id_is_absent() {
    let tree = DomTree::new();
    let missing = NodeId(42);
    assert!(tree.get(missing).is_none());
    assert!(tree.children(missing).is_empty());
    assert_eq!(tree.parent(missing), None);
    assert_eq!(tree.tag_name(missing), None);
}

#[test]
fn test_element_name_must_not_be_empty() {
    assert!(ElementData::new("").is_none());
    let data = ElementData::new("DiV").expect("non-empty tag");
    assert_eq!(data.tag_name, "DiV");
    assert!(data.attrs.is_empty());
}

#[test]
fn test_set_attribute_last_assignment_wins() {
    let mut data = ElementData::new("input").expect("non-empty tag");
    assert_eq!(data.set_attribute("type", "text".into()), None);
    assert_eq!(data.set_attribute("disabled", AttributeValue::Present), None);

    let previous = data.set_attribute("type", "checkbox".into());
    assert_eq!(previous, Some(AttributeValue::Text("text".to_string())));

    // Replacing keeps the original position.
    let names: Vec<&str> = data.attrs.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["type", "disabled"]);
    assert_eq!(
        data.attribute("type").and_then(AttributeValue::as_str),
        Some("checkbox")
    );
    assert!(data.attribute("disabled").is_some_and(AttributeValue::is_present_only));
}

#[test]
fn test_as_element_mut_updates_tree() {
    let mut tree = DomTree::new();
    let a = append_element(&mut tree, NodeId::ROOT, "a");
    if let Some(data) = tree.as_element_mut(a) {
        let _ = data.set_attribute("href", "/".into());
    }
    assert!(tree.as_element_mut(NodeId::ROOT).is_none());
    assert_eq!(
        tree.as_element(a).and_then(|e| e.attribute("href")),
        Some(&AttributeValue::Text("/".to_string()))
    );
}

#[test]
fn test_attribute_value_display_and_json() {
    assert_eq!(AttributeValue::Present.to_string(), "true");
    assert_eq!(AttributeValue::from("a b").to_string(), "a b");

    let mut data = ElementData::new("input").expect("non-empty tag");
    let _ = data.set_attribute("value", "x".into());
    let _ = data.set_attribute("checked", AttributeValue::Present);
    let json = serde_json::to_string(&data.attrs).expect("serializable");
    assert_eq!(json, r#"{"value":"x","checked":true}"#);
}

#[test]
fn test_node_type_json_shape() {
    let mut tree = DomTree::new();
    let text = tree.append_child(NodeId::ROOT, NodeType::Text("t".to_string()));
    let node = tree.get(text).expect("node exists");
    let json = serde_json::to_value(&node.node_type).expect("serializable");
    assert_eq!(json, serde_json::json!({ "type": "text", "data": "t" }));
}
