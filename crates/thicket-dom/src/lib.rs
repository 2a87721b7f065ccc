//! Document tree for the thicket parser.
//!
//! The tree is deliberately bare: a document root plus element, text and
//! comment nodes with parent/child links and an attribute map. There is no
//! query or mutation API beyond what tree construction needs.
//!
//! # Design
//!
//! Nodes live in an arena owned by [`DomTree`] and refer to each other by
//! [`NodeId`] index. Children are owned through the parent's child list;
//! the parent link is a plain index, so there are no reference cycles and
//! no borrow checker gymnastics when walking back up the tree.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Map of attribute names to values for an element.
///
/// Iteration follows the order attributes first appeared in the source.
/// Assigning an existing name replaces its value in place.
pub type AttributesMap = IndexMap<String, AttributeValue>;

/// A type-safe index into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// The value side of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A quoted or unquoted value, stored exactly as written.
    Text(String),
    /// A presence-only attribute such as `disabled`.
    Present,
}

impl AttributeValue {
    /// Returns the textual value, or `None` for a presence-only attribute.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Present => None,
        }
    }

    /// True for a presence-only attribute.
    #[must_use]
    pub const fn is_present_only(&self) -> bool {
        matches!(self, Self::Present)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Present => f.write_str("true"),
        }
    }
}

// A presence-only attribute is the JSON literal `true`; anything else is a string.
impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Present => serializer.serialize_bool(true),
        }
    }
}

/// One entry in the tree.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// What kind of node this is, with its payload.
    pub node_type: NodeType,

    /// Owning node. `None` only for the document root.
    ///
    /// Set when the node is appended and never reassigned.
    pub parent: Option<NodeId>,

    /// Children in document order.
    pub children: Vec<NodeId>,
}

/// The kind of a [`Node`], carrying its payload.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeType {
    /// The single root of every tree.
    Document,
    /// An element with its tag name and attributes.
    Element(ElementData),
    /// Character data between tags, undecoded.
    Text(String),
    /// The body of a `<!-- ... -->` comment.
    Comment(String),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// Tag name exactly as written; never empty.
    pub tag_name: String,
    /// Attributes in source order.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with no attributes.
    ///
    /// Returns `None` if `tag_name` is empty.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Option<Self> {
        let tag_name = tag_name.into();
        if tag_name.is_empty() {
            return None;
        }
        Some(Self {
            tag_name,
            attrs: AttributesMap::new(),
        })
    }

    /// Look up an attribute by exact name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attrs.get(name)
    }

    /// Assign an attribute, returning the value it replaced, if any.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: AttributeValue,
    ) -> Option<AttributeValue> {
        self.attrs.insert(name.into(), value)
    }
}

/// Arena-based tree with O(1) node access.
///
/// The document node is created with the tree and always sits at
/// [`NodeId::ROOT`]. Nodes are only ever appended, so ids stay valid for the
/// life of the tree.
#[derive(Debug, Clone, Serialize)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree holding just the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                node_type: NodeType::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, the document included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node exists from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a node and attach it as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn append_child(&mut self, parent: NodeId, node_type: NodeType) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "append to unknown node {parent:?}");
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Mutable element data, used while a start tag's attributes are read.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id.0).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Tag name of an element node.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.as_element(id).map(|e| e.tag_name.as_str())
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Get comment content if this node is a comment.
    #[must_use]
    pub fn as_comment(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Comment(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
