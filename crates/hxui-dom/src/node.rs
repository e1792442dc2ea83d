//! Node tree
//!
//! Immutable description of an HTML fragment.
//!
//! Key properties:
//! - Six variants: element, escaped text, raw text, fragment, attribute, nil
//! - Attribute nodes may be interleaved with real children; they are hoisted
//!   onto the nearest enclosing element when it is serialized
//! - Construction mistakes (empty tag, children on a void element, bad names)
//!   are programming bugs and panic at the call site

use std::borrow::Cow;

/// Void elements (no end tag, no children)
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "source", "track", "wbr",
];

/// Check whether a tag name is a void element
#[inline]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// A node of the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with tag, attributes and children (attributes live in `children`)
    Element(Element),
    /// Text content, escaped on output
    Text(String),
    /// Trusted content, written verbatim
    Raw(String),
    /// Ordered nodes without an enclosing element
    Fragment(Vec<Node>),
    /// Attribute, hoisted onto the enclosing element
    Attr(Attribute),
    /// Renders to nothing
    Nil,
}

/// Element data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    void: bool,
    children: Vec<Node>,
}

impl Element {
    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this is a void element
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Raw child list, attributes and real children interleaved
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Split the child list into attributes and real children.
    ///
    /// Fragments are transparent: attributes nested inside them are hoisted
    /// too, and their real children are flattened in place. Nil nodes are
    /// dropped. Attributes keep the position of their first occurrence and
    /// the value of their last one.
    pub fn hoist(&self) -> (Vec<&Attribute>, Vec<&Node>) {
        let mut attrs: Vec<&Attribute> = Vec::new();
        let mut children = Vec::new();
        collect(&self.children, &mut attrs, &mut children);
        (attrs, children)
    }

    /// Effective value of an attribute after hoisting.
    ///
    /// Returns `Some("")` for boolean attributes.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let (attrs, _) = self.hoist();
        attrs
            .into_iter()
            .find(|a| a.name() == name)
            .map(|a| a.value().unwrap_or(""))
    }

    /// Check if an attribute is present after hoisting
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

fn collect<'a>(nodes: &'a [Node], attrs: &mut Vec<&'a Attribute>, children: &mut Vec<&'a Node>) {
    for node in nodes {
        match node {
            Node::Attr(attr) => {
                match attrs.iter().position(|a| a.name == attr.name) {
                    Some(pos) => attrs[pos] = attr,
                    None => attrs.push(attr),
                }
            }
            Node::Fragment(inner) => collect(inner, attrs, children),
            Node::Nil => {}
            _ => children.push(node),
        }
    }
}

/// Attribute data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: Cow<'static, str>,
    value: AttrValue,
}

/// Attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Boolean attribute, emitted as the bare name
    Bool,
    /// Valued attribute, escaped on output
    Text(String),
}

impl Attribute {
    /// Attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, `None` for boolean attributes
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            AttrValue::Bool => None,
            AttrValue::Text(v) => Some(v),
        }
    }

    /// Whether this is a boolean attribute
    pub fn is_bool(&self) -> bool {
        matches!(self.value, AttrValue::Bool)
    }
}

impl Node {
    /// Check if this node renders to nothing on its own
    #[inline]
    pub fn is_nil(&self) -> bool {
        match self {
            Node::Nil => true,
            Node::Fragment(children) => children.iter().all(Node::is_nil),
            _ => false,
        }
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get attribute data if this is an attribute
    #[inline]
    pub fn as_attr(&self) -> Option<&Attribute> {
        match self {
            Node::Attr(a) => Some(a),
            _ => None,
        }
    }

    /// All elements of the tree in document order (depth-first, left to right)
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        walk_elements(self, &mut out);
        out
    }

    /// First element (in document order) whose `id` attribute equals `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements().into_iter().find(|e| e.attr("id") == Some(id))
    }

    /// Outermost element: the node itself, or the first element of a fragment
    pub fn root_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Fragment(children) => children.iter().find_map(Node::root_element),
            _ => None,
        }
    }

    /// Does the node carry any real content (anything but attributes and nil)
    fn has_content(&self) -> bool {
        match self {
            Node::Attr(_) | Node::Nil => false,
            Node::Fragment(children) => children.iter().any(Node::has_content),
            _ => true,
        }
    }
}

fn walk_elements<'a>(node: &'a Node, out: &mut Vec<&'a Element>) {
    match node {
        Node::Element(e) => {
            out.push(e);
            for child in &e.children {
                walk_elements(child, out);
            }
        }
        Node::Fragment(children) => {
            for child in children {
                walk_elements(child, out);
            }
        }
        _ => {}
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Option<Node>> for Node {
    fn from(node: Option<Node>) -> Self {
        node.unwrap_or(Node::Nil)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Fragment(iter.into_iter().collect())
    }
}

// ============================================================================
// NAME VALIDATION
// ============================================================================

fn validate_tag(tag: &str) {
    assert!(!tag.is_empty(), "element tag name must not be empty");
    assert!(
        tag.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-'),
        "invalid element tag name {tag:?}"
    );
}

fn validate_attr_name(name: &str) {
    assert!(!name.is_empty(), "attribute name must not be empty");
    assert!(
        name.bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b'"' | b'\'' | b'<' | b'>' | b'/' | b'=')),
        "invalid attribute name {name:?}"
    );
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Build an element.
///
/// Void tags (see [`VOID_ELEMENTS`]) are routed through [`void_element`].
///
/// # Panics
///
/// Panics when `tag` is empty or not an ASCII name, or when a void tag is
/// given real children.
pub fn element(tag: impl Into<Cow<'static, str>>, children: impl IntoIterator<Item = Node>) -> Node {
    let tag = tag.into();
    if is_void(&tag) {
        return void_element(tag, children);
    }
    validate_tag(&tag);
    Node::Element(Element {
        tag,
        void: false,
        children: children.into_iter().collect(),
    })
}

/// Build a void element. Only attribute (and nil) nodes are accepted.
///
/// # Panics
///
/// Panics when `tag` is empty or invalid, or when any child carries content.
pub fn void_element(tag: impl Into<Cow<'static, str>>, attrs: impl IntoIterator<Item = Node>) -> Node {
    let tag = tag.into();
    validate_tag(&tag);
    let children: Vec<Node> = attrs.into_iter().collect();
    assert!(
        !children.iter().any(Node::has_content),
        "void element <{tag}> cannot have children"
    );
    Node::Element(Element {
        tag,
        void: true,
        children,
    })
}

/// Escaped text
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// Verbatim text. This is the only way to reach the output unescaped.
///
/// # Panics
///
/// Panics when the payload contains a NUL byte.
pub fn raw(s: impl Into<String>) -> Node {
    let s = s.into();
    assert!(!s.contains('\0'), "raw text must not contain NUL bytes");
    Node::Raw(s)
}

/// Formatted escaped text, `textf!("{} items", n)`
#[macro_export]
macro_rules! textf {
    ($($arg:tt)*) => {
        $crate::text(::std::format!($($arg)*))
    };
}

/// Formatted verbatim text. The formatted output is NOT escaped.
#[macro_export]
macro_rules! rawf {
    ($($arg:tt)*) => {
        $crate::raw(::std::format!($($arg)*))
    };
}

/// Attribute with a value
///
/// # Panics
///
/// Panics when `name` is empty or contains whitespace, quotes or non-ASCII.
pub fn attr(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Node {
    let name = name.into();
    validate_attr_name(&name);
    Node::Attr(Attribute {
        name,
        value: AttrValue::Text(value.into()),
    })
}

/// Boolean attribute, emitted as the bare name
///
/// # Panics
///
/// Same rules as [`attr`].
pub fn attr_bool(name: impl Into<Cow<'static, str>>) -> Node {
    let name = name.into();
    validate_attr_name(&name);
    Node::Attr(Attribute {
        name,
        value: AttrValue::Bool,
    })
}

/// Fragment
pub fn group(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(children.into_iter().collect())
}

/// `node` when `pred` holds, nil otherwise
pub fn if_(pred: bool, node: Node) -> Node {
    if pred { node } else { Node::Nil }
}

/// Lazy form of [`if_`]: the branch is only built when `pred` holds
pub fn if_with(pred: bool, f: impl FnOnce() -> Node) -> Node {
    if pred { f() } else { Node::Nil }
}

/// Ternary
pub fn when(pred: bool, then: Node, else_: Node) -> Node {
    if pred { then } else { else_ }
}

/// Fragment built by mapping every item through `f`
pub fn map<T>(items: impl IntoIterator<Item = T>, f: impl FnMut(T) -> Node) -> Node {
    Node::Fragment(items.into_iter().map(f).collect())
}
