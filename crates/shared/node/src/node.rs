use std::borrow::Cow;
use std::slice;

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Where a node lands when it is a child of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Rendered inside the start tag.
    Attribute,
    /// Rendered between the start and end tags.
    Element,
    /// Transparent: every member is placed by its own kind.
    Group,
}

/// One HTML attribute, bare (`x-cloak`) or valued (`x-show="open"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self { name: name.into(), value }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw, unescaped value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub const fn is_bare(&self) -> bool {
        self.value.is_none()
    }
}

/// An HTML element with its attributes and content mixed in one ordered child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: Cow<'static, str>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        Self { name: name.into(), children: children.into_iter().collect() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_ref())
    }

    /// Attributes in start-tag order, with groups flattened.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        Leaves::new(&self.children).filter_map(|node| match node {
            Node::Attribute(attribute) => Some(attribute),
            _ => None,
        })
    }

    /// Content nodes in document order, with groups flattened.
    pub fn content(&self) -> impl Iterator<Item = &Node> {
        Leaves::new(&self.children).filter(|node| node.kind() == NodeKind::Element)
    }
}

/// A node of the markup tree.
///
/// Nodes are immutable once built; composition happens by nesting them in
/// elements or [`Node::Group`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Attribute(Attribute),
    /// Character data, escaped on render.
    Text(String),
    /// Markup emitted verbatim.
    Raw(String),
    Group(Vec<Node>),
}

impl Node {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Attribute(_) => NodeKind::Attribute,
            Self::Group(_) => NodeKind::Group,
            Self::Element(_) | Self::Text(_) | Self::Raw(_) => NodeKind::Element,
        }
    }

    #[must_use]
    pub const fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            Self::Attribute(attribute) => Some(attribute),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_group(&self) -> Option<&[Node]> {
        match self {
            Self::Group(nodes) => Some(nodes),
            _ => None,
        }
    }

    /// Depth-first walk that steps through groups and yields every other node.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(slice::from_ref(self))
    }
}

impl Default for Node {
    /// The empty group, which renders as nothing.
    fn default() -> Self {
        Self::Group(Vec::new())
    }
}

impl From<Attribute> for Node {
    fn from(attribute: Attribute) -> Self {
        Self::Attribute(attribute)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::Group(iter.into_iter().collect())
    }
}

/// Iterator returned by [`Node::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<slice::Iter<'a, Node>>,
}

impl<'a> Leaves<'a> {
    fn new(nodes: &'a [Node]) -> Self {
        Self { stack: vec![nodes.iter()] }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Node::Group(nodes)) => self.stack.push(nodes.iter()),
                Some(node) => return Some(node),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Valued attribute: `name="value"`.
#[must_use]
pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Node {
    Attribute::new(name, Some(value.into())).into()
}

/// Bare attribute: `name`.
#[must_use]
pub fn flag(name: impl Into<String>) -> Node {
    Attribute::new(name, None).into()
}

/// Ordered, transparent sequence of nodes.
#[must_use]
pub fn group(nodes: impl IntoIterator<Item = Node>) -> Node {
    nodes.into_iter().collect()
}

#[must_use]
pub fn el(name: impl Into<Cow<'static, str>>, children: impl IntoIterator<Item = Node>) -> Node {
    Element::new(name, children).into()
}

#[must_use]
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

#[must_use]
pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw(markup.into())
}

/// `<!doctype html>` followed by `sibling`, usually the `html` element.
#[must_use]
pub fn doctype(sibling: Node) -> Node {
    group([raw("<!doctype html>"), sibling])
}

/// Builds one node per item; the result is a group.
#[must_use]
pub fn map<T, F>(items: impl IntoIterator<Item = T>, f: F) -> Node
where
    F: FnMut(T) -> Node,
{
    items.into_iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_accessors() {
        let valued = Attribute::new("x-show", Some("open".to_owned()));
        assert_eq!(valued.name(), "x-show");
        assert_eq!(valued.value(), Some("open"));
        assert!(!valued.is_bare());

        let bare = Attribute::new("x-cloak", None);
        assert!(bare.is_bare());
        assert_eq!(bare.value(), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(flag("hidden").kind(), NodeKind::Attribute);
        assert_eq!(text("hi").kind(), NodeKind::Element);
        assert_eq!(raw("<b>").kind(), NodeKind::Element);
        assert_eq!(el("div", []).kind(), NodeKind::Element);
        assert_eq!(group([]).kind(), NodeKind::Group);
    }

    #[test]
    fn test_leaves_flatten_nested_groups_in_order() {
        let tree = group([flag("a"), group([flag("b"), group([]), group([flag("c")])]), flag("d")]);
        let names: Vec<_> =
            tree.leaves().filter_map(Node::as_attribute).map(Attribute::name).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_leaves_of_single_node_is_itself() {
        let node = text("alone");
        assert_eq!(node.leaves().collect::<Vec<_>>(), [&node]);
    }

    #[test]
    fn test_element_splits_attributes_from_content() {
        let Node::Element(element) = el("p", [text("a"), flag("hidden"), group([attr("id", "x"), text("b")])])
        else {
            unreachable!("el always builds an element");
        };

        let attributes: Vec<_> = element.attributes().map(Attribute::name).collect();
        assert_eq!(attributes, ["hidden", "id"]);
        assert_eq!(element.content().count(), 2);
    }

    #[test]
    fn test_void_detection() {
        assert!(Element::new("input", []).is_void());
        assert!(!Element::new("div", []).is_void());
    }

    #[test]
    fn test_map_builds_group() {
        let node = map(["a", "b"], text);
        assert_eq!(node.as_group().map(<[Node]>::len), Some(2));
    }
}
