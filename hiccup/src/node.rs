use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{util::stringify, Attrs, Value};

/// A node in a markup tree.
///
/// Element lists (`[tag, attrs?, ...children]`) are [`Node::List`]s; everything
/// else is a leaf or a sequence of nodes to be concatenated.
#[derive(Default)]
pub enum Node<'bump> {
    /// Renders to nothing.
    #[default]
    Null,
    /// A scalar, stringified and escaped when rendered.
    Value(Value<'bump>),
    /// Markup emitted verbatim.
    Raw(BumpString<'bump>),
    /// A single-pass sequence of nodes, rendered in order.
    Seq(Seq<'bump>),
    /// An element list.
    List(BumpVec<'bump, Node<'bump>>),
    /// An attributes map; only valid directly after the tag of an element list.
    Attrs(Attrs<'bump>),
}

/// A lazy sequence of nodes. It is consumed by rendering and cannot be restarted.
pub struct Seq<'bump>(Box<dyn Iterator<Item = Node<'bump>> + 'bump>);
impl<'bump> Iterator for Seq<'bump> {
    type Item = Node<'bump>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl fmt::Debug for Seq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<lazy>")
    }
}

impl<'bump> Node<'bump> {
    /// Wrap an iterator as a lazy sequence.
    pub fn seq<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node<'bump>>,
        I::IntoIter: 'bump,
    {
        Node::Seq(Seq(Box::new(nodes.into_iter())))
    }

    /// A lazy sequence converting each item with [`IntoNode`] as it is reached.
    pub fn lazy<I>(bump: &'bump Bump, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoNode<'bump>,
        I::IntoIter: 'bump,
    {
        Node::seq(items.into_iter().map(move |item| item.into_node(bump)))
    }

    /// A sequence of already-built nodes.
    pub fn fragment(bump: &'bump Bump, nodes: impl IntoIterator<Item = Node<'bump>>) -> Self {
        Node::seq(BumpVec::from_iter_in(nodes, bump))
    }

    /// An element list from already-built nodes.
    pub fn list(bump: &'bump Bump, nodes: impl IntoIterator<Item = Node<'bump>>) -> Self {
        Node::List(BumpVec::from_iter_in(nodes, bump))
    }

    /// A string scalar.
    pub fn text(bump: &'bump Bump, text: &str) -> Self {
        Node::Value(Value::string(bump, text))
    }

    /// Unescaped markup.
    pub fn raw(bump: &'bump Bump, html: &str) -> Self {
        Node::Raw(BumpString::from_str_in(html, bump))
    }

    /// Returns the node as a string slice if it is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Value(value) => value.as_str(),
            _ => None,
        }
    }

    /// The tag descriptor, if this is an element list starting with a string.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::List(list) => list.first().and_then(Node::as_str),
            _ => None,
        }
    }

    /// The attributes map of an element list, if it has one.
    pub fn attrs(&self) -> Option<&Attrs<'bump>> {
        match self {
            Node::List(list) => match list.get(1) {
                Some(Node::Attrs(attrs)) => Some(attrs),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns `true` if the node is [`Node::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns `true` if the node is an attributes map.
    pub fn is_attrs(&self) -> bool {
        matches!(self, Node::Attrs(_))
    }

    /// Returns `true` if the node is an element list.
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Returns `true` if the node is raw markup.
    pub fn is_raw(&self) -> bool {
        matches!(self, Node::Raw(_))
    }
}
impl PartialEq for Node<'_> {
    /// Structural equality. Lazy sequences are never equal to anything.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Value(a), Node::Value(b)) => a == b,
            (Node::Raw(a), Node::Raw(b)) => a == b,
            (Node::List(a), Node::List(b)) => a == b,
            (Node::Attrs(a), Node::Attrs(b)) => a == b,
            _ => false,
        }
    }
}
impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("nil"),
            Node::Value(value) => fmt::Debug::fmt(value, f),
            Node::Raw(html) => write!(f, "raw({:?})", html.as_str()),
            Node::Seq(seq) => fmt::Debug::fmt(seq, f),
            Node::List(list) => f.debug_list().entries(list.iter()).finish(),
            Node::Attrs(attrs) => fmt::Debug::fmt(attrs, f),
        }
    }
}

/// Trait for types that can be converted into a [`Node`] with a bump allocator.
///
/// Strings, numbers, booleans, fractions and URIs become [`Node::Value`]s;
/// vectors and arrays become element lists; `None` becomes [`Node::Null`].
pub trait IntoNode<'bump> {
    /// Convert this value into a [`Node`] using the given bump allocator.
    fn into_node(self, bump: &'bump Bump) -> Node<'bump>;
}
impl<'bump> IntoNode<'bump> for Node<'bump> {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump> {
        self
    }
}
impl<'bump> IntoNode<'bump> for Attrs<'bump> {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump> {
        Node::Attrs(self)
    }
}
impl<'bump> IntoNode<'bump> for Seq<'bump> {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump> {
        Node::Seq(self)
    }
}
impl<'bump> IntoNode<'bump> for () {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump> {
        Node::Null
    }
}
impl<'bump, T: IntoNode<'bump>> IntoNode<'bump> for Option<T> {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        match self {
            Some(node) => node.into_node(bump),
            None => Node::Null,
        }
    }
}
impl<'bump, T: IntoNode<'bump>> IntoNode<'bump> for Vec<T> {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        Node::list(bump, self.into_iter().map(|n| n.into_node(bump)))
    }
}
impl<'bump, T: IntoNode<'bump>, const N: usize> IntoNode<'bump> for [T; N] {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        Node::list(bump, self.into_iter().map(|n| n.into_node(bump)))
    }
}
impl<'bump> IntoNode<'bump> for BumpVec<'bump, Node<'bump>> {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump> {
        Node::List(self)
    }
}

/// Trait for values that can be concatenated into raw markup.
///
/// Collections are flattened; scalars contribute their string form.
pub trait IntoRaw {
    /// Append this value's markup to `out`.
    fn push_raw(self, out: &mut BumpString<'_>);
}
impl IntoRaw for &str {
    fn push_raw(self, out: &mut BumpString<'_>) {
        out.push_str(self);
    }
}
impl IntoRaw for String {
    fn push_raw(self, out: &mut BumpString<'_>) {
        out.push_str(&self);
    }
}
impl IntoRaw for &String {
    fn push_raw(self, out: &mut BumpString<'_>) {
        out.push_str(self);
    }
}
impl IntoRaw for BumpString<'_> {
    fn push_raw(self, out: &mut BumpString<'_>) {
        out.push_str(&self);
    }
}
impl<T: IntoRaw> IntoRaw for Option<T> {
    fn push_raw(self, out: &mut BumpString<'_>) {
        if let Some(value) = self {
            value.push_raw(out);
        }
    }
}
impl<T: IntoRaw> IntoRaw for Vec<T> {
    fn push_raw(self, out: &mut BumpString<'_>) {
        self.into_iter().for_each(|value| value.push_raw(out));
    }
}
impl<T: IntoRaw, const N: usize> IntoRaw for [T; N] {
    fn push_raw(self, out: &mut BumpString<'_>) {
        self.into_iter().for_each(|value| value.push_raw(out));
    }
}
impl IntoRaw for Node<'_> {
    fn push_raw(self, out: &mut BumpString<'_>) {
        match self {
            Node::Raw(html) => out.push_str(&html),
            Node::Value(value) => out.push_str(&stringify(&value)),
            Node::List(list) => list.into_iter().for_each(|node| node.push_raw(out)),
            Node::Seq(seq) => seq.for_each(|node| node.push_raw(out)),
            Node::Null | Node::Attrs(_) => {}
        }
    }
}
