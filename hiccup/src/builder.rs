//! Implements a builder for creating markup trees through a series of methods.
//!
//! The element, page and form helpers are methods on [`Builder`], which carries the
//! allocator, the [`Context`] and the current form field group.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{
    config::DEFAULT_CONTEXT, Attribute, Attrs, Compiler, Context, IntoAttribute, IntoNode, IntoRaw,
    Node, RenderOptions, Result,
};

/// A builder for creating nodes using a bump allocator.
///
/// # Example
///
/// ```
/// use hiccup::{bumpalo::Bump, builder::Builder, render};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let page = b.el_with("div", b.attrs([("class", "container")]), [
///     b.el("h1", ["Hello, World!"]),
/// ]);
/// assert_eq!(
///     render([page]).unwrap(),
///     r#"<div class="container"><h1>Hello, World!</h1></div>"#
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Builder<'bump> {
    bump: &'bump Bump,
    context: &'bump Context,
    group: &'bump [&'bump str],
}
impl<'bump> Builder<'bump> {
    /// Create a new builder with the given bump allocator and the default [`Context`].
    pub fn new(bump: &'bump Bump) -> Self {
        Self::with_context(bump, &DEFAULT_CONTEXT)
    }

    /// Create a new builder with the given bump allocator and context.
    pub fn with_context(bump: &'bump Bump, context: &'bump Context) -> Self {
        Self {
            bump,
            context,
            group: &[],
        }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Get a reference to the context.
    pub fn context(&self) -> &'bump Context {
        self.context
    }

    /// Create a text node.
    pub fn text(&self, text: &str) -> Node<'bump> {
        Node::text(self.bump, text)
    }

    /// Create a raw node from a value that implements [IntoRaw].
    pub fn raw(&self, html: impl IntoRaw) -> Node<'bump> {
        crate::raw(self.bump, html)
    }

    /// Create a node from a value that implements [IntoNode].
    pub fn node(&self, value: impl IntoNode<'bump>) -> Node<'bump> {
        value.into_node(self.bump)
    }

    /// Create an attribute from a value that implements [IntoAttribute].
    pub fn attr(&self, value: impl IntoAttribute<'bump>) -> Attribute<'bump> {
        value.into_attribute(self.bump)
    }

    /// Create an attributes map.
    pub fn attrs(
        &self,
        values: impl IntoIterator<Item = impl IntoAttribute<'bump>>,
    ) -> Attrs<'bump> {
        Attrs::from_iter_in(self.bump, values)
    }

    /// Create an element list `[tag, children...]`.
    pub fn el(
        &self,
        tag: &str,
        children: impl IntoIterator<Item = impl IntoNode<'bump>>,
    ) -> Node<'bump> {
        self.element(tag, None, children)
    }

    /// Create an element list `[tag, attrs, children...]`.
    pub fn el_with(
        &self,
        tag: &str,
        attrs: Attrs<'bump>,
        children: impl IntoIterator<Item = impl IntoNode<'bump>>,
    ) -> Node<'bump> {
        self.element(tag, Some(attrs), children)
    }

    fn element(
        &self,
        tag: &str,
        attrs: Option<Attrs<'bump>>,
        children: impl IntoIterator<Item = impl IntoNode<'bump>>,
    ) -> Node<'bump> {
        let bump = self.bump;
        let mut list = BumpVec::new_in(bump);
        list.push(self.text(tag));
        list.extend(attrs.map(Node::Attrs));
        list.extend(children.into_iter().map(|child| child.into_node(bump)));
        Node::List(list)
    }

    /// Create an element list from already-built nodes.
    pub fn list(&self, nodes: impl IntoIterator<Item = Node<'bump>>) -> Node<'bump> {
        Node::list(self.bump, nodes)
    }

    /// Create a sequence from already-built nodes.
    ///
    /// This is a convenience wrapper around [`Node::fragment`].
    pub fn fragment(&self, nodes: impl IntoIterator<Item = Node<'bump>>) -> Node<'bump> {
        Node::fragment(self.bump, nodes)
    }

    /// Create a lazy sequence, converting each item when it is rendered.
    ///
    /// This is a convenience wrapper around [`Node::lazy`].
    pub fn lazy<I>(&self, items: I) -> Node<'bump>
    where
        I: IntoIterator,
        I::Item: IntoNode<'bump>,
        I::IntoIter: 'bump,
    {
        Node::lazy(self.bump, items)
    }

    /// Render `nodes` with `options` and wrap the markup in a raw node, so that it can
    /// be nested in another tree without being escaped again.
    pub fn html(
        &self,
        options: impl Into<RenderOptions>,
        nodes: impl IntoIterator<Item = Node<'bump>>,
    ) -> Result<Node<'bump>> {
        let markup = Compiler::new(options).compile_html(nodes)?;
        Ok(Node::raw(self.bump, &markup))
    }

    /// A builder whose form fields belong to the nested group `name`.
    pub fn group(&self, name: &str) -> Self {
        let mut group = BumpVec::with_capacity_in(self.group.len() + 1, self.bump);
        group.extend_from_slice(self.group);
        let name: &'bump str = self.bump.alloc_str(name);
        group.push(name);
        Self {
            group: group.into_bump_slice(),
            ..*self
        }
    }

    /// The field name for `name` in the current group: `outer[inner][name]`.
    pub fn make_name(&self, name: &str) -> &'bump str {
        let mut parts = self.group.iter().copied().chain([name]);
        let mut out = bumpalo::collections::String::new_in(self.bump);
        if let Some(first) = parts.next() {
            out.push_str(first);
        }
        for part in parts {
            out.push('[');
            out.push_str(part);
            out.push(']');
        }
        out.into_bump_str()
    }

    /// The field id for `name` in the current group: `outer-inner-name`.
    pub fn make_id(&self, name: &str) -> &'bump str {
        let mut out = bumpalo::collections::String::new_in(self.bump);
        for (i, part) in self.group.iter().copied().chain([name]).enumerate() {
            if i > 0 {
                out.push('-');
            }
            out.push_str(part);
        }
        out.into_bump_str()
    }
}
