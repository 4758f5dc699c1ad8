use std::collections::BTreeMap;

use bumpalo::collections::Vec as BumpVec;

use crate::{
    debug,
    tag::{is_void_tag, TagDescriptor},
    util::{escape_html, stringify},
    AttrValue, Attrs, Error, Mode, Node, RenderOptions, Result, Value,
};

/// Compiles trees of [`Node`]s to markup.
///
/// Rendering consumes the tree, so every lazy sequence in it is walked exactly once.
/// The first structural error aborts compilation and the partial output is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
    options: RenderOptions,
}
impl Compiler {
    /// Create a compiler with the given options.
    pub fn new(options: impl Into<RenderOptions>) -> Self {
        Self {
            options: options.into(),
        }
    }

    /// The options this compiler renders with.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    fn mode(&self) -> Mode {
        self.options.mode
    }

    /// Compile each node in order and concatenate the results.
    pub fn compile_html<'bump>(
        &self,
        nodes: impl IntoIterator<Item = Node<'bump>>,
    ) -> Result<String> {
        let mut out = String::new();
        for node in nodes {
            self.compile_node(node, &mut out)?;
        }
        Ok(out)
    }

    /// Compile a single node, appending its markup to `out`.
    pub fn compile_node(&self, node: Node<'_>, out: &mut String) -> Result<()> {
        match node {
            Node::Seq(seq) => {
                for node in seq {
                    self.compile_node(node, out)?;
                }
            }
            Node::List(list) => self.compile_list(list, out)?,
            Node::Raw(html) => out.push_str(&html),
            Node::Null => {}
            Node::Value(value) => out.push_str(&escape_html(
                &stringify(&value),
                self.mode(),
                self.options.escape_strings,
            )),
            Node::Attrs(attrs) => {
                debug!(?attrs, "attributes map outside of an element list");
                return Err(Error::StrayAttributes {
                    attrs: format!("{attrs:?}"),
                });
            }
        }
        Ok(())
    }

    /// `[tag]`, `[tag, attrs, ...children]` or `[tag, ...children]`.
    fn compile_list<'bump>(
        &self,
        list: BumpVec<'bump, Node<'bump>>,
        out: &mut String,
    ) -> Result<()> {
        let Some(tag) = list.first().and_then(Node::as_str).and_then(TagDescriptor::parse) else {
            debug!(?list, "malformed element list");
            return Err(Error::MalformedElement {
                element: format!("{list:?}"),
            });
        };

        let mut rest = list.into_iter().skip(1).peekable();
        let attrs = match rest.next_if(Node::is_attrs) {
            Some(Node::Attrs(attrs)) => Some(attrs),
            _ => None,
        };
        let children: Vec<Node<'bump>> = rest.collect();

        self.render_element(&tag, attrs.as_ref(), children, out)
    }

    fn render_element(
        &self,
        tag: &TagDescriptor,
        attrs: Option<&Attrs<'_>>,
        children: Vec<Node<'_>>,
        out: &mut String,
    ) -> Result<()> {
        let name = tag.name.as_str();
        if !children.is_empty() && is_void_tag(name) {
            return Err(Error::VoidTagWithChildren {
                tag: name.to_string(),
            });
        }

        out.push('<');
        out.push_str(name);
        out.push_str(&self.format_attrs(tag, attrs));

        if children.is_empty() {
            if self.mode().is_container_tag(name) {
                out.push_str("></");
                out.push_str(name);
                out.push('>');
            } else if self.mode().is_xml() {
                out.push_str(" />");
            } else {
                out.push('>');
            }
            return Ok(());
        }

        out.push('>');
        for child in children {
            self.compile_node(child, out)?;
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        Ok(())
    }

    /// The attribute string of an element, in key order, with a leading space when
    /// not empty.
    fn format_attrs(&self, tag: &TagDescriptor, attrs: Option<&Attrs<'_>>) -> String {
        let mut fragments: BTreeMap<&str, String> = BTreeMap::new();
        for attribute in attrs.into_iter().flatten() {
            let key = attribute.key.as_str();
            if key == "class" {
                continue;
            }
            if let Some(fragment) = self.format_attr(key, &attribute.value) {
                fragments.insert(key, fragment);
            }
        }

        if let Some(id) = &tag.id {
            if !attrs.is_some_and(|attrs| attrs.contains_key("id")) {
                fragments.insert("id", self.quoted("id", id));
            }
        }

        let own_classes = attrs
            .and_then(|attrs| attrs.get("class"))
            .filter(|value| !value.is_falsy())
            .and_then(AttrValue::to_text);
        let classes = [Some(tag.classes.as_str()), own_classes.as_deref()]
            .into_iter()
            .flatten()
            .filter(|classes| !classes.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !classes.is_empty() {
            fragments.insert("class", self.quoted("class", &classes));
        }

        fragments
            .values()
            .fold(String::new(), |mut acc, fragment| {
                acc.push(' ');
                acc.push_str(fragment);
                acc
            })
    }

    fn format_attr(&self, key: &str, value: &AttrValue<'_>) -> Option<String> {
        match value {
            AttrValue::Scalar(Value::Bool(true)) if self.mode().is_xml() => {
                Some(format!("{key}=\"{key}\""))
            }
            AttrValue::Scalar(Value::Bool(true)) => Some(key.to_string()),
            value if value.is_falsy() => None,
            value => value.to_text().map(|text| self.quoted(key, &text)),
        }
    }

    /// Attribute values are escaped whatever `escape_strings` says.
    fn quoted(&self, key: &str, text: &str) -> String {
        format!("{key}=\"{}\"", escape_html(text, self.mode(), true))
    }
}
