//! Helpers for common elements: links, lists, images and inline scripts.
//!
//! Helpers that build a single element take an optional attributes map first, which
//! is merged into the element they return.

use crate::{builder::Builder, hiccup, IntoNode, Node, Uri};

impl<'bump> Builder<'bump> {
    /// Wrap `script` in a `script` tag and a CDATA section.
    pub fn javascript_tag(&self, script: &str) -> Node<'bump> {
        hiccup! { in self.bump();
            ["script", {type: "text/javascript"}, self.raw(["//<![CDATA[\n", script, "\n//]]>"])]
        }
    }

    /// A link to `url` around `content`. Rooted paths get the context's base URL.
    #[hiccup_macro::defelem]
    pub fn link_to(&self, url: impl Into<Uri>, content: impl IntoNode<'bump>) -> Node<'bump> {
        let href = self.context().uri(url);
        hiccup! { in self.bump(); ["a", {href: href}, content] }
    }

    /// A `mailto:` link around `content`, or around the address itself when `content`
    /// renders to nothing.
    #[hiccup_macro::defelem]
    pub fn mail_to(&self, email: &str, content: impl IntoNode<'bump>) -> Node<'bump> {
        let content = match content.into_node(self.bump()) {
            Node::Null => self.text(email),
            content => content,
        };
        hiccup! { in self.bump(); ["a", {href: format!("mailto:{email}")}, content] }
    }

    /// A `ul` with an `li` for each item, built as the list is rendered.
    #[hiccup_macro::defelem]
    pub fn unordered_list<I>(&self, items: I) -> Node<'bump>
    where
        I: IntoIterator,
        I::Item: IntoNode<'bump>,
        I::IntoIter: 'bump,
    {
        self.list([self.text("ul"), self.list_items(items)])
    }

    /// An `ol` with an `li` for each item, built as the list is rendered.
    #[hiccup_macro::defelem]
    pub fn ordered_list<I>(&self, items: I) -> Node<'bump>
    where
        I: IntoIterator,
        I::Item: IntoNode<'bump>,
        I::IntoIter: 'bump,
    {
        self.list([self.text("ol"), self.list_items(items)])
    }

    fn list_items<I>(&self, items: I) -> Node<'bump>
    where
        I: IntoIterator,
        I::Item: IntoNode<'bump>,
        I::IntoIter: 'bump,
    {
        let b = *self;
        Node::seq(items.into_iter().map(move |item| b.el("li", [item])))
    }

    /// An `img` element. Rooted paths get the context's base URL.
    #[hiccup_macro::defelem]
    pub fn image(&self, src: impl Into<Uri>, alt: Option<&str>) -> Node<'bump> {
        let src = self.context().uri(src);
        hiccup! { in self.bump(); ["img", {src: src, alt: alt}] }
    }
}

#[cfg(test)]
mod tests {
    use crate::{bumpalo::Bump, builder::Builder, render, Attrs, Context};

    #[test]
    fn javascript_is_not_escaped() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.javascript_tag("if (a < b) {}")]).unwrap(),
            "<script type=\"text/javascript\">//<![CDATA[\nif (a < b) {}\n//]]></script>"
        );
    }

    #[test]
    fn links_use_the_base_url() {
        let bump = Bump::new();
        let context = Context::new().with_base_url("/app");
        let b = Builder::with_context(&bump, &context);
        assert_eq!(
            render([b.link_to(None, "/about", "About")]).unwrap(),
            r#"<a href="/app/about">About</a>"#
        );
        assert_eq!(
            render([b.link_to(None, "https://example.com", "Out")]).unwrap(),
            r#"<a href="https://example.com">Out</a>"#
        );
    }

    #[test]
    fn mail_to_defaults_to_the_address() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.mail_to(None, "me@example.com", ())]).unwrap(),
            r#"<a href="mailto:me@example.com">me@example.com</a>"#
        );
        let attrs = Attrs::from_iter_in(&bump, [("class", "mail")]);
        assert_eq!(
            render([b.mail_to(Some(attrs), "me@example.com", "Write")]).unwrap(),
            r#"<a class="mail" href="mailto:me@example.com">Write</a>"#
        );
    }

    #[test]
    fn lists_wrap_each_item() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.unordered_list(None, ["a", "b"])]).unwrap(),
            "<ul><li>a</li><li>b</li></ul>"
        );
        let attrs = Attrs::from_iter_in(&bump, [("start", 3)]);
        assert_eq!(
            render([b.ordered_list(Some(attrs), 1..=2)]).unwrap(),
            r#"<ol start="3"><li>1</li><li>2</li></ol>"#
        );
    }

    #[test]
    fn images_drop_missing_alt_text() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.image(None, "/a.png", None)]).unwrap(),
            r#"<img src="/a.png" />"#
        );
        assert_eq!(
            render([b.image(None, "/a.png", Some("A"))]).unwrap(),
            r#"<img alt="A" src="/a.png" />"#
        );
    }
}
