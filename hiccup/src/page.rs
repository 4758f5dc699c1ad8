//! Helpers for whole documents: doctypes, XML declarations and the `html` root.

use crate::{builder::Builder, hiccup, merge_attrs, Attrs, IntoNode, Mode, Node, Result, Uri};

/// A document type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Doctype {
    /// HTML 4.01 Strict.
    Html4,
    /// XHTML 1.0 Strict.
    XhtmlStrict,
    /// XHTML 1.0 Transitional.
    XhtmlTransitional,
    /// HTML5.
    Html5,
}
impl Doctype {
    /// The declaration, followed by a newline.
    pub fn as_str(self) -> &'static str {
        match self {
            Doctype::Html4 => concat!(
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" ",
                "\"http://www.w3.org/TR/html4/strict.dtd\">\n"
            ),
            Doctype::XhtmlStrict => concat!(
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" ",
                "\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n"
            ),
            Doctype::XhtmlTransitional => concat!(
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" ",
                "\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n"
            ),
            Doctype::Html5 => "<!DOCTYPE html>\n",
        }
    }
}

impl<'bump> Builder<'bump> {
    /// The declaration for `kind`, as raw markup.
    pub fn doctype(&self, kind: Doctype) -> Node<'bump> {
        self.raw(kind.as_str())
    }

    /// An XML declaration for `encoding`.
    pub fn xml_declaration(&self, encoding: &str) -> Node<'bump> {
        self.raw(["<?xml version=\"1.0\" encoding=\"", encoding, "\"?>\n"])
    }

    /// An XHTML `html` root for the language `lang`.
    #[hiccup_macro::defelem]
    pub fn xhtml_tag(&self, lang: Option<&str>, contents: impl IntoNode<'bump>) -> Node<'bump> {
        hiccup! { in self.bump();
            ["html", {xmlns: "http://www.w3.org/1999/xhtml", "xml:lang": lang, lang: lang}, contents]
        }
    }

    /// An HTML 4.01 document, rendered in SGML mode.
    pub fn html4(
        &self,
        attrs: Option<Attrs<'bump>>,
        contents: impl IntoNode<'bump>,
    ) -> Result<Node<'bump>> {
        let root = merge_attrs(self.el("html", [contents]), attrs);
        self.html(Mode::Sgml, [self.doctype(Doctype::Html4), root])
    }

    /// An XHTML 1.0 Strict document, declared with the context's encoding.
    pub fn xhtml(
        &self,
        attrs: Option<Attrs<'bump>>,
        lang: Option<&str>,
        contents: impl IntoNode<'bump>,
    ) -> Result<Node<'bump>> {
        self.html(
            Mode::Xhtml,
            [
                self.xml_declaration(self.context().encoding()),
                self.doctype(Doctype::XhtmlStrict),
                self.xhtml_tag(attrs, lang, contents),
            ],
        )
    }

    /// An HTML5 document. With `xml`, it is rendered in XML mode with an XML
    /// declaration and an XHTML root.
    pub fn html5(
        &self,
        attrs: Option<Attrs<'bump>>,
        lang: Option<&str>,
        xml: bool,
        contents: impl IntoNode<'bump>,
    ) -> Result<Node<'bump>> {
        if xml {
            return self.html(
                Mode::Xml,
                [
                    self.xml_declaration(self.context().encoding()),
                    self.doctype(Doctype::Html5),
                    self.xhtml_tag(attrs, lang, contents),
                ],
            );
        }
        let attrs = attrs
            .unwrap_or_else(|| Attrs::new_in(self.bump()))
            .with("lang", lang);
        self.html(
            Mode::Html,
            [
                self.doctype(Doctype::Html5),
                self.el_with("html", attrs, [contents]),
            ],
        )
    }

    /// A `script` element for each of `scripts`.
    pub fn include_js<U: Into<Uri>>(&self, scripts: impl IntoIterator<Item = U>) -> Node<'bump> {
        let scripts = scripts.into_iter().map(|script| {
            let src = self.context().uri(script);
            hiccup! { in self.bump(); ["script", {type: "text/javascript", src: src}] }
        });
        self.fragment(scripts)
    }

    /// A stylesheet `link` element for each of `styles`.
    pub fn include_css<U: Into<Uri>>(&self, styles: impl IntoIterator<Item = U>) -> Node<'bump> {
        let styles = styles.into_iter().map(|style| {
            let href = self.context().uri(style);
            hiccup! { in self.bump();
                ["link", {type: "text/css", href: href, rel: "stylesheet"}]
            }
        });
        self.fragment(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bumpalo::Bump, render, Context};

    #[test]
    fn html4_is_sgml() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let page = b.html4(None, b.el("body", [b.el("p", ["it's"])])).unwrap();
        assert_eq!(
            render([page]).unwrap(),
            concat!(
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" ",
                "\"http://www.w3.org/TR/html4/strict.dtd\">\n",
                "<html><body><p>it&#39;s</p></body></html>"
            )
        );
    }

    #[test]
    fn xhtml_declares_the_context_encoding() {
        let bump = Bump::new();
        let context = Context::new().with_encoding("ISO-8859-1");
        let b = Builder::with_context(&bump, &context);
        let page = b.xhtml(None, Some("en"), b.node(["body"])).unwrap();
        assert_eq!(
            render([page]).unwrap(),
            concat!(
                "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n",
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" ",
                "\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\n",
                "<html lang=\"en\" xml:lang=\"en\" xmlns=\"http://www.w3.org/1999/xhtml\">",
                "<body></body></html>"
            )
        );
    }

    #[test]
    fn html5_lang_overrides_attributes() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let attrs = Attrs::from_iter_in(&bump, [("lang", "fr"), ("class", "x")]);
        let page = b.html5(Some(attrs), Some("en"), false, b.node(["body"])).unwrap();
        assert_eq!(
            render([page]).unwrap(),
            "<!DOCTYPE html>\n<html class=\"x\" lang=\"en\"><body></body></html>"
        );
    }

    #[test]
    fn html5_in_xml_mode() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let page = b.html5(None, None, true, b.node(["br"])).unwrap();
        assert_eq!(
            render([page]).unwrap(),
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<!DOCTYPE html>\n",
                "<html xmlns=\"http://www.w3.org/1999/xhtml\"><br /></html>"
            )
        );
    }

    #[test]
    fn includes_are_sequences_of_elements() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(
            render([b.include_js(["/a.js", "/b.js"])]).unwrap(),
            concat!(
                "<script src=\"/a.js\" type=\"text/javascript\"></script>",
                "<script src=\"/b.js\" type=\"text/javascript\"></script>"
            )
        );
        assert_eq!(
            render([b.include_css(["/a.css"])]).unwrap(),
            r#"<link href="/a.css" rel="stylesheet" type="text/css" />"#
        );
    }
}
