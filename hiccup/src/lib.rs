#![deny(missing_docs)]
//! A crate for compiling trees of plain data into HTML, XHTML, XML or SGML markup.
//!
//! An element is a list whose first item is a tag such as `"div#main.wide"`, whose
//! optional second item is an attributes map, and whose remaining items are its
//! children. Trees are made of [Node]s, built through either [hiccup!] or
//! [builder::Builder], and rendered with [render] or [render_with].
//!
//! All allocations are done through a bump allocator ([bumpalo::Bump]) which must be
//! passed to all node-creating functions.
//!
//! # Example
//!
//! ```
//! use hiccup::{bumpalo::Bump, hiccup, render};
//!
//! let bump = Bump::new();
//! let node = hiccup! { in &bump;
//!     ["div#main.container", {class: "wide"},
//!         ["h1", "Hello, World!"]]
//! };
//! assert_eq!(
//!     render([node]).unwrap(),
//!     r#"<div class="container wide" id="main"><h1>Hello, World!</h1></div>"#
//! );
//! ```

// Lets the macros' `::hiccup` paths resolve inside this crate.
extern crate self as hiccup;

mod tracing_macros;
pub(crate) use tracing_macros::{debug, trace};

pub mod builder;
pub mod element;
pub mod form;
pub mod page;
pub mod uri;
pub mod util;

// Re-export bumpalo for convenience
pub use bumpalo;
pub use bumpalo::Bump;

mod attribute;
pub use attribute::{AttrValue, Attribute, Attrs, IntoAttrValue, IntoAttribute};

mod compiler;
pub use compiler::Compiler;

mod config;
pub use config::{Context, RenderOptions};

mod definition;
pub use definition::{
    defelem, defelem_method, defelem_variadic, defhtml, merge_attrs, split_attrs,
};

mod error;
pub use error::{Error, Result};

#[cfg(feature = "json")]
mod json;

mod mode;
pub use mode::Mode;

mod node;
pub use node::{IntoNode, IntoRaw, Node, Seq};

mod tag;
pub use tag::{is_void_tag, TagDescriptor, VOID_TAGS};

mod value;
pub use value::{IntoValue, Value};

pub use form::SelectOption;
pub use page::Doctype;
pub use uri::{TryIntoUri, Uri};

// The attribute macro shares its name with the `defelem` function; they live in
// different namespaces.
pub use hiccup_macro::{defelem, hiccup};

/// Render `nodes` as XHTML with strings escaped.
pub fn render<'bump>(nodes: impl IntoIterator<Item = Node<'bump>>) -> Result<String> {
    render_with(RenderOptions::default(), nodes)
}

/// Render `nodes` with the given options.
///
/// ```
/// use hiccup::{bumpalo::Bump, hiccup, render_with, Mode, RenderOptions};
///
/// let bump = Bump::new();
/// let options = RenderOptions::new(Mode::Html).escape_strings(false);
/// let node = hiccup! { in &bump; ["p", "<b>", ["br"]] };
/// assert_eq!(render_with(options, [node]).unwrap(), "<p><b><br></p>");
/// ```
pub fn render_with<'bump>(
    options: impl Into<RenderOptions>,
    nodes: impl IntoIterator<Item = Node<'bump>>,
) -> Result<String> {
    let compiler = Compiler::new(options);
    debug!(
        mode = %compiler.options().mode,
        escape_strings = compiler.options().escape_strings,
        "rendering"
    );
    compiler.compile_html(nodes)
}

/// Create a raw node, whose markup is rendered as-is and never escaped.
///
/// Collections are concatenated, and nodes inside them contribute their markup.
///
/// ```
/// use hiccup::{bumpalo::Bump, raw, render};
///
/// let bump = Bump::new();
/// assert_eq!(render([raw(&bump, ["<b>", "x", "</b>"])]).unwrap(), "<b>x</b>");
/// ```
pub fn raw<'bump>(bump: &'bump Bump, html: impl IntoRaw) -> Node<'bump> {
    let mut out = bumpalo::collections::String::new_in(bump);
    html.push_raw(&mut out);
    Node::Raw(out)
}
