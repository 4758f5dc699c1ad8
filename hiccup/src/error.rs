/// Errors raised while compiling a tree or converting values to URIs.
///
/// Rendering is all-or-nothing: the first error aborts the render call and any
/// partially built output is discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An element list is empty, does not start with a tag name, or its tag
    /// descriptor has no name segment.
    #[error("{element} is not a well-formed element list")]
    MalformedElement {
        /// The offending element list, in literal notation.
        element: String,
    },
    /// A void tag such as `img` or `br` was given children.
    #[error("'{tag}' cannot have children")]
    VoidTagWithChildren {
        /// The name of the void tag.
        tag: String,
    },
    /// An attributes map was found somewhere other than directly after a tag name.
    #[error("attributes map {attrs} must directly follow a tag name")]
    StrayAttributes {
        /// The misplaced map, in literal notation.
        attrs: String,
    },
    /// A value that is neither a string nor a URI was converted to a URI.
    #[error("{input} should be a string or a URI")]
    InvalidUriInput {
        /// The rejected value, in literal notation.
        input: String,
    },
    /// An encoding label that names no known text encoding.
    #[error("unknown text encoding {0:?}")]
    UnknownEncoding(String),
    /// A render mode name was not one of `html`, `xhtml`, `xml` or `sgml`.
    #[error("unknown render mode {0:?}, expected one of html, xhtml, xml or sgml")]
    UnknownMode(String),
}

/// A `Result` whose error defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
