use std::borrow::Cow;
use std::fmt;

use crate::{
    debug,
    trace,
    uri::{encode_pairs, join_url, lookup_encoding, TryIntoUri},
    Mode, Result, Uri,
};

/// Options controlling how a tree is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// The markup dialect.
    pub mode: Mode,
    /// Whether text nodes are HTML-escaped. Attribute values are always escaped.
    pub escape_strings: bool,
}
impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            escape_strings: true,
        }
    }
}
impl RenderOptions {
    /// Options for `mode`, with escaping on.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the markup dialect.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether text nodes are escaped.
    pub fn escape_strings(mut self, escape_strings: bool) -> Self {
        self.escape_strings = escape_strings;
        self
    }
}
impl From<Mode> for RenderOptions {
    fn from(mode: Mode) -> Self {
        Self::new(mode)
    }
}

/// Ambient settings for the helpers: the base URL prefixed to rooted relative links,
/// and the document encoding used in XML declarations.
///
/// ```
/// use hiccup::Context;
///
/// let context = Context::new().with_base_url("/app/");
/// assert_eq!(context.uri("/login").to_string(), "/app/login");
/// assert_eq!(context.uri("login").to_string(), "login");
/// assert_eq!(context.uri("http://example.com/x").to_string(), "http://example.com/x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Context {
    base_url: Cow<'static, str>,
    encoding: Cow<'static, str>,
}
impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
impl Context {
    /// No base URL, UTF-8 encoding.
    pub const fn new() -> Self {
        Self {
            base_url: Cow::Borrowed(""),
            encoding: Cow::Borrowed("UTF-8"),
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the document encoding.
    pub fn with_encoding(mut self, encoding: impl Into<Cow<'static, str>>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// The base URL without its trailing `/`.
    pub fn base_url(&self) -> &str {
        self.base_url.strip_suffix('/').unwrap_or(&self.base_url)
    }

    /// The document encoding.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Convert `value` into a [`Uri`], prefixing the base URL to rooted paths without a
    /// network location.
    pub fn uri(&self, value: impl Into<Uri>) -> Uri {
        self.rebase(value.into())
    }

    /// Like [`Context::uri`], for values that may not be URIs at all.
    pub fn to_uri(&self, value: impl TryIntoUri) -> Result<Uri> {
        match value.try_into_uri() {
            Ok(uri) => Ok(self.rebase(uri)),
            Err(err) => {
                debug!(%err, "not a URI");
                Err(err)
            }
        }
    }

    /// Concatenate `parts`, append the `query` url-encoded in the context encoding if
    /// it is not empty, and convert the result with [`Context::uri`].
    ///
    /// ```
    /// use hiccup::Context;
    ///
    /// let context = Context::new().with_encoding("ISO-2022-JP");
    /// assert_eq!(
    ///     context.url(["/a"], [("iroha", "いろは")]).unwrap().to_string(),
    ///     "/a?iroha=%1B%24B%24%24%24m%24O%1B%28B"
    /// );
    /// ```
    pub fn url<P, K, V>(
        &self,
        parts: impl IntoIterator<Item = P>,
        query: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Uri>
    where
        P: fmt::Display,
        K: fmt::Display,
        V: fmt::Display,
    {
        let encoding = lookup_encoding(self.encoding())?;
        Ok(self.uri(join_url(parts, query, encoding)))
    }

    /// Encode `key=value` pairs joined by `&`, like
    /// [`url_encode_pairs`](crate::uri::url_encode_pairs) but in the context encoding.
    pub fn url_encode_pairs<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> Result<String>
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        let encoding = lookup_encoding(self.encoding())?;
        trace!(encoding = encoding.name(), "encoding query");
        Ok(encode_pairs(pairs, encoding))
    }

    fn rebase(&self, mut uri: Uri) -> Uri {
        let base = self.base_url();
        if !base.is_empty() && uri.netloc.is_empty() && uri.path.starts_with('/') {
            trace!(base, path = %uri.path, "prefixing base url");
            uri.path.insert_str(0, base);
        }
        uri
    }
}

pub(crate) static DEFAULT_CONTEXT: Context = Context::new();
