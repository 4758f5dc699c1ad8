//! URIs, URL building and URL encoding.

use std::fmt;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_8};
use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{config::DEFAULT_CONTEXT, Error, Result, Value};

/// Characters left alone by [`url_encode`]: ASCII letters, digits and `_.-~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// A URI split into its five components.
///
/// Parsing never fails; every string splits into some URI, and [`Display`](fmt::Display)
/// puts the components back together.
///
/// ```
/// use hiccup::Uri;
///
/// let uri = Uri::parse("https://example.com/a/b?x=1#top");
/// assert_eq!(uri.scheme, "https");
/// assert_eq!(uri.netloc, "example.com");
/// assert_eq!(uri.path, "/a/b");
/// assert_eq!(uri.query, "x=1");
/// assert_eq!(uri.fragment, "top");
/// assert_eq!(uri.to_string(), "https://example.com/a/b?x=1#top");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Uri {
    /// The lowercased scheme, without the `:`.
    pub scheme: String,
    /// The network location, without the leading `//`.
    pub netloc: String,
    /// Whether the URI was written with a `//` authority, which may be empty as in
    /// `file:///etc/hosts`.
    pub has_authority: bool,
    /// The path.
    pub path: String,
    /// The query, without the `?`.
    pub query: String,
    /// The fragment, without the `#`.
    pub fragment: String,
}
impl Uri {
    /// Split `url` into its components.
    pub fn parse(url: &str) -> Self {
        let mut rest = url;

        let mut scheme = String::new();
        if let Some((candidate, after)) = rest.split_once(':') {
            let valid = candidate.starts_with(|c: char| c.is_ascii_alphabetic())
                && candidate
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
            if valid {
                scheme = candidate.to_ascii_lowercase();
                rest = after;
            }
        }

        let mut netloc = String::new();
        let has_authority = rest.starts_with("//");
        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            netloc = after[..end].to_string();
            rest = &after[end..];
        }

        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            scheme,
            netloc,
            has_authority,
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        }
    }

    /// Returns `true` if the URI has no scheme and no network location.
    pub fn is_relative(&self) -> bool {
        self.scheme.is_empty() && self.netloc.is_empty()
    }
}
impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if self.has_authority || !self.netloc.is_empty() {
            write!(f, "//{}", self.netloc)?;
            if !self.path.is_empty() && !self.path.starts_with('/') {
                f.write_str("/")?;
            }
        } else if self.path.starts_with("//") {
            f.write_str("//")?;
        }
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}
impl FromStr for Uri {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Uri::parse(s))
    }
}
impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Uri::parse(s)
    }
}
impl From<String> for Uri {
    fn from(s: String) -> Self {
        Uri::parse(&s)
    }
}
impl From<&String> for Uri {
    fn from(s: &String) -> Self {
        Uri::parse(s)
    }
}
impl From<&Uri> for Uri {
    fn from(uri: &Uri) -> Self {
        uri.clone()
    }
}

/// Values that may be turned into a [`Uri`]: strings, URIs, and [`Value`]s holding either.
pub trait TryIntoUri {
    /// Convert into a [`Uri`], failing with [`Error::InvalidUriInput`] for any other kind
    /// of value.
    fn try_into_uri(self) -> Result<Uri>;
}
macro_rules! infallible_uris {
    ($($t:ty),*) => {
        $(
            impl TryIntoUri for $t {
                fn try_into_uri(self) -> Result<Uri> {
                    Ok(self.into())
                }
            }
        )*
    };
}
infallible_uris!(&str, String, &String, Uri, &Uri);
impl TryIntoUri for &Value<'_> {
    fn try_into_uri(self) -> Result<Uri> {
        match self {
            Value::String(s) => Ok(Uri::parse(s)),
            Value::Uri(uri) => Ok(uri.clone()),
            other => Err(Error::InvalidUriInput {
                input: format!("{other:?}"),
            }),
        }
    }
}
impl TryIntoUri for Value<'_> {
    fn try_into_uri(self) -> Result<Uri> {
        match self {
            Value::Uri(uri) => Ok(uri),
            other => (&other).try_into_uri(),
        }
    }
}

/// Convert `value` into a [`Uri`] under the default [`Context`](crate::Context).
pub fn to_uri(value: impl TryIntoUri) -> Result<Uri> {
    DEFAULT_CONTEXT.to_uri(value)
}

/// Concatenate `parts` and append the UTF-8 url-encoded `query`, if any, under the
/// default [`Context`](crate::Context).
///
/// ```
/// use hiccup::uri::url;
///
/// let uri = url(["/search/", "books"], [("q", "rust lang"), ("page", "2")]);
/// assert_eq!(uri.to_string(), "/search/books?q=rust+lang&page=2");
/// ```
pub fn url<P, K, V>(
    parts: impl IntoIterator<Item = P>,
    query: impl IntoIterator<Item = (K, V)>,
) -> Uri
where
    P: fmt::Display,
    K: fmt::Display,
    V: fmt::Display,
{
    DEFAULT_CONTEXT.uri(join_url(parts, query, UTF_8))
}

pub(crate) fn join_url<P, K, V>(
    parts: impl IntoIterator<Item = P>,
    query: impl IntoIterator<Item = (K, V)>,
    encoding: &'static Encoding,
) -> String
where
    P: fmt::Display,
    K: fmt::Display,
    V: fmt::Display,
{
    let mut joined: String = parts.into_iter().map(|p| p.to_string()).collect();
    let query = encode_pairs(query, encoding);
    if !query.is_empty() {
        joined.push('?');
        joined.push_str(&query);
    }
    joined
}

/// Look up a text encoding by its label, such as `"UTF-8"` or `"ISO-2022-JP"`.
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Percent-encode `s` for a query component: spaces become `+`, letters, digits and
/// `_.-~` are kept, and every other byte of its UTF-8 encoding becomes `%XX`.
///
/// ```
/// use hiccup::uri::url_encode;
///
/// assert_eq!(url_encode("a b&c=d/é"), "a+b%26c%3Dd%2F%C3%A9");
/// ```
pub fn url_encode(s: &str) -> String {
    encode_component(s, UTF_8)
}

/// Encode `key=value` pairs with [`url_encode`], joined by `&`.
pub fn url_encode_pairs<K: fmt::Display, V: fmt::Display>(
    pairs: impl IntoIterator<Item = (K, V)>,
) -> String {
    encode_pairs(pairs, UTF_8)
}

pub(crate) fn encode_pairs<K: fmt::Display, V: fmt::Display>(
    pairs: impl IntoIterator<Item = (K, V)>,
    encoding: &'static Encoding,
) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                encode_component(&k.to_string(), encoding),
                encode_component(&v.to_string(), encoding)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Characters the encoding cannot represent become numeric character references.
fn encode_component(s: &str, encoding: &'static Encoding) -> String {
    let (bytes, _, _) = encoding.encode(s);
    percent_encode(&bytes, QUERY_COMPONENT)
        .to_string()
        .replace("%20", "+")
}
