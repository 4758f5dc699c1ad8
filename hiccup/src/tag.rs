//! Tag descriptors: `name[#id][.class1.class2...]`.

/// Tags that cannot have children.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Returns `true` if `tag` is in [`VOID_TAGS`].
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// A parsed tag descriptor such as `div#main.wide.dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    /// The element name.
    pub name: String,
    /// The id given after `#`, if any.
    pub id: Option<String>,
    /// The classes given after `.`, joined by spaces. Empty when there are none.
    pub classes: String,
}
impl TagDescriptor {
    /// Parse a descriptor.
    ///
    /// The name runs up to the first whitespace, `.` or `#`. An `#id` segment may
    /// follow, then a `.class` segment running up to the next whitespace or `#`.
    /// Anything after that is ignored. Returns `None` when the name is empty.
    ///
    /// ```
    /// use hiccup::TagDescriptor;
    ///
    /// let tag = TagDescriptor::parse("div#my-id.a.b").unwrap();
    /// assert_eq!(tag.name, "div");
    /// assert_eq!(tag.id.as_deref(), Some("my-id"));
    /// assert_eq!(tag.classes, "a b");
    /// ```
    pub fn parse(descriptor: &str) -> Option<Self> {
        let name_len = segment_len(descriptor, |c| c == '.' || c == '#');
        if name_len == 0 {
            return None;
        }
        let (name, mut rest) = descriptor.split_at(name_len);

        let mut id = None;
        if let Some(after_hash) = rest.strip_prefix('#') {
            let id_len = segment_len(after_hash, |c| c == '.' || c == '#');
            if id_len > 0 {
                id = Some(after_hash[..id_len].to_string());
                rest = &after_hash[id_len..];
            }
        }

        let classes = match rest.strip_prefix('.') {
            Some(after_dot) => after_dot[..segment_len(after_dot, |c| c == '#')].replace('.', " "),
            None => String::new(),
        };

        Some(Self {
            name: name.to_string(),
            id,
            classes,
        })
    }
}

/// Length of the longest prefix of `s` free of whitespace and `stop` characters.
fn segment_len(s: &str, stop: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| c.is_whitespace() || stop(c))
        .unwrap_or(s.len())
}
