use std::fmt;
use std::str::FromStr;

use crate::{tag::is_void_tag, Error};

/// The markup dialect to render, controlling self-closing style, boolean attribute
/// style and the apostrophe entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub enum Mode {
    /// HTML: empty non-void tags as `<p></p>`, void tags as `<br>`.
    Html,
    /// XHTML: empty non-void tags as `<p></p>`, void tags as `<br />`.
    #[default]
    Xhtml,
    /// XML: every empty tag self-closes.
    Xml,
    /// SGML: like HTML, but apostrophes are escaped as `&#39;` and empty tags are left open.
    Sgml,
}
impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Html, Mode::Xhtml, Mode::Xml, Mode::Sgml];

    /// The lowercase name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Html => "html",
            Mode::Xhtml => "xhtml",
            Mode::Xml => "xml",
            Mode::Sgml => "sgml",
        }
    }

    /// Returns `true` for the modes that self-close empty tags and spell boolean
    /// attributes out (`xml` and `xhtml`).
    pub fn is_xml(self) -> bool {
        matches!(self, Mode::Xml | Mode::Xhtml)
    }

    /// Returns `true` for the modes that know about container tags (`html` and `xhtml`).
    pub fn is_html(self) -> bool {
        matches!(self, Mode::Html | Mode::Xhtml)
    }

    /// The entity used to escape `'`.
    pub fn apostrophe_entity(self) -> &'static str {
        match self {
            Mode::Sgml => "&#39;",
            _ => "&apos;",
        }
    }

    /// Returns `true` if an empty `tag` is rendered with an explicit closing tag.
    pub fn is_container_tag(self, tag: &str) -> bool {
        self.is_html() && !is_void_tag(tag)
    }
}
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}
impl TryFrom<String> for Mode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("html", Mode::Html)]
    #[case("XHTML", Mode::Xhtml)]
    #[case("Xml", Mode::Xml)]
    #[case(" sgml ", Mode::Sgml)]
    fn parses_mode_names_case_insensitively(#[case] input: &str, #[case] expected: Mode) {
        assert_eq!(input.parse::<Mode>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_modes() {
        assert_eq!(
            "html5".parse::<Mode>(),
            Err(Error::UnknownMode("html5".to_string()))
        );
    }

    #[test]
    fn mode_families() {
        assert!(Mode::Xhtml.is_xml() && Mode::Xhtml.is_html());
        assert!(Mode::Xml.is_xml() && !Mode::Xml.is_html());
        assert!(!Mode::Html.is_xml() && Mode::Html.is_html());
        assert!(!Mode::Sgml.is_xml() && !Mode::Sgml.is_html());
    }

    #[test]
    fn container_tags_depend_on_mode_and_voidness() {
        assert!(Mode::Html.is_container_tag("p"));
        assert!(!Mode::Html.is_container_tag("br"));
        assert!(!Mode::Xml.is_container_tag("p"));
        assert!(!Mode::Sgml.is_container_tag("p"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }
}
