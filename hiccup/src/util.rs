//! Utility functions.

use std::borrow::Cow;

use num::ToPrimitive;

use crate::{Mode, Value};

/// Replace `&`, `<`, `>`, `"` and `'` with character entities.
///
/// Returns `text` untouched when `escape_strings` is `false`. The apostrophe entity
/// depends on the mode: `&#39;` for [`Mode::Sgml`], `&apos;` otherwise.
///
/// ```
/// use hiccup::{util::escape_html, Mode};
///
/// assert_eq!(escape_html("<a href='x'>", Mode::Html, true), "&lt;a href=&apos;x&apos;&gt;");
/// assert_eq!(escape_html("it's", Mode::Sgml, true), "it&#39;s");
/// assert_eq!(escape_html("<b>", Mode::Html, false), "<b>");
/// ```
pub fn escape_html(text: &str, mode: Mode, escape_strings: bool) -> Cow<'_, str> {
    if !escape_strings {
        return Cow::Borrowed(text);
    }
    let escaped = html_escape::encode_double_quoted_attribute(text);
    if escaped.contains('\'') {
        Cow::Owned(escaped.replace('\'', mode.apostrophe_entity()))
    } else {
        escaped
    }
}

/// Convert a value to the string used for it in markup.
///
/// Fractions render as their decimal value, URIs as their reconstructed URL.
pub fn stringify<'a>(value: &'a Value<'_>) -> Cow<'a, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Int(i) => Cow::Owned(i.to_string()),
        Value::Float(f) => Cow::Owned(format_float(*f)),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Fraction(r) => Cow::Owned(format_float(r.to_f64().unwrap_or(f64::NAN))),
        Value::Uri(uri) => Cow::Owned(uri.to_string()),
    }
}

/// Format a float the way it reads in a document: the shortest digits that read
/// back as `value`, integral values keep a trailing `.0`, and exponents below -4 or
/// from 16 up switch to scientific notation with a signed, two-digit exponent.
///
/// ```
/// use hiccup::util::format_float;
///
/// assert_eq!(format_float(3.0), "3.0");
/// assert_eq!(format_float(1e20), "1e+20");
/// assert_eq!(format_float(1.5e-7), "1.5e-07");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if (-4..16).contains(&exponent) {
        let fixed = value.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            fixed + ".0"
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::{collections::String as BumpString, Bump};
    use num::rational::Ratio;

    #[test]
    fn escapes_ampersands_first() {
        assert_eq!(
            escape_html("&lt; & \"quoted\"", Mode::Xhtml, true),
            "&amp;lt; &amp; &quot;quoted&quot;"
        );
    }

    #[test]
    fn escaped_text_has_no_markup_characters() {
        let escaped = escape_html(r#"<script>alert('x' + "y") && 1 > 0</script>"#, Mode::Html, true);
        for c in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(c), "{escaped} contains {c}");
        }
        assert!(escaped
            .match_indices('&')
            .all(|(i, _)| escaped[i..].starts_with("&amp;")
                || escaped[i..].starts_with("&lt;")
                || escaped[i..].starts_with("&gt;")
                || escaped[i..].starts_with("&quot;")
                || escaped[i..].starts_with("&apos;")));
    }

    #[test]
    fn borrows_when_nothing_to_escape() {
        assert!(matches!(escape_html("plain", Mode::Html, true), Cow::Borrowed(_)));
    }

    #[test]
    fn stringifies_fractions_as_decimals() {
        assert_eq!(stringify(&Value::Fraction(Ratio::new(1, 2))), "0.5");
        assert_eq!(stringify(&Value::Fraction(Ratio::new(6, 2))), "3.0");
        assert_eq!(stringify(&Value::Fraction(Ratio::new(1, 3))), "0.3333333333333333");
        let large = Ratio::new(i64::MAX - 1, i64::MAX);
        assert_eq!(stringify(&Value::Fraction(large)), "1.0");
    }

    #[test]
    fn stringifies_scalars() {
        let bump = Bump::new();
        assert_eq!(
            stringify(&Value::String(BumpString::from_str_in("x", &bump))),
            "x"
        );
        assert_eq!(stringify(&Value::Int(-42)), "-42");
        assert_eq!(stringify(&Value::Float(2.25)), "2.25");
        assert_eq!(stringify(&Value::Bool(true)), "true");
        assert_eq!(
            stringify(&Value::Uri(crate::Uri::parse("http://example.com/a?b=c"))),
            "http://example.com/a?b=c"
        );
    }

    #[test]
    fn formats_floats() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(-0.0), "-0.0");
    }

    #[test]
    fn switches_to_scientific_notation_at_the_edges() {
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1e20), "1e+20");
        assert_eq!(format_float(-2.5e100), "-2.5e+100");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1e-7), "1e-07");
        assert_eq!(format_float(123456.789), "123456.789");
    }
}
