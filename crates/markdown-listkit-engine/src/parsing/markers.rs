use std::sync::OnceLock;

use regex::Regex;

/// A numbered list marker (`1. ` or `1) `) at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMarker<'a> {
    /// Leading whitespace before the number, verbatim.
    pub indent: &'a str,
    /// The number itself.
    pub number: u64,
}

/// A recognized marker where only the indentation matters to the caller.
///
/// Used when sniffing a predecessor line for an unordered or blockquote
/// rewrite: the marker body is inspected to decide the line qualifies, then
/// discarded, because those rewrites always emit their own fixed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentedMarker<'a> {
    /// Leading whitespace before the marker body, verbatim.
    pub indent: &'a str,
}

/// Any recognized marker at the start of a target line, with the byte length
/// of the full matched prefix (indent, body, and trailing whitespace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingMarker<'a> {
    /// Leading whitespace before the marker body.
    pub indent: &'a str,
    /// The marker body: a numeric-dot/numeric-paren marker, `-`, `*`, `+`,
    /// or `>`.
    pub body: &'a str,
    /// Byte length of the whole matched prefix, the span a rewrite replaces.
    pub len: usize,
}

/// Parses a numbered list marker from the start of `line`.
///
/// Matches `1. `, `42) `, etc., with any leading whitespace. At least one
/// whitespace character must follow the dot or paren. Numbers too large for
/// `u64` are treated as no marker.
pub fn ordered_marker(line: &str) -> Option<OrderedMarker<'_>> {
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    let re = ORDERED
        .get_or_init(|| Regex::new(r"^(\s*)(\d+)[.)]\s+").expect("Invalid ordered marker regex"));

    let caps = re.captures(line)?;
    let number = caps.get(2)?.as_str().parse().ok()?;
    Some(OrderedMarker {
        indent: caps.get(1)?.as_str(),
        number,
    })
}

/// Parses a bullet (`-`, `*`, `+`) or numbered marker from the start of
/// `line`, keeping only its indentation.
///
/// Numbered markers qualify here so that converting a numbered list to
/// bullets inherits the list's indentation.
pub fn bullet_marker(line: &str) -> Option<IndentedMarker<'_>> {
    static BULLET: OnceLock<Regex> = OnceLock::new();
    let re = BULLET.get_or_init(|| {
        Regex::new(r"^(\s*)(?:[-*+]|\d+[.)])\s+").expect("Invalid bullet marker regex")
    });

    let caps = re.captures(line)?;
    Some(IndentedMarker {
        indent: caps.get(1)?.as_str(),
    })
}

/// Parses a blockquote marker (`> `) from the start of `line`, keeping only
/// its indentation.
pub fn quote_marker(line: &str) -> Option<IndentedMarker<'_>> {
    static QUOTE: OnceLock<Regex> = OnceLock::new();
    let re =
        QUOTE.get_or_init(|| Regex::new(r"^(\s*)>\s+").expect("Invalid quote marker regex"));

    let caps = re.captures(line)?;
    Some(IndentedMarker {
        indent: caps.get(1)?.as_str(),
    })
}

/// Detects any recognized marker at the start of a target line: numeric-dot,
/// numeric-paren, bullet, or blockquote.
///
/// Returns the byte span a rewrite should replace. A line whose marker has no
/// trailing whitespace (e.g. `"1.done"`) is not recognized; the new prefix is
/// inserted in front of it instead.
pub fn leading_marker(line: &str) -> Option<LeadingMarker<'_>> {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    let re = LEADING.get_or_init(|| {
        Regex::new(r"^(\s*)(\d+[.)]|[-*+]|>)\s+").expect("Invalid leading marker regex")
    });

    let caps = re.captures(line)?;
    Some(LeadingMarker {
        indent: caps.get(1)?.as_str(),
        body: caps.get(2)?.as_str(),
        len: caps.get(0)?.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_dot() {
        let m = ordered_marker("7. item").unwrap();
        assert_eq!(m.indent, "");
        assert_eq!(m.number, 7);
    }

    #[test]
    fn ordered_paren_with_indent() {
        let m = ordered_marker("  12) item").unwrap();
        assert_eq!(m.indent, "  ");
        assert_eq!(m.number, 12);
    }

    #[test]
    fn ordered_requires_trailing_whitespace() {
        assert_eq!(ordered_marker("3.14 pi"), None);
    }

    #[test]
    fn ordered_rejects_plain_text() {
        assert_eq!(ordered_marker("hello"), None);
    }

    #[test]
    fn ordered_rejects_oversized_number() {
        assert_eq!(ordered_marker("99999999999999999999999. item"), None);
    }

    #[test]
    fn bullet_styles() {
        assert_eq!(bullet_marker("- a").unwrap().indent, "");
        assert_eq!(bullet_marker("* a").unwrap().indent, "");
        assert_eq!(bullet_marker("+ a").unwrap().indent, "");
    }

    #[test]
    fn bullet_accepts_numbered() {
        assert_eq!(bullet_marker("  3) a").unwrap().indent, "  ");
    }

    #[test]
    fn bullet_rejects_quote() {
        assert_eq!(bullet_marker("> a"), None);
    }

    #[test]
    fn quote_with_tab_indent() {
        assert_eq!(quote_marker("\t> quoted").unwrap().indent, "\t");
    }

    #[test]
    fn quote_rejects_bullet() {
        assert_eq!(quote_marker("- a"), None);
    }

    #[test]
    fn leading_numbered_paren() {
        let m = leading_marker("3) old text").unwrap();
        assert_eq!((m.indent, m.body, m.len), ("", "3)", 3));
    }

    #[test]
    fn leading_quote_with_indent() {
        let m = leading_marker("  > quoted").unwrap();
        assert_eq!((m.indent, m.body, m.len), ("  ", ">", 4));
    }

    #[test]
    fn leading_none_on_plain_text() {
        assert_eq!(leading_marker("plain text"), None);
    }

    #[test]
    fn leading_none_without_trailing_whitespace() {
        assert_eq!(leading_marker("-dash-word"), None);
    }
}
