//! Plain-text derivation from the HTML alert body.

use std::sync::LazyLock;

use regex::Regex;

/// Tags that imply a line break in the text rendering.
static BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</p>|</div>|</h[1-6]>|</li>").unwrap());

/// Any remaining markup.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Strip HTML down to a plain-text fallback body.
pub fn html_to_text(html: &str) -> String {
    let with_breaks = BREAK_RE.replace_all(html, "\n");
    let stripped = TAG_RE.replace_all(&with_breaks, "");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_text() {
        let html = "<p>Emergency at <strong>City Hospital</strong></p>";
        assert_eq!(html_to_text(html), "Emergency at City Hospital");
    }

    #[test]
    fn block_endings_become_line_breaks() {
        let html = "<p>line one</p><p>line two</p><br>line three";
        assert_eq!(html_to_text(html), "line one\nline two\nline three");
    }

    #[test]
    fn decodes_common_entities() {
        assert_eq!(html_to_text("a &amp; b &lt;c&gt;&nbsp;d"), "a & b <c> d");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(html_to_text("no markup here"), "no markup here");
    }
}
