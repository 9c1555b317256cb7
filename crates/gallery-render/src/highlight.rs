//! Syntax highlighting seam.
//!
//! Highlighting is an external capability: implementations receive the
//! processed source text, a language tag, and a theme name, and return
//! display-ready markup. A failing (or absent) highlighter never affects
//! page availability; the renderer falls back to an escaped
//! `<pre><code>` block.

use std::fmt::Write;

/// Error returned by a highlighting implementation.
#[derive(Debug, thiserror::Error)]
#[error("Highlighting failed: {0}")]
pub struct HighlightError(pub String);

/// External highlighting capability.
pub trait Highlight: Send + Sync {
    /// Produce display-ready markup for the given source.
    fn highlight(&self, source: &str, language: &str, theme: &str)
    -> Result<String, HighlightError>;
}

impl<F> Highlight for F
where
    F: Fn(&str, &str, &str) -> Result<String, HighlightError> + Send + Sync,
{
    fn highlight(
        &self,
        source: &str,
        language: &str,
        theme: &str,
    ) -> Result<String, HighlightError> {
        self(source, language, theme)
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escaped `<pre><code>` rendering used when highlighting is unavailable.
pub fn fallback_code_block(language: &str, source: &str) -> String {
    let mut out = String::new();
    write!(
        out,
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        escape_html(language),
        escape_html(source)
    )
    .unwrap();
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;"
        );
    }

    #[test]
    fn test_fallback_code_block() {
        assert_eq!(
            fallback_code_block("tsx", "const a = 1;"),
            r#"<pre><code class="language-tsx">const a = 1;</code></pre>"#
        );
    }

    #[test]
    fn test_fallback_escapes_script_tags() {
        let out = fallback_code_block("tsx", "<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_closure_highlighter() {
        let upper = |source: &str, _lang: &str, _theme: &str| Ok(source.to_uppercase());
        assert_eq!(upper.highlight("abc", "tsx", "auto").unwrap(), "ABC");
    }
}
