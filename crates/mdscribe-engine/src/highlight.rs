//! Syntax highlighting contract.
//!
//! The parser never highlights code itself. Callers own a [`Highlighter`]
//! (built once, passed by reference) and ask a code block for markup via
//! [`Block::highlighted`](crate::models::Block::highlighted).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HighlightError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("highlighter failed: {0}")]
    Engine(String),
}

/// Turns code into a safe markup fragment.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<String, HighlightError>;
}

/// Highlighter output, or escaped plain text when highlighting fails.
pub fn highlight_or_escape(
    highlighter: &dyn Highlighter,
    code: &str,
    language: Option<&str>,
) -> String {
    highlighter.highlight(code, language).unwrap_or_else(|e| {
        log::debug!("falling back to plain code: {e}");
        plain(code, None)
    })
}

fn plain(code: &str, language: Option<&str>) -> String {
    let escaped = html_escape::encode_safe(code);
    match language {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{escaped}</code></pre>",
            html_escape::encode_double_quoted_attribute(lang)
        ),
        None => format!("<pre><code>{escaped}</code></pre>"),
    }
}

/// Escapes code and tags the language class. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<String, HighlightError> {
        Ok(plain(code, language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, BlockKind, CodeBlock, CodeKind};

    struct Failing;

    impl Highlighter for Failing {
        fn highlight(&self, _: &str, language: Option<&str>) -> Result<String, HighlightError> {
            Err(HighlightError::UnsupportedLanguage(
                language.unwrap_or("none").to_string(),
            ))
        }
    }

    #[test]
    fn plain_highlighter_escapes_and_tags() {
        let out = PlainHighlighter.highlight("a < b && c", Some("rust")).unwrap();
        assert_eq!(
            out,
            "<pre><code class=\"language-rust\">a &lt; b &amp;&amp; c</code></pre>"
        );
    }

    #[test]
    fn failure_falls_back_to_escaped_text() {
        let out = highlight_or_escape(&Failing, "<script>", Some("cobol"));
        assert_eq!(out, "<pre><code>&lt;script&gt;</code></pre>");
    }

    #[test]
    fn only_code_blocks_highlight() {
        let code = Block::new(
            BlockKind::Code(CodeBlock {
                language: Some("sh".into()),
                kind: CodeKind::Fenced,
                icon: None,
            }),
            "ls",
            "```sh\nls\n```",
        );
        assert!(code.highlighted(&PlainHighlighter).is_some());
        let para = Block::new(BlockKind::Paragraph, "x", "x");
        assert_eq!(para.highlighted(&PlainHighlighter), None);
    }
}
