use serde::Serialize;

/// A typed fragment of inline text.
///
/// `Reference` and an unnumbered `Footnote` are unresolved pointers until
/// [`resolve_tokens`](crate::parsing::resolve::resolve_tokens) runs; what is
/// still unresolved afterwards renders as its literal source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineToken {
    Text {
        content: String,
    },
    Bold {
        content: String,
    },
    Italic {
        content: String,
    },
    BoldItalic {
        content: String,
    },
    /// Raw zone: content is never tokenized further.
    Code {
        content: String,
    },
    Strikethrough {
        content: String,
    },
    Link {
        text: String,
        href: String,
        title: Option<String>,
    },
    /// `[text][label]`; the label defaults to the text for `[text][]`.
    Reference {
        text: String,
        label: String,
    },
    Footnote {
        id: String,
        /// Set by resolution when a definition exists.
        number: Option<usize>,
    },
    Subscript {
        content: String,
    },
    Superscript {
        content: String,
    },
    Highlight {
        content: String,
    },
    Underline {
        content: String,
    },
    Mark {
        content: String,
    },
    LineBreak,
    Math {
        latex: String,
    },
}

impl InlineToken {
    pub fn text(content: impl Into<String>) -> Self {
        InlineToken::Text {
            content: content.into(),
        }
    }

    /// Markdown source equivalent of the token.
    ///
    /// Consumers use this for unresolved references and footnotes, which
    /// render as the bracket text they were written as.
    pub fn literal(&self) -> String {
        match self {
            InlineToken::Text { content } => content.clone(),
            InlineToken::Bold { content } => format!("**{content}**"),
            InlineToken::Italic { content } => format!("*{content}*"),
            InlineToken::BoldItalic { content } => format!("***{content}***"),
            InlineToken::Code { content } => format!("`{content}`"),
            InlineToken::Strikethrough { content } => format!("~~{content}~~"),
            InlineToken::Link {
                text,
                href,
                title: Some(title),
            } => format!("[{text}]({href} \"{title}\")"),
            InlineToken::Link { text, href, .. } => format!("[{text}]({href})"),
            InlineToken::Reference { text, label } => format!("[{text}][{label}]"),
            InlineToken::Footnote { id, .. } => format!("[^{id}]"),
            InlineToken::Subscript { content } => format!("~{content}~"),
            InlineToken::Superscript { content } => format!("^{content}^"),
            InlineToken::Highlight { content } => format!("=={content}=="),
            InlineToken::Underline { content } => format!("<u>{content}</u>"),
            InlineToken::Mark { content } => format!("<mark>{content}</mark>"),
            InlineToken::LineBreak => "\n".to_string(),
            InlineToken::Math { latex } => format!("${latex}$"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;

    #[test]
    fn literal_renders_unresolved_pointers() {
        let r = InlineToken::Reference {
            text: "docs".into(),
            label: "missing".into(),
        };
        assert_eq!(r.literal(), "[docs][missing]");
        let f = InlineToken::Footnote {
            id: "x".into(),
            number: None,
        };
        assert_eq!(f.literal(), "[^x]");
    }

    #[test]
    fn serializes_with_type_tag() {
        let tokens = vec![
            InlineToken::text("see "),
            InlineToken::Link {
                text: "site".into(),
                href: "https://e.com".into(),
                title: None,
            },
            InlineToken::LineBreak,
        ];
        assert_json_snapshot!(tokens, @r#"
        [
          {
            "type": "text",
            "content": "see "
          },
          {
            "type": "link",
            "text": "site",
            "href": "https://e.com",
            "title": null
          },
          {
            "type": "lineBreak"
          }
        ]
        "#);
    }
}
