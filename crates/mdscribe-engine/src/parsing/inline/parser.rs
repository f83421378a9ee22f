use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, InlineMath, LineBreak, LinkSyntax, Marks},
    types::InlineToken,
};

/// Attempts one construct at the cursor. On `None` the cursor is unchanged.
pub type InlineParser = fn(&mut Cursor<'_>) -> Option<InlineToken>;

/// One named entry in the inline precedence table.
pub struct InlineRule {
    pub name: &'static str,
    pub parse: InlineParser,
}

/// Inline precedence, highest first.
pub const INLINE_RULES: &[InlineRule] = &[
    InlineRule {
        name: "code",
        parse: try_parse_code_span,
    },
    InlineRule {
        name: "math",
        parse: try_parse_math,
    },
    InlineRule {
        name: "strikethrough",
        parse: try_parse_strikethrough,
    },
    InlineRule {
        name: "line_break",
        parse: try_parse_line_break,
    },
    InlineRule {
        name: "html_span",
        parse: try_parse_html_span,
    },
    InlineRule {
        name: "subscript",
        parse: try_parse_subscript,
    },
    InlineRule {
        name: "superscript",
        parse: try_parse_superscript,
    },
    InlineRule {
        name: "highlight",
        parse: try_parse_highlight,
    },
    InlineRule {
        name: "bold_italic",
        parse: try_parse_bold_italic,
    },
    InlineRule {
        name: "bold",
        parse: try_parse_bold,
    },
    InlineRule {
        name: "italic",
        parse: try_parse_italic,
    },
    InlineRule {
        name: "footnote",
        parse: try_parse_footnote,
    },
    InlineRule {
        name: "link",
        parse: try_parse_link,
    },
    InlineRule {
        name: "reference",
        parse: try_parse_reference,
    },
];

/// Bytes that may start a construct; plain text runs stop before them.
const SPECIAL: &[char] = &['*', '_', '`', '~', '[', '^', '=', '<', '\n', '$'];

/// Parses inline content into a sequence of [`InlineToken`]s.
///
/// Every byte of the input ends up in exactly one token. Adjacent text is
/// merged into a single `Text` token.
pub fn parse_inline(s: &str) -> Vec<InlineToken> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    'scan: while !cur.eof() {
        for rule in INLINE_RULES {
            if let Some(token) = (rule.parse)(&mut cur) {
                out.push(token);
                continue 'scan;
            }
        }
        let text = take_text(&mut cur);
        push_text(&mut out, text);
    }

    out
}

fn push_text(out: &mut Vec<InlineToken>, text: &str) {
    if let Some(InlineToken::Text { content }) = out.last_mut() {
        content.push_str(text);
    } else {
        out.push(InlineToken::text(text));
    }
}

/// Consumes plain text up to the next byte that could start a construct.
/// Always consumes at least one character.
fn take_text<'a>(cur: &mut Cursor<'a>) -> &'a str {
    let rest = cur.rest();
    let first = rest.chars().next().map_or(0, char::len_utf8);
    let mut end = rest[first..]
        .find(SPECIAL)
        .map_or(rest.len(), |p| p + first);
    for pat in [LineBreak::TRAILING_SPACES, LineBreak::BACKSLASH] {
        if let Some(p) = rest.find(pat).filter(|&p| p > 0) {
            end = end.min(p);
        }
    }
    cur.bump_n(end);
    &rest[..end]
}

/// `open` + non-empty inner text + `close`, with none of `forbidden` in the
/// inner text. Returns the inner text and the total length.
fn enclosed<'s>(
    rest: &'s str,
    open: &str,
    close: &str,
    forbidden: &[char],
) -> Option<(&'s str, usize)> {
    let body = rest.strip_prefix(open)?;
    let end = body.find(close)?;
    let inner = &body[..end];
    if inner.is_empty() || inner.contains(forbidden) {
        return None;
    }
    Some((inner, open.len() + end + close.len()))
}

/// Runs `enclosed` at the cursor and consumes the match.
fn take_enclosed(
    cur: &mut Cursor<'_>,
    open: &str,
    close: &str,
    forbidden: &[char],
) -> Option<String> {
    let (inner, len) = enclosed(cur.rest(), open, close, forbidden)?;
    cur.bump_n(len);
    Some(inner.to_string())
}

/// Code span. Inner text is taken verbatim.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    let content = take_enclosed(cur, CodeSpan::TICK, CodeSpan::TICK, &[])?;
    Some(InlineToken::Code { content })
}

/// `$latex$` on one line. An escaped dollar neither opens nor closes.
fn try_parse_math(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if cur.prev() == Some(InlineMath::ESCAPE) {
        return None;
    }
    let (inner, len) = enclosed(cur.rest(), InlineMath::DOLLAR, InlineMath::DOLLAR, &['\n'])?;
    if inner.as_bytes().last() == Some(&InlineMath::ESCAPE) {
        return None;
    }
    cur.bump_n(len);
    Some(InlineToken::Math {
        latex: inner.to_string(),
    })
}

fn try_parse_strikethrough(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    let content = take_enclosed(cur, Marks::STRIKE, Marks::STRIKE, &['~'])?;
    Some(InlineToken::Strikethrough { content })
}

/// `<br>` variants, two trailing spaces or a backslash before a newline, or
/// a bare newline.
fn try_parse_line_break(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    for pat in [
        LineBreak::TRAILING_SPACES,
        LineBreak::BACKSLASH,
        LineBreak::NEWLINE,
    ] {
        if cur.starts_with(pat) {
            cur.bump_n(pat.len());
            return Some(InlineToken::LineBreak);
        }
    }

    if !cur.starts_with(LineBreak::BR_OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(LineBreak::BR_OPEN.len());
    while cur.peek().is_some_and(|b| b.is_ascii_whitespace()) {
        cur.bump();
    }
    if cur.peek() == Some(b'/') {
        cur.bump();
    }
    if cur.bump() != Some(b'>') {
        *cur = saved;
        return None;
    }
    Some(InlineToken::LineBreak)
}

fn try_parse_html_span(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if let Some(content) = take_enclosed(cur, Marks::UNDERLINE_OPEN, Marks::UNDERLINE_CLOSE, &['<']) {
        return Some(InlineToken::Underline { content });
    }
    let content = take_enclosed(cur, Marks::MARK_OPEN, Marks::MARK_CLOSE, &['<'])?;
    Some(InlineToken::Mark { content })
}

fn try_parse_subscript(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    let content = take_enclosed(cur, Marks::SUBSCRIPT, Marks::SUBSCRIPT, &['~'])?;
    Some(InlineToken::Subscript { content })
}

fn try_parse_superscript(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    let content = take_enclosed(cur, Marks::SUPERSCRIPT, Marks::SUPERSCRIPT, &['^'])?;
    Some(InlineToken::Superscript { content })
}

fn try_parse_highlight(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    let content = take_enclosed(cur, Marks::HIGHLIGHT, Marks::HIGHLIGHT, &['='])?;
    Some(InlineToken::Highlight { content })
}

fn try_parse_bold_italic(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    Emphasis::BOLD_ITALIC.iter().find_map(|(open, close)| {
        let content = take_enclosed(cur, open, close, &[])?;
        Some(InlineToken::BoldItalic { content })
    })
}

fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    [Emphasis::BOLD_STAR, Emphasis::BOLD_UNDERSCORE]
        .into_iter()
        .find_map(|d| take_enclosed(cur, d, d, &Emphasis::INNER_FORBIDDEN))
        .map(|content| InlineToken::Bold { content })
}

/// Single-delimiter emphasis, rejected when the closing delimiter is doubled.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    [Emphasis::STAR, Emphasis::UNDERSCORE]
        .into_iter()
        .find_map(|d| {
            let rest = cur.rest();
            let (inner, len) = enclosed(rest, d, d, &Emphasis::INNER_FORBIDDEN)?;
            if rest[len..].starts_with(d) {
                return None;
            }
            cur.bump_n(len);
            Some(inner.to_string())
        })
        .map(|content| InlineToken::Italic { content })
}

fn try_parse_footnote(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    let id = take_enclosed(cur, LinkSyntax::FOOTNOTE_OPEN, "]", &[])?;
    Some(InlineToken::Footnote { id, number: None })
}

/// `[text]` at the start of `rest`: the text and the length consumed.
fn bracketed(rest: &str) -> Option<(&str, usize)> {
    let body = rest.strip_prefix(LinkSyntax::OPEN)?;
    let end = body.find(LinkSyntax::CLOSE)?;
    Some((&body[..end], end + 2))
}

/// `[text](url "title")`. The URL has no whitespace; the title is optional.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    let rest = cur.rest();
    let (text, n) = bracketed(rest).filter(|(t, _)| !t.is_empty())?;
    let body = rest[n..].strip_prefix(LinkSyntax::URL_OPEN)?;
    let close = body.find(LinkSyntax::URL_CLOSE)?;
    let inside = &body[..close];

    let url_end = inside.find(char::is_whitespace).unwrap_or(inside.len());
    let href = &inside[..url_end];
    if href.is_empty() {
        return None;
    }
    let title = match inside[url_end..].trim_start() {
        "" => None,
        t => {
            let quoted = t
                .strip_prefix(LinkSyntax::TITLE_QUOTE)?
                .strip_suffix(LinkSyntax::TITLE_QUOTE)?;
            if quoted.is_empty() || quoted.contains(LinkSyntax::TITLE_QUOTE) {
                return None;
            }
            Some(quoted.to_string())
        }
    };

    cur.bump_n(n + 1 + close + 1);
    Some(InlineToken::Link {
        text: text.to_string(),
        href: href.to_string(),
        title,
    })
}

/// `[text][label]` or `[text][]`.
fn try_parse_reference(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    let rest = cur.rest();
    let (text, n) = bracketed(rest).filter(|(t, _)| !t.is_empty())?;
    let (label, m) = bracketed(&rest[n..])?;
    let label = if label.is_empty() { text } else { label };
    cur.bump_n(n + m);
    Some(InlineToken::Reference {
        text: text.to_string(),
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> InlineToken {
        InlineToken::text(s)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn code_span_is_a_raw_zone() {
        assert_eq!(
            parse_inline("`**bold**`"),
            vec![InlineToken::Code {
                content: "**bold**".into()
            }]
        );
    }

    #[rstest]
    #[case("**b**", InlineToken::Bold { content: "b".into() })]
    #[case("__b__", InlineToken::Bold { content: "b".into() })]
    #[case("*i*", InlineToken::Italic { content: "i".into() })]
    #[case("_i_", InlineToken::Italic { content: "i".into() })]
    #[case("***bi***", InlineToken::BoldItalic { content: "bi".into() })]
    #[case("___bi___", InlineToken::BoldItalic { content: "bi".into() })]
    #[case("**_bi_**", InlineToken::BoldItalic { content: "bi".into() })]
    #[case("_**bi**_", InlineToken::BoldItalic { content: "bi".into() })]
    #[case("~~gone~~", InlineToken::Strikethrough { content: "gone".into() })]
    #[case("~2~", InlineToken::Subscript { content: "2".into() })]
    #[case("^10^", InlineToken::Superscript { content: "10".into() })]
    #[case("==hi==", InlineToken::Highlight { content: "hi".into() })]
    #[case("<u>under</u>", InlineToken::Underline { content: "under".into() })]
    #[case("<mark>m</mark>", InlineToken::Mark { content: "m".into() })]
    #[case("$x^2$", InlineToken::Math { latex: "x^2".into() })]
    #[case("[^note]", InlineToken::Footnote { id: "note".into(), number: None })]
    fn single_constructs(#[case] input: &str, #[case] expected: InlineToken) {
        assert_eq!(parse_inline(input), vec![expected]);
    }

    #[test]
    fn mixed_sentence() {
        assert_eq!(
            parse_inline("H~2~O is *wet*."),
            vec![
                text("H"),
                InlineToken::Subscript {
                    content: "2".into()
                },
                text("O is "),
                InlineToken::Italic {
                    content: "wet".into()
                },
                text("."),
            ]
        );
    }

    #[rstest]
    #[case("<br>")]
    #[case("<br/>")]
    #[case("<br />")]
    #[case("  \n")]
    #[case("\\\n")]
    #[case("\n")]
    fn line_break_forms(#[case] input: &str) {
        assert_eq!(parse_inline(input), vec![InlineToken::LineBreak]);
    }

    #[test]
    fn trailing_spaces_end_the_text_run() {
        assert_eq!(
            parse_inline("one  \ntwo"),
            vec![text("one"), InlineToken::LineBreak, text("two")]
        );
    }

    #[test]
    fn inline_link_with_title() {
        assert_eq!(
            parse_inline(r#"[site](https://e.com "Home")"#),
            vec![InlineToken::Link {
                text: "site".into(),
                href: "https://e.com".into(),
                title: Some("Home".into()),
            }]
        );
    }

    #[rstest]
    #[case("[text][Label]", "text", "Label")]
    #[case("[Text][]", "Text", "Text")]
    fn reference_links(#[case] input: &str, #[case] t: &str, #[case] label: &str) {
        assert_eq!(
            parse_inline(input),
            vec![InlineToken::Reference {
                text: t.into(),
                label: label.into()
            }]
        );
    }

    #[test]
    fn escaped_dollar_is_not_math() {
        assert_eq!(parse_inline(r"costs \$5 and \$6"), vec![text(r"costs \$5 and \$6")]);
    }

    #[test]
    fn math_does_not_cross_lines() {
        let tokens = parse_inline("$a\nb$");
        assert!(!tokens.iter().any(|t| matches!(t, InlineToken::Math { .. })));
    }

    #[test]
    fn italic_not_followed_by_second_delimiter() {
        assert_eq!(parse_inline("*a**"), vec![text("*a**")]);
    }

    #[rstest]
    #[case("2 * 3 = 6")]
    #[case("a [bracket without close")]
    #[case("x < y")]
    #[case("[text] alone")]
    fn unmatched_markers_stay_text(#[case] input: &str) {
        assert_eq!(parse_inline(input), vec![text(input)]);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            parse_inline("héllo *wörld* ✓"),
            vec![
                text("héllo "),
                InlineToken::Italic {
                    content: "wörld".into()
                },
                text(" ✓"),
            ]
        );
    }

    #[test]
    fn emphasis_with_link_inside_is_not_split() {
        let tokens = parse_inline("**see [a](b)**");
        assert_eq!(
            tokens,
            vec![InlineToken::Bold {
                content: "see [a](b)".into()
            }]
        );
    }

    #[test]
    fn rule_order_is_stable() {
        let names: Vec<_> = INLINE_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "code",
                "math",
                "strikethrough",
                "line_break",
                "html_span",
                "subscript",
                "superscript",
                "highlight",
                "bold_italic",
                "bold",
                "italic",
                "footnote",
                "link",
                "reference"
            ]
        );
    }
}
