//! Pipeline tests for `parse`, checked against the output invariants in
//! [`invariants`].


use pretty_assertions::assert_eq;
use serde_json::json;

use crate::models::{BlockKind, Document};
use crate::parsing::{ParseOptions, inline::InlineToken, parse};

fn parse_default(md: &str) -> Document {
    let doc = parse(md, &ParseOptions::default());
    invariants::check(&doc);
    doc
}

fn types(doc: &Document) -> Vec<&'static str> {
    doc.blocks.iter().map(|b| b.type_name()).collect()
}

#[test]
fn empty_document() {
    let doc = parse_default("");
    assert!(doc.blocks.is_empty());
    assert_eq!(doc.frontmatter, None);
}

#[test]
fn blank_lines_only() {
    assert!(parse_default("\n\n\n").blocks.is_empty());
}

#[test]
fn frontmatter_becomes_first_block() {
    let doc = parse_default("---\ntitle: X\ntags: [a, b]\n---\nBODY");
    assert_eq!(types(&doc), vec!["frontmatter", "paragraph"]);
    assert_eq!(
        serde_json::Value::Object(doc.frontmatter.clone().unwrap()),
        json!({"title": "X", "tags": ["a", "b"]})
    );
    assert_eq!(doc.blocks[1].content, "BODY");
}

#[test]
fn unsupported_frontmatter_lines_keep_valid_keys() {
    let doc = parse_default("---\ntitle: X\ndescription: >\n  folded text\n---\nBODY");
    assert_eq!(types(&doc), vec!["frontmatter", "paragraph"]);
    assert_eq!(
        serde_json::Value::Object(doc.frontmatter.clone().unwrap()),
        json!({"title": "X", "description": "folded text"})
    );

    let doc = parse_default("---\ntitle: X\n- stray\nno colon here\n---\nBODY");
    assert_eq!(types(&doc), vec!["frontmatter", "paragraph"]);
    assert_eq!(
        serde_json::Value::Object(doc.frontmatter.clone().unwrap()),
        json!({"title": "X"})
    );
}

#[test]
fn frontmatter_can_be_disabled() {
    let options = ParseOptions {
        enable_frontmatter: false,
        ..ParseOptions::default()
    };
    let doc = parse("---\na: 1\n---\n", &options);
    assert_eq!(doc.frontmatter, None);
    assert_eq!(doc.blocks[0].type_name(), "horizontalRule");
}

#[test]
fn multi_line_paragraph_keeps_newlines() {
    let doc = parse_default("first line\nsecond line");
    assert_eq!(doc.blocks[0].content, "first line\nsecond line");
}

#[test]
fn raw_source_is_kept() {
    let md = "# T\n\ntext\n";
    assert_eq!(parse_default(md).raw_source, md);
}

#[test]
fn unterminated_fence_becomes_paragraph() {
    let doc = parse_default("```rust\nlet x = 1;");
    assert_eq!(types(&doc), vec!["paragraph"]);
    assert_eq!(doc.blocks[0].content, "```rust\nlet x = 1;");
}

#[test]
fn math_block_and_unterminated_math() {
    let doc = parse_default("$$\nx^2\n$$");
    let BlockKind::Math(math) = &doc.blocks[0].kind else {
        panic!("expected math block");
    };
    assert!(math.display);
    assert_eq!(math.latex, "x^2");

    let doc = parse_default("$$\nx^2");
    assert_eq!(types(&doc), vec!["paragraph"]);
}

#[test]
fn footnotes_are_numbered_by_definition_and_appended() {
    let doc = parse_default("Text[^a] and[^b].\n\n[^b]: second\n[^a]: first");
    assert_eq!(types(&doc), vec!["paragraph", "footnotes"]);
    let BlockKind::Footnotes(notes) = &doc.blocks[1].kind else {
        panic!("expected footnotes block");
    };
    let order: Vec<_> = notes.definitions.iter().map(|d| (d.id.as_str(), d.number)).collect();
    assert_eq!(order, vec![("b", 1), ("a", 2)]);

    let numbers: Vec<_> = doc
        .inlines(&doc.blocks[0])
        .into_iter()
        .filter_map(|t| match t {
            InlineToken::Footnote { number, .. } => number,
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec![2, 1]);
}

#[test]
fn footnotes_disabled_leave_definitions_as_text() {
    let options = ParseOptions {
        enable_footnotes: false,
        ..ParseOptions::default()
    };
    let doc = parse("[^a]: note", &options);
    assert!(doc.footnotes.is_empty());
    assert!(doc.links.is_empty());
    assert_eq!(types(&doc), vec!["paragraph"]);
}

#[test]
fn link_definitions_are_removed_and_resolved() {
    let doc = parse_default("See [text][Foo].\n[foo]: http://x \"X\"");
    assert_eq!(types(&doc), vec!["paragraph"]);
    assert_eq!(
        doc.inlines(&doc.blocks[0]),
        vec![
            InlineToken::text("See "),
            InlineToken::Link {
                text: "text".into(),
                href: "http://x".into(),
                title: Some("X".into()),
            },
            InlineToken::text("."),
        ]
    );
}

#[test]
fn reference_image_resolves_through_definitions() {
    let doc = parse_default("![Logo][logo]\n\n[LOGO]: /logo.png");
    let BlockKind::Image(img) = &doc.blocks[0].kind else {
        panic!("expected image");
    };
    assert_eq!(img.src, "/logo.png");
    assert_eq!(doc.blocks[0].metadata["reference"], "logo");
}

#[test]
fn undefined_reference_image_is_paragraph() {
    let doc = parse_default("![Logo][nowhere]");
    assert_eq!(types(&doc), vec!["paragraph"]);
}

#[test]
fn toc_lists_every_heading() {
    let doc = parse_default("# Intro\n\n[[TOC]]\n\n## Details\n\n### Deep Dive");
    assert_eq!(types(&doc), vec!["heading", "toc", "heading", "heading"]);
    let BlockKind::Toc(toc) = &doc.blocks[1].kind else {
        panic!("expected toc");
    };
    let levels: Vec<_> = toc.entries.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![1, 2, 3]);
    assert_eq!(toc.entries[2].slug, "deep-dive");
}

#[test]
fn heading_inlines_are_tokenized() {
    let doc = parse_default("## A **bold** move");
    assert_eq!(
        doc.inlines(&doc.blocks[0]),
        vec![
            InlineToken::text("A "),
            InlineToken::Bold {
                content: "bold".into()
            },
            InlineToken::text(" move"),
        ]
    );
}

#[test]
fn non_textual_blocks_have_no_inlines() {
    let doc = parse_default("```\ncode\n```");
    assert!(doc.inlines(&doc.blocks[0]).is_empty());
}

#[test]
fn html_passthrough_after_paragraph() {
    let doc = parse_default("Intro\n<div class=\"note\">\n  <b>x</b>\n</div>");
    assert_eq!(types(&doc), vec!["paragraph", "html"]);
    assert_eq!(doc.blocks[1].raw, "<div class=\"note\">\n  <b>x</b>\n</div>");
}

#[test]
fn quote_with_nested_blocks() {
    let md = "> $author: Ada\n> # Note\n> - one\n> - two\n\nafter";
    let doc = parse_default(md);
    assert_eq!(types(&doc), vec!["quote", "paragraph"]);
    let BlockKind::Quote(quote) = &doc.blocks[0].kind else {
        panic!("expected quote");
    };
    assert_eq!(quote.author.as_deref(), Some("Ada"));
    let inner: Vec<_> = quote.blocks.iter().map(|b| b.type_name()).collect();
    assert_eq!(inner, vec!["heading", "list"]);
}

#[test]
fn mixed_document_block_order() {
    let md = "\
# Title

Some *intro* text.

- item one
  - nested
- item two

| A | B |
|---|:-:|
| 1 | 2 |

---

    indented code

![pic](p.png)";
    let doc = parse_default(md);
    assert_eq!(
        types(&doc),
        vec!["heading", "paragraph", "list", "table", "horizontalRule", "code", "image"]
    );
}
