//! Ordered block-rule tables and the shared segmenter.
//!
//! Precedence is the order of a table. The top level and quote content use
//! the same [`segment`] loop with different tables.

use crate::models::{Block, LinkDefinitions};
use crate::parsing::lines::LineCursor;
use crate::parsing::options::ParseOptions;

use super::kinds::{
    block_quote, code_fence, heading, horizontal_rule, html, image, list, math, paragraph, table,
    toc,
};

/// Read-only state shared by every block rule during one parse.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'d> {
    pub options: &'d ParseOptions,
    /// Link definitions from the pre-pass, for reference-style images.
    pub links: &'d LinkDefinitions,
    /// Quote nesting depth; 0 is the document level.
    pub depth: usize,
}

impl<'d> BlockContext<'d> {
    pub fn new(options: &'d ParseOptions, links: &'d LinkDefinitions) -> Self {
        Self {
            options,
            links,
            depth: 0,
        }
    }

    /// Context for content one quote level deeper.
    pub fn nested(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }
}

/// A recognised block and the cursor just past its last line.
#[derive(Debug)]
pub struct Matched<'a> {
    pub block: Block,
    pub next: LineCursor<'a>,
}

/// Tries to recognise a block at the cursor. `None` leaves the line to the
/// next rule.
pub type BlockParser = for<'a> fn(&BlockContext<'_>, LineCursor<'a>) -> Option<Matched<'a>>;

/// One named entry in a precedence table.
pub struct BlockRule {
    pub name: &'static str,
    pub enabled: fn(&ParseOptions) -> bool,
    pub parse: BlockParser,
}

impl std::fmt::Debug for BlockRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockRule").field("name", &self.name).finish()
    }
}

fn always(_: &ParseOptions) -> bool {
    true
}

fn tables_enabled(o: &ParseOptions) -> bool {
    o.enable_tables
}

fn math_enabled(o: &ParseOptions) -> bool {
    o.enable_math
}

/// Document-level precedence. Lines no rule claims become paragraph text.
pub const DOCUMENT_RULES: &[BlockRule] = &[
    BlockRule {
        name: "toc",
        enabled: always,
        parse: toc::parse,
    },
    BlockRule {
        name: "image",
        enabled: always,
        parse: image::parse,
    },
    BlockRule {
        name: "quote",
        enabled: always,
        parse: block_quote::parse,
    },
    BlockRule {
        name: "math",
        enabled: math_enabled,
        parse: math::parse,
    },
    BlockRule {
        name: "code",
        enabled: always,
        parse: code_fence::parse,
    },
    BlockRule {
        name: "table",
        enabled: tables_enabled,
        parse: table::parse,
    },
    BlockRule {
        name: "list",
        enabled: always,
        parse: list::parse,
    },
    BlockRule {
        name: "horizontal_rule",
        enabled: always,
        parse: horizontal_rule::parse,
    },
    BlockRule {
        name: "heading",
        enabled: always,
        parse: heading::parse,
    },
    BlockRule {
        name: "html",
        enabled: always,
        parse: html::parse,
    },
];

/// The reduced grammar used for quoted content.
pub const QUOTE_RULES: &[BlockRule] = &[
    BlockRule {
        name: "quote",
        enabled: always,
        parse: block_quote::parse,
    },
    BlockRule {
        name: "heading",
        enabled: always,
        parse: heading::parse,
    },
    BlockRule {
        name: "list",
        enabled: always,
        parse: list::parse_flat,
    },
    BlockRule {
        name: "code",
        enabled: always,
        parse: code_fence::parse_simple,
    },
];

pub fn rules_for_depth(depth: usize) -> &'static [BlockRule] {
    if depth == 0 { DOCUMENT_RULES } else { QUOTE_RULES }
}

/// Segments `lines` into blocks in one forward scan.
///
/// A blank line closes the open paragraph. Every other line is offered to
/// the enabled rules in order; the first match flushes the paragraph and
/// moves the cursor past the block.
pub fn segment(ctx: &BlockContext<'_>, lines: &[&str]) -> Vec<Block> {
    let rules = rules_for_depth(ctx.depth);
    let mut blocks = vec![];
    let mut paragraph = paragraph::ParagraphBuffer::default();
    let mut cur = LineCursor::new(lines);

    'scan: while let Some(line) = cur.line() {
        if line.trim().is_empty() {
            paragraph.flush_into(&mut blocks);
            cur = cur.advance(1);
            continue;
        }

        for rule in rules.iter().filter(|r| (r.enabled)(ctx.options)) {
            if let Some(Matched { block, next }) = (rule.parse)(ctx, cur) {
                log::trace!(
                    "block rule {} matched lines {}..{} at depth {}",
                    rule.name,
                    cur.pos(),
                    next.pos(),
                    ctx.depth
                );
                paragraph.flush_into(&mut blocks);
                blocks.push(block);
                cur = next;
                continue 'scan;
            }
        }

        paragraph.push(line);
        cur = cur.advance(1);
    }

    paragraph.flush_into(&mut blocks);
    blocks
}
