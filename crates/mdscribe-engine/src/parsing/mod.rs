//! # Parsing
//!
//! `parse` turns markdown text into a [`Document`] in one forward pass:
//!
//! 1. frontmatter extraction (optional, rolls back on malformed YAML)
//! 2. line split, footnote and link definition pre-passes
//! 3. block segmentation through the ordered rule tables
//! 4. table-of-contents fill and the trailing footnotes block
//!
//! Inline tokenization is lazy; see [`Document::inlines`].

pub mod blocks;
pub mod definitions;
pub mod frontmatter;
pub mod inline;
pub mod lines;
pub mod options;
pub mod resolve;

use crate::models::{Block, BlockKind, Document, FootnoteDefinitions, FootnotesBlock};

use blocks::{BlockContext, kinds::toc, segment};
use definitions::{extract_footnotes, extract_links};
pub use options::ParseOptions;

/// Parses a whole markdown document.
///
/// Never fails: anything unrecognised degrades to paragraph text.
pub fn parse(text: &str, options: &ParseOptions) -> Document {
    let mut blocks = vec![];
    let mut frontmatter = None;
    let mut body = text;

    if options.enable_frontmatter
        && let Some(fm) = frontmatter::extract(text)
    {
        blocks.push(fm.to_block());
        body = fm.body;
        frontmatter = Some(fm.metadata);
    }

    let all_lines = lines::split_lines(body);
    let (footnotes, remaining) = if options.enable_footnotes {
        extract_footnotes(&all_lines)
    } else {
        (FootnoteDefinitions::new(), all_lines)
    };
    let (links, remaining) = extract_links(&remaining);
    log::debug!(
        "extracted {} link and {} footnote definitions",
        links.len(),
        footnotes.len()
    );

    let ctx = BlockContext::new(options, &links);
    blocks.extend(segment(&ctx, &remaining));
    toc::fill(&mut blocks);

    if !footnotes.is_empty() {
        blocks.push(footnotes_block(&footnotes));
    }
    log::debug!("parsed {} blocks", blocks.len());

    Document {
        frontmatter,
        blocks,
        raw_source: text.to_string(),
        links,
        footnotes,
    }
}

fn footnotes_block(footnotes: &FootnoteDefinitions) -> Block {
    let mut definitions: Vec<_> = footnotes.values().cloned().collect();
    definitions.sort_by_key(|d| d.number);
    let raw = definitions
        .iter()
        .map(|d| d.raw.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let content = definitions
        .iter()
        .map(|d| d.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    Block::new(BlockKind::Footnotes(FootnotesBlock { definitions }), content, raw)
}

#[cfg(test)]
mod tests;
