use crate::models::{Block, BlockKind, TocBlock, TocEntry};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::LineCursor;

/// Table-of-contents placeholder markers.
pub struct TocMarker;

impl TocMarker {
    pub const MARKERS: [&'static str; 3] = ["[[TOC]]", "[TOC]", "# Table of Contents"];
}

pub fn is_marker(line: &str) -> bool {
    TocMarker::MARKERS.contains(&line.trim())
}

/// Emits an empty placeholder; entries are filled in after the scan.
pub fn parse<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let line = cur.line()?;
    is_marker(line).then(|| Matched {
        block: Block::new(BlockKind::Toc(TocBlock::default()), "", line),
        next: cur.advance(1),
    })
}

/// Fills every placeholder with the top-level headings in document order.
pub fn fill(blocks: &mut [Block]) {
    let entries: Vec<TocEntry> = blocks
        .iter()
        .filter_map(|b| match &b.kind {
            BlockKind::Heading(h) => Some(TocEntry {
                level: h.level,
                text: h.text.clone(),
                slug: h.slug.clone(),
            }),
            _ => None,
        })
        .collect();

    for block in blocks.iter_mut() {
        if let BlockKind::Toc(toc) = &mut block.kind {
            toc.entries = entries.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::heading;
    use rstest::rstest;

    #[rstest]
    #[case("[[TOC]]", true)]
    #[case("  [TOC]  ", true)]
    #[case("# Table of Contents", true)]
    #[case("[toc]", false)]
    #[case("# Contents", false)]
    fn markers(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_marker(line), expected);
    }

    #[test]
    fn fill_collects_headings_before_and_after_marker() {
        let mut blocks = vec![
            heading::to_block(heading::parse_line("# One").unwrap(), "# One"),
            Block::new(BlockKind::Toc(TocBlock::default()), "", "[[TOC]]"),
            heading::to_block(heading::parse_line("## Two").unwrap(), "## Two"),
        ];
        fill(&mut blocks);
        let BlockKind::Toc(toc) = &blocks[1].kind else {
            panic!("expected toc");
        };
        let slugs: Vec<_> = toc.entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["one", "two"]);
        assert_eq!(toc.entries[1].level, 2);
    }
}
