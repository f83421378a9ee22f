use crate::models::{Alignment, Block, BlockKind, TableBlock, TableCell};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::LineCursor;

/// Pipe table syntax.
pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';
    pub const ESCAPED_PIPE: &'static str = "\\|";
    pub const ALIGN: char = ':';
}

/// Alignment row: only `-`, `:`, `|` and whitespace, with at least one pipe
/// and one `-`.
pub fn is_separator(line: &str) -> bool {
    let t = line.trim();
    t.contains(PipeTable::PIPE)
        && t.contains('-')
        && t.chars()
            .all(|c| c.is_whitespace() || matches!(c, '|' | ':' | '-'))
}

/// Splits a row on unescaped pipes, dropping the empty edge cells produced
/// by boundary pipes. Escaped pipes come back as literal `|`.
pub fn split_row(line: &str) -> Vec<String> {
    let mut parts = vec![];
    let mut start = 0;
    let mut prev = None;
    for (i, c) in line.char_indices() {
        if c == PipeTable::PIPE && prev != Some('\\') {
            parts.push(&line[start..i]);
            start = i + 1;
        }
        prev = Some(c);
    }
    parts.push(&line[start..]);

    let last = parts.len() - 1;
    parts
        .into_iter()
        .enumerate()
        .filter(|(i, p)| !((*i == 0 || *i == last) && p.trim().is_empty()))
        .map(|(_, p)| p.trim().replace(PipeTable::ESCAPED_PIPE, "|"))
        .collect()
}

fn alignment(spec: &str) -> Option<Alignment> {
    match (spec.starts_with(PipeTable::ALIGN), spec.ends_with(PipeTable::ALIGN)) {
        (true, true) => Some(Alignment::Center),
        (true, false) => Some(Alignment::Left),
        (false, true) => Some(Alignment::Right),
        (false, false) => None,
    }
}

fn cells(line: &str, alignments: &[Option<Alignment>]) -> Vec<TableCell> {
    split_row(line)
        .into_iter()
        .enumerate()
        .map(|(i, content)| TableCell {
            content,
            align: alignments.get(i).copied().flatten(),
        })
        .collect()
}

/// Header line, separator line, then body rows while lines are non-blank
/// and contain a pipe.
pub fn parse<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let header_line = cur.line()?;
    let separator = cur.peek(1)?;
    if !header_line.contains(PipeTable::PIPE) || !is_separator(separator) {
        return None;
    }

    let alignments: Vec<Option<Alignment>> =
        split_row(separator).iter().map(|s| alignment(s)).collect();
    let header = cells(header_line, &alignments);
    if header.is_empty() {
        return None;
    }

    let mut rows = vec![];
    let mut end = cur.advance(2);
    while let Some(line) = end.line() {
        if line.trim().is_empty() || !line.contains(PipeTable::PIPE) {
            break;
        }
        let row = cells(line, &alignments);
        if !row.is_empty() {
            rows.push(row);
        }
        end = end.advance(1);
    }

    let raw = cur.raw_to(&end);
    let (header_count, row_count) = (header.len(), rows.len());
    let block = Block::new(
        BlockKind::Table(TableBlock {
            header,
            rows,
            alignments,
        }),
        raw.clone(),
        raw,
    )
    .with_meta("headerCount", header_count)
    .with_meta("rowCount", row_count);

    Some(Matched { block, next: end })
}
