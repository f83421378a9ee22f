use crate::models::{Block, BlockKind};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::LineCursor;

pub struct HorizontalRule;

impl HorizontalRule {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;
}

/// Three or more of one rule character and nothing else, once trimmed.
pub fn is_rule(line: &str) -> bool {
    let t = line.trim();
    let Some(first) = t.chars().next() else {
        return false;
    };
    HorizontalRule::CHARS.contains(&first)
        && t.chars().count() >= HorizontalRule::MIN_LEN
        && t.chars().all(|c| c == first)
}

pub fn parse<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let line = cur.line()?;
    is_rule(line).then(|| Matched {
        block: Block::new(BlockKind::HorizontalRule, "", line),
        next: cur.advance(1),
    })
}
