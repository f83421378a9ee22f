use crate::models::{Block, BlockKind};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::LineCursor;

/// Raw HTML passthrough.
pub struct HtmlBlock;

impl HtmlBlock {
    pub const OPEN: char = '<';
}

/// A line that opens an HTML run: `<` then a tag name, `/` or `!`.
///
/// Deliberately narrower than "any line starting with `<`": text such as
/// `<3` or `< 5` stays paragraph text. Lines after the first only need the
/// bare `<` prefix.
pub fn opens(line: &str) -> bool {
    let mut chars = line.trim().chars();
    chars.next() == Some(HtmlBlock::OPEN)
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

fn continues(line: &str) -> bool {
    line.trim().starts_with(HtmlBlock::OPEN)
}

/// Collects consecutive `<`-lines verbatim into one block.
pub fn parse<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    if !opens(cur.line()?) {
        return None;
    }
    let mut end = cur.advance(1);
    while end.line().is_some_and(continues) {
        end = end.advance(1);
    }
    let raw = cur.raw_to(&end);
    Some(Matched {
        block: Block::new(BlockKind::Html, raw.clone(), raw),
        next: end,
    })
}
