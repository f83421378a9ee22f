use crate::models::{Block, BlockKind, MathBlock};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::LineCursor;

/// Display math between `$$` lines.
pub struct DisplayMath;

impl DisplayMath {
    pub const DELIMITER: &'static str = "$$";
}

fn is_delimiter(line: &str) -> bool {
    line.trim() == DisplayMath::DELIMITER
}

/// Rejects an unterminated block so its lines fall through to paragraphs.
pub fn parse<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    if !is_delimiter(cur.line()?) {
        return None;
    }
    let body = cur.advance(1);
    let mut close = body;
    loop {
        match close.line() {
            Some(l) if is_delimiter(l) => break,
            Some(_) => close = close.advance(1),
            None => return None,
        }
    }
    let latex = body.raw_to(&close);
    let next = close.advance(1);
    Some(Matched {
        block: Block::new(
            BlockKind::Math(MathBlock {
                display: true,
                latex: latex.clone(),
            }),
            latex,
            cur.raw_to(&next),
        ),
        next,
    })
}
