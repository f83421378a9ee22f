use crate::models::{Block, BlockKind, QuoteBlock};
use crate::parsing::blocks::directive::{Directive, directive_value};
use crate::parsing::blocks::dispatch::{BlockContext, Matched, segment};
use crate::parsing::lines::LineCursor;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` and at most one following space.
    ///
    /// Returns `None` for lines that are not quoted.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

/// Stores a directive line in its slot. Each directive is taken once; a
/// repeat is ordinary content.
fn capture_directive(quote: &mut QuoteBlock, line: &str) -> bool {
    let slots = [
        (Directive::ICON, &mut quote.icon),
        (Directive::AUTHOR, &mut quote.author),
        (Directive::AUDIO, &mut quote.audio),
        (Directive::LINK, &mut quote.link),
    ];
    for (name, slot) in slots {
        if slot.is_some() {
            continue;
        }
        if let Some(value) = directive_value(line, name) {
            *slot = Some(value.to_string());
            return true;
        }
    }
    false
}

/// Consumes consecutive `>` lines and re-segments their content one level
/// deeper. Quotes never span a blank line.
pub fn parse<'a>(ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    BlockQuote::strip_prefix(cur.line()?)?;

    let mut quote = QuoteBlock::default();
    let mut body = vec![];
    let mut end = cur;
    while let Some(content) = end.line().and_then(BlockQuote::strip_prefix) {
        end = end.advance(1);
        if !capture_directive(&mut quote, content) {
            body.push(content);
        }
    }

    let inner = ctx.nested();
    quote.blocks = segment(&inner, &body);

    Some(Matched {
        block: Block::new(BlockKind::Quote(quote), body.join("\n"), cur.raw_to(&end)),
        next: end,
    })
}
