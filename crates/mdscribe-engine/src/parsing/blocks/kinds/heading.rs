use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Block, BlockKind, Heading};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::LineCursor;

/// ATX heading (`# Title`) with owned syntax constants.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;
}

static HEADING_RE: OnceLock<Regex> = OnceLock::new();

fn heading_re() -> &'static Regex {
    HEADING_RE.get_or_init(|| {
        Regex::new(r"^(#{1,6})\s+(.+?)\s*#*\s*$").expect("Invalid heading regex")
    })
}

/// Parses a single heading line. Any trailing `#` run is dropped.
pub fn parse_line(line: &str) -> Option<Heading> {
    let caps = heading_re().captures(line)?;
    let text = caps[2].trim();
    if text.is_empty() {
        return None;
    }
    Some(Heading {
        level: caps[1].len() as u8,
        text: text.to_string(),
        slug: slug(text),
    })
}

/// Heading block matcher. Inside quotes leading whitespace is tolerated.
pub fn parse<'a>(ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let line = cur.line()?;
    let candidate = if ctx.depth > 0 { line.trim_start() } else { line };
    let heading = parse_line(candidate)?;
    Some(Matched {
        block: to_block(heading, line),
        next: cur.advance(1),
    })
}

pub fn to_block(heading: Heading, raw: &str) -> Block {
    let text = heading.text.clone();
    let level = heading.level;
    let id = heading.slug.clone();
    Block::new(BlockKind::Heading(heading), text.clone(), raw)
        .with_meta("level", level)
        .with_meta("text", text)
        .with_meta("id", id)
}

/// Anchor slug for a heading.
///
/// Lowercases, keeps word characters, whitespace and hyphens, turns
/// whitespace runs into single hyphens and trims hyphens at both ends.
/// The output is a fixed point: `slug(&slug(t)) == slug(t)`.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_alphanumeric() || c == '_' {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        }
    }
    out
}
