use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::{Block, BlockKind, ImageBlock, ImagePosition};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::LineCursor;

static LINKED_RE: OnceLock<Regex> = OnceLock::new();
static PLAIN_RE: OnceLock<Regex> = OnceLock::new();
static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
static POSITION_RE: OnceLock<Regex> = OnceLock::new();

fn linked_re() -> &'static Regex {
    LINKED_RE.get_or_init(|| {
        Regex::new(r#"^\[!\[([^\]]*)\]\(([^)\s]+)(?:\s+"([^"]+)")?\)\]\(([^)]+)\)$"#)
            .expect("Invalid linked image regex")
    })
}

fn plain_re() -> &'static Regex {
    PLAIN_RE.get_or_init(|| {
        Regex::new(r#"^!\[([^\]]*)\]\(([^)\s]+)(?:\s+"([^"]+)")?\)$"#)
            .expect("Invalid image regex")
    })
}

fn reference_re() -> &'static Regex {
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"^!\[([^\]]*)\]\[([^\]]+)\]$").expect("Invalid reference image regex")
    })
}

fn position_re() -> &'static Regex {
    POSITION_RE.get_or_init(|| {
        Regex::new(r"(?i)\$position:\s*(left|center|right)").expect("Invalid position regex")
    })
}

/// Pulls a `$position:` directive out of alt text.
pub fn split_position(alt: &str) -> (String, ImagePosition) {
    let Some(caps) = position_re().captures(alt) else {
        return (alt.to_string(), ImagePosition::default());
    };
    let position = match caps[1].to_ascii_lowercase().as_str() {
        "left" => ImagePosition::Left,
        "right" => ImagePosition::Right,
        _ => ImagePosition::Center,
    };
    (position_re().replace(alt, "").trim().to_string(), position)
}

fn image(alt: &str, src: &str, title: Option<&str>) -> ImageBlock {
    let (alt, position) = split_position(alt);
    ImageBlock {
        alt,
        src: src.to_string(),
        title: title.map(str::to_string),
        link_url: None,
        position,
        reference: None,
    }
}

fn opt<'t>(caps: &Captures<'t>, i: usize) -> Option<&'t str> {
    caps.get(i).map(|m| m.as_str())
}

/// Recognises a whole-line image.
///
/// Forms are tried in order: link-wrapped, plain, reference. A reference
/// image whose label has no definition is not an image.
pub fn parse_line(ctx: &BlockContext<'_>, line: &str) -> Option<ImageBlock> {
    let line = line.trim();

    if let Some(caps) = linked_re().captures(line) {
        let mut block = image(&caps[1], &caps[2], opt(&caps, 3));
        block.link_url = Some(caps[4].to_string());
        return Some(block);
    }

    if let Some(caps) = plain_re().captures(line) {
        return Some(image(&caps[1], &caps[2], opt(&caps, 3)));
    }

    let caps = reference_re().captures(line)?;
    let label = &caps[2];
    let def = ctx.links.get(&label.to_lowercase())?;
    let mut block = image(&caps[1], &def.url, def.title.as_deref());
    block.reference = Some(label.to_string());
    Some(block)
}

pub fn parse<'a>(ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let line = cur.line()?;
    let image = parse_line(ctx, line)?;
    let reference = image.reference.clone();
    let mut block = Block::new(BlockKind::Image(image), line.trim(), line);
    if let Some(reference) = reference {
        block = block.with_meta("reference", reference);
    }
    Some(Matched {
        block,
        next: cur.advance(1),
    })
}
