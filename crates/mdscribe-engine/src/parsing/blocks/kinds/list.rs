use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Block, BlockKind, ListBlock, ListItem, ListType};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::{LineCursor, indent_width};

/// List item markers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const CONTINUATION_INDENT: &'static str = "  ";
    pub const TAB: char = '\t';
}

static TASK_RE: OnceLock<Regex> = OnceLock::new();
static BULLET_RE: OnceLock<Regex> = OnceLock::new();
static ORDERED_RE: OnceLock<Regex> = OnceLock::new();
static FLAT_MARKER_RE: OnceLock<Regex> = OnceLock::new();

fn task_re() -> &'static Regex {
    TASK_RE.get_or_init(|| {
        Regex::new(r"^[-*+]\s+\[([xX ])\]\s*(.*)$").expect("Invalid task item regex")
    })
}

fn bullet_re() -> &'static Regex {
    BULLET_RE.get_or_init(|| Regex::new(r"^[-*+]\s+(.*)$").expect("Invalid bullet item regex"))
}

fn ordered_re() -> &'static Regex {
    ORDERED_RE
        .get_or_init(|| Regex::new(r"^\d+[.)]\s+(.*)$").expect("Invalid ordered item regex"))
}

fn flat_marker_re() -> &'static Regex {
    FLAT_MARKER_RE.get_or_init(|| {
        Regex::new(r"^(?:[-*+]|\d+\.)\s+").expect("Invalid flat list marker regex")
    })
}

/// The list type a line would open, judged on its trimmed form.
pub fn list_type(line: &str) -> Option<ListType> {
    let t = line.trim();
    if task_re().is_match(t) {
        Some(ListType::Task)
    } else if bullet_re().is_match(t) {
        Some(ListType::Unordered)
    } else if ordered_re().is_match(t) {
        Some(ListType::Ordered)
    } else {
        None
    }
}

/// One list line as a flat item (no children yet).
pub fn parse_item(line: &str) -> Option<ListItem> {
    let indent = indent_width(line);
    let t = line.trim();

    if let Some(caps) = task_re().captures(t) {
        let mut item = ListItem::new(&caps[2], indent);
        item.checked = Some(caps[1].eq_ignore_ascii_case("x"));
        return Some(item);
    }
    bullet_re()
        .captures(t)
        .or_else(|| ordered_re().captures(t))
        .map(|caps| ListItem::new(&caps[1], indent))
}

fn is_indented(line: &str) -> bool {
    line.starts_with(ListMarker::CONTINUATION_INDENT) || line.starts_with(ListMarker::TAB)
}

/// Reduces scan-order items to a forest: each item becomes a child of the
/// nearest preceding item with strictly smaller indentation.
pub fn build_forest(items: Vec<ListItem>) -> Vec<ListItem> {
    fn attach(item: ListItem, stack: &mut [ListItem], roots: &mut Vec<ListItem>) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(item),
            None => roots.push(item),
        }
    }

    let mut roots = vec![];
    let mut stack: Vec<ListItem> = vec![];
    for item in items {
        while stack.last().is_some_and(|top| top.indent >= item.indent) {
            if let Some(done) = stack.pop() {
                attach(done, &mut stack, &mut roots);
            }
        }
        stack.push(item);
    }
    while let Some(done) = stack.pop() {
        attach(done, &mut stack, &mut roots);
    }
    roots
}

fn list_block(list_type: ListType, items: Vec<ListItem>, item_count: usize, raw: String) -> Block {
    Block::new(
        BlockKind::List(ListBlock { list_type, items }),
        raw.clone(),
        raw,
    )
    .with_meta("listType", list_type.as_str())
    .with_meta("itemCount", item_count)
}

/// A run of list lines. The type is fixed by the first line.
///
/// Blank lines stay inside the run when the next line is indented or another
/// item; indented non-item lines continue the previous item's text.
pub fn parse<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let list_type = list_type(cur.line()?)?;

    let mut items: Vec<ListItem> = vec![];
    let mut end = cur;
    while let Some(line) = end.line() {
        if line.trim().is_empty() {
            let continues = end
                .peek(1)
                .is_some_and(|next| is_indented(next) || self::list_type(next).is_some());
            if !continues {
                break;
            }
        } else if let Some(item) = parse_item(line) {
            items.push(item);
        } else if is_indented(line) {
            if let Some(prev) = items.last_mut() {
                prev.content.push('\n');
                prev.content.push_str(line.trim());
            }
        } else {
            break;
        }
        end = end.advance(1);
    }

    let item_count = items.len();
    Some(Matched {
        block: list_block(list_type, build_forest(items), item_count, cur.raw_to(&end)),
        next: end,
    })
}

/// Lists as recognised inside quotes: contiguous marker or indented lines,
/// one flat level, ordered when the first line is `N.`.
pub fn parse_flat<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let first = cur.line()?;
    if !flat_marker_re().is_match(first) {
        return None;
    }
    let list_type = if first.starts_with(|c: char| c.is_ascii_digit()) {
        ListType::Ordered
    } else {
        ListType::Unordered
    };

    let mut end = cur;
    while end
        .line()
        .is_some_and(|l| flat_marker_re().is_match(l) || l.starts_with(char::is_whitespace))
    {
        end = end.advance(1);
    }

    let items: Vec<ListItem> = cur
        .span_to(&end)
        .iter()
        .map(|l| {
            let t = l.trim();
            let content = flat_marker_re().replace(t, "");
            ListItem::new(content.trim(), 0)
        })
        .collect();
    let item_count = items.len();
    Some(Matched {
        block: list_block(list_type, items, item_count, cur.raw_to(&end)),
        next: end,
    })
}
