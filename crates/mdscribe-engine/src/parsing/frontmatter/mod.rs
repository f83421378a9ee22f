//! # Frontmatter
//!
//! A leading `---`-delimited metadata section. The body between the
//! delimiters is parsed best-effort by the YAML subset in [`yaml`]: lines it
//! cannot read are dropped and every readable key is kept.

pub mod yaml;

use crate::models::{Block, BlockKind, Metadata};

/// The delimiter line opening and closing a frontmatter section.
pub const DELIMITER: &str = "---";

/// A successfully extracted frontmatter section.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter<'a> {
    pub metadata: Metadata,
    /// The consumed source, both delimiter lines included.
    pub raw: &'a str,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

impl Frontmatter<'_> {
    /// The frontmatter as a document block; `content` is pretty-printed JSON.
    pub fn to_block(&self) -> Block {
        let content = serde_json::to_string_pretty(&self.metadata).unwrap_or_default();
        let mut block = Block::new(BlockKind::Frontmatter, content, self.raw);
        block.metadata = self.metadata.clone();
        block
    }
}

/// Extracts a frontmatter section from the start of `text`.
///
/// Returns `None` when the first non-empty line is not `---` or when no
/// closing `---` follows.
pub fn extract(text: &str) -> Option<Frontmatter<'_>> {
    let mut offset = 0;
    let mut lines = text.split_inclusive('\n').map(|line| {
        let start = offset;
        offset += line.len();
        (start, line)
    });

    let (open_start, _) = lines.find(|(_, l)| !l.trim().is_empty())?;
    if text[open_start..].lines().next().map(str::trim) != Some(DELIMITER) {
        return None;
    }
    let yaml_start = open_start + text[open_start..].find('\n')? + 1;

    let (close_start, close_line) = lines.find(|(_, l)| l.trim() == DELIMITER)?;
    let close_end = close_start + close_line.len();

    let metadata = yaml::parse(&text[yaml_start..close_start]);

    let raw = text[open_start..close_end].trim_end_matches(['\r', '\n']);
    Some(Frontmatter {
        metadata,
        raw,
        body: &text[close_end..],
    })
}
