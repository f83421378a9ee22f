use serde::Serialize;
use serde_json::{Map, Value};

use crate::highlight::{Highlighter, highlight_or_escape};
use crate::parsing::{inline, resolve::resolve_tokens};

use super::definitions::{FootnoteDefinition, FootnoteDefinitions, LinkDefinitions};

/// Free-form metadata attached to frontmatter and to individual blocks.
pub type Metadata = Map<String, Value>;

/// A fully parsed markdown document.
///
/// Produced in a single pass by [`crate::parse`]; nothing in it is mutated
/// afterwards. The link and footnote definitions extracted by the pre-pass are
/// kept so inline tokens can be resolved lazily via [`Document::inlines`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub frontmatter: Option<Metadata>,
    pub blocks: Vec<Block>,
    pub raw_source: String,
    pub links: LinkDefinitions,
    pub footnotes: FootnoteDefinitions,
}

impl Document {
    /// Tokenizes the inline content of a textual block and resolves its
    /// reference and footnote tokens against this document's definitions.
    ///
    /// Non-textual blocks (code, tables, quotes, ...) yield no tokens; their
    /// parts are tokenized individually through [`Document::inline`].
    pub fn inlines(&self, block: &Block) -> Vec<inline::InlineToken> {
        match block.inline_source() {
            Some(text) => self.inline(text),
            None => vec![],
        }
    }

    /// Tokenizes arbitrary text (a list item, a table cell) and resolves it.
    pub fn inline(&self, text: &str) -> Vec<inline::InlineToken> {
        resolve_tokens(inline::parse_inline(text), &self.links, &self.footnotes)
    }

    /// Headings of the top-level block sequence, in document order.
    pub fn headings(&self) -> impl Iterator<Item = &Heading> {
        self.blocks.iter().filter_map(|b| match &b.kind {
            BlockKind::Heading(h) => Some(h),
            _ => None,
        })
    }
}

/// A top-level structural unit of a document.
///
/// `content` is the semantic text of the block and `raw` the exact source
/// lines it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
    pub raw: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub metadata: Metadata,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            raw: raw.into(),
            metadata: Metadata::new(),
        }
    }

    /// Adds a metadata entry, builder style.
    #[must_use]
    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// Short lowercase name of the block variant.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// The text the inline tokenizer should run over, for textual blocks.
    pub fn inline_source(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Paragraph => Some(&self.content),
            BlockKind::Heading(h) => Some(&h.text),
            _ => None,
        }
    }

    /// Highlighted markup for a code block; `None` for every other block.
    pub fn highlighted(&self, highlighter: &dyn Highlighter) -> Option<String> {
        match &self.kind {
            BlockKind::Code(code) => Some(highlight_or_escape(
                highlighter,
                &self.content,
                code.language.as_deref(),
            )),
            _ => None,
        }
    }
}

/// The closed set of block variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockKind {
    /// Leading metadata section; the parsed map lives in `Block::metadata`.
    Frontmatter,
    Paragraph,
    Heading(Heading),
    Code(CodeBlock),
    List(ListBlock),
    Quote(QuoteBlock),
    Table(TableBlock),
    Html,
    HorizontalRule,
    Image(ImageBlock),
    Toc(TocBlock),
    Footnotes(FootnotesBlock),
    Math(MathBlock),
}

impl BlockKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Frontmatter => "frontmatter",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading(_) => "heading",
            BlockKind::Code(_) => "code",
            BlockKind::List(_) => "list",
            BlockKind::Quote(_) => "quote",
            BlockKind::Table(_) => "table",
            BlockKind::Html => "html",
            BlockKind::HorizontalRule => "horizontalRule",
            BlockKind::Image(_) => "image",
            BlockKind::Toc(_) => "toc",
            BlockKind::Footnotes(_) => "footnotes",
            BlockKind::Math(_) => "math",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1..=6
    pub level: u8,
    pub text: String,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    Fenced,
    Indented,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub kind: CodeKind,
    /// Taken from a `$icon:` directive on the first content line.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    Unordered,
    Task,
}

impl ListType {
    pub fn as_str(self) -> &'static str {
        match self {
            ListType::Ordered => "ordered",
            ListType::Unordered => "unordered",
            ListType::Task => "task",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlock {
    /// Fixed by the first line of the run.
    pub list_type: ListType,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Item text with its marker stripped, before inline parsing.
    pub content: String,
    /// Count of leading whitespace characters on the source line.
    pub indent: usize,
    pub checked: Option<bool>,
    pub children: Vec<ListItem>,
}

impl ListItem {
    pub fn new(content: impl Into<String>, indent: usize) -> Self {
        Self {
            content: content.into(),
            indent,
            checked: None,
            children: vec![],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteBlock {
    pub blocks: Vec<Block>,
    pub icon: Option<String>,
    pub author: Option<String>,
    pub audio: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub content: String,
    pub align: Option<Alignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    pub header: Vec<TableCell>,
    pub rows: Vec<Vec<TableCell>>,
    pub alignments: Vec<Option<Alignment>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub alt: String,
    pub src: String,
    pub title: Option<String>,
    /// Target of a link-wrapped image (`[![alt](src)](url)`).
    pub link_url: Option<String>,
    pub position: ImagePosition,
    /// Label of a reference-style image (`![alt][ref]`).
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TocBlock {
    pub entries: Vec<TocEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FootnotesBlock {
    /// Sorted by assigned number.
    pub definitions: Vec<FootnoteDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathBlock {
    pub display: bool,
    pub latex: String,
}
