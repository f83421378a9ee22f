use std::collections::BTreeMap;

use serde::Serialize;

/// Link reference definitions keyed by lower-cased label.
pub type LinkDefinitions = BTreeMap<String, LinkDefinition>;

/// Footnote definitions keyed by id.
pub type FootnoteDefinitions = BTreeMap<String, FootnoteDefinition>;

/// `[label]: url "title"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDefinition {
    /// The label as written in the source.
    pub label: String,
    pub url: String,
    pub title: Option<String>,
}

/// `[^id]: content`, plus any indented continuation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FootnoteDefinition {
    pub id: String,
    /// 1-based, in order of definition appearance.
    pub number: usize,
    pub content: String,
    pub raw: String,
}
