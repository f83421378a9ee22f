use serde::{Deserialize, Serialize};

/// Feature gates for a parse.
///
/// A disabled feature's extractor or matcher simply does not participate;
/// lines it would have claimed fall through to paragraph handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub enable_frontmatter: bool,
    pub enable_tables: bool,
    pub enable_footnotes: bool,
    pub enable_math: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            enable_frontmatter: true,
            enable_tables: true,
            enable_footnotes: true,
            enable_math: true,
        }
    }
}
