pub mod highlight;
pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use highlight::{HighlightError, Highlighter, PlainHighlighter, highlight_or_escape};
pub use io::{IoError, load_and_parse};
pub use models::*;
pub use parsing::inline::InlineToken;
pub use parsing::resolve::resolve_tokens;
pub use parsing::{ParseOptions, parse};
