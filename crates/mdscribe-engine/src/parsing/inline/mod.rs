//! # Inline Parsing
//!
//! Cursor-based tokenization of paragraph and heading text into
//! [`InlineToken`]s.
//!
//! ## Modules
//!
//! - **`types`**: `InlineToken`, the tagged union handed to consumers
//! - **`kinds`**: inline syntax types owning their delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning with save/restore
//! - **`parser`**: `parse_inline()` and the ordered `INLINE_RULES` table
//!
//! ## Precedence
//!
//! Rules are tried in table order at every position. Code spans come first
//! and are raw zones: `` `**bold**` `` is one code token. Link forms come
//! last so a `[` inside emphasis never splits it.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{INLINE_RULES, InlineRule, parse_inline};
pub use types::InlineToken;
