//! # Block Parsing
//!
//! Line-oriented block recognition over an immutable line list.
//!
//! ## Modules
//!
//! - **`dispatch`**: `BlockContext`, the ordered rule tables and `segment`
//! - **`kinds`**: one module per block kind, each owning its delimiters and
//!   a matcher of type [`dispatch::BlockParser`]
//! - **`directive`**: `$name: value` lines shared by quotes, code and images
//!
//! ## Key Invariants
//!
//! - Matchers take a [`LineCursor`](crate::parsing::lines::LineCursor) by
//!   value and return the block plus the cursor past it; they never mutate
//!   shared scan state
//! - A rejected construct (unclosed fence, table without separator) returns
//!   `None` and its lines fall through to later rules or paragraph text
//! - Quote content is segmented by the same loop one depth deeper

pub mod directive;
pub mod dispatch;
pub mod kinds;

pub use dispatch::{
    BlockContext, BlockParser, BlockRule, DOCUMENT_RULES, Matched, QUOTE_RULES, segment,
};
