//! # Definition Extractors
//!
//! Pre-pass scanners run before block dispatch. Each one removes its
//! definition lines from the stream and returns them keyed for lookup, so a
//! definition can never be mistaken for paragraph text.
//!
//! Footnotes run first: a `[^id]: ..` line is a footnote, never a link.

pub mod footnotes;
pub mod links;

pub use footnotes::extract_footnotes;
pub use links::extract_links;
