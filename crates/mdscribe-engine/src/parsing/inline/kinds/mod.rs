//! # Inline Kinds
//!
//! Inline syntax types that own their delimiters. The parser refers to
//! these constants and never hardcodes a marker.
//!
//! - **`CodeSpan`**: raw zone that suppresses other parsing
//! - **`InlineMath`**: `$...$`, never opened or closed by an escaped `$`
//! - **`Emphasis`**: bold, italic and their combinations
//! - **`Marks`**: strikethrough, sub/superscript, highlight, `<u>`/`<mark>`
//! - **`LinkSyntax`**: inline links, reference links, footnote references
//! - **`LineBreak`**: `<br>`, trailing-space and backslash breaks

pub mod code_span;
pub mod emphasis;
pub mod line_break;
pub mod link;
pub mod marks;
pub mod math;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use line_break::LineBreak;
pub use link::LinkSyntax;
pub use marks::Marks;
pub use math::InlineMath;
