pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod horizontal_rule;
pub mod html;
pub mod image;
pub mod list;
pub mod math;
pub mod paragraph;
pub mod table;
pub mod toc;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::AtxHeading;
pub use horizontal_rule::HorizontalRule;
pub use html::HtmlBlock;
pub use list::ListMarker;
pub use math::DisplayMath;
pub use paragraph::{Paragraph, ParagraphBuffer};
pub use table::PipeTable;
pub use toc::TocMarker;
