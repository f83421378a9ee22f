pub mod definitions;
pub mod document;

pub use definitions::*;
pub use document::*;
