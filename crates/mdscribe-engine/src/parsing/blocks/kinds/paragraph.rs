use crate::models::{Block, BlockKind};

/// Paragraph block type.
///
/// Paragraphs have no delimiters. They are the fallback for lines no other
/// rule claims, and run until a blank line or the start of another block.
pub struct Paragraph;

impl Paragraph {
    pub const JOIN: &'static str = "\n";
}

/// Open paragraph lines awaiting a flush.
#[derive(Debug, Default)]
pub struct ParagraphBuffer<'a> {
    lines: Vec<&'a str>,
}

impl<'a> ParagraphBuffer<'a> {
    pub fn push(&mut self, line: &'a str) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Emits the open paragraph, if any, and clears the buffer.
    ///
    /// Lines are kept untrimmed so trailing-space line breaks survive to the
    /// inline tokenizer.
    pub fn flush_into(&mut self, blocks: &mut Vec<Block>) {
        if self.lines.is_empty() {
            return;
        }
        let text = self.lines.join(Paragraph::JOIN);
        blocks.push(Block::new(BlockKind::Paragraph, text.clone(), text));
        self.lines.clear();
    }
}
