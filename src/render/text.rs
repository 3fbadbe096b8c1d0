use super::{Block, Renderer};
use crate::error::SetlistError;

/// Plain-text output; pages are separated by a form feed
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, SetlistError> {
        let mut out = String::new();
        for block in blocks {
            match block {
                Block::Paragraph(paragraph) => {
                    out.push_str(&paragraph.text);
                    out.push('\n');
                }
                Block::PageBreak => out.push('\u{c}'),
            }
        }
        Ok(out.into_bytes())
    }
}
