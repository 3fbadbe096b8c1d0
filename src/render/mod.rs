//! Turning planned sets into document output.
//!
//! [`PageAssembler`] lays each set out as a flat list of [`Block`]s, and a
//! [`Renderer`] serializes those blocks into the bytes of one output format.

pub mod docx;
pub mod text;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::GigMetadata;
use crate::duration::format_duration;
use crate::error::SetlistError;
use crate::setlist::PlannedSet;

pub use docx::DocxRenderer;
pub use text::TextRenderer;

/// A centered run of text at a fixed point size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub size: u32, // points
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    PageBreak,
}

impl Block {
    fn paragraph(text: impl Into<String>, size: u32) -> Self {
        Block::Paragraph(Paragraph {
            text: text.into(),
            size,
            bold: false,
        })
    }

    fn heading(text: impl Into<String>, size: u32) -> Self {
        Block::Paragraph(Paragraph {
            text: text.into(),
            size,
            bold: true,
        })
    }
}

/// Lays out one page per set, with the same gig header on every page
pub struct PageAssembler<'a> {
    gig: &'a GigMetadata,
}

impl<'a> PageAssembler<'a> {
    pub fn new(gig: &'a GigMetadata) -> Self {
        Self { gig }
    }

    /// Emit every page in order, separated by page breaks. No sets means no blocks.
    pub fn assemble(&self, sets: &[PlannedSet]) -> Vec<Block> {
        let mut blocks = Vec::new();
        for (i, planned) in sets.iter().enumerate() {
            if i > 0 {
                blocks.push(Block::PageBreak);
            }
            self.push_page(&mut blocks, planned);
        }
        blocks
    }

    fn push_page(&self, blocks: &mut Vec<Block>, planned: &PlannedSet) {
        let PlannedSet { set, layout } = planned;
        let size = layout.font_size;

        blocks.push(Block::heading(self.gig.band_name.as_str(), size));
        blocks.push(Block::paragraph(self.gig.venue.as_str(), size));
        blocks.push(Block::paragraph(self.gig.date.as_str(), size));
        blocks.push(Block::heading(format!("Set {}", set.number), size));

        for (index, song) in set.songs.iter().enumerate() {
            blocks.push(Block::paragraph(
                format!(
                    "{} : {} - {}",
                    index + 1,
                    song.title,
                    format_duration(song.duration)
                ),
                size,
            ));
        }

        blocks.push(Block::paragraph(
            format!("Total Set Length: {}", format_duration(set.total_duration)),
            layout.footer_size,
        ));
    }
}

/// Serializes assembled blocks into one document format
pub trait Renderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, SetlistError>;
}

/// Writes the block list itself as pretty JSON
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, SetlistError> {
        serde_json::to_vec_pretty(blocks)
            .map_err(|e| SetlistError::Render(format!("failed to serialize JSON: {e}")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Docx,
    Text,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Docx => Box::new(DocxRenderer),
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}
