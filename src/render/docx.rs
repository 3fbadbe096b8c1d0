use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{Block, Paragraph, Renderer};
use crate::error::SetlistError;
use crate::models::find_unprintable;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Minimal WordprocessingML package: one centered paragraph per block
pub struct DocxRenderer;

impl DocxRenderer {
    /// Body XML for `word/document.xml`
    pub fn document_xml(blocks: &[Block]) -> Result<Vec<u8>, SetlistError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Start(
                BytesStart::new("w:document").with_attributes([("xmlns:w", WORDPROCESSING_NS)]),
            ))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Start(BytesStart::new("w:body")))
            .map_err(xml_error)?;

        for block in blocks {
            match block {
                Block::Paragraph(paragraph) => write_paragraph(&mut writer, paragraph)?,
                Block::PageBreak => write_page_break(&mut writer).map_err(xml_error)?,
            }
        }

        writer
            .write_event(Event::End(BytesEnd::new("w:body")))
            .map_err(xml_error)?;
        writer
            .write_event(Event::End(BytesEnd::new("w:document")))
            .map_err(xml_error)?;

        Ok(writer.into_inner().into_inner())
    }
}

impl Renderer for DocxRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, SetlistError> {
        let document = Self::document_xml(blocks)?;
        let parts: [(&str, &[u8]); 3] = [
            ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
            ("_rels/.rels", PACKAGE_RELS.as_bytes()),
            ("word/document.xml", &document),
        ];

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            zip.start_file(name, options).map_err(zip_error)?;
            zip.write_all(content)
                .map_err(|e| SetlistError::Render(format!("failed to write {name}: {e}")))?;
        }
        let cursor = zip.finish().map_err(zip_error)?;
        Ok(cursor.into_inner())
    }
}

fn zip_error(e: zip::result::ZipError) -> SetlistError {
    SetlistError::Render(format!("failed to build docx package: {e}"))
}

fn xml_error(e: impl std::fmt::Display) -> SetlistError {
    SetlistError::Render(format!("failed to write document.xml: {e}"))
}

fn write_paragraph<W: Write>(writer: &mut Writer<W>, paragraph: &Paragraph) -> Result<(), SetlistError> {
    if let Some(c) = find_unprintable(&paragraph.text) {
        return Err(SetlistError::Render(format!(
            "'{}' contains control character U+{:04X}",
            paragraph.text.escape_debug(),
            c as u32
        )));
    }

    // w:sz is in half-points
    let half_points = (paragraph.size * 2).to_string();

    writer.write_event(Event::Start(BytesStart::new("w:p"))).map_err(xml_error)?;
    writer.write_event(Event::Start(BytesStart::new("w:pPr"))).map_err(xml_error)?;
    writer
        .write_event(Event::Empty(
            BytesStart::new("w:jc").with_attributes([("w:val", "center")]),
        ))
        .map_err(xml_error)?;
    writer.write_event(Event::End(BytesEnd::new("w:pPr"))).map_err(xml_error)?;

    writer.write_event(Event::Start(BytesStart::new("w:r"))).map_err(xml_error)?;
    writer.write_event(Event::Start(BytesStart::new("w:rPr"))).map_err(xml_error)?;
    if paragraph.bold {
        writer.write_event(Event::Empty(BytesStart::new("w:b"))).map_err(xml_error)?;
    }
    for tag in ["w:sz", "w:szCs"] {
        writer
            .write_event(Event::Empty(
                BytesStart::new(tag).with_attributes([("w:val", half_points.as_str())]),
            ))
            .map_err(xml_error)?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:rPr"))).map_err(xml_error)?;

    writer
        .write_event(Event::Start(
            BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
        ))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(&paragraph.text)))
        .map_err(xml_error)?;
    writer.write_event(Event::End(BytesEnd::new("w:t"))).map_err(xml_error)?;

    writer.write_event(Event::End(BytesEnd::new("w:r"))).map_err(xml_error)?;
    writer.write_event(Event::End(BytesEnd::new("w:p"))).map_err(xml_error)?;
    Ok(())
}

fn write_page_break<W: Write>(writer: &mut Writer<W>) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;
    writer.write_event(Event::Empty(
        BytesStart::new("w:br").with_attributes([("w:type", "page")]),
    ))?;
    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}
