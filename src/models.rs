use serde::Deserialize;

/// A song as read from the input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub duration: u32, // in seconds
}

impl Song {
    pub fn new(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }
}

/// Whether `c` may appear in an XML 1.0 document
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

/// First character of `text` that cannot be written to a document, if any
pub fn find_unprintable(text: &str) -> Option<char> {
    text.chars().find(|c| !is_xml_char(*c))
}

/// Raw row of the song table, before the length is parsed
#[derive(Debug, Deserialize)]
pub struct SongRecord {
    #[serde(rename = "Song")]
    pub title: String,
    #[serde(rename = "Length")]
    pub length: String,
}
