use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::duration::parse_duration;
use crate::error::SetlistError;
use crate::models::{find_unprintable, Song, SongRecord};

const TITLE_COLUMN: &str = "Song";
const LENGTH_COLUMN: &str = "Length";

/// Reads the song table: a CSV with `Song` and `Length` ("MM:SS") columns
pub struct SongTable;

impl SongTable {
    pub fn load(path: &Path) -> Result<Vec<Song>, SetlistError> {
        let file = File::open(path).map_err(|e| {
            SetlistError::Input(format!("failed to open {}: {e}", path.display()))
        })?;
        let songs = Self::from_reader(file)?;
        info!("Loaded {} songs from {}", songs.len(), path.display());
        Ok(songs)
    }

    /// Parse songs in row order. The first malformed row aborts the whole read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Song>, SetlistError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| SetlistError::Input(format!("failed to read header row: {e}")))?
            .clone();
        for column in [TITLE_COLUMN, LENGTH_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(SetlistError::Input(format!(
                    "missing required column '{column}'"
                )));
            }
        }

        let mut songs = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| SetlistError::Input(format!("malformed row: {e}")))?;
            let row = record.position().map(|p| p.line()).unwrap_or_default();
            let parsed: SongRecord = record
                .deserialize(Some(&headers))
                .map_err(|e| SetlistError::Input(format!("row {row}: {e}")))?;

            if let Some(c) = find_unprintable(&parsed.title) {
                return Err(SetlistError::Input(format!(
                    "row {row}: song title contains control character U+{:04X}",
                    c as u32
                )));
            }

            let duration = parse_duration(&parsed.length)
                .map_err(|e| SetlistError::format(row, &parsed.length, e))?;
            if has_overflowing_seconds(&parsed.length) {
                warn!(
                    "Row {row}: '{}' has a seconds field of 60 or more",
                    parsed.length
                );
            }

            songs.push(Song::new(parsed.title, duration));
        }

        Ok(songs)
    }
}

fn has_overflowing_seconds(length: &str) -> bool {
    length
        .rsplit(':')
        .next()
        .and_then(|seconds| seconds.trim().parse::<u32>().ok())
        .is_some_and(|seconds| seconds >= 60)
}
