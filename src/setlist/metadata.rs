use super::LayoutDecision;
use crate::models::Song;

/// A sealed performance set: a contiguous, non-empty run of songs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set {
    pub number: usize, // 1-based, in emission order
    pub songs: Vec<Song>,
    pub total_duration: u32, // in seconds
}

impl Set {
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }
}

/// A set together with the layout chosen for its page
#[derive(Debug, Clone)]
pub struct PlannedSet {
    pub set: Set,
    pub layout: LayoutDecision,
}

/// The complete output of a generation run
#[derive(Debug, Clone)]
pub struct Setlist {
    pub sets: Vec<PlannedSet>,
    pub metadata: SetlistMetadata,
}

/// Totals across all sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetlistMetadata {
    pub total_duration: u32, // in seconds
    pub total_songs: usize,
    pub set_count: usize,
    pub longest_set: Option<usize>, // set number
}

impl SetlistMetadata {
    pub fn from_sets(sets: &[Set]) -> Self {
        Self {
            total_duration: sets.iter().map(|set| set.total_duration).sum(),
            total_songs: sets.iter().map(Set::song_count).sum(),
            set_count: sets.len(),
            longest_set: sets
                .iter()
                .max_by(|a, b| {
                    a.total_duration
                        .cmp(&b.total_duration)
                        .then(b.number.cmp(&a.number))
                })
                .map(|set| set.number),
        }
    }
}
