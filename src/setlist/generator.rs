use tracing::info;

use super::layout::SetLayout;
use super::partition::SetPartitioner;
use super::{PlannedSet, Setlist, SetlistConfig, SetlistMetadata};
use crate::duration::format_duration;
use crate::models::Song;

/// Main setlist generator
pub struct SetlistGenerator {
    config: SetlistConfig,
}

impl SetlistGenerator {
    pub fn new(config: SetlistConfig) -> Self {
        Self { config }
    }

    /// Group songs into sets and pick a layout for each page
    pub fn generate_setlist(&self, songs: Vec<Song>) -> Setlist {
        let sets = SetPartitioner::partition(songs, self.config.policy);
        let metadata = SetlistMetadata::from_sets(&sets);

        info!(
            "Planned {} sets from {} songs ({} total, {})",
            metadata.set_count,
            metadata.total_songs,
            format_duration(metadata.total_duration),
            self.config.policy
        );

        let sets = sets
            .into_iter()
            .map(|set| PlannedSet {
                layout: SetLayout::decide(set.song_count(), &self.config.layout),
                set,
            })
            .collect();

        Setlist { sets, metadata }
    }
}
