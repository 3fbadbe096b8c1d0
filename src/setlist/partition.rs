use tracing::{debug, warn};

use super::{PartitionPolicy, Set};
use crate::duration::format_duration;
use crate::models::Song;

/// Greedy single-pass grouping of songs into sets
pub struct SetPartitioner;

impl SetPartitioner {
    /// Split `songs` into sealed, numbered sets without reordering or dropping any.
    ///
    /// The boundary check only happens before a song is added, so the first song
    /// of a set is always admitted even when it alone exceeds a duration cap.
    pub fn partition(songs: Vec<Song>, policy: PartitionPolicy) -> Vec<Set> {
        let sets = songs.into_iter().fold(Vec::<Set>::new(), |mut sets, song| {
            let open = sets
                .last()
                .filter(|set| !Self::should_seal(set, &song, policy))
                .is_some();

            if open {
                if let Some(set) = sets.last_mut() {
                    set.total_duration = set.total_duration.saturating_add(song.duration);
                    set.songs.push(song);
                }
            } else {
                if let Some(sealed) = sets.last() {
                    Self::log_sealed(sealed);
                }
                let number = sets.len() + 1;
                sets.push(Set {
                    number,
                    total_duration: song.duration,
                    songs: vec![song],
                });
            }
            sets
        });

        if let Some(last) = sets.last() {
            Self::log_sealed(last);
        }

        if let PartitionPolicy::DurationBounded(max) = policy {
            for set in sets.iter().filter(|set| set.total_duration > max) {
                warn!(
                    "Set {} runs {} which exceeds the {} cap",
                    set.number,
                    format_duration(set.total_duration),
                    format_duration(max)
                );
            }
        }

        sets
    }

    fn log_sealed(set: &Set) {
        debug!(
            "Sealed set {} with {} songs ({})",
            set.number,
            set.song_count(),
            format_duration(set.total_duration)
        );
    }

    /// Whether the current set must be closed before `next` is added
    fn should_seal(current: &Set, next: &Song, policy: PartitionPolicy) -> bool {
        if current.songs.is_empty() {
            return false;
        }
        match policy {
            PartitionPolicy::FixedCount(count) => current.song_count() >= count,
            PartitionPolicy::DurationBounded(max) => {
                current.total_duration.saturating_add(next.duration) > max
            }
        }
    }
}
