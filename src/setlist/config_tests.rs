#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::duration::{format_duration, parse_duration};
    use crate::models::Song;

    fn song(title: &str, length: &str) -> Song {
        Song::new(title, parse_duration(length).unwrap())
    }

    fn numbered_songs(durations: &[u32]) -> Vec<Song> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &d)| Song::new(format!("Song {}", i + 1), d))
            .collect()
    }

    fn flatten(sets: &[Set]) -> Vec<Song> {
        sets.iter().flat_map(|set| set.songs.clone()).collect()
    }

    /// Deterministic pseudo-random durations between 0:30 and 12:29
    fn varied_durations(seed: u32, len: usize) -> Vec<u32> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                30 + (state >> 16) % 720
            })
            .collect()
    }

    #[test]
    fn test_two_short_songs_fit_one_set() {
        let songs = vec![song("Song1", "2:30"), song("Song2", "3:00")];
        let sets = SetPartitioner::partition(songs, PartitionPolicy::DurationBounded(330));

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].number, 1);
        assert_eq!(sets[0].song_count(), 2);
        assert_eq!(format_duration(sets[0].total_duration), "5:30");
    }

    #[test]
    fn test_song_that_would_exceed_cap_starts_new_set() {
        let songs = vec![song("A", "30:00"), song("B", "20:00")];
        let sets = SetPartitioner::partition(songs, PartitionPolicy::default());

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].songs[0].title, "A");
        assert_eq!(format_duration(sets[0].total_duration), "30:00");
        assert_eq!(sets[1].number, 2);
        assert_eq!(sets[1].songs[0].title, "B");
        assert_eq!(format_duration(sets[1].total_duration), "20:00");
    }

    #[test]
    fn test_song_exactly_reaching_cap_stays_in_set() {
        let songs = numbered_songs(&[1500, 1200, 60]);
        let sets = SetPartitioner::partition(songs, PartitionPolicy::DurationBounded(2700));

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].total_duration, 2700);
        assert_eq!(sets[1].total_duration, 60);
    }

    #[test]
    fn test_oversized_song_forms_its_own_set() {
        let songs = numbered_songs(&[300, 4000, 300]);
        let sets = SetPartitioner::partition(songs, PartitionPolicy::DurationBounded(2700));

        assert_eq!(sets.len(), 3);
        assert_eq!(sets[1].song_count(), 1);
        assert_eq!(sets[1].total_duration, 4000);
        assert_eq!(flatten(&sets).len(), 3);
    }

    #[test]
    fn test_oversized_first_song_is_admitted() {
        let songs = numbered_songs(&[5000]);
        let sets = SetPartitioner::partition(songs, PartitionPolicy::DurationBounded(100));

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].total_duration, 5000);
    }

    #[test]
    fn test_empty_input_yields_no_sets() {
        assert!(SetPartitioner::partition(Vec::new(), PartitionPolicy::default()).is_empty());
        assert!(SetPartitioner::partition(Vec::new(), PartitionPolicy::FixedCount(3)).is_empty());
    }

    #[test]
    fn test_fixed_count_partition() {
        let songs = numbered_songs(&[180; 7]);
        let sets = SetPartitioner::partition(songs, PartitionPolicy::FixedCount(3));

        let counts: Vec<usize> = sets.iter().map(Set::song_count).collect();
        assert_eq!(counts, vec![3, 3, 1]);
        assert_eq!(sets[2].number, 3);
        assert_eq!(sets[0].total_duration, 540);
    }

    #[test]
    fn test_fixed_count_ignores_duration() {
        let songs = numbered_songs(&[4000, 4000]);
        let sets = SetPartitioner::partition(songs, PartitionPolicy::FixedCount(2));
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].total_duration, 8000);
    }

    #[test]
    fn test_partition_preserves_every_song_in_order() {
        for seed in 0..20 {
            let songs = numbered_songs(&varied_durations(seed, 40));
            for policy in [
                PartitionPolicy::DurationBounded(900),
                PartitionPolicy::DurationBounded(2700),
                PartitionPolicy::DurationBounded(60),
                PartitionPolicy::FixedCount(1),
                PartitionPolicy::FixedCount(7),
            ] {
                let sets = SetPartitioner::partition(songs.clone(), policy);
                assert_eq!(flatten(&sets), songs, "policy {policy:?}, seed {seed}");
            }
        }
    }

    #[test]
    fn test_partition_respects_cap_for_multi_song_sets() {
        for seed in 0..20 {
            let songs = numbered_songs(&varied_durations(seed, 40));
            for max in [300, 900, 2700] {
                let sets = SetPartitioner::partition(songs.clone(), PartitionPolicy::DurationBounded(max));
                for set in &sets {
                    assert!(!set.songs.is_empty());
                    if set.song_count() > 1 {
                        assert!(set.total_duration <= max, "set {} over cap {max}", set.number);
                    }
                    let sum: u32 = set.songs.iter().map(|s| s.duration).sum();
                    assert_eq!(sum, set.total_duration);
                }
                let numbers: Vec<usize> = sets.iter().map(|s| s.number).collect();
                assert_eq!(numbers, (1..=sets.len()).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_font_size_default_within_capacity() {
        let layout = LayoutConfig::default();
        assert_eq!(SetLayout::font_size(0, &layout), 18);
        assert_eq!(SetLayout::font_size(10, &layout), 18);
    }

    #[test]
    fn test_font_size_shrinks_past_capacity() {
        let layout = LayoutConfig::default();
        assert_eq!(SetLayout::font_size(11, &layout), 17);
        assert_eq!(SetLayout::font_size(12, &layout), 16);
        assert_eq!(SetLayout::font_size(18, &layout), 10);
        assert_eq!(SetLayout::font_size(19, &layout), 10);
        assert_eq!(SetLayout::font_size(500, &layout), 10);
    }

    #[test]
    fn test_font_size_is_monotonic_and_clamped() {
        let layout = LayoutConfig::default();
        let mut previous = u32::MAX;
        for count in 0..60 {
            let size = SetLayout::font_size(count, &layout);
            assert!(size <= previous);
            assert!(size >= layout.min_size);
            previous = size;
        }
    }

    #[test]
    fn test_footer_is_clamped_by_default() {
        let layout = LayoutConfig::default();
        assert_eq!(SetLayout::decide(5, &layout).footer_size, 14);
        assert_eq!(SetLayout::decide(15, &layout).footer_size, 10);
        assert_eq!(SetLayout::decide(30, &layout).footer_size, 10);
    }

    #[test]
    fn test_legacy_footer_keeps_fixed_offset() {
        let layout = LayoutConfig {
            legacy_footer: true,
            ..LayoutConfig::default()
        };
        assert_eq!(SetLayout::decide(5, &layout).footer_size, 14);
        assert_eq!(SetLayout::decide(30, &layout).footer_size, 6);

        let tiny = LayoutConfig {
            default_size: 3,
            min_size: 2,
            legacy_footer: true,
            ..LayoutConfig::default()
        };
        assert_eq!(SetLayout::decide(1, &tiny).footer_size, 0);
    }

    #[test]
    fn test_generator_shrinks_large_set() {
        let songs = numbered_songs(&[180; 12]);
        let generator = SetlistGenerator::new(SetlistConfig {
            policy: PartitionPolicy::DurationBounded(10_000),
            layout: LayoutConfig::default(),
        });
        let setlist = generator.generate_setlist(songs);

        assert_eq!(setlist.sets.len(), 1);
        assert_eq!(setlist.sets[0].set.song_count(), 12);
        assert_eq!(setlist.sets[0].layout.font_size, 16);
        assert_eq!(setlist.sets[0].layout.footer_size, 12);
    }

    #[test]
    fn test_generator_metadata() {
        let songs = numbered_songs(&[1200, 1200, 1500, 600]);
        let generator = SetlistGenerator::new(SetlistConfig::default());
        let setlist = generator.generate_setlist(songs);

        assert_eq!(
            setlist.metadata,
            SetlistMetadata {
                total_duration: 4500,
                total_songs: 4,
                set_count: 2,
                longest_set: Some(1),
            }
        );
    }

    #[test]
    fn test_generator_with_no_songs() {
        let setlist = SetlistGenerator::new(SetlistConfig::default()).generate_setlist(Vec::new());
        assert!(setlist.sets.is_empty());
        assert_eq!(setlist.metadata.set_count, 0);
        assert_eq!(setlist.metadata.longest_set, None);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(PartitionPolicy::default().to_string(), "at most 45:00 per set");
        assert_eq!(PartitionPolicy::FixedCount(12).to_string(), "12 songs per set");
    }
}
