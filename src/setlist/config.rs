use std::fmt;

use serde::Deserialize;

use crate::duration::format_duration;

/// Default cap on a set's total running time (45 minutes)
pub const DEFAULT_MAX_SET_DURATION: u32 = 2700;

/// How songs are grouped into sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionPolicy {
    /// Close a set once it holds this many songs
    FixedCount(usize),
    /// Close a set before the next song would push it past this many seconds
    DurationBounded(u32),
}

impl Default for PartitionPolicy {
    fn default() -> Self {
        PartitionPolicy::DurationBounded(DEFAULT_MAX_SET_DURATION)
    }
}

impl fmt::Display for PartitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionPolicy::FixedCount(count) => write!(f, "{count} songs per set"),
            PartitionPolicy::DurationBounded(max) => {
                write!(f, "at most {} per set", format_duration(*max))
            }
        }
    }
}

/// Font sizing rules for set pages (sizes in points)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub capacity: usize, // songs that fit a page at the default size
    pub default_size: u32,
    pub min_size: u32,
    pub footer_offset: u32, // footer is this many points smaller than the song lines
    pub legacy_footer: bool, // skip clamping the footer to min_size
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            default_size: 18,
            min_size: 10,
            footer_offset: 4,
            legacy_footer: false,
        }
    }
}

/// Everything the generator needs to plan a setlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetlistConfig {
    pub policy: PartitionPolicy,
    pub layout: LayoutConfig,
}
