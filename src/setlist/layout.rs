use super::LayoutConfig;

/// Font sizes chosen for one set's page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDecision {
    pub font_size: u32,
    pub footer_size: u32,
}

/// Font-size heuristic that shrinks text on pages with many songs
pub struct SetLayout;

impl SetLayout {
    /// Song-line font size: one point smaller per song over capacity, never below `min_size`.
    pub fn font_size(song_count: usize, config: &LayoutConfig) -> u32 {
        if song_count <= config.capacity {
            return config.default_size;
        }
        let overflow = u32::try_from(song_count - config.capacity).unwrap_or(u32::MAX);
        config
            .default_size
            .saturating_sub(overflow)
            .max(config.min_size)
    }

    pub fn decide(song_count: usize, config: &LayoutConfig) -> LayoutDecision {
        let font_size = Self::font_size(song_count, config);
        let footer_size = font_size.saturating_sub(config.footer_offset);
        let footer_size = if config.legacy_footer {
            footer_size
        } else {
            footer_size.max(config.min_size)
        };
        LayoutDecision {
            font_size,
            footer_size,
        }
    }
}
