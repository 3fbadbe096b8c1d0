use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::duration::parse_duration;
use crate::error::SetlistError;
use crate::setlist::{LayoutConfig, PartitionPolicy};

pub const DEFAULT_BAND_NAME: &str = "Band name not provided";
pub const DEFAULT_VENUE: &str = "Venue not provided";
pub const DEFAULT_DATE: &str = "Date not provided";

/// Optional gig configuration loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GigConfig {
    pub band_name: Option<String>,
    pub gig_venue: Option<String>,
    pub gig_date: Option<String>,
    pub max_set_duration: Option<String>, // "MM:SS"
    pub songs_per_set: Option<usize>,
    pub layout: LayoutConfig,
}

impl GigConfig {
    /// Load the configuration file, or defaults when no path is given
    pub fn load_optional(path: Option<&Path>) -> Result<Self, SetlistError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, SetlistError> {
        let content = fs::read_to_string(path).map_err(|e| {
            SetlistError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        debug!("Loaded config file {}", path.display());
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SetlistError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GigConfig = serde_yaml::from_str(yaml)
            .map_err(|e| SetlistError::Config(format!("failed to parse YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SetlistError> {
        if self.songs_per_set == Some(0) {
            return Err(SetlistError::Config(
                "songs_per_set must be at least 1".to_string(),
            ));
        }
        if self.layout.min_size > self.layout.default_size {
            return Err(SetlistError::Config(format!(
                "layout.min_size ({}) is larger than layout.default_size ({})",
                self.layout.min_size, self.layout.default_size
            )));
        }
        if self.max_set_duration_seconds()? == Some(0) {
            return Err(SetlistError::Config(
                "max_set_duration must be greater than 0:00".to_string(),
            ));
        }
        Ok(())
    }

    pub fn max_set_duration_seconds(&self) -> Result<Option<u32>, SetlistError> {
        self.max_set_duration
            .as_deref()
            .map(|text| {
                parse_duration(text).map_err(|e| {
                    SetlistError::Config(format!("invalid max_set_duration '{text}': {e}"))
                })
            })
            .transpose()
    }

    /// Partitioning policy named by the file, if any. A song count wins over a duration.
    pub fn policy(&self) -> Result<Option<PartitionPolicy>, SetlistError> {
        if let Some(count) = self.songs_per_set {
            return Ok(Some(PartitionPolicy::FixedCount(count)));
        }
        Ok(self
            .max_set_duration_seconds()?
            .map(PartitionPolicy::DurationBounded))
    }

    pub fn gig_metadata(&self) -> GigMetadata {
        GigMetadata {
            band_name: non_blank(&self.band_name).unwrap_or(DEFAULT_BAND_NAME).to_string(),
            venue: non_blank(&self.gig_venue).unwrap_or(DEFAULT_VENUE).to_string(),
            date: non_blank(&self.gig_date)
                .map(display_date)
                .unwrap_or_else(|| DEFAULT_DATE.to_string()),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Render ISO dates as e.g. "Sunday, October 18, 2026"; anything else is kept verbatim
fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Header information printed on every set page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GigMetadata {
    pub band_name: String,
    pub venue: String,
    pub date: String,
}
