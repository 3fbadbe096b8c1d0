use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::GigConfig;
use crate::error::SetlistError;
use crate::render::{OutputFormat, PageAssembler};
use crate::setlist::{PartitionPolicy, Setlist, SetlistConfig, SetlistGenerator};
use crate::source::SongTable;

/// One setlist run, as requested on the command line
#[derive(Debug, Clone)]
pub struct SetlistRequest {
    pub csv_file: PathBuf,
    pub config_file: Option<PathBuf>,
    pub songs_per_set: Option<usize>,
    pub max_set_duration: Option<u32>, // in seconds
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
}

impl SetlistRequest {
    pub fn new(csv_file: impl Into<PathBuf>) -> Self {
        Self {
            csv_file: csv_file.into(),
            config_file: None,
            songs_per_set: None,
            max_set_duration: None,
            output: None,
            format: OutputFormat::default(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("setlist.{}", self.format.extension())))
    }

    /// Command-line choices win over the config file; the fallback is a 45 minute cap.
    pub fn resolve_policy(&self, config: &GigConfig) -> Result<PartitionPolicy, SetlistError> {
        if self.songs_per_set == Some(0) {
            return Err(SetlistError::Config(
                "songs per set must be at least 1".to_string(),
            ));
        }
        if let Some(count) = self.songs_per_set {
            return Ok(PartitionPolicy::FixedCount(count));
        }
        if let Some(max) = self.max_set_duration {
            return Ok(PartitionPolicy::DurationBounded(max));
        }
        Ok(config.policy()?.unwrap_or_default())
    }
}

/// Result of a successful run
#[derive(Debug)]
pub struct GeneratedSetlist {
    pub setlist: Setlist,
    pub output: PathBuf,
}

/// Read, partition, render, and only then write the output file.
pub fn generate(request: &SetlistRequest) -> Result<GeneratedSetlist, SetlistError> {
    let config = GigConfig::load_optional(request.config_file.as_deref())?;
    let policy = request.resolve_policy(&config)?;
    let gig = config.gig_metadata();
    info!("Partitioning with {policy}");

    let songs = SongTable::load(&request.csv_file)?;
    if songs.is_empty() {
        warn!("{} contains no songs", request.csv_file.display());
    }

    let generator = SetlistGenerator::new(SetlistConfig {
        policy,
        layout: config.layout.clone(),
    });
    let setlist = generator.generate_setlist(songs);

    let blocks = PageAssembler::new(&gig).assemble(&setlist.sets);
    let bytes = request.format.renderer().render(&blocks)?;

    let output = request.output_path();
    write_output(&output, &bytes)?;
    info!("Wrote {} bytes to {}", bytes.len(), output.display());

    Ok(GeneratedSetlist { setlist, output })
}

/// Stage the bytes next to `path` and rename over it, so a failed write never
/// leaves a truncated file behind.
fn write_output(path: &Path, bytes: &[u8]) -> Result<(), SetlistError> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| SetlistError::output(path, e))?;
    debug!("Staging output in {}", staged.path().display());
    // Temp files are created owner-only; give the result the usual file mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| SetlistError::output(path, e))?;
    }
    staged
        .write_all(bytes)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| SetlistError::output(path, e))?;
    staged
        .persist(path)
        .map_err(|e| SetlistError::output(path, e.error))?;
    Ok(())
}
