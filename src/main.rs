use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod duration;
mod error;
mod models;
mod pipeline;
mod render;
mod setlist;
mod source;


use crate::duration::{format_duration, parse_duration};
use crate::pipeline::SetlistRequest;
use crate::render::OutputFormat;
use crate::setlist::Setlist;

#[derive(Parser)]
#[command(name = "setlist-generator")]
#[command(about = "Generate a printable setlist from a CSV of songs")]
#[command(version)]
struct Args {
    /// Path to the CSV file containing `Song` and `Length` columns
    csv_file: PathBuf,

    /// Number of songs per set (page); omit to split sets by running time
    songs_per_set: Option<usize>,

    /// Maximum running time per set, as MM:SS (default 45:00)
    #[arg(short = 'm', long = "max-set-duration", value_parser = parse_max_set_duration, conflicts_with = "songs_per_set")]
    max_set_duration: Option<u32>,

    /// Path to the YAML gig configuration (band_name, gig_venue, gig_date)
    #[arg(short = 'c', long = "config-file", alias = "config_file")]
    config_file: Option<PathBuf>,

    /// Output file (default: setlist.<format extension>)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Docx)]
    format: OutputFormat,

    /// Enable debug mode - print the planned sets to stdout
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Quiet mode - reduce output verbosity
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn parse_max_set_duration(value: &str) -> Result<u32, String> {
    match parse_duration(value) {
        Ok(0) => Err("maximum set duration must be greater than 0:00".to_string()),
        Ok(seconds) => Ok(seconds),
        Err(e) => Err(format!("expected MM:SS ({e})")),
    }
}

/// Respects RUST_LOG, falling back to info (warn when quiet)
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_setlist(setlist: &Setlist) {
    println!("\n=== SETLIST ===");
    for planned in &setlist.sets {
        let set = &planned.set;
        println!(
            "\nSet {} - {} songs, {} (font {}pt, footer {}pt)",
            set.number,
            set.song_count(),
            format_duration(set.total_duration),
            planned.layout.font_size,
            planned.layout.footer_size
        );
        for (i, song) in set.songs.iter().enumerate() {
            println!("  {}. {} [{}]", i + 1, song.title, format_duration(song.duration));
        }
    }
    println!(
        "\n{} sets, {} songs, {} total",
        setlist.metadata.set_count,
        setlist.metadata.total_songs,
        format_duration(setlist.metadata.total_duration)
    );
    if let Some(longest) = setlist.metadata.longest_set {
        println!("Longest set: Set {longest}");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet);

    let request = SetlistRequest {
        config_file: args.config_file,
        songs_per_set: args.songs_per_set,
        max_set_duration: args.max_set_duration,
        output: args.output,
        format: args.format,
        ..SetlistRequest::new(args.csv_file)
    };

    let generated = pipeline::generate(&request)
        .with_context(|| format!("Failed to generate setlist from {}", request.csv_file.display()))?;

    if args.debug {
        print_setlist(&generated.setlist);
    }

    if !args.quiet {
        println!(
            "Setlist generated and saved as '{}'",
            generated.output.display()
        );
    }

    Ok(())
}
