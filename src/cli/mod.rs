//! CLI interface for Huewave

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Print oscillator sample sequences and color bands
#[derive(Parser)]
#[command(name = "huewave")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where a scene comes from
#[derive(clap::Args)]
pub struct SceneArgs {
    /// Scene file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use a named preset instead of the scene's wave
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Override the number of entries
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the sample sequence of a scene
    Samples {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Print the color band of a scene
    Colors {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Validate a scene file
    Check {
        /// Scene file path
        #[arg(short, long, default_value = "huewave.yaml")]
        config: PathBuf,
    },

    /// Print an example scene file
    Init,

    /// List the built-in presets
    Presets,
}

/// Output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned, human-readable columns
    Text,
    /// Comma-separated values with a header row
    Csv,
    /// A JSON array
    Json,
}
