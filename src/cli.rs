//! Command-Line Interface

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::SourceKind;
use crate::error::Error;

/// Air Canvas - paint in mid-air with your index finger
#[derive(Parser, Debug)]
#[command(name = "air-canvas")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the drawing window
    Run {
        /// Where hand landmarks come from
        #[arg(short, long, value_enum, default_value_t = SourceArg::Sim)]
        source: SourceArg,

        /// Recorded JSON-lines file (required with `--source file`)
        #[arg(short, long)]
        landmarks: Option<PathBuf>,

        /// Playback rate for `--source file`
        #[arg(long, default_value = "30")]
        replay_fps: u32,

        /// Don't open the webcam; the preview stays black
        #[arg(long)]
        no_camera: bool,
    },

    /// Render a recorded landmark file straight to a PNG
    Replay {
        /// JSON-lines landmark recording
        input: PathBuf,

        /// PNG to write
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Mouse simulator
    Sim,
    /// External tracker writing JSON lines to stdin
    Stdin,
    /// Recorded JSON-lines file
    File,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Resolve `--source` and `--landmarks` into a [`SourceKind`].
pub fn source_kind(source: SourceArg, landmarks: Option<PathBuf>, replay_fps: u32) -> Result<SourceKind, Error> {
    match (source, landmarks) {
        (SourceArg::Sim, _) => Ok(SourceKind::Sim),
        (SourceArg::Stdin, _) => Ok(SourceKind::Stdin),
        (SourceArg::File, Some(path)) => Ok(SourceKind::File { path, fps: replay_fps }),
        (SourceArg::File, None) => Err(Error::Source("--source file needs --landmarks <PATH>".to_string())),
    }
}
