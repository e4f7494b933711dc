//! Command-line arguments and their merge into [`Config`].

use crate::capture::FrameSource;
use crate::config::{Config, GuiMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Haar cascade XML file; downloaded and cached when omitted
    pub classifier: Option<PathBuf>,

    /// Camera index to use
    #[arg(long, default_value = "0")]
    pub cam: i32,

    /// Video file to process instead of the camera
    #[arg(short, long, conflicts_with = "cam")]
    pub video: Option<PathBuf>,

    /// Recorded video path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// GUI display mode
    #[arg(short, long, value_enum)]
    pub gui: Option<GuiMode>,

    /// Stop after this many processed frames
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Seed for the random rotation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Source selected by `--video` or `--cam`
    #[must_use]
    pub fn frame_source(&self) -> FrameSource {
        match &self.video {
            Some(path) => FrameSource::File(path.clone()),
            None => FrameSource::Camera(self.cam),
        }
    }

    /// Overlay command-line values on a loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(gui) = self.gui {
            config.display.gui_mode = gui;
        }
        if let Some(seed) = self.seed {
            config.warp.seed = Some(seed);
        }
    }
}
