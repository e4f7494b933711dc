//! Configuration management for the vision demo

use crate::constants::{
    DEFAULT_APPROX_EPSILON_RATIO, DEFAULT_AXIS_SPREAD, DEFAULT_CLASSIFIER_URL, DEFAULT_CONTOUR_MAX_VALUE,
    DEFAULT_CONTOUR_THRESHOLD, DEFAULT_FOURCC, DEFAULT_FPS, DEFAULT_MIN_NEIGHBORS, DEFAULT_OUTPUT_PATH,
    DEFAULT_SCALE_FACTOR, DEFAULT_WINDOW_TITLE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cascade model location
    pub classifier: ClassifierConfig,

    /// Face detection parameters
    pub detection: DetectionConfig,

    /// Threshold and polygon approximation parameters
    pub contours: ContourConfig,

    /// Random perspective rotation parameters
    pub warp: WarpConfig,

    /// Recorded video settings
    pub output: OutputConfig,

    /// Display settings
    pub display: DisplayConfig,
}

/// Where the cascade model comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// URL fetched when no local path is given
    pub url: String,

    /// Directory holding the downloaded model, platform cache dir when unset
    pub cache_dir: Option<PathBuf>,

    /// Local cascade file, takes precedence over the URL
    pub path: Option<PathBuf>,
}

/// Cascade detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Image pyramid scale step, must be greater than 1.0
    pub scale_factor: f64,

    /// Neighbouring detections needed to keep a candidate
    pub min_neighbors: i32,

    /// Smallest face side in pixels, 0 for no minimum
    pub min_face_size: i32,
}

/// Contour extraction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourConfig {
    /// Binary threshold level
    pub threshold: f64,

    /// Value assigned to pixels above the threshold
    pub max_value: f64,

    /// Approximation epsilon as a fraction of the contour arc length
    pub approx_epsilon_ratio: f64,
}

/// Random rotation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpConfig {
    /// Width of the range each Rodrigues axis component is drawn from
    pub axis_spread: f64,

    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

/// Recorder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output video file
    pub path: PathBuf,

    /// Four character codec code
    pub fourcc: String,

    /// Frame rate used when the source reports none
    pub fps: f64,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Title of the preview window
    pub window_title: String,

    /// Whether to open a preview window
    pub gui_mode: GuiMode,
}

/// GUI display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GuiMode {
    /// Show the warped frames in a window, stop when it is closed
    #[default]
    Window,
    /// Headless, stop at end of input or frame limit
    None,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CLASSIFIER_URL.to_string(),
            cache_dir: None,
            path: None,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            min_face_size: 0,
        }
    }
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CONTOUR_THRESHOLD,
            max_value: DEFAULT_CONTOUR_MAX_VALUE,
            approx_epsilon_ratio: DEFAULT_APPROX_EPSILON_RATIO,
        }
    }
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            axis_spread: DEFAULT_AXIS_SPREAD,
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            fourcc: DEFAULT_FOURCC.to_string(),
            fps: DEFAULT_FPS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            gui_mode: GuiMode::Window,
        }
    }
}

impl ClassifierConfig {
    /// Directory the downloaded cascade is cached in
    #[must_use]
    pub fn resolved_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .map(|mut p| {
                    p.push(crate::constants::CACHE_DIR_NAME);
                    p
                })
                .unwrap_or_else(|| PathBuf::from(".cache").join(crate::constants::CACHE_DIR_NAME))
        })
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.validate_with_classifier(false)
    }

    /// Validate configuration; the classifier URL is only checked when it
    /// would be downloaded, i.e. no cascade file is configured and
    /// `explicit_classifier` is false
    pub fn validate_with_classifier(&self, explicit_classifier: bool) -> Result<()> {
        let url = &self.classifier.url;
        let downloads = !explicit_classifier && self.classifier.path.is_none();
        if downloads && !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::ConfigError(format!(
                "Classifier URL must be http(s) when no path is set: '{}'",
                url
            )));
        }

        if !(self.detection.scale_factor > 1.0) {
            return Err(Error::ConfigError("Scale factor must be greater than 1.0".to_string()));
        }
        if self.detection.min_neighbors < 0 {
            return Err(Error::ConfigError("Min neighbors must not be negative".to_string()));
        }
        if self.detection.min_face_size < 0 {
            return Err(Error::ConfigError("Min face size must not be negative".to_string()));
        }

        if !(0.0..=self.contours.max_value).contains(&self.contours.threshold) {
            return Err(Error::ConfigError(format!(
                "Threshold must be between 0 and {}",
                self.contours.max_value
            )));
        }
        let ratio = self.contours.approx_epsilon_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(Error::ConfigError(
                "Approximation epsilon ratio must be between 0.0 and 1.0 (exclusive)".to_string(),
            ));
        }

        if !self.warp.axis_spread.is_finite() || self.warp.axis_spread < 0.0 {
            return Err(Error::ConfigError("Axis spread must be a finite non-negative number".to_string()));
        }

        let fourcc = &self.output.fourcc;
        if fourcc.len() != 4 || !fourcc.is_ascii() {
            return Err(Error::ConfigError(format!(
                "FOURCC must be exactly four ASCII characters: '{}'",
                fourcc
            )));
        }
        if !(self.output.fps > 0.0) {
            return Err(Error::ConfigError("Output FPS must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Vision Demo Configuration

# Cascade model
classifier:
  url: "https://raw.github.com/opencv/opencv/master/data/haarcascades/haarcascade_frontalface_alt.xml"
  # cache_dir: "/tmp/vision-demo"
  # path: "haarcascade_frontalface_alt.xml"

# Face detection parameters
detection:
  scale_factor: 1.1
  min_neighbors: 3
  min_face_size: 0

# Contour overlay
contours:
  threshold: 64.0
  max_value: 255.0
  approx_epsilon_ratio: 0.02

# Random perspective rotation
warp:
  axis_spread: 0.25
  # seed: 42

# Recorded video
output:
  path: "output.avi"
  fourcc: "MJPG"
  fps: 30.0

# Display settings
display:
  window_title: "Vision Demo"
  gui_mode: "window"
"#;
