//! Webcam vision demo built on `OpenCV`.
//!
//! Each frame grabbed from a camera or video file goes through the same
//! fixed sequence of library calls:
//! 1. grayscale conversion and Haar cascade face detection
//! 2. a box and a filled "hat" triangle drawn over every face
//! 3. binary threshold, contour extraction and polygon approximation,
//!    with the polygons drawn over the frame
//! 4. a perspective warp by one random 3D rotation chosen at startup
//! 5. display in a window and recording to a video file
//!
//! The cascade model is either given on the command line or downloaded
//! once and cached.
//!
//! # Examples
//!
//! ```no_run
//! use vision_demo::{
//!     app::{AppConfig, DemoApp},
//!     capture::FrameSource,
//!     config::Config,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = DemoApp::new(AppConfig {
//!     config: Config::default(),
//!     source: FrameSource::Camera(0),
//!     classifier: None,
//!     max_frames: Some(300),
//! })?;
//! let summary = app.run()?;
//! println!("recorded {} frames", summary.frames_recorded);
//! # Ok(())
//! # }
//! ```
//!
//! ## Annotating a single image
//!
//! ```no_run
//! use vision_demo::{config::{Config, ContourConfig}, face_detection::FaceDetector, overlay};
//! use opencv::{core::Mat, imgcodecs, imgproc, prelude::*};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut detector = FaceDetector::new("haarcascade_frontalface_alt.xml", &Config::default().detection)?;
//! let mut image = imgcodecs::imread("people.jpg", imgcodecs::IMREAD_COLOR)?;
//! let mut gray = Mat::default();
//! imgproc::cvt_color(&image, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;
//!
//! let faces = detector.detect(&gray)?;
//! overlay::draw_faces(&mut image, &faces)?;
//! overlay::draw_contours(&mut image, &gray, &ContourConfig::default())?;
//! # Ok(())
//! # }
//! ```

/// Main application module
pub mod app;

/// Frame grabbing from cameras and video files
pub mod capture;

/// Cascade model path resolution and download cache
pub mod classifier;

/// Command-line arguments
pub mod cli;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

/// Error types and result handling
pub mod error;

/// Haar cascade face detection
pub mod face_detection;

/// Face and contour annotations
pub mod overlay;

/// Video recording
pub mod recorder;

/// Random perspective rotation
pub mod warp;

pub use error::{Error, Result};
