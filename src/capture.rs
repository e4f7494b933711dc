//! Frame grabbing from a webcam or a video file.

use crate::{Error, Result};
use log::info;
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_FPS},
};
use std::path::PathBuf;

/// Video source type
#[derive(Debug, Clone, PartialEq)]
pub enum FrameSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(PathBuf),
}

/// Blocking frame grabber over an `OpenCV` capture device
pub struct FrameGrabber {
    source: FrameSource,
    capture: VideoCapture,
}

impl FrameGrabber {
    /// Open the source
    ///
    /// # Errors
    ///
    /// Returns `Camera` if the device or file cannot be opened
    pub fn start(source: FrameSource) -> Result<Self> {
        let capture = match &source {
            FrameSource::Camera(index) => {
                info!("Opening camera {}", index);
                VideoCapture::new(*index, videoio::CAP_ANY)?
            }
            FrameSource::File(path) => {
                info!("Opening video file: {}", path.display());
                let path_str = path
                    .to_str()
                    .ok_or_else(|| Error::Camera(format!("Non UTF-8 video path: {}", path.display())))?;
                VideoCapture::from_file(path_str, videoio::CAP_ANY)?
            }
        };

        if !capture.is_opened()? {
            return Err(Error::Camera(format!("Failed to open {:?}", source)));
        }

        Ok(Self { source, capture })
    }

    /// Source this grabber reads from
    #[must_use]
    pub fn source(&self) -> &FrameSource {
        &self.source
    }

    /// Grab the next frame, blocking until one is available.
    ///
    /// Returns `None` once the source yields no more frames.
    pub fn grab(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    /// Frame rate reported by the source, if it reports one
    pub fn frame_rate(&self) -> Result<Option<f64>> {
        let fps = self.capture.get(CAP_PROP_FPS)?;
        Ok((fps.is_finite() && fps > 0.0).then_some(fps))
    }

    /// Release the device
    pub fn stop(&mut self) -> Result<()> {
        if self.capture.is_opened()? {
            self.capture.release()?;
            info!("Released {:?}", self.source);
        }
        Ok(())
    }
}

impl Drop for FrameGrabber {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
