//! Fixed-size video recording.

use crate::{Error, Result};
use log::info;
use opencv::{
    core::{Mat, Size},
    prelude::*,
    videoio::VideoWriter,
};
use std::path::{Path, PathBuf};

/// Records frames of one fixed size into a video file
pub struct FrameRecorder {
    path: PathBuf,
    size: Size,
    writer: VideoWriter,
    frames_written: u64,
}

impl FrameRecorder {
    /// Open `path` for writing color frames of `size`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a bad size, FOURCC or rate, and `Recorder`
    /// if no backend can open the file with that codec
    pub fn start<P: AsRef<Path>>(path: P, size: Size, fps: f64, fourcc: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if size.width <= 0 || size.height <= 0 {
            return Err(Error::InvalidInput(format!(
                "Invalid recorder size: {}x{}",
                size.width, size.height
            )));
        }
        if !(fps > 0.0) {
            return Err(Error::InvalidInput(format!("Invalid recorder frame rate: {}", fps)));
        }

        let code = fourcc_code(fourcc)?;
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::Recorder(format!("Non UTF-8 output path: {}", path.display())))?;

        let writer = VideoWriter::new(path_str, code, fps, size, true)?;
        if !writer.is_opened()? {
            return Err(Error::Recorder(format!(
                "Failed to open {} with codec {}",
                path.display(),
                fourcc
            )));
        }

        info!(
            "Recording {}x{} @ {:.1}fps ({}) to {}",
            size.width,
            size.height,
            fps,
            fourcc,
            path.display()
        );

        Ok(Self {
            path,
            size,
            writer,
            frames_written: 0,
        })
    }

    /// Write one frame; it must match the recorder size
    pub fn record(&mut self, frame: &Mat) -> Result<()> {
        check_frame_size(self.size, frame.size()?)?;

        self.writer.write(frame)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Frame size this recorder accepts
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of frames written so far
    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Finish the file
    pub fn stop(&mut self) -> Result<()> {
        if self.writer.is_opened()? {
            self.writer.release()?;
            info!("Wrote {} frames to {}", self.frames_written, self.path.display());
        }
        Ok(())
    }
}

impl Drop for FrameRecorder {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Fails with `InvalidInput` unless `actual` equals `expected`
pub(crate) fn check_frame_size(expected: Size, actual: Size) -> Result<()> {
    if actual == expected {
        return Ok(());
    }
    Err(Error::InvalidInput(format!(
        "Frame is {}x{}, expected {}x{}",
        actual.width, actual.height, expected.width, expected.height
    )))
}

/// Pack a four character codec name into `OpenCV`'s integer code
pub fn fourcc_code(fourcc: &str) -> Result<i32> {
    let chars: Vec<char> = fourcc.chars().collect();
    match chars.as_slice() {
        &[a, b, c, d] if fourcc.is_ascii() => Ok(VideoWriter::fourcc(a, b, c, d)?),
        _ => Err(Error::InvalidInput(format!(
            "FOURCC must be exactly four ASCII characters: '{}'",
            fourcc
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc_code() {
        let expected = i32::from_le_bytes(*b"MJPG");
        assert_eq!(fourcc_code("MJPG").unwrap(), expected);
    }

    #[test]
    fn test_fourcc_code_rejects_bad_length() {
        assert!(fourcc_code("MJP").is_err());
        assert!(fourcc_code("MJPEG").is_err());
        assert!(fourcc_code("MJPé").is_err());
    }

    #[test]
    fn test_invalid_size_rejected_before_opening() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = FrameRecorder::start(dir.path().join("out.avi"), Size::new(0, 480), 30.0, "MJPG");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(!dir.path().join("out.avi").exists());
    }

    #[test]
    fn test_check_frame_size() {
        let expected = Size::new(640, 480);
        check_frame_size(expected, Size::new(640, 480)).unwrap();

        match check_frame_size(expected, Size::new(480, 640)) {
            Err(Error::InvalidInput(msg)) => assert_eq!(msg, "Frame is 480x640, expected 640x480"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
