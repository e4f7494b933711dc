use crate::config::DetectionConfig;
use crate::{Error, Result};
use opencv::core::{Rect, Size, Vector, CV_8UC1};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use std::path::Path;

/// Haar cascade face detector
pub struct FaceDetector {
    classifier: CascadeClassifier,
    scale_factor: f64,
    min_neighbors: i32,
    min_size: Size,
}

impl FaceDetector {
    /// Load a cascade classifier from an `OpenCV` XML file
    ///
    /// # Errors
    ///
    /// Returns `Model` if the file cannot be read as a cascade
    pub fn new<P: AsRef<Path>>(model_path: P, config: &DetectionConfig) -> Result<Self> {
        let path = model_path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::Model(format!("Non UTF-8 classifier path: {}", path.display())))?;

        let classifier = CascadeClassifier::new(path_str)?;
        if classifier.empty()? {
            return Err(Error::Model(format!("Failed to load cascade from {}", path.display())));
        }

        log::info!("Loaded cascade classifier from {}", path.display());

        Ok(Self {
            classifier,
            scale_factor: config.scale_factor,
            min_neighbors: config.min_neighbors,
            min_size: Size::new(config.min_face_size, config.min_face_size),
        })
    }

    /// Detect faces in an 8-bit grayscale image
    pub fn detect(&mut self, gray: &Mat) -> Result<Vec<Rect>> {
        if gray.typ() != CV_8UC1 {
            return Err(Error::InvalidInput(format!(
                "Face detection expects an 8-bit grayscale image, got type {}",
                gray.typ()
            )));
        }

        let mut faces = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            gray,
            &mut faces,
            self.scale_factor,
            self.min_neighbors,
            0,
            self.min_size,
            Size::default(),
        )?;

        Ok(faces.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_malformed_cascade_is_model_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.xml");
        std::fs::write(&path, "<opencv_storage></opencv_storage>").unwrap();

        match FaceDetector::new(&path, &DetectionConfig::default()) {
            Err(Error::Model(msg)) => assert!(msg.contains("broken.xml")),
            Err(e) => panic!("Expected Model error, got {}", e),
            Ok(_) => panic!("Expected Model error, got a detector"),
        }
    }
}
