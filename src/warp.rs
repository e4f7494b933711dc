//! Random 3D rotation rendered as a perspective warp.
//!
//! The rotation is drawn once at startup from a small Rodrigues vector and
//! turned into a pixel-space homography by folding in a focal length of
//! `(width + height) / 2`. Every frame is then warped with the same matrix.

use crate::{Error, Result};
use nalgebra::{Matrix3, Rotation3, Vector3};
use opencv::{
    core::{self, Mat, Scalar, Size},
    imgproc,
    prelude::*,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;

/// Fixed perspective rotation applied to every frame
#[derive(Debug, Clone)]
pub struct PerspectiveRotation {
    axis: [f64; 3],
    matrix: Matrix3<f64>,
    homography: Mat,
    size: Size,
}

impl PartialEq for PerspectiveRotation {
    // `homography` is derived from `matrix`
    fn eq(&self, other: &Self) -> bool {
        self.axis == other.axis && self.matrix == other.matrix && self.size == other.size
    }
}

impl PerspectiveRotation {
    /// Build the homography for the Rodrigues vector `axis` on frames of `size`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive frame size or a non-finite axis
    pub fn from_axis(axis: [f64; 3], size: Size) -> Result<Self> {
        if size.width <= 0 || size.height <= 0 {
            return Err(Error::InvalidInput(format!(
                "Invalid frame size: {}x{}",
                size.width, size.height
            )));
        }
        if axis.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!("Non-finite rotation axis: {:?}", axis)));
        }

        let rotation = Rotation3::new(Vector3::from(axis));
        let mut matrix = rotation.into_inner();

        let f = f64::from(size.width + size.height) / 2.0;
        matrix[(0, 2)] *= f;
        matrix[(1, 2)] *= f;
        matrix[(2, 0)] /= f;
        matrix[(2, 1)] /= f;

        let rows: [[f64; 3]; 3] = std::array::from_fn(|r| std::array::from_fn(|c| matrix[(r, c)]));
        let homography = Mat::from_slice_2d(&rows)?;

        Ok(Self {
            axis,
            matrix,
            homography,
            size,
        })
    }

    /// Draw a random rotation; each axis component is `(u - 0.5) * spread`
    /// with `u` uniform in `[0, 1)`
    pub fn random(size: Size, spread: f64, seed: Option<u64>) -> Result<Self> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut component = || (rng.gen::<f64>() - 0.5) * spread;
        let axis = [component(), component(), component()];

        Self::from_axis(axis, size)
    }

    /// Rodrigues vector the rotation was built from
    #[must_use]
    pub fn axis(&self) -> [f64; 3] {
        self.axis
    }

    /// Homography in pixel coordinates
    #[must_use]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Frame size the homography is built for
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Homography as a 3x3 `CV_64FC1` matrix
    #[must_use]
    pub fn homography(&self) -> &Mat {
        &self.homography
    }

    /// Owned copy of [`Self::homography`]
    pub fn to_mat(&self) -> Result<Mat> {
        Ok(self.homography.try_clone()?)
    }

    /// Map a pixel through the homography
    #[must_use]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.matrix * Vector3::new(x, y, 1.0);
        (p.x / p.z, p.y / p.z)
    }

    /// Warp `src` into `dst`, keeping the configured frame size
    pub fn apply(&self, src: &Mat, dst: &mut Mat) -> Result<()> {
        imgproc::warp_perspective(
            src,
            dst,
            &self.homography,
            self.size,
            imgproc::INTER_LINEAR,
            core::BORDER_CONSTANT,
            Scalar::default(),
        )?;
        Ok(())
    }
}

impl fmt::Display for PerspectiveRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3 {
            let row = self.matrix.row(r);
            writeln!(f, "[{:>14.6e} {:>14.6e} {:>14.6e}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
