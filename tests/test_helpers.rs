//! Helper functions and utilities for tests

#![allow(dead_code)]

use opencv::{
    core::{Mat, Rect, Scalar, CV_8UC1, CV_8UC3},
    imgproc::{self, LINE_8},
    prelude::*,
};
use vision_demo::Result;

/// Black color frame of the given size
pub fn black_frame(height: i32, width: i32) -> Result<Mat> {
    Mat::zeros(height, width, CV_8UC3)?.to_mat().map_err(Into::into)
}

/// Black grayscale image with one filled rectangle per entry of `rects`
pub fn gray_with_rects(height: i32, width: i32, rects: &[Rect], level: f64) -> Result<Mat> {
    let mut gray = Mat::zeros(height, width, CV_8UC1)?.to_mat()?;
    for &rect in rects {
        imgproc::rectangle(&mut gray, rect, Scalar::all(level), -1, LINE_8, 0)?;
    }
    Ok(gray)
}

/// Color frame with bright filled rectangles
pub fn frame_with_rects(height: i32, width: i32, rects: &[Rect]) -> Result<Mat> {
    let mut frame = black_frame(height, width)?;
    for &rect in rects {
        imgproc::rectangle(&mut frame, rect, Scalar::all(200.0), -1, LINE_8, 0)?;
    }
    Ok(frame)
}
