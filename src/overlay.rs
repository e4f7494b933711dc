//! Annotations drawn on the color frame: face boxes, hats and contour polygons.

use crate::config::ContourConfig;
use crate::constants::{CONTOUR_COLOR, FACE_BOX_COLOR, HAT_COLOR};
use crate::Result;
use opencv::{
    core::{self, Mat, Point, Rect, Scalar, Vector},
    imgproc::{self, CHAIN_APPROX_SIMPLE, LINE_8, LINE_AA, RETR_LIST, THRESH_BINARY},
    prelude::*,
};

fn bgr((b, g, r): (f64, f64, f64)) -> Scalar {
    Scalar::new(b, g, r, 0.0)
}

/// Triangle above a face box: two brim corners a tenth of the box outside
/// its top edge and an apex half a box height above it
#[must_use]
pub fn hat_points(face: Rect) -> [Point; 3] {
    let Rect { x, y, width: w, height: h } = face;
    [
        Point::new(x - w / 10, y - h / 10),
        Point::new(x + w * 11 / 10, y - h / 10),
        Point::new(x + w / 2, y - h / 2),
    ]
}

/// Draw a box and a filled hat for every face
pub fn draw_faces(frame: &mut Mat, faces: &[Rect]) -> Result<()> {
    for &face in faces {
        imgproc::rectangle(frame, face, bgr(FACE_BOX_COLOR), 1, LINE_AA, 0)?;

        let hat = Vector::<Point>::from_iter(hat_points(face));
        imgproc::fill_convex_poly(frame, &hat, bgr(HAT_COLOR), LINE_AA, 0)?;
    }
    Ok(())
}

/// Extract contours from the thresholded grayscale image and return their
/// polygon approximations. `gray` is left untouched.
pub fn contour_polygons(gray: &Mat, config: &ContourConfig) -> Result<Vector<Vector<Point>>> {
    let mut binary = Mat::default();
    imgproc::threshold(gray, &mut binary, config.threshold, config.max_value, THRESH_BINARY)?;

    let mut contours = Vector::<Vector<Point>>::new();
    imgproc::find_contours(
        &binary,
        &mut contours,
        RETR_LIST,
        CHAIN_APPROX_SIMPLE,
        Point::new(0, 0),
    )?;

    let mut polygons = Vector::<Vector<Point>>::with_capacity(contours.len());
    for contour in contours.iter() {
        let epsilon = imgproc::arc_length(&contour, true)? * config.approx_epsilon_ratio;
        let mut polygon = Vector::<Point>::new();
        imgproc::approx_poly_dp(&contour, &mut polygon, epsilon, true)?;
        polygons.push(polygon);
    }

    Ok(polygons)
}

/// Find contours on `gray` and draw their polygons on `frame`.
///
/// Returns the number of polygons drawn.
pub fn draw_contours(frame: &mut Mat, gray: &Mat, config: &ContourConfig) -> Result<usize> {
    let polygons = contour_polygons(gray, config)?;
    if polygons.is_empty() {
        return Ok(0);
    }

    imgproc::draw_contours(
        frame,
        &polygons,
        -1,
        bgr(CONTOUR_COLOR),
        1,
        LINE_8,
        &core::no_array(),
        i32::MAX,
        Point::new(0, 0),
    )?;

    Ok(polygons.len())
}
