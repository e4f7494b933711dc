//! Benchmarks for the per-frame overlay and warp stages

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use opencv::{
    core::{Mat, Rect, Scalar, Size, CV_8UC1, CV_8UC3},
    imgproc::{self, LINE_8},
    prelude::*,
};
use std::time::Duration;
use vision_demo::{config::ContourConfig, overlay, warp::PerspectiveRotation};

/// Grayscale frame with a grid of bright blocks
fn blocky_gray(size: Size, blocks: i32) -> Mat {
    let mut gray = Mat::zeros(size.height, size.width, CV_8UC1).unwrap().to_mat().unwrap();
    let step_x = size.width / blocks;
    let step_y = size.height / blocks;
    for i in 0..blocks {
        for j in 0..blocks {
            let rect = Rect::new(i * step_x + 2, j * step_y + 2, step_x / 2, step_y / 2);
            imgproc::rectangle(&mut gray, rect, Scalar::all(200.0), -1, LINE_8, 0).unwrap();
        }
    }
    gray
}

/// Benchmark contour extraction and drawing for varying blob counts
fn bench_contours(c: &mut Criterion) {
    let mut group = c.benchmark_group("contours");
    group.measurement_time(Duration::from_secs(5));

    let size = Size::new(640, 480);
    let config = ContourConfig::default();

    for blocks in [1, 4, 16] {
        let gray = blocky_gray(size, blocks);
        group.bench_with_input(BenchmarkId::new("draw", blocks * blocks), &gray, |b, gray| {
            let mut frame = Mat::zeros(size.height, size.width, CV_8UC3).unwrap().to_mat().unwrap();
            b.iter(|| black_box(overlay::draw_contours(&mut frame, gray, &config).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark face annotation
fn bench_faces(c: &mut Criterion) {
    let faces: Vec<Rect> = (0..8).map(|i| Rect::new(20 + i * 70, 200, 60, 60)).collect();
    let mut frame = Mat::zeros(480, 640, CV_8UC3).unwrap().to_mat().unwrap();

    c.bench_function("draw_faces_8", |b| {
        b.iter(|| overlay::draw_faces(&mut frame, black_box(&faces)).unwrap());
    });
}

/// Benchmark the perspective warp at common resolutions
fn bench_warp(c: &mut Criterion) {
    let mut group = c.benchmark_group("warp");

    for (w, h) in [(320, 240), (640, 480), (1280, 720)] {
        let size = Size::new(w, h);
        let frame = Mat::zeros(h, w, CV_8UC3).unwrap().to_mat().unwrap();
        let rotation = PerspectiveRotation::random(size, 0.25, Some(42)).unwrap();
        let mut dst = Mat::default();

        group.bench_function(BenchmarkId::new("apply", format!("{}x{}", w, h)), |b| {
            b.iter(|| rotation.apply(black_box(&frame), &mut dst).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contours, bench_faces, bench_warp);
criterion_main!(benches);
