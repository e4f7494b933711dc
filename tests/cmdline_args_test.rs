//! Tests for command-line argument parsing

use clap::Parser;
use std::path::PathBuf;
use vision_demo::{
    capture::FrameSource,
    cli::Args,
    config::{Config, GuiMode},
};

#[test]
fn test_default_values() {
    let args = Args::try_parse_from(["vision-demo"]).unwrap();

    assert_eq!(args.classifier, None);
    assert_eq!(args.cam, 0);
    assert_eq!(args.video, None);
    assert_eq!(args.gui, None);
    assert_eq!(args.max_frames, None);
    assert!(!args.debug);
    assert_eq!(args.frame_source(), FrameSource::Camera(0));
}

#[test]
fn test_positional_classifier() {
    let args = Args::try_parse_from(["vision-demo", "haarcascade_frontalface_alt.xml"]).unwrap();
    assert_eq!(args.classifier, Some(PathBuf::from("haarcascade_frontalface_alt.xml")));
}

#[test]
fn test_video_source() {
    let args = Args::try_parse_from(["vision-demo", "--video", "clip.mp4"]).unwrap();
    assert_eq!(args.frame_source(), FrameSource::File(PathBuf::from("clip.mp4")));

    let args = Args::try_parse_from(["vision-demo", "--cam", "2"]).unwrap();
    assert_eq!(args.frame_source(), FrameSource::Camera(2));
}

#[test]
fn test_cam_conflicts_with_video() {
    let result = Args::try_parse_from(["vision-demo", "--cam", "1", "--video", "clip.mp4"]);
    assert!(result.is_err());
}

#[test]
fn test_gui_values() {
    let args = Args::try_parse_from(["vision-demo", "--gui", "none"]).unwrap();
    assert_eq!(args.gui, Some(GuiMode::None));

    let args = Args::try_parse_from(["vision-demo", "-g", "window"]).unwrap();
    assert_eq!(args.gui, Some(GuiMode::Window));

    assert!(Args::try_parse_from(["vision-demo", "--gui", "fullscreen"]).is_err());
}

#[test]
fn test_invalid_numeric_values() {
    assert!(Args::try_parse_from(["vision-demo", "--cam", "front"]).is_err());
    assert!(Args::try_parse_from(["vision-demo", "--max-frames", "-5"]).is_err());
    assert!(Args::try_parse_from(["vision-demo", "--seed", "abc"]).is_err());
}

#[test]
fn test_overrides_apply_to_config() {
    let args = Args::try_parse_from([
        "vision-demo",
        "--output",
        "run.avi",
        "--gui",
        "none",
        "--seed",
        "42",
        "--max-frames",
        "10",
    ])
    .unwrap();

    let mut config = Config::default();
    args.apply_to(&mut config);

    assert_eq!(config.output.path, PathBuf::from("run.avi"));
    assert_eq!(config.display.gui_mode, GuiMode::None);
    assert_eq!(config.warp.seed, Some(42));
    assert_eq!(args.max_frames, Some(10));
}

#[test]
fn test_absent_overrides_keep_config() {
    let args = Args::try_parse_from(["vision-demo"]).unwrap();

    let mut config = Config::default();
    config.output.path = PathBuf::from("from_file.avi");
    config.warp.seed = Some(9);
    let before = config.clone();
    args.apply_to(&mut config);

    assert_eq!(config, before);
}

#[test]
fn test_config_and_debug_flags() {
    let args = Args::try_parse_from(["vision-demo", "-C", "demo.yaml", "-d"]).unwrap();
    assert_eq!(args.config, Some(PathBuf::from("demo.yaml")));
    assert!(args.debug);
}
