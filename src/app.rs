//! Main application module: grab, detect, annotate, warp, show, record.

use crate::{
    capture::{FrameGrabber, FrameSource},
    classifier,
    config::{Config, GuiMode},
    constants::{KEY_ESCAPE, KEY_QUIT},
    error::{Error, Result},
    face_detection::FaceDetector,
    overlay,
    recorder::{self, FrameRecorder},
    warp::PerspectiveRotation,
};
use log::{debug, info};
use opencv::{
    core::Mat,
    highgui::{self, WINDOW_AUTOSIZE, WND_PROP_VISIBLE},
    imgproc,
    prelude::*,
};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Loaded or default configuration, command-line overrides applied
    pub config: Config,
    /// Camera index or video file path
    pub source: FrameSource,
    /// Cascade file given on the command line
    pub classifier: Option<PathBuf>,
    /// Stop after this many processed frames
    pub max_frames: Option<u64>,
}

/// Per-frame counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Faces detected
    pub faces: usize,
    /// Contour polygons drawn
    pub polygons: usize,
}

/// Totals returned when the loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames that went through detection and warping
    pub frames_processed: u64,
    /// Frames written to the output video
    pub frames_recorded: u64,
}

/// Main application struct
pub struct DemoApp {
    config: Config,
    detector: FaceDetector,
    grabber: FrameGrabber,
    recorder: FrameRecorder,
    rotation: PerspectiveRotation,
    window: Option<String>,
    max_frames: Option<u64>,
    gray: Mat,
    rotated: Mat,
}

impl DemoApp {
    /// Open every resource the loop needs
    pub fn new(app_config: AppConfig) -> Result<Self> {
        info!("Initializing vision demo");

        let AppConfig {
            config,
            source,
            classifier: explicit_classifier,
            max_frames,
        } = app_config;
        config.validate_with_classifier(explicit_classifier.is_some())?;

        let classifier_path = classifier::resolve(explicit_classifier.as_deref(), &config.classifier)?;
        let detector = FaceDetector::new(&classifier_path, &config.detection)?;

        let mut grabber = FrameGrabber::start(source)?;

        // The first frame only fixes the frame size, it is not processed
        let first_frame = grabber
            .grab()?
            .ok_or_else(|| Error::Camera(format!("No frames from {:?}", grabber.source())))?;
        let size = first_frame.size()?;
        info!("Frame size {}x{}", size.width, size.height);

        let fps = grabber.frame_rate()?.unwrap_or(config.output.fps);
        let recorder = FrameRecorder::start(&config.output.path, size, fps, &config.output.fourcc)?;

        let window = match config.display.gui_mode {
            GuiMode::Window => {
                let title = config.display.window_title.clone();
                highgui::named_window(&title, WINDOW_AUTOSIZE)?;
                Some(title)
            }
            GuiMode::None => {
                info!("Running headless");
                None
            }
        };

        let rotation = PerspectiveRotation::random(size, config.warp.axis_spread, config.warp.seed)?;
        info!("Perspective rotation:\n{}", rotation);

        Ok(Self {
            config,
            detector,
            grabber,
            recorder,
            rotation,
            window,
            max_frames,
            gray: Mat::default(),
            rotated: first_frame,
        })
    }

    /// Run the main application loop until the window is closed or the
    /// source runs dry, then release everything
    pub fn run(&mut self) -> Result<RunSummary> {
        info!("Entering main loop");

        let mut frames_processed = 0;
        let result = loop {
            if self.max_frames.is_some_and(|max| frames_processed >= max) {
                info!("Frame limit of {} reached", frames_processed);
                break Ok(());
            }

            let mut frame = match self.grabber.grab() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    info!("End of input reached");
                    break Ok(());
                }
                Err(e) => break Err(e),
            };

            match self.step(&mut frame) {
                Ok(true) => frames_processed += 1,
                Ok(false) => {
                    frames_processed += 1;
                    info!("Exit requested by user");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        let stopped = self.shutdown();
        result?;
        stopped?;

        let summary = RunSummary {
            frames_processed,
            frames_recorded: self.recorder.frames_written(),
        };
        info!(
            "Processed {} frames, recorded {}",
            summary.frames_processed, summary.frames_recorded
        );
        Ok(summary)
    }

    /// One iteration; returns `false` when the user asked to stop
    fn step(&mut self, frame: &mut Mat) -> Result<bool> {
        let report = self.process_frame(frame)?;
        debug!("{} faces, {} polygons", report.faces, report.polygons);

        if let Some(title) = &self.window {
            highgui::imshow(title, &self.rotated)?;
        }
        self.recorder.record(&self.rotated)?;

        if let Some(title) = &self.window {
            let key = highgui::wait_key(1)?;
            if key == KEY_ESCAPE || key == KEY_QUIT {
                return Ok(false);
            }
            if window_closed(highgui::get_window_property(title, WND_PROP_VISIBLE)?) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Detect and annotate on `frame`, then warp it into the output buffer
    pub fn process_frame(&mut self, frame: &mut Mat) -> Result<FrameReport> {
        recorder::check_frame_size(self.rotation.size(), frame.size()?)?;

        imgproc::cvt_color(&*frame, &mut self.gray, imgproc::COLOR_BGR2GRAY, 0)?;

        let faces = self.detector.detect(&self.gray)?;
        overlay::draw_faces(frame, &faces)?;

        let polygons = overlay::draw_contours(frame, &self.gray, &self.config.contours)?;

        self.rotation.apply(frame, &mut self.rotated)?;

        Ok(FrameReport {
            faces: faces.len(),
            polygons,
        })
    }

    /// The fixed rotation applied to every frame
    #[must_use]
    pub fn rotation(&self) -> &PerspectiveRotation {
        &self.rotation
    }

    /// Close the window, then the recorder, then the grabber
    fn shutdown(&mut self) -> Result<()> {
        info!("Application shutting down");
        if let Some(title) = self.window.take() {
            highgui::destroy_window(&title)?;
        }
        self.recorder.stop()?;
        self.grabber.stop()?;
        Ok(())
    }
}

/// `WND_PROP_VISIBLE` is 0 once the user closed the window; backends without
/// the property report -1 and only stop on a key
fn window_closed(visible: f64) -> bool {
    visible == 0.0
}
