//! Constants used throughout the application

/// Frontal face cascade fetched when no classifier path is given
pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://raw.github.com/opencv/opencv/master/data/haarcascades/haarcascade_frontalface_alt.xml";

/// Sub-directory of the platform cache dir holding downloaded models
pub const CACHE_DIR_NAME: &str = "vision-demo";

/// Default recorded video path, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "output.avi";

/// Default recorder codec
pub const DEFAULT_FOURCC: &str = "MJPG";

/// Recorder frame rate when the source does not report one
pub const DEFAULT_FPS: f64 = 30.0;

/// Default display window title
pub const DEFAULT_WINDOW_TITLE: &str = "Vision Demo";

/// Cascade detection defaults (OpenCV's own defaults)
pub const DEFAULT_SCALE_FACTOR: f64 = 1.1;
pub const DEFAULT_MIN_NEIGHBORS: i32 = 3;

/// Binary threshold applied before contour extraction
pub const DEFAULT_CONTOUR_THRESHOLD: f64 = 64.0;
pub const DEFAULT_CONTOUR_MAX_VALUE: f64 = 255.0;

/// Polygon approximation epsilon as a fraction of contour perimeter
pub const DEFAULT_APPROX_EPSILON_RATIO: f64 = 0.02;

/// Width of the uniform range each rotation axis component is drawn from
pub const DEFAULT_AXIS_SPREAD: f64 = 0.25;

/// Overlay colors in BGR order
pub const FACE_BOX_COLOR: (f64, f64, f64) = (0.0, 0.0, 255.0);
pub const HAT_COLOR: (f64, f64, f64) = (0.0, 255.0, 0.0);
pub const CONTOUR_COLOR: (f64, f64, f64) = (255.0, 0.0, 0.0);

/// Keys that end the loop
pub const KEY_ESCAPE: i32 = 27;
pub const KEY_QUIT: i32 = b'q' as i32;
