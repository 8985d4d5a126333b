/// Default base filename for the frame sequence (`mri-01.pgm`, `mri-02.pgm`, ...).
pub const DEFAULT_INPUT_BASE: &str = "mri-";

/// Default upper bound on the number of frames loaded from a sequence.
pub const DEFAULT_MAX_FRAMES: usize = 20;

/// Number of digits used for the frame ordinal in sequence filenames.
pub const FRAME_ORDINAL_DIGITS: usize = 2;

/// Extension of sequence frame files.
pub const FRAME_EXTENSION: &str = "pgm";

/// Default ROI center X (column) over the left-ventricle blood pool.
pub const DEFAULT_ROI_CENTER_X: i64 = 74;

/// Default ROI center Y (row) over the left-ventricle blood pool.
pub const DEFAULT_ROI_CENTER_Y: i64 = 90;

/// Default ROI side length in pixels.
pub const DEFAULT_ROI_SIZE: i64 = 5;

/// Default signal gradient (signal units per frame) that marks contrast arrival.
pub const DEFAULT_THRESHOLD_GRADIENT: f64 = 10.0;

/// Default contrast agent metadata file.
pub const DEFAULT_CONTRAST_INFO: &str = "contrast_info.txt";

/// Sentinel reported for a frame index that was not found.
pub const FRAME_NOT_FOUND: i64 = -1;

/// Fraction of the value range added above and below a plotted series.
pub const PLOT_MARGIN_FRACTION: f64 = 0.1;

/// Character cell width of a rendered line plot (excluding the axis gutter).
pub const PLOT_WIDTH: usize = 64;

/// Character cell height of a rendered line plot.
pub const PLOT_HEIGHT: usize = 16;

/// Grid spacing (frames) along the X axis of timecourse plots.
pub const PLOT_GRID_X: f64 = 2.0;

/// Grid spacing (signal units) along the Y axis of the signal plot.
pub const SIGNAL_PLOT_GRID_Y: f64 = 20.0;

/// Grid spacing (signal units per frame) along the Y axis of the gradient plot.
pub const GRADIENT_PLOT_GRID_Y: f64 = 10.0;

/// Maximum number of columns used when rendering an image as ASCII.
pub const ASCII_MAX_COLUMNS: usize = 80;

/// Maximum number of rows used when rendering an image as ASCII.
pub const ASCII_MAX_ROWS: usize = 40;

/// Brightness ramp for ASCII image rendering, darkest first.
pub const ASCII_RAMP: [char; 7] = [' ', '.', ':', 'o', 'O', '0', '@'];
