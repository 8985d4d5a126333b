use crate::consts::{PLOT_HEIGHT, PLOT_MARGIN_FRACTION, PLOT_WIDTH};

const LABEL_WIDTH: usize = 10;
const POINT_CHAR: char = '*';
const GRID_CHAR: char = '\u{b7}';

/// Closed axis interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRange {
    pub min: f64,
    pub max: f64,
}

impl PlotRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Widen `[min, max]` by `fraction` of its span on each side.
    ///
    /// A zero span is widened by 1.0 on each side instead so the series stays
    /// drawable.
    pub fn with_margin(min: f64, max: f64, fraction: f64) -> Self {
        let span = max - min;
        let margin = if span > 0.0 { span * fraction } else { 1.0 };
        Self {
            min: min - margin,
            max: max + margin,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` in `[0, cells - 1]`, 0 at `min`.
    fn cell(&self, v: f64, cells: usize) -> usize {
        if cells <= 1 || self.span() <= 0.0 {
            return 0;
        }
        let t = ((v - self.min) / self.span()).clamp(0.0, 1.0);
        (t * (cells - 1) as f64).round() as usize
    }

    /// Multiples of `spacing` inside the range, at most `limit` of them.
    fn grid_values(&self, spacing: f64, limit: usize) -> Vec<f64> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Vec::new();
        }
        let first = (self.min / spacing).ceil() as i64;
        (first..)
            .map(|k| k as f64 * spacing)
            .take_while(|&v| v <= self.max)
            .take(limit)
            .collect()
    }
}

/// Character-cell line plot with axis limits and grid spacing.
#[derive(Clone, Debug)]
pub struct LinePlot {
    pub width: usize,
    pub height: usize,
    pub x: PlotRange,
    pub y: PlotRange,
    pub grid_x: f64,
    pub grid_y: f64,
}

impl LinePlot {
    pub fn new(x: PlotRange, y: PlotRange) -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            x,
            y,
            grid_x: 0.0,
            grid_y: 0.0,
        }
    }

    pub fn with_grid(mut self, grid_x: f64, grid_y: f64) -> Self {
        self.grid_x = grid_x;
        self.grid_y = grid_y;
        self
    }

    fn col(&self, x: f64) -> usize {
        self.x.cell(x, self.width)
    }

    fn row(&self, y: f64) -> usize {
        self.height - 1 - self.y.cell(y, self.height)
    }

    /// Draw `points` joined by straight segments.
    pub fn render(&self, points: &[(f64, f64)]) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }
        let mut canvas = vec![vec![' '; self.width]; self.height];

        for gy in self.y.grid_values(self.grid_y, self.height) {
            let row = self.row(gy);
            canvas[row].iter_mut().for_each(|c| *c = GRID_CHAR);
        }
        for gx in self.x.grid_values(self.grid_x, self.width) {
            let col = self.col(gx);
            canvas.iter_mut().for_each(|r| r[col] = GRID_CHAR);
        }

        for pair in points.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            let (c0, c1) = (self.col(x0), self.col(x1));
            let (lo, hi) = (c0.min(c1), c0.max(c1));
            let (ya, yb) = if c0 <= c1 { (y0, y1) } else { (y1, y0) };
            for c in lo..=hi {
                let t = if hi == lo {
                    0.0
                } else {
                    (c - lo) as f64 / (hi - lo) as f64
                };
                canvas[self.row(ya + (yb - ya) * t)][c] = POINT_CHAR;
            }
        }
        if let [(x, y)] = points {
            canvas[self.row(*y)][self.col(*x)] = POINT_CHAR;
        }

        let mut out = String::new();
        for (r, line) in canvas.iter().enumerate() {
            let label = if r == 0 {
                format!("{:.1}", self.y.max)
            } else if r == self.height - 1 {
                format!("{:.1}", self.y.min)
            } else {
                String::new()
            };
            out.push_str(&format!("{label:>LABEL_WIDTH$} |"));
            out.extend(line.iter());
            out.push('\n');
        }
        out.push_str(&format!("{:>LABEL_WIDTH$} +{}\n", "", "-".repeat(self.width)));

        let left = format!("{:.0}", self.x.min);
        let right = format!("{:.0}", self.x.max);
        let gap = self.width.saturating_sub(left.len() + right.len());
        out.push_str(&format!(
            "{:>LABEL_WIDTH$}  {left}{}{right}\n",
            "",
            " ".repeat(gap)
        ));
        out
    }
}

/// Plot a series against its index, with a margin around `[min, max]`.
pub fn plot_timecourse(values: &[f64], min: f64, max: f64, grid_x: f64, grid_y: f64) -> String {
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();
    let x = PlotRange::new(0.0, values.len().saturating_sub(1) as f64);
    let y = PlotRange::with_margin(min, max, PLOT_MARGIN_FRACTION);
    LinePlot::new(x, y).with_grid(grid_x, grid_y).render(&points)
}
