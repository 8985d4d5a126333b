use ndarray::Array2;
use tracing::debug;

/// Boolean ROI membership grid, same coordinate convention as [`crate::frame::Frame`]
/// (origin top-left, `x` = column, `y` = row).
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    /// Membership, row-major, shape = (height, width)
    data: Array2<bool>,
}

impl Mask {
    /// Empty mask of the given size. Zero dimensions are allowed and yield no members.
    pub fn new(width: usize, height: usize) -> Self {
        debug!(width, height, "Mask created");
        Self {
            data: Array2::from_elem((height, width), false),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Mark a square around `(center_x, center_y)`, clipped to the grid.
    ///
    /// Covers `center ± size / 2` inclusive on both axes (integer division), so an
    /// even `size` marks a square of side `size + 1`. A non-positive `size` leaves
    /// the mask unchanged.
    pub fn add_square(&mut self, center_x: i64, center_y: i64, size: i64) {
        if size <= 0 {
            debug!(size, "Invalid size for square mask, ignoring");
            return;
        }

        let half = size / 2;
        let x0 = center_x.saturating_sub(half).max(0);
        let y0 = center_y.saturating_sub(half).max(0);
        let x1 = center_x.saturating_add(half).min(self.width() as i64 - 1);
        let y1 = center_y.saturating_add(half).min(self.height() as i64 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.data[[y as usize, x as usize]] = true;
            }
        }

        debug!(
            center_x,
            center_y,
            size,
            members = self.member_count(),
            "Square region added to mask"
        );
    }

    /// Whether `(x, y)` is a member. Out-of-range coordinates are never members.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width() || y as usize >= self.height() {
            return false;
        }
        self.data[[y as usize, x as usize]]
    }

    pub fn member_count(&self) -> usize {
        self.data.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        self.member_count() == 0
    }
}
