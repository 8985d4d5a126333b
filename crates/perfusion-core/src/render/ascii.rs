use crate::consts::{ASCII_MAX_COLUMNS, ASCII_MAX_ROWS, ASCII_RAMP};
use crate::frame::ScalarField;

/// Upper bounds of each ramp level except the last, as `(numerator, denominator)`
/// fractions of the display range.
const RAMP_BOUNDS: [(f64, f64); 6] = [
    (1.0, 10.0),
    (1.0, 5.0),
    (1.0, 3.0),
    (1.0, 2.0),
    (2.0, 3.0),
    (4.0, 5.0),
];

/// Map a value in `[min, max]` to a brightness character.
///
/// Level bounds are whole numbers (`span * num / den` rounded down), so with a
/// range of 0..255 the first bound is 25 and a value of 25 is already `'.'`.
pub fn ramp_char(value: f64, min: f64, max: f64) -> char {
    let span = max - min;
    if span <= 0.0 {
        return ASCII_RAMP[0];
    }
    let offset = value - min;
    RAMP_BOUNDS
        .iter()
        .position(|&(num, den)| offset < (span * num / den).floor())
        .map_or(ASCII_RAMP[ASCII_RAMP.len() - 1], |i| ASCII_RAMP[i])
}

/// Render a scalar field as ASCII art, one line per sampled row.
///
/// Large fields are subsampled so the output stays within roughly
/// 80 columns by 40 rows.
pub fn render_image(field: &impl ScalarField, min: f64, max: f64) -> String {
    let (w, h) = (field.width(), field.height());
    let x_step = (w / ASCII_MAX_COLUMNS).max(1);
    let y_step = (h / ASCII_MAX_ROWS).max(1);

    let mut out = String::with_capacity((w / x_step + 1) * (h / y_step + 1));
    for y in (0..h).step_by(y_step) {
        for x in (0..w).step_by(x_step) {
            out.push(ramp_char(field.value_at(x as i64, y as i64), min, max));
        }
        out.push('\n');
    }
    out
}
