mod ascii;
mod plot;

pub use ascii::{ramp_char, render_image};
pub use plot::{plot_timecourse, LinePlot, PlotRange};
