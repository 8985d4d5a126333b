use console::Style;
use perfusion_core::config::AnalysisConfig;
use perfusion_core::dataset::PerfusionDataset;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_analysis_summary(config: &AnalysisConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Perfusion Analysis"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Dataset"),
        s.value.apply_to(&config.name)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.path
            .apply_to(format!("{}NN.pgm (up to {})", config.input_base, config.max_frames))
    );
    match config.contrast_info {
        Some(ref path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Contrast"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Contrast"),
            s.disabled.apply_to("none")
        ),
    }
    println!();

    println!("  {}", s.header.apply_to("ROI"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Center"),
        s.value
            .apply_to(format!("({}, {})", config.roi.center_x, config.roi.center_y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{} px", config.roi.size))
    );
    println!();

    println!("  {}", s.header.apply_to("Arrival"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(config.threshold_gradient)
    );
    println!();
}

/// Arrival, peak and temporal gradient with 2/2/3 decimal places.
pub fn print_results(dataset: &PerfusionDataset) {
    println!(
        "Contrast arrival occurs at frame {}, with signal intensity: {:.2}",
        dataset.arrival_frame(),
        dataset.arrival_signal()
    );
    println!(
        "Peak contrast concentration occurs at frame {}, with signal intensity: {:.2}",
        dataset.peak_frame(),
        dataset.peak_signal()
    );
    println!(
        "Temporal gradient of signal during contrast update: {:.3}",
        dataset.temporal_gradient()
    );
}

pub fn print_timecourse_table(dataset: &PerfusionDataset) {
    let signal = dataset.signal_timecourse();
    let gradient = dataset.gradient_timecourse();

    println!("\n{:>6}  {:>10}  {:>10}", "Frame", "Signal", "Gradient");
    println!("{}", "-".repeat(30));
    for (i, s) in signal.iter().enumerate() {
        match gradient.get(i) {
            Some(g) => println!("{:>6}  {:>10.2}  {:>10.2}", i, s, g),
            None => println!("{:>6}  {:>10.2}  {:>10}", i, s, "-"),
        }
    }
}
