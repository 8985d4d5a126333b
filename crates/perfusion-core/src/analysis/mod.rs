mod analyzer;
pub mod timecourse;
mod types;

pub use analyzer::TimecourseAnalyzer;
pub use types::{AnalysisStage, PerfusionResult};
