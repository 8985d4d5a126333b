use std::path::Path;

use tracing::debug;

use crate::error::{PerfusionError, Result};

/// Contrast agent used for the acquisition.
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastAgent {
    pub name: String,
    /// Administered dose, strictly positive.
    pub dose: f64,
}

impl ContrastAgent {
    /// Load agent metadata: the name on the first line, the dose as the next token.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading contrast agent data");
        let text = std::fs::read_to_string(path)?;
        let agent = Self::parse(&text)?;
        debug!(name = %agent.name, dose = agent.dose, "Contrast agent loaded");
        Ok(agent)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let name = lines.next().map(str::trim).unwrap_or("");
        if name.is_empty() {
            return Err(PerfusionError::InvalidContrastAgent(
                "Missing contrast agent name".into(),
            ));
        }

        let dose_token = lines
            .flat_map(str::split_whitespace)
            .next()
            .ok_or_else(|| PerfusionError::InvalidContrastAgent("Missing dose".into()))?;
        let dose: f64 = dose_token.parse().map_err(|_| {
            PerfusionError::InvalidContrastAgent(format!("Invalid dose: {dose_token:?}"))
        })?;
        if dose.is_nan() || dose <= 0.0 {
            return Err(PerfusionError::InvalidContrastAgent(format!(
                "Dose must be positive, got {dose}"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            dose,
        })
    }
}
