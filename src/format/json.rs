//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::pipeline::CenterOutcome;

/// JSON formatter - outputs full outcome as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON outcome"
    }

    fn format(&self, outcome: &CenterOutcome, _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(outcome)?)
    }
}
