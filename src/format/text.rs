//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::pipeline::CenterOutcome;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, outcome: &CenterOutcome, _config: &Config) -> Result<String> {
        let mut output = String::new();

        // Center
        output.push_str("Center Location:\n");
        if let Some(label) = &outcome.center.label {
            output.push_str(&format!("  {}\n", label));
        }
        output.push_str(&format!(
            "  Coordinates: {:.6}, {:.6}\n",
            outcome.center.coords.lat, outcome.center.coords.lng
        ));

        // Resolved locations
        output.push_str(&format!("\nGeocoded Locations ({}):\n", outcome.locations.len()));
        for location in &outcome.locations {
            output.push_str(&format!("  {}\n", location.address));
            output.push_str(&format!("    {}\n", location.display_name));
            output.push_str(&format!(
                "    Lat: {:.6}, Lon: {:.6}\n",
                location.coords.lat, location.coords.lng
            ));
        }

        // Warnings
        if !outcome.warnings.is_empty() {
            output.push('\n');
            for warning in &outcome.warnings {
                output.push_str(&format!("{}\n", warning));
            }
        }

        Ok(output)
    }
}
