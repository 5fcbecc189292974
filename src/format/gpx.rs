//! GPX output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::pipeline::CenterOutcome;

/// GPX formatter - outputs GPX waypoint file
///
/// One waypoint per resolved location plus a distinguished Center
/// waypoint, so the batch can be loaded into any GPX viewer.
pub struct GpxFormatter;

/// Escape the XML special characters that can appear in address text
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, outcome: &CenterOutcome, _config: &Config) -> Result<String> {
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="geocenter">"#);
        gpx.push('\n');

        // Metadata
        gpx.push_str("  <metadata>\n");
        gpx.push_str("    <name>geocenter result</name>\n");
        gpx.push_str("  </metadata>\n");

        // Center waypoint
        gpx.push_str(&format!(
            r#"  <wpt lat="{}" lon="{}">"#,
            outcome.center.coords.lat, outcome.center.coords.lng
        ));
        gpx.push('\n');
        gpx.push_str("    <name>Center</name>\n");
        if let Some(label) = &outcome.center.label {
            gpx.push_str(&format!("    <desc>{}</desc>\n", escape_xml(label)));
        }
        gpx.push_str("    <sym>flag</sym>\n");
        gpx.push_str("  </wpt>\n");

        // Location waypoints
        for location in &outcome.locations {
            gpx.push_str(&format!(
                r#"  <wpt lat="{}" lon="{}">"#,
                location.coords.lat, location.coords.lng
            ));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>{}</name>\n", escape_xml(&location.address)));
            gpx.push_str(&format!(
                "    <desc>{}</desc>\n",
                escape_xml(&location.display_name)
            ));
            gpx.push_str("  </wpt>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}
