//! URL output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::pipeline::CenterOutcome;

/// URL formatter - outputs a map URL for the computed center
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URL with optional provider override
    pub fn format_with_provider(
        &self,
        outcome: &CenterOutcome,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        config.format_url(
            provider,
            outcome.center.coords.lat,
            outcome.center.coords.lng,
        )
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the center"
    }

    fn format(&self, outcome: &CenterOutcome, config: &Config) -> Result<String> {
        self.format_with_provider(outcome, config, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::sample_outcome;

    #[test]
    fn test_url_format_default_provider() {
        let formatter = UrlFormatter;
        let outcome = sample_outcome();
        let config = Config::default();

        let output = formatter.format(&outcome, &config).unwrap();

        // Default provider is OpenStreetMap
        assert!(output.contains("openstreetmap.org"));
        assert!(output.contains("28.5996"));
    }

    #[test]
    fn test_url_format_with_provider() {
        let formatter = UrlFormatter;
        let outcome = sample_outcome();
        let config = Config::default();

        let output = formatter
            .format_with_provider(&outcome, &config, Some("google"))
            .unwrap();

        assert!(output.contains("google.com/maps"));
    }

    #[test]
    fn test_url_format_unknown_provider() {
        let formatter = UrlFormatter;
        let outcome = sample_outcome();
        let config = Config::default();

        let result = formatter.format_with_provider(&outcome, &config, Some("unknown"));
        assert!(result.is_err());
    }

    #[test]
    fn test_url_formatter_info() {
        let formatter = UrlFormatter;
        assert_eq!(formatter.name(), "url");
        assert!(!formatter.description().is_empty());
    }
}
