//! Input parsing for the batch pipeline
//!
//! Raw input is one blob of text with addresses separated by commas,
//! newlines, or both.

/// Split raw input into a list of addresses
///
/// Splits on commas and newlines, trims each segment, and drops empties.
/// Order is preserved.
pub fn parse_addresses(input: &str) -> Vec<String> {
    input
        .split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}
