//! City-context plausibility filter
//!
//! Checks whether each resolved location plausibly belongs to the stated
//! city and produces advisory warnings for the rest. Mismatches never
//! remove a location from the result set.

use crate::geo::ResolvedLocation;

/// Check whether a resolved location plausibly matches the city context
///
/// The locality token (city, town, county, or state, first present) must
/// contain the first comma-segment of the context, case-insensitively.
/// Failing that, the full display name is checked for the whole context
/// as a substring. A location with no structured address breakdown is
/// always considered a match.
///
/// The heuristic is deliberately loose in both directions; results it
/// flags stay in the batch.
pub fn city_match(location: &ResolvedLocation, city_context: &str) -> bool {
    let Some(details) = &location.details else {
        return true;
    };

    let context = city_context.to_lowercase();
    let first_segment = context.split(',').next().unwrap_or(&context);
    let locality = details
        .locality()
        .map(str::to_lowercase)
        .unwrap_or_default();

    locality.contains(first_segment)
        || location.display_name.to_lowercase().contains(&context)
}

/// The warning text for one out-of-context result
pub fn mismatch_warning(address: &str) -> String {
    format!(
        "Warning: Result for \"{}\" may be outside the specified city context.",
        address
    )
}

/// Run the filter over a resolved batch, in order
pub fn collect_warnings(locations: &[ResolvedLocation], city_context: &str) -> Vec<String> {
    locations
        .iter()
        .filter(|location| !city_match(location, city_context))
        .map(|location| mismatch_warning(&location.address))
        .collect()
}
