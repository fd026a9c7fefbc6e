use super::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Filter predicates: site equality and payload range
// ---------------------------------------------------------------------------

/// Return indices of launches at the selected site (every row for `All`).
///
/// The proportion chart reads this view; it ignores the payload range.
pub fn by_site(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(&r.site))
        .map(|(i, _)| i)
        .collect()
}

/// Return indices of launches at the selected site whose payload mass lies
/// within `range` (inclusive on both ends).
///
/// The scatter chart is built from this view. An inverted range yields an
/// empty result.
pub fn by_site_and_payload(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(&r.site) && range.contains(r.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}
