//! Active-row evaluation for the version list.

use crate::models::{ComparisonState, Version};

/// Whether a version should be marked as selected in the list.
///
/// A version is active when it is the current version while compare mode
/// is off, or when it is one of the two compare endpoints. Matching is by
/// version number only; records with equal numbers are indistinguishable
/// here. Absent inputs never match.
///
/// The endpoint checks are intentionally not gated behind the compare
/// flag: endpoints left over with the flag off still match. The state
/// owner clears endpoints when leaving compare mode, which keeps that
/// path dormant in practice.
pub fn is_version_active(
    version: &Version,
    current_version: Option<&Version>,
    compare: &ComparisonState,
) -> bool {
    let is_current = current_version.is_some_and(|current| current.version == version.version);
    let is_compare_from = compare
        .version_from
        .as_ref()
        .is_some_and(|from| from.version == version.version);
    let is_compare_to = compare
        .version_to
        .as_ref()
        .is_some_and(|to| to.version == version.version);

    (!compare.active && is_current) || is_compare_from || is_compare_to
}
