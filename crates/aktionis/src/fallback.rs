use std::sync::LazyLock;

use crate::types::Deal;

use regex::Regex;

static RE_LEADING_NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^0-9]*").expect("invalid regex: leading non-digits"));

/// Strips everything before the first ASCII digit of `name`.
///
/// A name without digits yields an empty string.
pub fn description_from_name(name: &str) -> String {
    RE_LEADING_NON_DIGITS.replace(name, "").into_owned()
}

pub fn needs_fallback(deal: &Deal, store_marker: &str) -> bool {
    deal.store.contains(store_marker) || deal.description.is_empty()
}

/// Replaces the description of deals from low-quality stores or without one.
pub fn apply_fallback(deal: &mut Deal, store_marker: &str) {
    if needs_fallback(deal, store_marker) {
        deal.description = description_from_name(&deal.name);
    }
}
