use crate::fleet::Vessel;

/// How many vessels the default (unfiltered) hero window shows.
pub const DEFAULT_WINDOW: usize = 3;

/// Numeric sort key for a price-range label. Labels look like "<1000",
/// "1000-1500" or ">4000"; thousands separators and whitespace are ignored.
/// "<" labels key one below their bound so "<1000" lands before "1000-...";
/// ">" labels key one above. Labels with no digits sort last.
fn tier_sort_key(label: &str) -> i64 {
    let normalized: String = label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();

    let digits = |s: &str| -> Option<i64> {
        let run: String = s
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        run.parse().ok()
    };

    if let Some(rest) = normalized.strip_prefix('<') {
        return digits(rest).map(|n| n - 1).unwrap_or(i64::MAX);
    }

    if let Some(rest) = normalized.strip_prefix('>') {
        return digits(rest).map(|n| n + 1).unwrap_or(i64::MAX);
    }

    digits(&normalized).unwrap_or(i64::MAX)
}

/// Distinct price-range labels across the loaded vessels, ordered by their
/// numeric key. Ties keep first-encounter order (the sort is stable).
pub fn derive_price_tiers(vessels: &[Vessel]) -> Vec<String> {
    let mut tiers: Vec<String> = Vec::new();
    for vessel in vessels {
        if vessel.price_range.is_empty() {
            continue;
        }
        if !tiers.contains(&vessel.price_range) {
            tiers.push(vessel.price_range.clone());
        }
    }

    tiers.sort_by_key(|label| tier_sort_key(label));
    tiers
}

/// Keep the previous tier if it still exists, otherwise fall back to the
/// first ordered tier. An empty tier list clears the selection.
pub fn select_active_tier(previous: Option<&str>, tiers: &[String]) -> Option<String> {
    match previous {
        Some(tier) if tiers.iter().any(|t| t == tier) => Some(tier.to_string()),
        _ => tiers.first().cloned(),
    }
}

/// Vessels matching the active tier exactly. No tier, or a tier that
/// matches nothing, falls back to the first three vessels so the hero never
/// renders an empty scene. (The fallback deliberately masks tier/data
/// mismatches - see DESIGN.md.)
pub fn filter_vessels(vessels: &[Vessel], tier: Option<&str>) -> Vec<Vessel> {
    if vessels.is_empty() {
        return Vec::new();
    }

    let fallback = || vessels.iter().take(DEFAULT_WINDOW).cloned().collect();

    let Some(tier) = tier.filter(|t| !t.is_empty()) else {
        return fallback();
    };

    let filtered: Vec<Vessel> = vessels
        .iter()
        .filter(|vessel| vessel.price_range == tier)
        .cloned()
        .collect();

    if filtered.is_empty() {
        return fallback();
    }

    filtered
}
