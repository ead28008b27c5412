//! Baseline Interval Catalog
//!
//! Static manufacturer-recommended service intervals: a default list that
//! covers every supported service item, with model-specific overrides
//! layered on top. Loaded once as process-wide constant data, never
//! mutated at runtime.

use serde::{Deserialize, Serialize};

/// A single manufacturer-recommended service interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItemSpec {
    /// Service item name, unique within a catalog lookup result.
    #[serde(rename = "item")]
    pub name: String,
    /// Recommended distance between services, in kilometers.
    pub interval_kms: u32,
    /// Recommended time between services, in months.
    pub interval_months: u32,
}

impl ServiceItemSpec {
    fn from_raw(&(name, interval_kms, interval_months): &RawSpec) -> Self {
        Self {
            name: name.to_string(),
            interval_kms,
            interval_months,
        }
    }
}

/// (name, interval kms, interval months)
type RawSpec = (&'static str, u32, u32);

/// An override row: an optional transmission constraint plus the
/// replacement spec. Rows without a constraint always apply.
type OverrideRow = (Option<&'static str>, RawSpec);

/// Default intervals applied to any vehicle without a model override.
const BASE_INTERVALS: &[RawSpec] = &[
    ("Engine Oil & Filter", 10_000, 6),
    ("Brake Fluid", 40_000, 24),
    ("Tire Rotation", 10_000, 6),
    ("Air Filter", 40_000, 24),
    ("Cabin Air Filter", 40_000, 24),
    ("Spark Plugs (Iridium/Platinum)", 100_000, 72),
    ("Coolant", 100_000, 60),
    ("Transmission Fluid (Automatic)", 80_000, 48),
    ("Transmission Fluid (Manual)", 60_000, 36),
    ("Differential Fluid", 60_000, 36),
    ("Timing Belt", 100_000, 72),
];

/// Model-specific interval overrides, keyed by exact (make, model).
///
/// Keys match the preset catalog spellings so vehicles built from presets
/// receive their overrides.
fn model_overrides(make: &str, model: &str) -> &'static [OverrideRow] {
    match (make, model) {
        ("Toyota", "86 / BRZ") | ("Subaru", "BRZ / 86") => &[
            (None, ("Engine Oil & Filter", 8_000, 6)),
            (None, ("Spark Plugs (Iridium/Platinum)", 80_000, 60)),
        ],
        ("Volkswagen", "Golf R MK7.5") => &[
            (None, ("Engine Oil & Filter", 10_000, 12)),
            // DSG service runs shorter than the generic automatic interval
            (Some("DSG"), ("Transmission Fluid (Automatic)", 60_000, 36)),
        ],
        ("Holden", "Commodore SV6") => &[(None, ("Engine Oil & Filter", 15_000, 12))],
        _ => &[],
    }
}

/// Look up the baseline service intervals for a vehicle.
///
/// Starts from the default list and overlays any model-specific overrides:
/// items present in both are replaced, default-only items are kept, and
/// override-only items are appended. Override rows carrying a transmission
/// constraint apply only when `transmission` matches it exactly.
///
/// Matching is case-sensitive and exact; an unknown make/model yields the
/// pure default list.
pub fn lookup(make: &str, model: &str, transmission: Option<&str>) -> Vec<ServiceItemSpec> {
    let overrides = model_overrides(make, model);
    let applies = |row: &OverrideRow| match row.0 {
        None => true,
        Some(required) => transmission == Some(required),
    };

    let mut items: Vec<ServiceItemSpec> = BASE_INTERVALS
        .iter()
        .map(|base| {
            overrides
                .iter()
                .filter(|row| applies(row))
                .find(|(_, spec)| spec.0 == base.0)
                .map(|(_, spec)| ServiceItemSpec::from_raw(spec))
                .unwrap_or_else(|| ServiceItemSpec::from_raw(base))
        })
        .collect();

    // Override-only items extend the catalog for that model
    for (_, spec) in overrides.iter().filter(|row| applies(row)) {
        if !items.iter().any(|item| item.name == spec.0) {
            items.push(ServiceItemSpec::from_raw(spec));
        }
    }

    items
}

/// Names of every item in the default catalog, in catalog order.
pub fn service_item_names() -> Vec<&'static str> {
    BASE_INTERVALS.iter().map(|&(name, _, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_no_duplicates() {
        let items = lookup("Mazda", "MX-5 (NA)", None);
        assert_eq!(items.len(), BASE_INTERVALS.len());
        for item in &items {
            assert_eq!(items.iter().filter(|i| i.name == item.name).count(), 1);
        }
    }

    #[test]
    fn test_model_override_replaces_defaults() {
        let items = lookup("Toyota", "86 / BRZ", None);
        let oil = items.iter().find(|i| i.name == "Engine Oil & Filter").unwrap();
        assert_eq!(oil.interval_kms, 8_000);
        let plugs = items
            .iter()
            .find(|i| i.name == "Spark Plugs (Iridium/Platinum)")
            .unwrap();
        assert_eq!(plugs.interval_kms, 80_000);
        assert_eq!(plugs.interval_months, 60);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let items = lookup("toyota", "86 / brz", None);
        let oil = items.iter().find(|i| i.name == "Engine Oil & Filter").unwrap();
        assert_eq!(oil.interval_kms, 10_000); // default, no override
    }

    #[test]
    fn test_transmission_keyed_override() {
        let with_dsg = lookup("Volkswagen", "Golf R MK7.5", Some("DSG"));
        let auto = with_dsg
            .iter()
            .find(|i| i.name == "Transmission Fluid (Automatic)")
            .unwrap();
        assert_eq!(auto.interval_kms, 60_000);

        let without = lookup("Volkswagen", "Golf R MK7.5", Some("Manual"));
        let auto = without
            .iter()
            .find(|i| i.name == "Transmission Fluid (Automatic)")
            .unwrap();
        assert_eq!(auto.interval_kms, 80_000); // generic automatic interval
    }
}
