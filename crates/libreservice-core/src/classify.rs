//! Service Item Classification
//!
//! Maps catalog item names onto the two odometer frames (engine vs chassis)
//! and onto the wear-item set whose intervals shorten with aggressive
//! driving. Built as an enum-keyed table so the rest of the engine never
//! does ad hoc substring checks against item names.

use serde::{Deserialize, Serialize};

/// Which odometer a service item wears against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentClass {
    /// Follows the engine odometer; replaced wholesale by an engine swap.
    Engine,
    /// Follows the chassis odometer; unaffected by engine swaps.
    Chassis,
}

/// The service items the catalog knows how to classify.
///
/// Items appended by a model override under an unknown name fall outside
/// this enum and are treated as chassis-side, non-wear items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownItem {
    /// Engine Oil & Filter
    EngineOilFilter,
    /// Brake Fluid
    BrakeFluid,
    /// Tire Rotation
    TireRotation,
    /// Air Filter
    AirFilter,
    /// Cabin Air Filter
    CabinAirFilter,
    /// Spark Plugs (Iridium/Platinum)
    SparkPlugs,
    /// Coolant
    Coolant,
    /// Transmission Fluid (Automatic)
    TransmissionFluidAutomatic,
    /// Transmission Fluid (Manual)
    TransmissionFluidManual,
    /// Differential Fluid
    DifferentialFluid,
    /// Timing Belt
    TimingBelt,
}

impl KnownItem {
    /// Parse a catalog item name. Exact match against the catalog spelling.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Engine Oil & Filter" => Some(Self::EngineOilFilter),
            "Brake Fluid" => Some(Self::BrakeFluid),
            "Tire Rotation" => Some(Self::TireRotation),
            "Air Filter" => Some(Self::AirFilter),
            "Cabin Air Filter" => Some(Self::CabinAirFilter),
            "Spark Plugs (Iridium/Platinum)" => Some(Self::SparkPlugs),
            "Coolant" => Some(Self::Coolant),
            "Transmission Fluid (Automatic)" => Some(Self::TransmissionFluidAutomatic),
            "Transmission Fluid (Manual)" => Some(Self::TransmissionFluidManual),
            "Differential Fluid" => Some(Self::DifferentialFluid),
            "Timing Belt" => Some(Self::TimingBelt),
            _ => None,
        }
    }

    /// Catalog spelling of this item.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EngineOilFilter => "Engine Oil & Filter",
            Self::BrakeFluid => "Brake Fluid",
            Self::TireRotation => "Tire Rotation",
            Self::AirFilter => "Air Filter",
            Self::CabinAirFilter => "Cabin Air Filter",
            Self::SparkPlugs => "Spark Plugs (Iridium/Platinum)",
            Self::Coolant => "Coolant",
            Self::TransmissionFluidAutomatic => "Transmission Fluid (Automatic)",
            Self::TransmissionFluidManual => "Transmission Fluid (Manual)",
            Self::DifferentialFluid => "Differential Fluid",
            Self::TimingBelt => "Timing Belt",
        }
    }

    /// Which odometer this item wears against.
    ///
    /// Coolant is deliberately chassis-side: it is habit-sensitive but not
    /// eligible for engine modification factors.
    pub const fn class(self) -> ComponentClass {
        match self {
            Self::EngineOilFilter
            | Self::SparkPlugs
            | Self::AirFilter
            | Self::TimingBelt
            | Self::TransmissionFluidAutomatic
            | Self::TransmissionFluidManual => ComponentClass::Engine,
            Self::BrakeFluid
            | Self::TireRotation
            | Self::CabinAirFilter
            | Self::Coolant
            | Self::DifferentialFluid => ComponentClass::Chassis,
        }
    }

    /// Whether driving-habit factors apply to this item.
    ///
    /// Overlaps but is not identical to the engine class: the transmission
    /// fluids are engine items for modification factors and wear items for
    /// habit factors.
    pub const fn is_wear_item(self) -> bool {
        matches!(
            self,
            Self::BrakeFluid
                | Self::TireRotation
                | Self::Coolant
                | Self::TransmissionFluidAutomatic
                | Self::TransmissionFluidManual
                | Self::DifferentialFluid
        )
    }
}

/// Classify an item name. Unknown names default to chassis.
pub fn component_class(name: &str) -> ComponentClass {
    match KnownItem::parse(name) {
        Some(item) => item.class(),
        None => ComponentClass::Chassis,
    }
}

/// Whether driving-habit factors apply to the named item.
/// Unknown names are not wear items.
pub fn is_wear_item(name: &str) -> bool {
    KnownItem::parse(name).is_some_and(KnownItem::is_wear_item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_items_follow_engine_odometer() {
        assert_eq!(component_class("Engine Oil & Filter"), ComponentClass::Engine);
        assert_eq!(component_class("Timing Belt"), ComponentClass::Engine);
        assert_eq!(
            component_class("Transmission Fluid (Manual)"),
            ComponentClass::Engine
        );
    }

    #[test]
    fn test_coolant_is_chassis_side_wear_item() {
        assert_eq!(component_class("Coolant"), ComponentClass::Chassis);
        assert!(is_wear_item("Coolant"));
    }

    #[test]
    fn test_cabin_air_filter_is_plain_chassis() {
        assert_eq!(component_class("Cabin Air Filter"), ComponentClass::Chassis);
        assert!(!is_wear_item("Cabin Air Filter"));
    }

    #[test]
    fn test_unknown_items_default_to_chassis() {
        assert_eq!(component_class("Supercharger Belt"), ComponentClass::Chassis);
        assert!(!is_wear_item("Supercharger Belt"));
    }

    #[test]
    fn test_round_trip_names() {
        for name in crate::catalog::service_item_names() {
            let item = KnownItem::parse(name).expect("catalog item must classify");
            assert_eq!(item.name(), name);
        }
    }
}
