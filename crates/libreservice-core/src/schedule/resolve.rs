//! Due-Status Resolver
//!
//! Decides whether each adjusted interval is due now, reconciling two
//! independent odometers: the chassis odometer and the current engine's
//! odometer, which diverge after an engine swap. Service history records
//! override the inferred swap baseline.

use serde::{Deserialize, Serialize};

use crate::classify::{component_class, ComponentClass};
use crate::schedule::adjust::AdjustedInterval;

/// The odometer pair recorded when a replacement engine was installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSwap {
    /// Chassis odometer at the moment of the swap.
    pub chassis_kms_at_swap: u32,
    /// The replacement engine's own odometer at the moment of the swap.
    pub engine_kms_at_swap: u32,
}

/// The last known service event, in the chassis odometer frame.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Chassis odometer when the service was performed.
    pub odometer_kms: u32,
    /// Names of the items serviced at that event.
    pub items: Vec<String>,
}

impl ServiceRecord {
    /// Whether this record covers the named item
    /// (case-insensitive substring match against each recorded entry).
    pub fn covers(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.items
            .iter()
            .any(|entry| entry.to_lowercase().contains(&needle))
    }
}

/// Current mileage bookkeeping for one vehicle.
///
/// Invariants (enforced upstream by record validation):
/// `engine_swap.chassis_kms_at_swap <= chassis_kms` and
/// `last_service.odometer_kms <= chassis_kms`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MileageState {
    /// Current chassis odometer reading.
    pub chassis_kms: u32,
    /// Present iff the engine has been replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_swap: Option<EngineSwap>,
    /// The last known service event, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service: Option<ServiceRecord>,
}

impl MileageState {
    /// Kilometers traveled by the current engine.
    ///
    /// Derived, never stored as ground truth: after a swap the engine has
    /// covered the distance since the swap plus whatever it had on it when
    /// installed.
    pub fn current_engine_kms(&self) -> u32 {
        match self.engine_swap {
            Some(swap) => {
                debug_assert!(
                    swap.chassis_kms_at_swap <= self.chassis_kms,
                    "swap odometer exceeds current chassis odometer"
                );
                self.chassis_kms.saturating_sub(swap.chassis_kms_at_swap) + swap.engine_kms_at_swap
            }
            None => self.chassis_kms,
        }
    }

    /// The odometer reading (in `class`'s frame) at which the named item
    /// was last serviced, by priority: explicit service record, then the
    /// engine-swap pivot for engine items, then never serviced.
    fn last_service_point(&self, name: &str, class: ComponentClass) -> u32 {
        if let Some(record) = &self.last_service {
            if record.covers(name) {
                match class {
                    ComponentClass::Chassis => return record.odometer_kms,
                    ComponentClass::Engine => match self.engine_swap {
                        None => return record.odometer_kms,
                        // Service after the swap: translate into the engine frame
                        Some(swap) if record.odometer_kms > swap.chassis_kms_at_swap => {
                            return (record.odometer_kms - swap.chassis_kms_at_swap)
                                + swap.engine_kms_at_swap;
                        }
                        // Service predates the swap; the record does not
                        // apply to the new engine, fall through to the pivot
                        Some(_) => {}
                    },
                }
            }
        }

        if class == ComponentClass::Engine {
            if let Some(swap) = self.engine_swap {
                // The swap itself counts as a full service baseline
                return swap.engine_kms_at_swap;
            }
        }

        0
    }
}

/// Whether a service item is due and how far it has run since its last
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueStatus {
    /// The item has reached or passed its interval.
    pub is_due: bool,
    /// Kilometers covered since the last service point, clamped at zero.
    pub kms_since_service: u32,
}

/// Resolve the due status of one adjusted interval against the vehicle's
/// mileage bookkeeping.
///
/// Inconsistent input (a service point past the current odometer) clamps
/// kilometers-since-service to zero, biasing toward "not due" rather than
/// failing.
pub fn resolve_due_status(item: &AdjustedInterval, mileage: &MileageState) -> DueStatus {
    let class = component_class(&item.name);
    let current_kms = match class {
        ComponentClass::Engine => mileage.current_engine_kms(),
        ComponentClass::Chassis => mileage.chassis_kms,
    };

    let last_point = mileage.last_service_point(&item.name, class);
    let kms_since_service = current_kms.saturating_sub(last_point);

    tracing::debug!(
        item = %item.name,
        ?class,
        current_kms,
        last_point,
        kms_since_service,
        "resolved due status"
    );

    DueStatus {
        is_due: kms_since_service >= item.interval_kms,
        kms_since_service,
    }
}
