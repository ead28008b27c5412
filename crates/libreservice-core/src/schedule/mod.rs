//! Schedule Assembly
//!
//! Composes the catalog, the adjustment rule engine, and the due-status
//! resolver into a complete maintenance schedule for one vehicle.

mod adjust;
mod resolve;

pub use adjust::{
    adjust_intervals, AdjustedInterval, DrivingHabit, ForcedInduction, ModificationProfile, Stage,
    STANDARD_INTERVAL_REASON,
};
pub use resolve::{resolve_due_status, DueStatus, EngineSwap, MileageState, ServiceRecord};

use serde::{Deserialize, Serialize};

use crate::catalog::{lookup, ServiceItemSpec};
use crate::vehicle::{ValidationError, VehicleRecord};

/// One line of the final maintenance schedule.
///
/// Ephemeral: recomputed on every view, never persisted as authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedServiceItem {
    /// Service item name.
    #[serde(rename = "item")]
    pub name: String,
    /// Adjusted distance interval, km.
    pub interval_kms: u32,
    /// Adjusted time interval, months.
    pub interval_months: u32,
    /// Why the interval differs from (or matches) the baseline.
    pub reason: String,
    /// The item has reached or passed its interval.
    pub is_due: bool,
    /// Kilometers covered since the last service point.
    pub kms_since_service: u32,
}

impl AdjustedServiceItem {
    fn from_parts(interval: AdjustedInterval, status: DueStatus) -> Self {
        Self {
            name: interval.name,
            interval_kms: interval.interval_kms,
            interval_months: interval.interval_months,
            reason: interval.reason,
            is_due: status.is_due,
            kms_since_service: status.kms_since_service,
        }
    }
}

/// Assemble a schedule from already-validated parts.
///
/// Adjusts every baseline interval, resolves its due status, then sorts:
/// due items first, ties broken by item name. The ordering is a display
/// contract.
pub fn schedule_for(
    items: &[ServiceItemSpec],
    mods: &ModificationProfile,
    habit: DrivingHabit,
    mileage: &MileageState,
) -> Vec<AdjustedServiceItem> {
    let mut schedule: Vec<AdjustedServiceItem> = adjust_intervals(items, mods, habit)
        .into_iter()
        .map(|interval| {
            let status = resolve_due_status(&interval, mileage);
            AdjustedServiceItem::from_parts(interval, status)
        })
        .collect();

    schedule.sort_by(|a, b| b.is_due.cmp(&a.is_due).then_with(|| a.name.cmp(&b.name)));
    schedule
}

/// Build the full maintenance schedule for a vehicle record.
///
/// Validates the record, then runs catalog lookup, interval adjustment,
/// and due-status resolution. The whole pipeline is pure and idempotent:
/// the same record always yields the same schedule.
pub fn build_schedule(record: &VehicleRecord) -> Result<Vec<AdjustedServiceItem>, ValidationError> {
    record.validate()?;

    let items = lookup(&record.make, &record.model, Some(&record.transmission));
    let schedule = schedule_for(
        &items,
        &record.modifications(),
        record.habit(),
        &record.mileage_state(),
    );

    tracing::debug!(
        make = %record.make,
        model = %record.model,
        due = schedule.iter().filter(|item| item.is_due).count(),
        total = schedule.len(),
        "built schedule"
    );

    Ok(schedule)
}
