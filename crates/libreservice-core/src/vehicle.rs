//! Vehicle Record Boundary
//!
//! The flat record shape exchanged with the form and storage collaborators,
//! its validation rules, and the service-history update applied when a user
//! marks work complete. Enum-ish fields stay strings on the wire and are
//! parsed permissively on the way into the engine.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::schedule::{
    DrivingHabit, EngineSwap, ForcedInduction, MileageState, ModificationProfile, ServiceRecord,
    Stage,
};

/// Earliest accepted model year.
const MIN_MODEL_YEAR: u16 = 1900;

/// Errors raised by vehicle record validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid model year {year}: expected {min} to {max}")]
    InvalidYear { year: u16, min: u16, max: u16 },

    #[error("KMs at last service ({last_service_kms}) cannot be greater than current chassis KMs ({chassis_kms})")]
    LastServiceExceedsOdometer {
        last_service_kms: u32,
        chassis_kms: u32,
    },

    #[error("chassis KMs at engine swap ({engine_swap_kms}) cannot be greater than current chassis KMs ({chassis_kms})")]
    SwapExceedsOdometer {
        engine_swap_kms: u32,
        chassis_kms: u32,
    },

    #[error("chassis KMs and engine KMs at the time of swap are required when the engine has been replaced")]
    MissingSwapFields,
}

/// One vehicle as the form and storage collaborators see it.
///
/// Wire field names are camelCase. `engine_kms` is the stored copy of the
/// derived engine odometer, refreshed on save for display; the engine never
/// treats it as ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Stable record identifier.
    pub id: String,
    /// Manufacturer, e.g. "Subaru".
    pub make: String,
    /// Model designation, e.g. "WRX (VA)".
    pub model: String,
    /// Model year.
    pub year: u16,
    /// Transmission description, e.g. "Manual" or "DSG".
    pub transmission: String,
    /// Current chassis odometer reading, km.
    pub chassis_kms: u32,
    /// Whether the engine has been replaced.
    #[serde(default)]
    pub has_swapped_engine: bool,
    /// Stored derived engine odometer, km.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_kms: Option<u32>,
    /// Identifier of the swapped-in engine, e.g. "K24".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_swap: Option<String>,
    /// Chassis odometer at the moment of the swap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_swap_kms: Option<u32>,
    /// The replacement engine's own odometer at the moment of the swap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_kms_at_swap: Option<u32>,
    /// Driving style, e.g. "Daily Commuting".
    pub driving_habits: String,
    /// Tuning tier, "none" or "1".."3".
    pub stage: String,
    /// Forced induction, "none", "turbo" or "supercharger".
    pub forced_induction: String,
    /// Turbo kit description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbo_type: Option<String>,
    /// Supercharger kit description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supercharger_kit: Option<String>,
    /// Chassis odometer at the last known service event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service_kms: Option<u32>,
    /// Items serviced at that event.
    #[serde(default)]
    pub last_service_items: Vec<String>,
}

impl VehicleRecord {
    /// Create a stock, unserviced record with a fresh id.
    pub fn new(make: &str, model: &str, year: u16, transmission: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            make: make.to_string(),
            model: model.to_string(),
            year,
            transmission: transmission.to_string(),
            chassis_kms: 0,
            has_swapped_engine: false,
            engine_kms: None,
            engine_swap: None,
            engine_swap_kms: None,
            engine_kms_at_swap: None,
            driving_habits: DrivingHabit::DailyCommuting.display_name().to_string(),
            stage: Stage::None.as_str().to_string(),
            forced_induction: ForcedInduction::None.as_str().to_string(),
            turbo_type: None,
            supercharger_kit: None,
            last_service_kms: None,
            last_service_items: Vec::new(),
        }
    }

    /// Check the record invariants the engine relies on.
    ///
    /// Must pass before the record reaches the scheduling engine; storage
    /// and form collaborators reject on error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.make.trim().is_empty() {
            return Err(ValidationError::MissingField("make"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingField("model"));
        }
        if self.transmission.trim().is_empty() {
            return Err(ValidationError::MissingField("transmission"));
        }
        if self.driving_habits.trim().is_empty() {
            return Err(ValidationError::MissingField("drivingHabits"));
        }

        let max_year = (Utc::now().year() + 1) as u16;
        if self.year < MIN_MODEL_YEAR || self.year > max_year {
            return Err(ValidationError::InvalidYear {
                year: self.year,
                min: MIN_MODEL_YEAR,
                max: max_year,
            });
        }

        if self.has_swapped_engine
            && (self.engine_swap_kms.is_none() || self.engine_kms_at_swap.is_none())
        {
            return Err(ValidationError::MissingSwapFields);
        }

        if self.has_swapped_engine {
            if let Some(engine_swap_kms) = self.engine_swap_kms {
                if engine_swap_kms > self.chassis_kms {
                    return Err(ValidationError::SwapExceedsOdometer {
                        engine_swap_kms,
                        chassis_kms: self.chassis_kms,
                    });
                }
            }
        }

        if let Some(last_service_kms) = self.last_service_kms {
            if last_service_kms > self.chassis_kms {
                return Err(ValidationError::LastServiceExceedsOdometer {
                    last_service_kms,
                    chassis_kms: self.chassis_kms,
                });
            }
        }

        Ok(())
    }

    /// The modification profile, parsed permissively: unknown strings fall
    /// back to the neutral variant rather than failing.
    pub fn modifications(&self) -> ModificationProfile {
        let stage = Stage::parse(&self.stage).unwrap_or_else(|| {
            tracing::warn!(stage = %self.stage, "unknown stage, treating as unmodified");
            Stage::None
        });
        let forced_induction =
            ForcedInduction::parse(&self.forced_induction).unwrap_or_else(|| {
                tracing::warn!(
                    forced_induction = %self.forced_induction,
                    "unknown forced induction, treating as naturally aspirated"
                );
                ForcedInduction::None
            });

        ModificationProfile {
            stage,
            forced_induction,
            turbo_type: self.turbo_type.clone(),
            supercharger_kit: self.supercharger_kit.clone(),
            engine_swap: self.engine_swap.clone(),
        }
    }

    /// The driving habit, parsed permissively.
    pub fn habit(&self) -> DrivingHabit {
        DrivingHabit::parse(&self.driving_habits).unwrap_or_else(|| {
            tracing::warn!(
                driving_habits = %self.driving_habits,
                "unknown driving habit, treating as daily commuting"
            );
            DrivingHabit::DailyCommuting
        })
    }

    /// Mileage bookkeeping in the resolver's typed shape.
    ///
    /// Assumes `validate` has passed; a swap flag without its odometer pair
    /// is a caller bug and degrades to "no swap" outside debug builds.
    pub fn mileage_state(&self) -> MileageState {
        let engine_swap = if self.has_swapped_engine {
            match (self.engine_swap_kms, self.engine_kms_at_swap) {
                (Some(chassis_kms_at_swap), Some(engine_kms_at_swap)) => Some(EngineSwap {
                    chassis_kms_at_swap,
                    engine_kms_at_swap,
                }),
                _ => {
                    debug_assert!(false, "swap flagged without swap odometer fields");
                    None
                }
            }
        } else {
            None
        };

        let last_service = self.last_service_kms.map(|odometer_kms| ServiceRecord {
            odometer_kms,
            items: self.last_service_items.clone(),
        });

        MileageState {
            chassis_kms: self.chassis_kms,
            engine_swap,
            last_service,
        }
    }

    /// Kilometers traveled by the current engine (derived, see
    /// [`MileageState::current_engine_kms`]).
    pub fn current_engine_kms(&self) -> u32 {
        self.mileage_state().current_engine_kms()
    }

    /// Fold newly completed service items into the record.
    ///
    /// Marks the given items as serviced at the current chassis odometer
    /// and refreshes the stored derived engine odometer. The schedule is
    /// simply recomputed afterwards.
    pub fn complete_service(&mut self, items: &[String]) {
        for name in items {
            if !self.last_service_items.contains(name) {
                self.last_service_items.push(name.clone());
            }
        }
        self.last_service_kms = Some(self.chassis_kms);
        self.engine_kms = Some(self.current_engine_kms());
    }
}
