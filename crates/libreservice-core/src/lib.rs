//! # LibreService Core Library
//!
//! Core functionality for the LibreService maintenance scheduling software.

#![warn(missing_docs)]

//!
//! This library provides:
//! - Manufacturer baseline service interval catalog with model overrides
//! - Deterministic interval adjustment for modifications and driving style
//! - Due-status resolution across chassis and engine odometers
//! - Engine-swap mileage bookkeeping
//! - Vehicle record validation and service history updates
//!
//! ## Example
//!
//! ```rust,ignore
//! use libreservice_core::{schedule::build_schedule, vehicle::VehicleRecord};
//!
//! let mut record = VehicleRecord::new("Toyota", "86 / BRZ", 2015, "Manual");
//! record.chassis_kms = 50_000;
//!
//! for entry in build_schedule(&record)? {
//!     println!("{}: every {} km{}", entry.name, entry.interval_kms,
//!         if entry.is_due { " (due now)" } else { "" });
//! }
//! ```

pub mod catalog;
pub mod classify;
pub mod presets;
pub mod schedule;
pub mod vehicle;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{lookup, ServiceItemSpec};
    pub use crate::classify::ComponentClass;
    pub use crate::presets::{find_model, EngineSwapOption, MakePresets, ModelPreset};
    pub use crate::schedule::{
        build_schedule, schedule_for, AdjustedInterval, AdjustedServiceItem, DrivingHabit,
        DueStatus, EngineSwap, ForcedInduction, MileageState, ModificationProfile, ServiceRecord,
        Stage,
    };
    pub use crate::vehicle::{ValidationError, VehicleRecord};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
