//! Adjustment Rule Engine
//!
//! Shortens baseline service intervals for engine modifications and
//! driving style. Pure function over the catalog output; due status is
//! computed separately by the resolver.

use serde::{Deserialize, Serialize};

use crate::catalog::ServiceItemSpec;
use crate::classify::{component_class, is_wear_item, ComponentClass};

/// Reason attached to items that keep their manufacturer interval.
pub const STANDARD_INTERVAL_REASON: &str = "Standard manufacturer recommended interval.";

/// Cumulative engine tuning tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stage {
    /// Unmodified engine
    #[default]
    #[serde(rename = "none")]
    None,
    /// Bolt-on modifications
    #[serde(rename = "1")]
    One,
    /// Supporting fueling/cooling changes
    #[serde(rename = "2")]
    Two,
    /// Built or heavily tuned engine
    #[serde(rename = "3")]
    Three,
}

impl Stage {
    /// String form as it appears in form input and reason text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }

    /// Parse the form/persisted string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "1" => Some(Self::One),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            _ => None,
        }
    }

    /// Multiplier applied to engine item intervals.
    pub const fn interval_factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::One => 0.8,
            Self::Two => 0.6,
            Self::Three => 0.4,
        }
    }
}

/// Forced induction fitted to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForcedInduction {
    /// Naturally aspirated
    #[default]
    None,
    /// Turbocharged
    Turbo,
    /// Supercharged
    Supercharger,
}

impl ForcedInduction {
    /// String form as it appears in form input.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Turbo => "turbo",
            Self::Supercharger => "supercharger",
        }
    }

    /// Parse the form/persisted string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "turbo" => Some(Self::Turbo),
            "supercharger" => Some(Self::Supercharger),
            _ => None,
        }
    }

    /// Multiplier applied to engine item intervals.
    pub const fn interval_factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Turbo | Self::Supercharger => 0.5,
        }
    }
}

/// How the vehicle is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrivingHabit {
    /// Commuting and normal road use
    #[default]
    DailyCommuting,
    /// Occasional hard road driving
    SpiritedWeekendDrives,
    /// Circuit or competition use
    RegularTrackRaceUse,
}

impl DrivingHabit {
    /// Human-readable form, used in form input and reason text.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::DailyCommuting => "Daily Commuting",
            Self::SpiritedWeekendDrives => "Spirited Weekend Drives",
            Self::RegularTrackRaceUse => "Regular Track/Race Use",
        }
    }

    /// Parse the human-readable form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Daily Commuting" => Some(Self::DailyCommuting),
            "Spirited Weekend Drives" => Some(Self::SpiritedWeekendDrives),
            "Regular Track/Race Use" => Some(Self::RegularTrackRaceUse),
            _ => None,
        }
    }

    /// Multiplier applied to wear item intervals.
    pub const fn interval_factor(self) -> f64 {
        match self {
            Self::DailyCommuting => 1.0,
            Self::SpiritedWeekendDrives => 0.85,
            Self::RegularTrackRaceUse => 0.5,
        }
    }
}

/// Performance modification state of a vehicle.
///
/// Only `stage` and `forced_induction` affect the numbers; the remaining
/// fields describe the hardware for display purposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationProfile {
    /// Tuning tier.
    pub stage: Stage,
    /// Forced induction type.
    pub forced_induction: ForcedInduction,
    /// Turbo kit description, when turbocharged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbo_type: Option<String>,
    /// Supercharger kit description, when supercharged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supercharger_kit: Option<String>,
    /// Identifier of a swapped-in engine, e.g. "K24".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_swap: Option<String>,
}

/// A service interval after modification and driving-style adjustment,
/// before due-status resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedInterval {
    /// Service item name.
    #[serde(rename = "item")]
    pub name: String,
    /// Adjusted distance interval, km.
    pub interval_kms: u32,
    /// Adjusted time interval, months.
    pub interval_months: u32,
    /// Why the interval differs from (or matches) the baseline.
    pub reason: String,
}

/// Apply modification and driving-habit adjustments to baseline intervals.
///
/// Engine items take the more aggressive of the stage and forced-induction
/// factors; wear items additionally take the driving-habit factor. Each
/// factor min-clamps a running multiplier, so an item in both sets ends up
/// at the smallest applicable factor rather than a product. Results are
/// rounded to the nearest 1000 km / whole month; a rounding result of zero
/// keeps the unadjusted baseline instead.
pub fn adjust_intervals(
    items: &[ServiceItemSpec],
    mods: &ModificationProfile,
    habit: DrivingHabit,
) -> Vec<AdjustedInterval> {
    items.iter().map(|item| adjust_item(item, mods, habit)).collect()
}

fn adjust_item(
    item: &ServiceItemSpec,
    mods: &ModificationProfile,
    habit: DrivingHabit,
) -> AdjustedInterval {
    let mut km_factor = 1.0_f64;
    let mut month_factor = 1.0_f64;
    let mut reasons: Vec<String> = Vec::new();

    if component_class(&item.name) == ComponentClass::Engine {
        let stage_factor = mods.stage.interval_factor();
        let induction_factor = mods.forced_induction.interval_factor();

        // The more aggressive (lower) factor wins; they are never multiplied
        let mod_factor = stage_factor.min(induction_factor);
        if mod_factor < 1.0 {
            km_factor = km_factor.min(mod_factor);
            month_factor = month_factor.min(mod_factor);
            if stage_factor < 1.0 && stage_factor <= induction_factor {
                reasons.push(format!(
                    "Interval reduced due to Stage {} modifications.",
                    mods.stage.as_str()
                ));
            } else {
                reasons.push("Interval reduced due to forced induction.".to_string());
            }
            tracing::debug!(
                item = %item.name,
                factor = mod_factor,
                "modification factor applied"
            );
        }
    }

    if is_wear_item(&item.name) {
        let habit_factor = habit.interval_factor();
        if habit_factor < 1.0 {
            km_factor = km_factor.min(habit_factor);
            month_factor = month_factor.min(habit_factor);
            reasons.push(format!("Interval adjusted for '{}'.", habit.display_name()));
            tracing::debug!(
                item = %item.name,
                factor = habit_factor,
                "driving-habit factor applied"
            );
        }
    }

    let rounded_kms = (f64::from(item.interval_kms) * km_factor / 1000.0).round() as u32 * 1000;
    let rounded_months = (f64::from(item.interval_months) * month_factor).round() as u32;

    AdjustedInterval {
        name: item.name.clone(),
        // Rounding to zero falls back to the baseline rather than a dead interval
        interval_kms: if rounded_kms > 0 { rounded_kms } else { item.interval_kms },
        interval_months: if rounded_months > 0 {
            rounded_months
        } else {
            item.interval_months
        },
        reason: if reasons.is_empty() {
            STANDARD_INTERVAL_REASON.to_string()
        } else {
            reasons.join(" ")
        },
    }
}
