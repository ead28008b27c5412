//! Vehicle Presets
//!
//! Static catalog of the makes, models, model-year ranges, and factory
//! engines the form offers, plus the common engine-swap options. Pure
//! reference data for the collaborating UI; the engine itself accepts any
//! make/model string.

use std::ops::RangeInclusive;

/// All models offered for one make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakePresets {
    /// Manufacturer name.
    pub make: &'static str,
    /// Models offered for this make.
    pub models: &'static [ModelPreset],
}

/// One selectable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelPreset {
    /// Model designation as shown in the form and used as the catalog key.
    pub name: &'static str,
    /// First model year offered.
    pub first_year: u16,
    /// Last model year offered.
    pub last_year: u16,
    /// Factory engine designation.
    pub engine: &'static str,
}

impl ModelPreset {
    /// The offered model years, earliest first.
    pub fn years(&self) -> RangeInclusive<u16> {
        self.first_year..=self.last_year
    }
}

/// A commonly fitted replacement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSwapOption {
    /// Display name, e.g. "GM LS3 V8".
    pub name: &'static str,
    /// Stored identifier, e.g. "LS3".
    pub value: &'static str,
}

/// Supported vehicles, grouped by make.
pub const VEHICLE_PRESETS: &[MakePresets] = &[
    MakePresets {
        make: "Honda",
        models: &[
            ModelPreset {
                name: "Accord (Euro)",
                first_year: 2003,
                last_year: 2008,
                engine: "K24A3",
            },
            ModelPreset {
                name: "Civic (EK)",
                first_year: 1996,
                last_year: 2000,
                engine: "D-series / B-series",
            },
            ModelPreset {
                name: "Civic (EP)",
                first_year: 2001,
                last_year: 2005,
                engine: "D-series / K-series",
            },
            ModelPreset {
                name: "Civic (FN/FD)",
                first_year: 2006,
                last_year: 2011,
                engine: "R18 / K20",
            },
            ModelPreset {
                name: "Civic (FB/FG)",
                first_year: 2012,
                last_year: 2015,
                engine: "R18 / K24",
            },
            ModelPreset {
                name: "Civic (FK/FC)",
                first_year: 2016,
                last_year: 2021,
                engine: "L15 / K20C",
            },
        ],
    },
    MakePresets {
        make: "Volkswagen",
        models: &[ModelPreset {
            name: "Golf R MK7.5",
            first_year: 2017,
            last_year: 2020,
            engine: "EA888 Gen 3",
        }],
    },
    MakePresets {
        make: "Toyota",
        models: &[ModelPreset {
            name: "86 / BRZ",
            first_year: 2012,
            last_year: 2021,
            engine: "FA20",
        }],
    },
    MakePresets {
        make: "Subaru",
        models: &[
            ModelPreset {
                name: "BRZ / 86",
                first_year: 2012,
                last_year: 2021,
                engine: "FA20",
            },
            ModelPreset {
                name: "Impreza WRX (GC8)",
                first_year: 1992,
                last_year: 2000,
                engine: "EJ20",
            },
            ModelPreset {
                name: "Impreza WRX (GDA/GGA)",
                first_year: 2000,
                last_year: 2007,
                engine: "EJ20 / EJ25",
            },
            ModelPreset {
                name: "Impreza WRX (GE/GH/GR/GV)",
                first_year: 2007,
                last_year: 2014,
                engine: "EJ25",
            },
            ModelPreset {
                name: "WRX (VA)",
                first_year: 2014,
                last_year: 2021,
                engine: "FA20DIT",
            },
        ],
    },
    MakePresets {
        make: "Holden",
        models: &[ModelPreset {
            name: "Commodore SV6",
            first_year: 2005,
            last_year: 2012,
            engine: "Alloytec/SIDI V6",
        }],
    },
];

/// Common engine swaps offered by the form.
pub const COMMON_ENGINE_SWAPS: &[EngineSwapOption] = &[
    EngineSwapOption { name: "Subaru FA24", value: "FA24" },
    EngineSwapOption { name: "GM LS1 V8", value: "LS1" },
    EngineSwapOption { name: "GM LS2 V8", value: "LS2" },
    EngineSwapOption { name: "GM LS3 V8", value: "LS3" },
    EngineSwapOption { name: "Honda K20", value: "K20" },
    EngineSwapOption { name: "Honda K24", value: "K24" },
    EngineSwapOption { name: "Toyota 2JZ", value: "2JZ" },
    EngineSwapOption { name: "Nissan RB26", value: "RB26" },
    EngineSwapOption { name: "Ford Barra", value: "Barra" },
    EngineSwapOption { name: "Other / Custom", value: "custom" },
];

/// Find a model preset by exact make and model name.
pub fn find_model(make: &str, model: &str) -> Option<&'static ModelPreset> {
    VEHICLE_PRESETS
        .iter()
        .find(|preset| preset.make == make)?
        .models
        .iter()
        .find(|preset| preset.name == model)
}
