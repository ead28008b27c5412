//! Vehicle record validation, service-history folding, and the persisted
//! wire shape.

use libreservice_core::prelude::*;
use pretty_assertions::assert_eq;

fn wrx() -> VehicleRecord {
    let mut record = VehicleRecord::new("Subaru", "WRX (VA)", 2016, "Manual");
    record.chassis_kms = 80_000;
    record
}

#[test]
fn test_new_record_is_valid_and_stock() {
    let record = wrx();
    record.validate().unwrap();
    assert_eq!(record.stage, "none");
    assert_eq!(record.forced_induction, "none");
    assert_eq!(record.driving_habits, "Daily Commuting");
    assert!(!record.has_swapped_engine);
    assert!(record.last_service_items.is_empty());
}

#[test]
fn test_record_ids_are_unique() {
    let a = VehicleRecord::new("Honda", "Civic (EK)", 1998, "Manual");
    let b = VehicleRecord::new("Honda", "Civic (EK)", 1998, "Manual");
    assert_ne!(a.id, b.id);
}

#[test]
fn test_rejects_blank_required_fields() {
    let mut record = wrx();
    record.make = "  ".to_string();
    assert_eq!(record.validate(), Err(ValidationError::MissingField("make")));

    let mut record = wrx();
    record.driving_habits = String::new();
    assert_eq!(
        record.validate(),
        Err(ValidationError::MissingField("drivingHabits"))
    );
}

#[test]
fn test_rejects_out_of_range_year() {
    let mut record = wrx();
    record.year = 1899;
    assert!(matches!(
        record.validate(),
        Err(ValidationError::InvalidYear { year: 1899, .. })
    ));

    record.year = 3000;
    assert!(matches!(
        record.validate(),
        Err(ValidationError::InvalidYear { year: 3000, .. })
    ));
}

#[test]
fn test_rejects_last_service_beyond_odometer() {
    let mut record = wrx();
    record.last_service_kms = Some(90_000);
    assert_eq!(
        record.validate(),
        Err(ValidationError::LastServiceExceedsOdometer {
            last_service_kms: 90_000,
            chassis_kms: 80_000,
        })
    );
}

#[test]
fn test_rejects_swap_beyond_odometer() {
    let mut record = wrx();
    record.has_swapped_engine = true;
    record.engine_swap_kms = Some(90_000);
    record.engine_kms_at_swap = Some(0);
    assert_eq!(
        record.validate(),
        Err(ValidationError::SwapExceedsOdometer {
            engine_swap_kms: 90_000,
            chassis_kms: 80_000,
        })
    );
}

#[test]
fn test_rejects_swap_flag_without_odometer_pair() {
    let mut record = wrx();
    record.has_swapped_engine = true;
    record.engine_swap_kms = Some(40_000);
    assert_eq!(record.validate(), Err(ValidationError::MissingSwapFields));

    record.engine_swap_kms = None;
    record.engine_kms_at_swap = Some(0);
    assert_eq!(record.validate(), Err(ValidationError::MissingSwapFields));
}

#[test]
fn test_build_schedule_refuses_invalid_record() {
    let mut record = wrx();
    record.has_swapped_engine = true;
    assert_eq!(
        build_schedule(&record),
        Err(ValidationError::MissingSwapFields)
    );
}

#[test]
fn test_unknown_enum_strings_fall_back_to_neutral() {
    let mut record = wrx();
    record.stage = "4".to_string();
    record.forced_induction = "twincharged".to_string();
    record.driving_habits = "Grocery Runs".to_string();

    let mods = record.modifications();
    assert_eq!(mods.stage, Stage::None);
    assert_eq!(mods.forced_induction, ForcedInduction::None);
    assert_eq!(record.habit(), DrivingHabit::DailyCommuting);

    // Equivalent to a stock record: permissive fallback, not an error
    let stock = wrx();
    let lenient = build_schedule(&record).unwrap();
    let baseline = build_schedule(&stock).unwrap();
    for (a, b) in lenient.iter().zip(&baseline) {
        assert_eq!(a.interval_kms, b.interval_kms);
        assert_eq!(a.reason, b.reason);
    }
}

#[test]
fn test_complete_service_folds_history() {
    let mut record = wrx();
    record.last_service_kms = Some(60_000);
    record.last_service_items = vec!["Brake Fluid".to_string()];

    record.complete_service(&[
        "Engine Oil & Filter".to_string(),
        "Brake Fluid".to_string(),
    ]);

    assert_eq!(record.last_service_kms, Some(80_000));
    assert_eq!(
        record.last_service_items,
        vec!["Brake Fluid".to_string(), "Engine Oil & Filter".to_string()]
    );
    assert_eq!(record.engine_kms, Some(80_000));

    // Recomputing the schedule picks the fold up: oil now freshly serviced
    let schedule = build_schedule(&record).unwrap();
    let oil = schedule
        .iter()
        .find(|item| item.name == "Engine Oil & Filter")
        .unwrap();
    assert_eq!(oil.kms_since_service, 0);
    assert!(!oil.is_due);
}

#[test]
fn test_complete_service_tracks_engine_frame() {
    let mut record = wrx();
    record.chassis_kms = 120_000;
    record.has_swapped_engine = true;
    record.engine_swap_kms = Some(100_000);
    record.engine_kms_at_swap = Some(40_000);

    record.complete_service(&["Engine Oil & Filter".to_string()]);
    assert_eq!(record.engine_kms, Some(60_000));
}

#[test]
fn test_wire_shape_is_camel_case() {
    let record = wrx();
    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "id",
        "make",
        "model",
        "year",
        "transmission",
        "chassisKms",
        "hasSwappedEngine",
        "drivingHabits",
        "stage",
        "forcedInduction",
        "lastServiceItems",
    ] {
        assert!(object.contains_key(key), "missing wire field {key}");
    }
    // Unset optionals stay off the wire
    assert!(!object.contains_key("engineSwapKms"));
    assert!(!object.contains_key("turboType"));
}

#[test]
fn test_persisted_record_round_trips() {
    let json = r#"{
        "id": "9b2f41d7-32a1-4c57-a0a8-1f2d3c4b5a69",
        "make": "Volkswagen",
        "model": "Golf R MK7.5",
        "year": 2018,
        "transmission": "DSG",
        "chassisKms": 95000,
        "hasSwappedEngine": false,
        "drivingHabits": "Spirited Weekend Drives",
        "stage": "1",
        "forcedInduction": "turbo",
        "turboType": "IS38",
        "lastServiceKms": 88000,
        "lastServiceItems": ["Engine Oil & Filter", "Brake Fluid"]
    }"#;

    let record: VehicleRecord = serde_json::from_str(json).unwrap();
    record.validate().unwrap();
    assert_eq!(record.chassis_kms, 95_000);
    assert_eq!(record.modifications().stage, Stage::One);
    assert_eq!(record.habit(), DrivingHabit::SpiritedWeekendDrives);

    let schedule = build_schedule(&record).unwrap();
    // DSG-keyed override applies through the record's transmission
    let dsg = schedule
        .iter()
        .find(|item| item.name == "Transmission Fluid (Automatic)")
        .unwrap();
    // 60000 km DSG interval halved by the turbo factor
    assert_eq!(dsg.interval_kms, 30_000);

    let back: VehicleRecord =
        serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_presets_reach_their_catalog_overrides() {
    for (make, model) in [
        ("Toyota", "86 / BRZ"),
        ("Subaru", "BRZ / 86"),
        ("Volkswagen", "Golf R MK7.5"),
        ("Holden", "Commodore SV6"),
    ] {
        let preset = find_model(make, model).unwrap();
        let items = lookup(make, preset.name, None);
        let oil = items
            .iter()
            .find(|item| item.name == "Engine Oil & Filter")
            .unwrap();
        assert_ne!(
            (oil.interval_kms, oil.interval_months),
            (10_000, 6),
            "{make} {model} should override the default oil interval"
        );
    }
}
