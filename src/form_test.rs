use super::*;

fn text(s: &str) -> FieldValue {
    FieldValue::text(s)
}

// =============================================================================
// initialize
// =============================================================================

#[test]
fn new_seeds_every_instrument_with_defaults() {
    let form = FormState::new();
    for instrument in Instrument::ALL {
        let name = instrument.as_str();
        assert_eq!(form.get(name, Field::Bpm).unwrap(), FieldValue::Number(120));
        assert_eq!(form.get(name, Field::Key).unwrap(), text("C"));
        assert_eq!(form.get(name, Field::Status).unwrap(), text("needs to be recorded"));
        assert_eq!(form.get(name, Field::Notes).unwrap(), text(""));
        assert_eq!(form.get(name, Field::Gear).unwrap(), text(""));
    }
}

#[test]
fn initialize_twice_keeps_edits() {
    let mut form = FormState::new();
    form.set("Piano", Field::Bpm, FieldValue::Number(88)).unwrap();
    form.set("Piano", Field::Notes, text("felt mute")).unwrap();

    form.initialize();
    form.initialize();

    assert_eq!(form.get("Piano", Field::Bpm).unwrap(), FieldValue::Number(88));
    assert_eq!(form.get("Piano", Field::Notes).unwrap(), text("felt mute"));
    assert_eq!(form.get("Drums", Field::Bpm).unwrap(), FieldValue::Number(120));
}

#[test]
fn default_equals_new() {
    assert_eq!(FormState::default(), FormState::new());
}

// =============================================================================
// get / set: lookup
// =============================================================================

#[test]
fn get_unknown_instrument_is_lookup_error() {
    let form = FormState::new();
    let err = form.get("Kazoo", Field::Bpm).unwrap_err();
    assert_eq!(err, FormError::UnknownInstrument("Kazoo".into()));
    assert!(err.is_lookup());
    assert_eq!(err.error_code(), "E_UNKNOWN_INSTRUMENT");
}

#[test]
fn set_unknown_instrument_is_lookup_error() {
    let mut form = FormState::new();
    let err = form.set("Kazoo", Field::Bpm, FieldValue::Number(100)).unwrap_err();
    assert!(err.is_lookup());
    assert_eq!(form, FormState::new());
}

#[test]
fn field_parse_accepts_known_names_only() {
    for field in Field::ALL {
        assert_eq!(Field::parse(field.as_str()).unwrap(), field);
    }
    let err = Field::parse("tempo").unwrap_err();
    assert_eq!(err, FormError::UnknownField("tempo".into()));
    assert!(err.is_lookup());
}

// =============================================================================
// set: domain enforcement
// =============================================================================

#[test]
fn bpm_above_range_rejected_and_value_kept() {
    let mut form = FormState::new();
    let err = form.set("Drums", Field::Bpm, FieldValue::Number(301)).unwrap_err();
    assert!(matches!(err, FormError::Validation { field: Field::Bpm, .. }));
    assert!(!err.is_lookup());
    assert_eq!(err.error_code(), "E_VALIDATION");
    assert_eq!(form.get("Drums", Field::Bpm).unwrap(), FieldValue::Number(120));
}

#[test]
fn bpm_boundaries_accepted() {
    let mut form = FormState::new();
    form.set("Drums", Field::Bpm, FieldValue::Number(1)).unwrap();
    assert_eq!(form.get("Drums", Field::Bpm).unwrap(), FieldValue::Number(1));
    form.set("Drums", Field::Bpm, FieldValue::Number(300)).unwrap();
    assert_eq!(form.get("Drums", Field::Bpm).unwrap(), FieldValue::Number(300));
}

#[test]
fn bpm_zero_and_negative_rejected() {
    let mut form = FormState::new();
    assert!(form.set("Drums", Field::Bpm, FieldValue::Number(0)).is_err());
    assert!(form.set("Drums", Field::Bpm, FieldValue::Number(-5)).is_err());
    assert_eq!(form.get("Drums", Field::Bpm).unwrap(), FieldValue::Number(120));
}

#[test]
fn unknown_key_rejected_and_value_kept() {
    let mut form = FormState::new();
    form.set("Vocals", Field::Key, text("Eb")).unwrap();
    let err = form.set("Vocals", Field::Key, text("E#")).unwrap_err();
    assert!(matches!(err, FormError::Validation { field: Field::Key, .. }));
    assert_eq!(form.get("Vocals", Field::Key).unwrap(), text("Eb"));
}

#[test]
fn unknown_status_rejected_and_value_kept() {
    let mut form = FormState::new();
    let err = form.set("Vocals", Field::Status, text("done")).unwrap_err();
    assert!(matches!(err, FormError::Validation { field: Field::Status, .. }));
    assert_eq!(form.get("Vocals", Field::Status).unwrap(), text("needs to be recorded"));
}

#[test]
fn type_mismatch_is_validation_error() {
    let mut form = FormState::new();
    assert!(matches!(
        form.set("Cajon", Field::Bpm, text("fast")),
        Err(FormError::Validation { field: Field::Bpm, .. })
    ));
    assert!(matches!(
        form.set("Cajon", Field::Gear, FieldValue::Number(57)),
        Err(FormError::Validation { field: Field::Gear, .. })
    ));
}

#[test]
fn free_text_fields_accept_anything() {
    let mut form = FormState::new();
    form.set("Shaker", Field::Notes, text("egg, \"loud\"\nsecond take")).unwrap();
    form.set("Shaker", Field::Gear, text("SM57")).unwrap();
    assert_eq!(form.get("Shaker", Field::Notes).unwrap(), text("egg, \"loud\"\nsecond take"));
    assert_eq!(form.get("Shaker", Field::Gear).unwrap(), text("SM57"));
}

#[test]
fn fields_are_independent() {
    let mut form = FormState::new();
    form.set("Bass Guitar", Field::Status, text("mixing completed")).unwrap();
    let record = form.record(Instrument::BassGuitar);
    assert_eq!(record.status, ProductionStatus::MixingCompleted);
    assert_eq!(record.bpm.get(), 120);
    assert_eq!(record.key, MusicalKey::C);
    assert_eq!(form.record(Instrument::AcousticGuitar), &TrackRecord::default());
}

// =============================================================================
// set_raw
// =============================================================================

#[test]
fn set_raw_parses_bpm_text() {
    let mut form = FormState::new();
    form.set_raw("Piano", Field::Bpm, " 96 ").unwrap();
    assert_eq!(form.get("Piano", Field::Bpm).unwrap(), FieldValue::Number(96));
}

#[test]
fn set_raw_rejects_non_integer_bpm() {
    let mut form = FormState::new();
    let err = form.set_raw("Piano", Field::Bpm, "96.5").unwrap_err();
    assert!(matches!(err, FormError::Validation { field: Field::Bpm, .. }));
    assert_eq!(form.get("Piano", Field::Bpm).unwrap(), FieldValue::Number(120));
}

#[test]
fn set_raw_passes_text_fields_through() {
    let mut form = FormState::new();
    form.set_raw("Piano", Field::Key, "G#").unwrap();
    form.set_raw("Piano", Field::Status, "track printed").unwrap();
    assert_eq!(form.record(Instrument::Piano).key, MusicalKey::GSharp);
    assert_eq!(form.record(Instrument::Piano).status, ProductionStatus::TrackPrinted);
}

// =============================================================================
// FieldValue serde
// =============================================================================

#[test]
fn field_value_deserializes_untagged() {
    assert_eq!(serde_json::from_str::<FieldValue>("140").unwrap(), FieldValue::Number(140));
    assert_eq!(serde_json::from_str::<FieldValue>("\"Eb\"").unwrap(), text("Eb"));
}
