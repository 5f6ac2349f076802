use workout_schedule::{Day, EntryDraft, validate_draft};

#[test]
fn draft_becomes_entry_with_the_assigned_id() {
    let draft = EntryDraft::new("Morning Run", "30 minutes", Day::Senin, "cardio")
        .with_description("Easy pace");
    let entry = draft.clone().into_entry("wk-1");

    assert_eq!(entry.id, "wk-1");
    assert_eq!(entry.name, draft.name);
    assert_eq!(entry.description.as_deref(), Some("Easy pace"));
    assert_eq!(entry.duration, draft.duration);
    assert_eq!(entry.day, Day::Senin);
    assert_eq!(entry.category, draft.category);
}

#[test]
fn draft_validation_enforces_the_form_rules() {
    let good = EntryDraft::new("Morning Run", "30 minutes", Day::Senin, "cardio");
    assert!(validate_draft(&good).is_ok());

    let short_name = EntryDraft::new("X", "30 minutes", Day::Senin, "cardio");
    let err = validate_draft(&short_name).unwrap_err();
    assert!(err.to_string().contains("at least 2 characters"));

    let padded_name = EntryDraft::new("  X  ", "30 minutes", Day::Senin, "cardio");
    assert!(validate_draft(&padded_name).is_err());

    let blank_duration = EntryDraft::new("Morning Run", "   ", Day::Senin, "cardio");
    let err = validate_draft(&blank_duration).unwrap_err();
    assert!(err.to_string().contains("duration is required"));

    let blank_category = EntryDraft::new("Morning Run", "30 minutes", Day::Senin, " ");
    let err = validate_draft(&blank_category).unwrap_err();
    assert!(err.to_string().contains("category is required"));
}

#[test]
fn name_length_counts_characters_not_bytes() {
    let single_char = EntryDraft::new("跑", "30 minutes", Day::Senin, "cardio");
    assert!(validate_draft(&single_char).is_err());

    let two_chars = EntryDraft::new("跑步", "30 minutes", Day::Senin, "cardio");
    assert!(validate_draft(&two_chars).is_ok());
}
