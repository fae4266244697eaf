//! Registration form engine tests: per-field validation, submit gating,
//! and reset semantics across the three entity schemas.

mod common;

use cocktail_maker::forms::{Draft, FieldValue, schema};
use common::*;

#[test]
fn test_new_draft_cannot_submit() {
    let draft = Draft::new(schema::spirits());
    assert!(!draft.can_submit());
}

#[test]
fn test_fully_populated_spirits_draft_can_submit() {
    let draft = valid_spirits_draft();
    assert!(draft.can_submit());
}

#[test]
fn test_optional_sub_images_not_required() {
    // valid_spirits_draft leaves subImage1..4 unset
    let draft = valid_spirits_draft();
    assert!(draft.field("subImage1").unwrap().value.as_image().is_none());
    assert!(draft.can_submit());
}

#[test]
fn test_zero_amount_blocks_submission() {
    let mut draft = valid_spirits_draft();
    draft.handle_change("amount", FieldValue::Number(0.0));

    assert!(!draft.can_submit());
    let field = draft.field("amount").unwrap();
    assert!(!field.meta.is_valid);
    assert_eq!(field.meta.errors, vec!["용량은 0보다 커야 합니다".to_string()]);
}

#[test]
fn test_alcohol_over_100_blocks_submission() {
    let mut draft = valid_spirits_draft();
    draft.handle_change("alcohol", FieldValue::Number(100.5));

    assert!(!draft.can_submit());
    let field = draft.field("alcohol").unwrap();
    assert_eq!(
        field.meta.errors,
        vec!["도수는 100%를 초과할 수 없습니다".to_string()]
    );
}

#[test]
fn test_missing_main_image_blocks_submission() {
    let mut draft = valid_spirits_draft();
    draft.handle_change("mainImage", FieldValue::Image(None));

    assert!(!draft.can_submit());
    let field = draft.field("mainImage").unwrap();
    assert_eq!(field.meta.errors, vec!["대표 이미지는 필수입니다".to_string()]);
}

#[test]
fn test_empty_checkbox_group_blocks_submission() {
    let mut draft = valid_spirits_draft();
    draft.handle_change("aroma", FieldValue::List(vec![]));

    assert!(!draft.can_submit());
    let field = draft.field("aroma").unwrap();
    assert_eq!(field.meta.errors, vec!["향은 필수 입력 사항입니다".to_string()]);
}

#[test]
fn test_change_marks_dirty_and_blur_marks_touched() {
    let mut draft = Draft::new(schema::spirits());
    assert!(!draft.field("name").unwrap().meta.is_dirty);

    draft.handle_change("name", FieldValue::Text("Gin".into()));
    let field = draft.field("name").unwrap();
    assert!(field.meta.is_dirty);
    assert!(!field.meta.is_touched);

    draft.handle_blur("name");
    assert!(draft.field("name").unwrap().meta.is_touched);
}

#[test]
fn test_fixing_a_field_clears_its_errors() {
    let mut draft = Draft::new(schema::spirits());
    draft.handle_change("name", FieldValue::Text(String::new()));
    assert!(!draft.field("name").unwrap().meta.errors.is_empty());

    draft.handle_change("name", FieldValue::Text("Gin".into()));
    let field = draft.field("name").unwrap();
    assert!(field.meta.is_valid);
    assert!(field.meta.errors.is_empty());
}

#[test]
fn test_reject_records_error_without_changing_value() {
    let mut draft = Draft::new(schema::spirits());
    draft.reject("subImage1", "파일 크기가 2MB를 초과합니다.");

    let field = draft.field("subImage1").unwrap();
    assert!(field.value.as_image().is_none());
    assert!(!field.meta.is_valid);
    assert_eq!(field.meta.errors, vec!["파일 크기가 2MB를 초과합니다.".to_string()]);
}

#[test]
fn test_unparseable_number_keeps_raw_text_for_redisplay() {
    let mut draft = Draft::new(schema::spirits());

    draft.handle_number_input("amount", "많이");
    let field = draft.field("amount").unwrap();
    assert_eq!(field.value.as_number(), Some(0.0));
    assert_eq!(field.raw_input.as_deref(), Some("많이"));
    assert_eq!(field.meta.errors, vec!["용량은 0보다 커야 합니다".to_string()]);

    // A parseable correction clears the retained text
    draft.handle_number_input("amount", " 750 ");
    let field = draft.field("amount").unwrap();
    assert_eq!(field.value.as_number(), Some(750.0));
    assert!(field.raw_input.is_none());
    assert!(field.meta.is_valid);
}

#[test]
fn test_reset_restores_declared_defaults() {
    let mut draft = valid_spirits_draft();
    draft.reset();

    assert_eq!(draft.field("name").unwrap().value.as_text(), Some(""));
    assert_eq!(draft.field("amount").unwrap().value.as_number(), Some(0.0));
    assert_eq!(
        draft.field("aroma").unwrap().value.as_list(),
        Some(&[][..])
    );
    assert!(draft.field("mainImage").unwrap().value.as_image().is_none());
    assert!(!draft.can_submit());
}

#[test]
fn test_reset_is_idempotent() {
    let mut draft = valid_spirits_draft();

    draft.reset();
    let once: Vec<String> = draft
        .entries()
        .map(|(_, f)| format!("{:?} {:?}", f.value, f.meta))
        .collect();

    draft.reset();
    let twice: Vec<String> = draft
        .entries()
        .map(|(_, f)| format!("{:?} {:?}", f.value, f.meta))
        .collect();

    assert_eq!(once, twice);
}

#[test]
fn test_liqueur_volume_capped_at_1000() {
    let mut draft = Draft::new(schema::liqueur());
    draft.handle_change("volume", FieldValue::Number(1000.5));

    let field = draft.field("volume").unwrap();
    assert_eq!(
        field.meta.errors,
        vec!["용량은 1000mL를 초과할 수 없습니다".to_string()]
    );

    draft.handle_change("volume", FieldValue::Number(1000.0));
    assert!(draft.field("volume").unwrap().meta.is_valid);
}

#[test]
fn test_liqueur_name_length_limit_counts_characters() {
    let mut draft = Draft::new(schema::liqueur());
    // 101 Hangul characters: over the limit even though each is 3 bytes
    draft.handle_change("name", FieldValue::Text("가".repeat(101)));
    assert_eq!(
        draft.field("name").unwrap().meta.errors,
        vec!["이름은 100자를 초과할 수 없습니다".to_string()]
    );

    draft.handle_change("name", FieldValue::Text("가".repeat(100)));
    assert!(draft.field("name").unwrap().meta.is_valid);
}

#[test]
fn test_ingredient_brand_is_optional_but_capped_at_10() {
    let mut draft = Draft::new(schema::ingredient());
    assert!(draft.field("brand").unwrap().meta.is_valid);

    let brands: Vec<String> = (0..11).map(|i| format!("brand{i}")).collect();
    draft.handle_change("brand", FieldValue::List(brands));
    assert_eq!(
        draft.field("brand").unwrap().meta.errors,
        vec!["브랜드는 최대 10개까지 입력할 수 있습니다".to_string()]
    );
}

#[test]
fn test_ingredient_draft_can_submit_without_brand() {
    let mut draft = Draft::new(schema::ingredient());
    draft.handle_change("name", FieldValue::Text("라임즙".into()));
    draft.handle_change("kind", FieldValue::Text("주스".into()));
    draft.handle_change("description", FieldValue::Text("신선한 라임을 짠 즙".into()));
    draft.handle_change("mainImage", FieldValue::Image(Some(test_image("lime.png"))));

    assert!(draft.can_submit());
}
