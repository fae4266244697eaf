//! Shared fixtures for the registration form engine tests.

use cocktail_maker::forms::image::UploadedImage;
use cocktail_maker::forms::{Draft, FieldValue, schema};

/// Small in-memory PNG stand-in, well under the size limit.
pub fn test_image(name: &str) -> UploadedImage {
    UploadedImage::from_bytes(name, "image/png", vec![0u8; 1024])
}

/// Spirits draft with every required field populated and valid.
pub fn valid_spirits_draft() -> Draft {
    let mut draft = Draft::new(schema::spirits());
    draft.handle_change("name", FieldValue::Text("Mojito".into()));
    draft.handle_change("kind", FieldValue::Text("Rum".into()));
    draft.handle_change("subKind", FieldValue::Text("White Rum".into()));
    draft.handle_change("amount", FieldValue::Number(750.0));
    draft.handle_change("alcohol", FieldValue::Number(40.0));
    draft.handle_change("originNation", FieldValue::Text("Cuba".into()));
    draft.handle_change("originLocation", FieldValue::Text("Havana".into()));
    draft.handle_change("aroma", FieldValue::List(vec!["1".into()]));
    draft.handle_change("taste", FieldValue::List(vec!["2".into()]));
    draft.handle_change("finish", FieldValue::List(vec!["3".into()]));
    draft.handle_change("description", FieldValue::Text("민트와 라임의 상쾌한 조합".into()));
    draft.handle_change("mainImage", FieldValue::Image(Some(test_image("main.png"))));
    draft
}
