//! Field schemas for the three registration kinds. Messages are the
//! user-facing Korean strings of the catalog UI.

use crate::api::metadata::MetadataCategory;
use super::validate::{
    max_list_len, non_empty_list, positive_number, required_image, required_text,
};
use super::{FieldKind, FieldSchema, FieldValue, Widget, WireFormat};

pub fn spirits() -> &'static [FieldSchema] {
    SPIRITS
}

pub fn liqueur() -> &'static [FieldSchema] {
    LIQUEUR
}

pub fn ingredient() -> &'static [FieldSchema] {
    INGREDIENT
}

fn accept_any(_: &FieldValue) -> Option<String> {
    None
}

// ---------------------------------------------------------------------------
// Spirits
// ---------------------------------------------------------------------------

fn spirits_name(v: &FieldValue) -> Option<String> {
    required_text(v.as_text().unwrap_or(""), "이름은 필수 입력 사항입니다", None)
}

fn spirits_kind(v: &FieldValue) -> Option<String> {
    required_text(v.as_text().unwrap_or(""), "종류는 필수 입력 사항입니다", None)
}

fn spirits_sub_kind(v: &FieldValue) -> Option<String> {
    required_text(v.as_text().unwrap_or(""), "세부 종류는 필수 입력 사항입니다", None)
}

fn spirits_amount(v: &FieldValue) -> Option<String> {
    positive_number(v.as_number().unwrap_or(0.0), "용량은 0보다 커야 합니다", None)
}

fn alcohol_percent(v: &FieldValue) -> Option<String> {
    positive_number(
        v.as_number().unwrap_or(0.0),
        "도수는 0보다 커야 합니다",
        Some((100.0, "도수는 100%를 초과할 수 없습니다")),
    )
}

fn spirits_origin_nation(v: &FieldValue) -> Option<String> {
    required_text(v.as_text().unwrap_or(""), "원산지 국가는 필수 입력 사항입니다", None)
}

fn spirits_origin_location(v: &FieldValue) -> Option<String> {
    required_text(v.as_text().unwrap_or(""), "원산지 지역은 필수 입력 사항입니다", None)
}

fn aroma_selected(v: &FieldValue) -> Option<String> {
    non_empty_list(v.as_list().unwrap_or(&[]), "향은 필수 입력 사항입니다")
}

fn taste_selected(v: &FieldValue) -> Option<String> {
    non_empty_list(v.as_list().unwrap_or(&[]), "맛은 필수 입력 사항입니다")
}

fn finish_selected(v: &FieldValue) -> Option<String> {
    non_empty_list(v.as_list().unwrap_or(&[]), "끝맛은 필수 입력 사항입니다")
}

fn spirits_description(v: &FieldValue) -> Option<String> {
    required_text(v.as_text().unwrap_or(""), "설명은 필수 입력 사항입니다", None)
}

fn main_image(v: &FieldValue) -> Option<String> {
    required_image(v.as_image().is_some(), "대표 이미지는 필수입니다")
}

static SPIRITS: &[FieldSchema] = &[
    FieldSchema {
        name: "name",
        label: "이름",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: spirits_name,
    },
    FieldSchema {
        name: "kind",
        label: "종류",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: spirits_kind,
    },
    FieldSchema {
        name: "subKind",
        label: "세부 종류",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: spirits_sub_kind,
    },
    FieldSchema {
        name: "amount",
        label: "용량 (mL)",
        kind: FieldKind::Number,
        widget: Widget::Number,
        wire: WireFormat::Scalar,
        options: None,
        validator: spirits_amount,
    },
    FieldSchema {
        name: "alcohol",
        label: "알코올 도수 (%)",
        kind: FieldKind::Number,
        widget: Widget::Number,
        wire: WireFormat::Scalar,
        options: None,
        validator: alcohol_percent,
    },
    FieldSchema {
        name: "originNation",
        label: "원산지 국가",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: spirits_origin_nation,
    },
    FieldSchema {
        name: "originLocation",
        label: "원산지 지역",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: spirits_origin_location,
    },
    FieldSchema {
        name: "aroma",
        label: "향 (Aroma)",
        kind: FieldKind::List,
        widget: Widget::Checkboxes,
        wire: WireFormat::JsonList,
        options: Some(MetadataCategory::Aroma),
        validator: aroma_selected,
    },
    FieldSchema {
        name: "taste",
        label: "맛 (Taste)",
        kind: FieldKind::List,
        widget: Widget::Checkboxes,
        wire: WireFormat::JsonList,
        options: Some(MetadataCategory::Taste),
        validator: taste_selected,
    },
    FieldSchema {
        name: "finish",
        label: "끝맛 (Finish)",
        kind: FieldKind::List,
        widget: Widget::Checkboxes,
        wire: WireFormat::JsonList,
        options: Some(MetadataCategory::Finish),
        validator: finish_selected,
    },
    FieldSchema {
        name: "description",
        label: "설명",
        kind: FieldKind::Text,
        widget: Widget::TextArea,
        wire: WireFormat::Scalar,
        options: None,
        validator: spirits_description,
    },
    FieldSchema {
        name: "mainImage",
        label: "대표 이미지",
        kind: FieldKind::Image,
        widget: Widget::Image,
        wire: WireFormat::ImagePart,
        options: None,
        validator: main_image,
    },
    FieldSchema {
        name: "subImage1",
        label: "보조 이미지 1",
        kind: FieldKind::Image,
        widget: Widget::Image,
        wire: WireFormat::ImagePart,
        options: None,
        validator: accept_any,
    },
    FieldSchema {
        name: "subImage2",
        label: "보조 이미지 2",
        kind: FieldKind::Image,
        widget: Widget::Image,
        wire: WireFormat::ImagePart,
        options: None,
        validator: accept_any,
    },
    FieldSchema {
        name: "subImage3",
        label: "보조 이미지 3",
        kind: FieldKind::Image,
        widget: Widget::Image,
        wire: WireFormat::ImagePart,
        options: None,
        validator: accept_any,
    },
    FieldSchema {
        name: "subImage4",
        label: "보조 이미지 4",
        kind: FieldKind::Image,
        widget: Widget::Image,
        wire: WireFormat::ImagePart,
        options: None,
        validator: accept_any,
    },
];

// ---------------------------------------------------------------------------
// Liqueur
// ---------------------------------------------------------------------------

fn liqueur_name(v: &FieldValue) -> Option<String> {
    required_text(
        v.as_text().unwrap_or(""),
        "이름은 필수 입력 사항입니다",
        Some((100, "이름은 100자를 초과할 수 없습니다")),
    )
}

fn liqueur_brand(v: &FieldValue) -> Option<String> {
    required_text(
        v.as_text().unwrap_or(""),
        "브랜드는 필수 입력 사항입니다",
        Some((100, "브랜드는 100자를 초과할 수 없습니다")),
    )
}

fn liqueur_kind(v: &FieldValue) -> Option<String> {
    required_text(
        v.as_text().unwrap_or(""),
        "종류는 필수 입력 사항입니다",
        Some((50, "종류는 50자를 초과할 수 없습니다")),
    )
}

fn liqueur_sub_kind(v: &FieldValue) -> Option<String> {
    required_text(
        v.as_text().unwrap_or(""),
        "세부 종류는 필수 입력 사항입니다",
        Some((50, "세부 종류는 50자를 초과할 수 없습니다")),
    )
}

fn liqueur_main_ingredients(v: &FieldValue) -> Option<String> {
    non_empty_list(v.as_list().unwrap_or(&[]), "주재료는 필수 입력 사항입니다")
}

fn liqueur_volume(v: &FieldValue) -> Option<String> {
    positive_number(
        v.as_number().unwrap_or(0.0),
        "용량은 0보다 커야 합니다",
        Some((1000.0, "용량은 1000mL를 초과할 수 없습니다")),
    )
}

fn liqueur_origin_nation(v: &FieldValue) -> Option<String> {
    required_text(
        v.as_text().unwrap_or(""),
        "원산지 국가는 필수 입력 사항입니다",
        Some((50, "원산지 국가는 50자를 초과할 수 없습니다")),
    )
}

fn long_description(v: &FieldValue) -> Option<String> {
    required_text(
        v.as_text().unwrap_or(""),
        "설명은 필수 입력 사항입니다",
        Some((1000, "설명은 1000자를 초과할 수 없습니다")),
    )
}

static LIQUEUR: &[FieldSchema] = &[
    FieldSchema {
        name: "name",
        label: "이름",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: liqueur_name,
    },
    FieldSchema {
        name: "brand",
        label: "브랜드",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: liqueur_brand,
    },
    FieldSchema {
        name: "kind",
        label: "종류",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: liqueur_kind,
    },
    FieldSchema {
        name: "subKind",
        label: "세부 종류",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: liqueur_sub_kind,
    },
    FieldSchema {
        name: "volume",
        label: "용량 (mL)",
        kind: FieldKind::Number,
        widget: Widget::Number,
        wire: WireFormat::Scalar,
        options: None,
        validator: liqueur_volume,
    },
    FieldSchema {
        name: "abv",
        label: "알코올 도수 (%)",
        kind: FieldKind::Number,
        widget: Widget::Number,
        wire: WireFormat::Scalar,
        options: None,
        validator: alcohol_percent,
    },
    FieldSchema {
        name: "originNation",
        label: "원산지 국가",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: liqueur_origin_nation,
    },
    FieldSchema {
        name: "taste",
        label: "맛 (Taste)",
        kind: FieldKind::List,
        widget: Widget::Checkboxes,
        wire: WireFormat::JsonList,
        options: Some(MetadataCategory::Taste),
        validator: taste_selected,
    },
    FieldSchema {
        name: "mainIngredients",
        label: "주재료",
        kind: FieldKind::List,
        widget: Widget::Csv,
        wire: WireFormat::JsonList,
        options: None,
        validator: liqueur_main_ingredients,
    },
    FieldSchema {
        name: "description",
        label: "설명",
        kind: FieldKind::Text,
        widget: Widget::TextArea,
        wire: WireFormat::Scalar,
        options: None,
        validator: long_description,
    },
    FieldSchema {
        name: "mainImage",
        label: "대표 이미지",
        kind: FieldKind::Image,
        widget: Widget::Image,
        wire: WireFormat::ImagePart,
        options: None,
        validator: main_image,
    },
];

// ---------------------------------------------------------------------------
// Ingredient
// ---------------------------------------------------------------------------

fn ingredient_name(v: &FieldValue) -> Option<String> {
    required_text(
        v.as_text().unwrap_or(""),
        "이름은 필수 입력 사항입니다",
        Some((100, "이름은 100자를 초과할 수 없습니다")),
    )
}

fn ingredient_brands(v: &FieldValue) -> Option<String> {
    max_list_len(
        v.as_list().unwrap_or(&[]),
        10,
        "브랜드는 최대 10개까지 입력할 수 있습니다",
    )
}

fn ingredient_kind(v: &FieldValue) -> Option<String> {
    required_text(
        v.as_text().unwrap_or(""),
        "종류는 필수 입력 사항입니다",
        Some((50, "종류는 50자를 초과할 수 없습니다")),
    )
}

static INGREDIENT: &[FieldSchema] = &[
    FieldSchema {
        name: "name",
        label: "이름",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: ingredient_name,
    },
    FieldSchema {
        name: "brand",
        label: "브랜드 (선택사항)",
        kind: FieldKind::List,
        widget: Widget::Csv,
        wire: WireFormat::JsonListIfNonEmpty,
        options: None,
        validator: ingredient_brands,
    },
    FieldSchema {
        name: "kind",
        label: "종류",
        kind: FieldKind::Text,
        widget: Widget::Text,
        wire: WireFormat::Scalar,
        options: None,
        validator: ingredient_kind,
    },
    // Declared on the draft for parity with the backend model, but the
    // form neither renders nor submits it.
    FieldSchema {
        name: "originNation",
        label: "원산지 국가",
        kind: FieldKind::Text,
        widget: Widget::Hidden,
        wire: WireFormat::Omitted,
        options: None,
        validator: accept_any,
    },
    FieldSchema {
        name: "description",
        label: "설명",
        kind: FieldKind::Text,
        widget: Widget::TextArea,
        wire: WireFormat::Scalar,
        options: None,
        validator: long_description,
    },
    FieldSchema {
        name: "mainImage",
        label: "대표 이미지",
        kind: FieldKind::Image,
        widget: Widget::Image,
        wire: WireFormat::ImagePart,
        options: None,
        validator: main_image,
    },
];
