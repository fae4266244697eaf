//! Registration pages: GET renders the schema-driven form with its
//! option catalogs, POST decodes the multipart body into a draft, runs
//! the validators, and forwards accepted drafts to the backend.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::metadata::{MetadataCategory, OptionsState};
use crate::api::submit::{MSG_NETWORK_ERROR, SubmissionResult};
use crate::api::{ApiClient, EntityKind};
use crate::auth::session::set_flash;
use crate::errors::{AppError, render};
use crate::forms::image::{ACCEPTED_IMAGE_TYPES, ImageConstraints, UploadedImage};
use crate::forms::{Draft, FieldValue, Widget, csvlist, schema};
use crate::health::HealthState;
use crate::templates_structs::{CheckboxOption, FieldView, PageContext, RegisterTemplate};

struct RegisterPage {
    kind: EntityKind,
    title: &'static str,
    path: &'static str,
}

const SPIRITS_PAGE: RegisterPage = RegisterPage {
    kind: EntityKind::Spirits,
    title: "주류 등록",
    path: "/register/spirits",
};

const LIQUEUR_PAGE: RegisterPage = RegisterPage {
    kind: EntityKind::Liqueur,
    title: "리큐르 등록",
    path: "/register/liqueur",
};

const INGREDIENT_PAGE: RegisterPage = RegisterPage {
    kind: EntityKind::Ingredient,
    title: "기타 재료 등록",
    path: "/register/ingredient",
};

fn success_message(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Spirits => "주류가 성공적으로 등록되었습니다!",
        EntityKind::Liqueur => "리큐르가 성공적으로 등록되었습니다!",
        EntityKind::Ingredient => "재료가 성공적으로 등록되었습니다!",
    }
}

// ---------------------------------------------------------------------------
// Option catalogs
// ---------------------------------------------------------------------------

#[derive(Default)]
struct OptionCatalogs {
    aroma: OptionsState,
    taste: OptionsState,
    finish: OptionsState,
}

impl OptionCatalogs {
    fn get(&self, category: MetadataCategory) -> &OptionsState {
        match category {
            MetadataCategory::Aroma => &self.aroma,
            MetadataCategory::Taste => &self.taste,
            MetadataCategory::Finish => &self.finish,
        }
    }
}

/// Load the catalogs a form needs. The per-category requests are
/// independent and fire concurrently; each failure only empties its own
/// checkbox group.
async fn load_catalogs(api: &ApiClient, kind: EntityKind) -> OptionCatalogs {
    match kind {
        EntityKind::Spirits => {
            let (aroma, taste, finish) = tokio::join!(
                api.load_metadata(kind, MetadataCategory::Aroma),
                api.load_metadata(kind, MetadataCategory::Taste),
                api.load_metadata(kind, MetadataCategory::Finish),
            );
            OptionCatalogs { aroma, taste, finish }
        }
        EntityKind::Liqueur => OptionCatalogs {
            taste: api.load_metadata(kind, MetadataCategory::Taste).await,
            ..OptionCatalogs::default()
        },
        EntityKind::Ingredient => OptionCatalogs::default(),
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn build_views(draft: &Draft, catalogs: &OptionCatalogs) -> Vec<FieldView> {
    draft
        .entries()
        .filter_map(|(field_schema, field)| {
            let widget = match field_schema.widget {
                Widget::Text => "text",
                Widget::Number => "number",
                Widget::TextArea => "textarea",
                Widget::Csv => "csv",
                Widget::Checkboxes => "checkboxes",
                Widget::Image => "image",
                Widget::Hidden => return None,
            };
            let value = match (&field.value, field_schema.widget) {
                (FieldValue::Text(s), _) => s.clone(),
                (FieldValue::Number(n), _) => field
                    .raw_input
                    .clone()
                    .unwrap_or_else(|| n.to_string()),
                (FieldValue::List(v), Widget::Csv) => csvlist::format(v),
                _ => String::new(),
            };
            let (options, options_error) = match field_schema.options {
                Some(category) => {
                    let state = catalogs.get(category);
                    let selected = field.value.as_list().unwrap_or(&[]);
                    let options = state
                        .options
                        .iter()
                        .map(|o| CheckboxOption {
                            id: o.id.to_string(),
                            label: o.name.clone(),
                            checked: selected.contains(&o.id.to_string()),
                        })
                        .collect();
                    (options, state.error.clone())
                }
                None => (Vec::new(), None),
            };
            // A field is required when its declared default is invalid.
            let required =
                (field_schema.validator)(&field_schema.kind.default_value()).is_some();
            let accept = match field_schema.widget {
                Widget::Image => ACCEPTED_IMAGE_TYPES,
                _ => "",
            };
            Some(FieldView {
                name: field_schema.name,
                label: field_schema.label,
                widget,
                required,
                value,
                accept,
                errors: field.meta.errors.clone(),
                options,
                options_error,
            })
        })
        .collect()
}

async fn show_form(
    req: &HttpRequest,
    session: &Session,
    api: &ApiClient,
    health: &HealthState,
    page: &RegisterPage,
    draft: &Draft,
    form_error: Option<String>,
) -> Result<HttpResponse, AppError> {
    let catalogs = load_catalogs(api, page.kind).await;
    let ctx = PageContext::build(req, session, health, page.path);
    render(RegisterTemplate {
        ctx,
        title: page.title,
        action: page.path,
        fields: build_views(draft, &catalogs),
        form_error,
    })
}

// ---------------------------------------------------------------------------
// Multipart decoding
// ---------------------------------------------------------------------------

fn checkbox_values(items: Vec<Text<String>>) -> FieldValue {
    FieldValue::List(items.into_iter().map(|t| t.0).collect())
}

fn csv_values(text: &Text<String>) -> FieldValue {
    FieldValue::List(csvlist::parse(&text.0))
}

/// Route one uploaded file through the image constraints. A rejected
/// file never reaches the draft's value; its message is recorded on the
/// field instead. Browsers submit an empty part for untouched file
/// inputs, which counts as no selection.
fn set_image(draft: &mut Draft, name: &'static str, upload: Option<TempFile>) {
    let Some(file) = upload else {
        draft.handle_change(name, FieldValue::Image(None));
        return;
    };
    let file_name = file.file_name.clone().unwrap_or_default();
    if file.size == 0 && file_name.is_empty() {
        draft.handle_change(name, FieldValue::Image(None));
        return;
    }
    let mime = file
        .content_type
        .as_ref()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_default();
    let image = UploadedImage::from_temp_file(file_name, mime, file.size as u64, file.file);
    match ImageConstraints::default().validate(&image) {
        Some(message) => {
            draft.handle_change(name, FieldValue::Image(None));
            draft.reject(name, message);
        }
        None => draft.handle_change(name, FieldValue::Image(Some(image))),
    }
}

// ---------------------------------------------------------------------------
// Shared submit flow
// ---------------------------------------------------------------------------

async fn finish_submission(
    req: &HttpRequest,
    session: &Session,
    api: &ApiClient,
    health: &HealthState,
    page: &RegisterPage,
    mut draft: Draft,
) -> Result<HttpResponse, AppError> {
    // Blocked drafts never cause a backend request.
    if !draft.can_submit() {
        return show_form(req, session, api, health, page, &draft, None).await;
    }

    match api.submit_registration(page.kind, &draft).await {
        SubmissionResult::Success(body) => {
            log::info!("{} registered: {body}", page.kind.as_str());
            set_flash(session, success_message(page.kind));
            draft.reset();
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", page.path))
                .finish())
        }
        SubmissionResult::Failure(message) => {
            // Field values are retained so the user can correct and
            // resubmit.
            let display = if message == MSG_NETWORK_ERROR {
                message
            } else {
                format!("등록 실패: {message}")
            };
            show_form(req, session, api, health, page, &draft, Some(display)).await
        }
    }
}

// ---------------------------------------------------------------------------
// Spirits
// ---------------------------------------------------------------------------

#[derive(MultipartForm)]
pub struct SpiritsForm {
    pub name: Text<String>,
    pub kind: Text<String>,
    #[multipart(rename = "subKind")]
    pub sub_kind: Text<String>,
    pub amount: Text<String>,
    pub alcohol: Text<String>,
    #[multipart(rename = "originNation")]
    pub origin_nation: Text<String>,
    #[multipart(rename = "originLocation")]
    pub origin_location: Text<String>,
    pub description: Text<String>,
    pub aroma: Vec<Text<String>>,
    pub taste: Vec<Text<String>>,
    pub finish: Vec<Text<String>>,
    #[multipart(rename = "mainImage")]
    pub main_image: Option<TempFile>,
    #[multipart(rename = "subImage1")]
    pub sub_image1: Option<TempFile>,
    #[multipart(rename = "subImage2")]
    pub sub_image2: Option<TempFile>,
    #[multipart(rename = "subImage3")]
    pub sub_image3: Option<TempFile>,
    #[multipart(rename = "subImage4")]
    pub sub_image4: Option<TempFile>,
}

pub async fn spirits_form(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    health: web::Data<HealthState>,
) -> Result<HttpResponse, AppError> {
    let draft = Draft::new(schema::spirits());
    show_form(&req, &session, &api, &health, &SPIRITS_PAGE, &draft, None).await
}

pub async fn spirits_submit(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    health: web::Data<HealthState>,
    MultipartForm(form): MultipartForm<SpiritsForm>,
) -> Result<HttpResponse, AppError> {
    let mut draft = Draft::new(schema::spirits());
    draft.handle_change("name", FieldValue::Text(form.name.0));
    draft.handle_change("kind", FieldValue::Text(form.kind.0));
    draft.handle_change("subKind", FieldValue::Text(form.sub_kind.0));
    draft.handle_number_input("amount", &form.amount.0);
    draft.handle_number_input("alcohol", &form.alcohol.0);
    draft.handle_change("originNation", FieldValue::Text(form.origin_nation.0));
    draft.handle_change("originLocation", FieldValue::Text(form.origin_location.0));
    draft.handle_change("aroma", checkbox_values(form.aroma));
    draft.handle_change("taste", checkbox_values(form.taste));
    draft.handle_change("finish", checkbox_values(form.finish));
    draft.handle_change("description", FieldValue::Text(form.description.0));
    set_image(&mut draft, "mainImage", form.main_image);
    set_image(&mut draft, "subImage1", form.sub_image1);
    set_image(&mut draft, "subImage2", form.sub_image2);
    set_image(&mut draft, "subImage3", form.sub_image3);
    set_image(&mut draft, "subImage4", form.sub_image4);

    finish_submission(&req, &session, &api, &health, &SPIRITS_PAGE, draft).await
}

// ---------------------------------------------------------------------------
// Liqueur
// ---------------------------------------------------------------------------

#[derive(MultipartForm)]
pub struct LiqueurForm {
    pub name: Text<String>,
    pub brand: Text<String>,
    pub kind: Text<String>,
    #[multipart(rename = "subKind")]
    pub sub_kind: Text<String>,
    pub volume: Text<String>,
    pub abv: Text<String>,
    #[multipart(rename = "originNation")]
    pub origin_nation: Text<String>,
    pub taste: Vec<Text<String>>,
    #[multipart(rename = "mainIngredients")]
    pub main_ingredients: Text<String>,
    pub description: Text<String>,
    #[multipart(rename = "mainImage")]
    pub main_image: Option<TempFile>,
}

pub async fn liqueur_form(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    health: web::Data<HealthState>,
) -> Result<HttpResponse, AppError> {
    let draft = Draft::new(schema::liqueur());
    show_form(&req, &session, &api, &health, &LIQUEUR_PAGE, &draft, None).await
}

pub async fn liqueur_submit(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    health: web::Data<HealthState>,
    MultipartForm(form): MultipartForm<LiqueurForm>,
) -> Result<HttpResponse, AppError> {
    let mut draft = Draft::new(schema::liqueur());
    draft.handle_change("name", FieldValue::Text(form.name.0));
    draft.handle_change("brand", FieldValue::Text(form.brand.0));
    draft.handle_change("kind", FieldValue::Text(form.kind.0));
    draft.handle_change("subKind", FieldValue::Text(form.sub_kind.0));
    draft.handle_number_input("volume", &form.volume.0);
    draft.handle_number_input("abv", &form.abv.0);
    draft.handle_change("originNation", FieldValue::Text(form.origin_nation.0));
    draft.handle_change("taste", checkbox_values(form.taste));
    draft.handle_change("mainIngredients", csv_values(&form.main_ingredients));
    draft.handle_change("description", FieldValue::Text(form.description.0));
    set_image(&mut draft, "mainImage", form.main_image);

    finish_submission(&req, &session, &api, &health, &LIQUEUR_PAGE, draft).await
}

// ---------------------------------------------------------------------------
// Ingredient
// ---------------------------------------------------------------------------

#[derive(MultipartForm)]
pub struct IngredientForm {
    pub name: Text<String>,
    pub brand: Text<String>,
    pub kind: Text<String>,
    pub description: Text<String>,
    #[multipart(rename = "mainImage")]
    pub main_image: Option<TempFile>,
}

pub async fn ingredient_form(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    health: web::Data<HealthState>,
) -> Result<HttpResponse, AppError> {
    let draft = Draft::new(schema::ingredient());
    show_form(&req, &session, &api, &health, &INGREDIENT_PAGE, &draft, None).await
}

pub async fn ingredient_submit(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    health: web::Data<HealthState>,
    MultipartForm(form): MultipartForm<IngredientForm>,
) -> Result<HttpResponse, AppError> {
    let mut draft = Draft::new(schema::ingredient());
    draft.handle_change("name", FieldValue::Text(form.name.0));
    draft.handle_change("brand", csv_values(&form.brand));
    draft.handle_change("kind", FieldValue::Text(form.kind.0));
    draft.handle_change("description", FieldValue::Text(form.description.0));
    set_image(&mut draft, "mainImage", form.main_image);

    finish_submission(&req, &session, &api, &health, &INGREDIENT_PAGE, draft).await
}
