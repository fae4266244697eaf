use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::session::sign_out;
use crate::errors::{AppError, render};
use crate::health::HealthState;
use crate::templates_structs::{
    DashboardTemplate, GuideTemplate, GuideTip, HomeTemplate, PageContext, Recipe,
};
use crate::theme;

/// Spirit looked up on the dashboard as the API connectivity demo.
const DEMO_SPIRIT: &str = "앱솔루트 보드카";

pub async fn home(
    req: HttpRequest,
    session: Session,
    health: web::Data<HealthState>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &health, "/");
    render(HomeTemplate { ctx })
}

pub async fn guide(
    req: HttpRequest,
    session: Session,
    health: web::Data<HealthState>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &health, "/guide");
    render(GuideTemplate { ctx, tips: guide_tips(), recipes: popular_recipes() })
}

pub async fn dashboard(
    req: HttpRequest,
    session: Session,
    api: web::Data<ApiClient>,
    health: web::Data<HealthState>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &health, "/dashboard");
    let (spirit_json, error) = match api.find_spirit(DEMO_SPIRIT).await {
        Ok(value) => (
            Some(serde_json::to_string_pretty(&value).unwrap_or_default()),
            None,
        ),
        Err(e) => (None, Some(e)),
    };
    render(DashboardTemplate { ctx, spirit_name: DEMO_SPIRIT, spirit_json, error })
}

pub async fn logout(session: Session) -> HttpResponse {
    sign_out(&session);
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

/// Cycle the theme preference and persist it; returns to the page the
/// toggle was clicked on.
pub async fn toggle_theme(req: HttpRequest) -> HttpResponse {
    let next = theme::current(&req).next();
    let referer = req
        .headers()
        .get(actix_web::http::header::REFERER)
        .and_then(|v| v.to_str().ok());
    HttpResponse::SeeOther()
        .insert_header(("Location", return_path(referer)))
        .cookie(theme::cookie(next))
        .finish()
}

/// Reduce a Referer value to a local redirect target. Absolute URLs are
/// stripped to their path and query, so the redirect can never leave
/// this site; anything unparseable falls back to the home page.
pub fn return_path(referer: Option<&str>) -> String {
    let Some(raw) = referer else {
        return "/".to_string();
    };
    let Ok(uri) = raw.parse::<actix_web::http::Uri>() else {
        return "/".to_string();
    };
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    if path.starts_with('/') && !path.starts_with("//") {
        path.to_string()
    } else {
        "/".to_string()
    }
}

fn guide_tips() -> Vec<GuideTip> {
    vec![
        GuideTip {
            icon: "🍸",
            title: "기본 도구 준비",
            description: "셰이커, 지거, 바 스푼, 스트레이너를 준비하세요.",
        },
        GuideTip {
            icon: "⚖️",
            title: "재료 측정",
            description: "정확한 비율이 맛있는 칵테일의 핵심입니다.",
        },
        GuideTip {
            icon: "🧊",
            title: "얼음 사용법",
            description: "신선한 얼음을 사용하고 충분히 넣어주세요.",
        },
        GuideTip {
            icon: "🍋",
            title: "가니쉬 장식",
            description: "시각적 효과와 향을 위한 마지막 터치입니다.",
        },
    ]
}

fn popular_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "올드 패션드",
            difficulty: "초급",
            time: "3분",
            ingredients: vec![
                "위스키 60ml",
                "설탕 1티스푼",
                "앙고스투라 비터 2방울",
                "얼음",
                "오렌지 필",
            ],
        },
        Recipe {
            name: "진 토닉",
            difficulty: "초급",
            time: "2분",
            ingredients: vec!["진 50ml", "토닉워터 150ml", "라임 1조각", "얼음"],
        },
        Recipe {
            name: "마가리타",
            difficulty: "중급",
            time: "5분",
            ingredients: vec!["테킬라 50ml", "트리플섹 25ml", "라임즙 25ml", "소금", "얼음"],
        },
    ]
}
