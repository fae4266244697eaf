//! End-to-end registration flow: multipart decode, validation gating,
//! backend submission, and failure re-rendering, exercised through the
//! real handler stack against a stubbed backend.

use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, test, web};

use cocktail_maker::api::ApiClient;
use cocktail_maker::handlers;
use cocktail_maker::health::HealthState;

const BOUNDARY: &str = "----cocktailmakertestboundary";

// ---------------------------------------------------------------------------
// Multipart request body builder
// ---------------------------------------------------------------------------

struct MultipartBody {
    buf: Vec<u8>,
}

impl MultipartBody {
    fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    fn file(mut self, name: &str, file_name: &str, mime: &str, data: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{name}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> (String, Vec<u8>) {
        self.buf
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (format!("multipart/form-data; boundary={BOUNDARY}"), self.buf)
    }
}

/// Fully valid spirits submission except for the caller-chosen amount.
fn spirits_body(amount: &str) -> MultipartBody {
    MultipartBody::new()
        .text("name", "Mojito")
        .text("kind", "Rum")
        .text("subKind", "White Rum")
        .text("amount", amount)
        .text("alcohol", "40")
        .text("originNation", "Cuba")
        .text("originLocation", "Havana")
        .text("aroma", "1")
        .text("taste", "2")
        .text("finish", "3")
        .text("description", "민트와 라임의 상쾌한 조합")
        .file("mainImage", "main.png", "image/png", &[0u8; 256])
}

// ---------------------------------------------------------------------------
// Stub backend
// ---------------------------------------------------------------------------

/// Local backend double: counts registration POSTs and answers them with
/// a canned reply; metadata requests get an empty success envelope.
struct StubBackend {
    base_url: String,
    submits: Arc<AtomicUsize>,
}

fn spawn_stub(status: u16, reply: &'static str) -> StubBackend {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let submits = Arc::new(AtomicUsize::new(0));

    let counter = submits.clone();
    let server = HttpServer::new(move || {
        let counter = counter.clone();
        App::new()
            .route(
                "/api/v1/spirits",
                web::post().to(move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        HttpResponse::build(
                            StatusCode::from_u16(status).expect("stub status"),
                        )
                        .content_type("application/json")
                        .body(reply)
                    }
                }),
            )
            .default_service(web::to(|| async {
                HttpResponse::Ok().json(serde_json::json!({
                    "status": "success",
                    "data": [],
                    "message": ""
                }))
            }))
    })
    .workers(1)
    .listen(listener)
    .expect("stub listen")
    .run();
    actix_web::rt::spawn(server);

    StubBackend { base_url: format!("http://{addr}"), submits }
}

macro_rules! test_app {
    ($stub:expr) => {
        test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(
                        CookieSessionStore::default(),
                        Key::generate(),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(web::Data::new(ApiClient::new(&$stub.base_url)))
                .app_data(web::Data::new(HealthState::new()))
                .route(
                    "/register/spirits",
                    web::get().to(handlers::register::spirits_form),
                )
                .route(
                    "/register/spirits",
                    web::post().to(handlers::register::spirits_submit),
                ),
        )
        .await
    };
}

macro_rules! post_spirits {
    ($app:expr, $body:expr) => {{
        let (content_type, payload) = $body.finish();
        let req = test::TestRequest::post()
            .uri("/register/spirits")
            .insert_header(("content-type", content_type))
            .set_payload(payload)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[actix_rt::test]
async fn test_blocked_draft_issues_no_backend_request() {
    let stub = spawn_stub(201, r#"{"id": 1}"#);
    let app = test_app!(stub);

    let resp = post_spirits!(app, spirits_body("0"));
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8_lossy(&test::read_body(resp).await).to_string();
    assert!(html.contains("용량은 0보다 커야 합니다"));
    assert_eq!(stub.submits.load(Ordering::SeqCst), 0);
}

#[actix_rt::test]
async fn test_backend_rejection_keeps_the_draft_values() {
    let stub = spawn_stub(500, r#"{"message": "duplicate name"}"#);
    let app = test_app!(stub);

    let resp = post_spirits!(app, spirits_body("750"));
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(stub.submits.load(Ordering::SeqCst), 1);

    let html = String::from_utf8_lossy(&test::read_body(resp).await).to_string();
    assert!(html.contains("등록 실패: duplicate name"));
    // Retained for correction and resubmission
    assert!(html.contains(r#"value="Mojito""#));
    assert!(html.contains(r#"value="750""#));
    assert!(html.contains("민트와 라임의 상쾌한 조합"));
}

#[actix_rt::test]
async fn test_accepted_submission_redirects_back_to_the_form() {
    let stub = spawn_stub(201, r#"{"id": 1, "name": "Mojito"}"#);
    let app = test_app!(stub);

    let resp = post_spirits!(app, spirits_body("750"));
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/register/spirits")
    );
    assert_eq!(stub.submits.load(Ordering::SeqCst), 1);
}

#[actix_rt::test]
async fn test_unparseable_amount_is_redisplayed_as_typed() {
    let stub = spawn_stub(201, r#"{"id": 1}"#);
    let app = test_app!(stub);

    let resp = post_spirits!(app, spirits_body("많이"));
    assert_eq!(resp.status(), StatusCode::OK);

    let html = String::from_utf8_lossy(&test::read_body(resp).await).to_string();
    assert!(html.contains("용량은 0보다 커야 합니다"));
    assert!(html.contains(r#"value="많이""#));
    assert_eq!(stub.submits.load(Ordering::SeqCst), 0);
}
