use actix_multipart::form::MultipartFormConfig;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use cocktail_maker::api::ApiClient;
use cocktail_maker::{auth, config, handlers, health};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cfg = config::AppConfig::from_env();
    let api = ApiClient::new(&cfg.api_base_url);

    // Backend liveness badge, refreshed every 30s
    let health_state = health::HealthState::new();
    health::spawn_poller(api.clone(), health_state.clone());

    let secret_key = config::session_key();

    log::info!("Starting server at http://{}", cfg.bind_addr);
    log::info!("Backend API at {}", cfg.api_base_url);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        // Five images at 2MB each plus text fields fit comfortably
        let multipart_cfg = MultipartFormConfig::default()
            .total_limit(25 * 1024 * 1024)
            .memory_limit(2 * 1024 * 1024)
            .error_handler(|err, _req| {
                cocktail_maker::errors::AppError::Multipart(err.to_string()).into()
            });

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(health_state.clone()))
            .app_data(multipart_cfg)
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/", web::get().to(handlers::pages::home))
            .route("/healthz", web::get().to(handlers::health::healthz))
            .route("/theme", web::post().to(handlers::pages::toggle_theme))
            .route("/logout", web::post().to(handlers::pages::logout))
            // Protected routes — sessions come from the external auth
            // provider mounted at /auth
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                    .route("/guide", web::get().to(handlers::pages::guide))
                    .route("/dashboard", web::get().to(handlers::pages::dashboard))
                    .route(
                        "/register/spirits",
                        web::get().to(handlers::register::spirits_form),
                    )
                    .route(
                        "/register/spirits",
                        web::post().to(handlers::register::spirits_submit),
                    )
                    .route(
                        "/register/liqueur",
                        web::get().to(handlers::register::liqueur_form),
                    )
                    .route(
                        "/register/liqueur",
                        web::post().to(handlers::register::liqueur_submit),
                    )
                    .route(
                        "/register/ingredient",
                        web::get().to(handlers::register::ingredient_form),
                    )
                    .route(
                        "/register/ingredient",
                        web::post().to(handlers::register::ingredient_submit),
                    ),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(&cfg.bind_addr)?
    .run()
    .await
}
