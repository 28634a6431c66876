use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use champs::auth;
use champs::config::Config;
use champs::db;
use champs::handlers;
use champs::intake::rate_limit::RateLimiter;
use champs::notify::{EmailConfig, Mailer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = db::init_pool(&config.database_url).await;
    db::run_migrations(&pool).await;

    // One limiter for both intake endpoints, owned here and injected —
    // never module-level state.
    let limiter = RateLimiter::new();
    let mailer = Mailer::new(EmailConfig::from_env(), config.site_url.clone());

    // Session encryption key — load from SESSION_KEY env var for persistent
    // sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .app_data(web::Data::new(mailer.clone()))
            // Public intake API
            .configure(handlers::api_routes)
            // Admin login
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            // Root redirect
            .route(
                "/",
                web::get().to(|| async {
                    actix_web::HttpResponse::SeeOther()
                        .insert_header(("Location", "/admin/submissions"))
                        .finish()
                }),
            )
            // Session-gated admin pages
            .service(
                web::scope("/admin")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                    .route(
                        "/submissions",
                        web::get().to(handlers::admin_handlers::list),
                    )
                    .route(
                        "/submissions/{id}",
                        web::get().to(handlers::admin_handlers::detail),
                    )
                    .route(
                        "/submissions/{id}/status",
                        web::post().to(handlers::admin_handlers::update_status),
                    ),
            )
            .route("/logout", web::post().to(handlers::auth_handlers::logout))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body("<h1>404 Not Found</h1>")
            }))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
