pub mod admin_handlers;
pub mod auth_handlers;
pub mod submit_handlers;

use actix_web::web;

/// Register the public intake API routes. Shared by `main` and the
/// handler-level tests.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/submit-form",
        web::post().to(submit_handlers::submit_form),
    )
    .route(
        "/api/submit-partner-form",
        web::post().to(submit_handlers::submit_partner_form),
    );
}
