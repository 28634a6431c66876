//! Public intake endpoints: bot filter → rate limit → validation →
//! normalization → persistence → best-effort notification.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::forms::{FormPayload, PartnerForm};
use crate::intake::normalize::{RequestMeta, normalize};
use crate::intake::rate_limit::{RateLimiter, client_ip};
use crate::intake::validate::validate_payload;
use crate::models::submission;
use crate::notify::Mailer;

/// JSON body returned by both submit endpoints.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

fn success_message(payload: &FormPayload) -> &'static str {
    match payload {
        FormPayload::Partner(_) => "Partnership inquiry submitted successfully",
        _ => "Form submitted successfully",
    }
}

/// POST /api/submit-form — athlete/brand popup form.
pub async fn submit_form(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    limiter: web::Data<RateLimiter>,
    mailer: web::Data<Mailer>,
    payload: web::Json<FormPayload>,
) -> Result<HttpResponse, AppError> {
    process(&req, &pool, &limiter, &mailer, payload.into_inner()).await
}

/// POST /api/submit-partner-form — partner inquiry page.
pub async fn submit_partner_form(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    limiter: web::Data<RateLimiter>,
    mailer: web::Data<Mailer>,
    payload: web::Json<PartnerForm>,
) -> Result<HttpResponse, AppError> {
    let payload = FormPayload::Partner(payload.into_inner());
    process(&req, &pool, &limiter, &mailer, payload).await
}

async fn process(
    req: &HttpRequest,
    pool: &PgPool,
    limiter: &RateLimiter,
    mailer: &Mailer,
    payload: FormPayload,
) -> Result<HttpResponse, AppError> {
    // A populated honeypot marks a bot. Skip everything and answer with the
    // same success shape as a genuine submission so automated clients get
    // no signal that they were detected.
    if payload.honeypot().is_some() {
        log::info!(
            "Honeypot tripped on {} submission from {}",
            payload.type_name(),
            client_ip(req)
        );
        return Ok(HttpResponse::Ok().json(SubmitResponse {
            success: true,
            message: success_message(&payload).to_string(),
            id: None,
        }));
    }

    let ip = client_ip(req);
    if !limiter.try_acquire(&ip) {
        log::warn!("Rate limit exceeded for {ip}");
        return Err(AppError::RateLimited);
    }

    let errors = validate_payload(&payload);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let meta = RequestMeta::from_request(req);
    let record = normalize(&payload, &meta);

    // Persistence is the operation of record: its success gates the
    // response, the notification below does not.
    let stored = submission::create(pool, &record).await?;

    if let Err(e) = mailer.send_submission_notice(&stored).await {
        log::error!("Notification email failed for submission {}: {e}", stored.id);
    }

    Ok(HttpResponse::Ok().json(SubmitResponse {
        success: true,
        message: success_message(&payload).to_string(),
        id: Some(stored.id),
    }))
}
