//! Session-gated admin pages: submission list, detail, and status updates.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{csrf, session};
use crate::errors::{AppError, render};
use crate::models::submission::{self, SubmissionStatus};
use crate::templates_structs::{
    SubmissionDetailTemplate, SubmissionListTemplate, detail_rows, status_options,
};

pub async fn list(
    pool: web::Data<PgPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let submissions = submission::find_all(&pool).await?;
    let tmpl = SubmissionListTemplate {
        flash: session::take_flash(&session),
        csrf_token: csrf::get_or_create_token(&session),
        submissions,
    };
    render(tmpl)
}

pub async fn detail(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let found = submission::find_by_id(&pool, path.into_inner()).await?;
    let rows = detail_rows(&found);
    let tmpl = SubmissionDetailTemplate {
        flash: session::take_flash(&session),
        csrf_token: csrf::get_or_create_token(&session),
        submission: found,
        detail_rows: rows,
        statuses: status_options(),
    };
    render(tmpl)
}

#[derive(Deserialize)]
pub struct StatusForm {
    pub status: String,
    pub csrf_token: String,
}

pub async fn update_status(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<Uuid>,
    form: web::Form<StatusForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    match form.status.parse::<SubmissionStatus>() {
        Ok(status) => {
            let updated = submission::update_status(&pool, id, status).await?;
            session::set_flash(&session, &format!("Status updated to '{}'", updated.status));
        }
        Err(e) => {
            session::set_flash(&session, &e);
        }
    }

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/admin/submissions/{id}")))
        .finish())
}
