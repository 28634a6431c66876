use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::{csrf, password, session};
use crate::config::Config;
use crate::errors::{AppError, render};
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    if session::is_admin(&session) {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/submissions"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    render(LoginTemplate { error: None, csrf_token })
}

pub async fn login_submit(
    session: Session,
    config: web::Data<Config>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let verified = match config.admin_password_hash.as_deref() {
        Some(hash) => password::verify_password(&form.password, hash).unwrap_or(false),
        None => false,
    };

    if verified {
        let _ = session.insert("admin", true);
        Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/submissions"))
            .finish())
    } else {
        let csrf_token = csrf::get_or_create_token(&session);
        render(LoginTemplate {
            error: Some("Invalid password".to_string()),
            csrf_token,
        })
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
