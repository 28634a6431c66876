//! Flattening of variant payloads into the canonical stored record.

use actix_web::HttpRequest;

use super::forms::{AthleteForm, BrandForm, FormPayload, PartnerForm};
use super::rate_limit::client_ip;
use crate::models::submission::NewSubmission;

/// Request context captured server-side and attached to every record.
/// Never client-supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestMeta {
    pub ip_address: String,
    pub user_agent: String,
    pub referrer: Option<String>,
}

impl RequestMeta {
    pub fn from_request(req: &HttpRequest) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            ip_address: client_ip(req),
            user_agent: header("user-agent").unwrap_or_else(|| "unknown".to_string()),
            referrer: header("referer"),
        }
    }
}

/// Empty optional strings are persisted as NULL, never as "".
fn blank_to_null(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Map a validated payload to the canonical record shape. Fields foreign to
/// the payload's variant stay at their `None` default.
pub fn normalize(payload: &FormPayload, meta: &RequestMeta) -> NewSubmission {
    let mut record = match payload {
        FormPayload::Athlete(form) => normalize_athlete(form),
        FormPayload::Brand(form) => normalize_brand(form),
        FormPayload::Partner(form) => normalize_partner(form),
    };
    record.form_type = payload.type_name().to_string();
    record.ip_address = Some(meta.ip_address.clone());
    record.user_agent = Some(meta.user_agent.clone());
    record.referrer = meta.referrer.clone();
    record
}

fn normalize_athlete(form: &AthleteForm) -> NewSubmission {
    NewSubmission {
        name: form.name.clone(),
        email: form.email.clone(),
        phone: if form.phone.is_empty() {
            None
        } else {
            Some(form.phone.clone())
        },
        message: blank_to_null(&form.message),
        sport: Some(form.sport.clone()),
        // otherSport only means something when sport is "other"; stale
        // values from a prior selection must not leak into the row.
        other_sport: if form.sport == "other" {
            blank_to_null(&form.other_sport)
        } else {
            None
        },
        experience: Some(form.experience.clone()),
        social_following: Some(form.social_following.clone()),
        instagram: blank_to_null(&form.instagram),
        tiktok: blank_to_null(&form.tiktok),
        youtube: blank_to_null(&form.youtube),
        twitter: blank_to_null(&form.twitter),
        achievements: Some(form.achievements.clone()),
        sponsorships: blank_to_null(&form.sponsorships),
        goals: Some(form.goals.clone()),
        ..NewSubmission::default()
    }
}

fn normalize_brand(form: &BrandForm) -> NewSubmission {
    NewSubmission {
        name: form.name.clone(),
        email: form.email.clone(),
        phone: if form.phone.is_empty() {
            None
        } else {
            Some(form.phone.clone())
        },
        message: blank_to_null(&form.message),
        company: Some(form.company.clone()),
        role: Some(form.role.clone()),
        website: blank_to_null(&form.website),
        industry: Some(form.industry.clone()),
        budget: Some(form.budget.clone()),
        target_sports: Some(form.target_sports.clone()),
        campaign_goals: Some(form.campaign_goals.clone()),
        target_audience: Some(form.target_audience.clone()),
        timeline: Some(form.timeline.clone()),
        ..NewSubmission::default()
    }
}

fn normalize_partner(form: &PartnerForm) -> NewSubmission {
    NewSubmission {
        // Partner forms collect first/last name separately.
        name: format!("{} {}", form.first_name, form.last_name),
        email: form.email.clone(),
        phone: blank_to_null(&form.phone),
        message: if form.message.is_empty() {
            None
        } else {
            Some(form.message.clone())
        },
        // The interest selection rides in the shared goals column with a
        // fixed prefix; Submission::interest() strips it for display.
        goals: Some(format!("Interest: {}", form.interest)),
        ..NewSubmission::default()
    }
}
