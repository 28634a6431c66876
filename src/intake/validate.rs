//! Server-side validation of form payloads.
//!
//! Mirrors the rules the public forms enforce in the browser, so a payload
//! that skips the UI cannot persist partially-valid data. Errors are
//! human-readable and ordered; the first one doubles as the API message.

use super::forms::{AthleteForm, BrandForm, FormPayload, PartnerForm};

/// Check a `local@domain.tld` shape without pulling in a regex engine:
/// exactly one '@', non-empty local part, a dot inside the domain, and no
/// whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // The TLD must be separated by a dot, and every domain label must be
    // non-empty (rejects leading/trailing/consecutive dots).
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

/// Phone numbers may use digits, '+', '-', '(', ')' and spaces, and must
/// contain at least 10 digits once everything else is stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
    {
        return false;
    }
    phone.chars().filter(char::is_ascii_digit).count() >= 10
}

fn too_short(value: &str, min: usize) -> bool {
    value.trim().chars().count() < min
}

/// Validate a payload against its variant's rules. Returns all failures in
/// display order; an empty list means the payload is valid.
pub fn validate_payload(payload: &FormPayload) -> Vec<String> {
    match payload {
        FormPayload::Athlete(form) => validate_athlete(form),
        FormPayload::Brand(form) => validate_brand(form),
        FormPayload::Partner(form) => validate_partner(form),
    }
}

fn validate_contact(name: &str, email: &str, phone: &str, errors: &mut Vec<String>) {
    if too_short(name, 2) {
        errors.push("Name must be at least 2 characters".to_string());
    }
    if !is_valid_email(email) {
        errors.push("Please enter a valid email address".to_string());
    }
    if !phone.is_empty() && !is_valid_phone(phone) {
        errors.push("Please enter a valid phone number".to_string());
    }
}

fn validate_athlete(form: &AthleteForm) -> Vec<String> {
    let mut errors = Vec::new();
    validate_contact(&form.name, &form.email, &form.phone, &mut errors);

    if form.sport.is_empty() {
        errors.push("Please select your primary sport".to_string());
    }
    if form.sport == "other" && form.other_sport.as_deref().unwrap_or("").is_empty() {
        errors.push("Please specify your sport".to_string());
    }
    if form.experience.is_empty() {
        errors.push("Please select your experience level".to_string());
    }
    if form.social_following.is_empty() {
        errors.push("Please select your following range".to_string());
    }
    // The browser form also enforces 10-character minimums on the free-text
    // fields; the server only requires presence so short-but-genuine
    // answers are not dropped.
    if form.achievements.trim().is_empty() {
        errors.push("Please describe your achievements".to_string());
    }
    if form.goals.trim().is_empty() {
        errors.push("Please describe your goals".to_string());
    }
    errors
}

fn validate_brand(form: &BrandForm) -> Vec<String> {
    let mut errors = Vec::new();
    validate_contact(&form.name, &form.email, &form.phone, &mut errors);

    if too_short(&form.company, 2) {
        errors.push("Company name must be at least 2 characters".to_string());
    }
    if too_short(&form.role, 2) {
        errors.push("Please specify your role".to_string());
    }
    if let Some(website) = form.website.as_deref() {
        if !website.is_empty() && !website.starts_with("http") {
            errors.push("Please enter a valid URL".to_string());
        }
    }
    if form.industry.is_empty() {
        errors.push("Please select your industry".to_string());
    }
    if form.budget.is_empty() {
        errors.push("Please select your budget range".to_string());
    }
    if form.target_sports.is_empty() {
        errors.push("Please specify target sports".to_string());
    }
    if form.campaign_goals.trim().is_empty() {
        errors.push("Please describe your campaign goals".to_string());
    }
    if form.target_audience.trim().is_empty() {
        errors.push("Please describe your target audience".to_string());
    }
    if form.timeline.is_empty() {
        errors.push("Please select your timeline".to_string());
    }
    errors
}

fn validate_partner(form: &PartnerForm) -> Vec<String> {
    let mut errors = Vec::new();

    if too_short(&form.first_name, 2) {
        errors.push("First name must be at least 2 characters".to_string());
    }
    if too_short(&form.last_name, 2) {
        errors.push("Last name must be at least 2 characters".to_string());
    }
    if !is_valid_email(&form.email) {
        errors.push("Please enter a valid email address".to_string());
    }
    if let Some(phone) = form.phone.as_deref() {
        if !phone.is_empty() && !is_valid_phone(phone) {
            errors.push("Please enter a valid phone number".to_string());
        }
    }
    if form.interest.is_empty() {
        errors.push("Please select your area of interest".to_string());
    }
    if too_short(&form.message, 10) {
        errors.push("Please provide at least a brief message".to_string());
    }
    errors
}
