//! Validator tests — field shape rules and per-variant required fields.

mod common;

use champs::intake::forms::FormPayload;
use champs::intake::validate::{is_valid_email, is_valid_phone, validate_payload};
use common::*;

#[test]
fn test_valid_payloads_produce_no_errors() {
    assert!(validate_payload(&athlete_payload()).is_empty());
    assert!(validate_payload(&brand_payload()).is_empty());
    assert!(validate_payload(&partner_payload()).is_empty());
}

#[test]
fn test_email_shapes() {
    assert!(is_valid_email("jo@example.com"));
    assert!(is_valid_email("a.b+c@sub.domain.co"));

    assert!(!is_valid_email(""));
    assert!(!is_valid_email("jo@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("jo@"));
    assert!(!is_valid_email("jo example@mail.com"));
    assert!(!is_valid_email("jo@@example.com"));
    assert!(!is_valid_email("jo@.com"));
    assert!(!is_valid_email("jo@example.com."));
    // Every domain label must be non-empty.
    assert!(!is_valid_email("jo@a..com"));
    assert!(!is_valid_email("jo@sub..domain.co"));
}

#[test]
fn test_phone_shapes() {
    assert!(is_valid_phone("5551234567"));
    assert!(is_valid_phone("+1 (555) 123-4567"));

    // Too few digits after stripping.
    assert!(!is_valid_phone("555-1234"));
    // Illegal characters.
    assert!(!is_valid_phone("555123456x"));
}

#[test]
fn test_short_name_rejected() {
    let mut form = athlete_form();
    form.name = "J".to_string();
    let errors = validate_payload(&FormPayload::Athlete(form));
    assert_eq!(errors, vec!["Name must be at least 2 characters"]);
}

#[test]
fn test_phone_is_optional() {
    let mut form = athlete_form();
    form.phone = String::new();
    assert!(validate_payload(&FormPayload::Athlete(form)).is_empty());
}

#[test]
fn test_athlete_other_sport_required_when_sport_is_other() {
    let mut form = athlete_form();
    form.sport = "other".to_string();
    form.other_sport = None;
    let errors = validate_payload(&FormPayload::Athlete(form.clone()));
    assert!(errors.contains(&"Please specify your sport".to_string()));

    form.other_sport = Some("chess boxing".to_string());
    assert!(validate_payload(&FormPayload::Athlete(form)).is_empty());
}

#[test]
fn test_athlete_required_fields() {
    let mut form = athlete_form();
    form.sport = String::new();
    form.experience = String::new();
    form.achievements = String::new();
    let errors = validate_payload(&FormPayload::Athlete(form));
    assert!(errors.contains(&"Please select your primary sport".to_string()));
    assert!(errors.contains(&"Please select your experience level".to_string()));
    assert!(errors.contains(&"Please describe your achievements".to_string()));
}

#[test]
fn test_brand_required_fields() {
    let mut form = brand_form();
    form.company = "B".to_string();
    form.industry = String::new();
    form.budget = String::new();
    let errors = validate_payload(&FormPayload::Brand(form));
    assert!(errors.contains(&"Company name must be at least 2 characters".to_string()));
    assert!(errors.contains(&"Please select your industry".to_string()));
    assert!(errors.contains(&"Please select your budget range".to_string()));
}

#[test]
fn test_brand_website_must_be_http_url() {
    let mut form = brand_form();
    form.website = Some("spam.example".to_string());
    let errors = validate_payload(&FormPayload::Brand(form.clone()));
    assert!(errors.contains(&"Please enter a valid URL".to_string()));

    form.website = Some("https://brand.example".to_string());
    assert!(validate_payload(&FormPayload::Brand(form)).is_empty());
}

#[test]
fn test_partner_rules() {
    let mut form = partner_form();
    form.last_name = "O".to_string();
    form.interest = String::new();
    form.message = "too short".to_string();
    let errors = validate_payload(&FormPayload::Partner(form));
    assert_eq!(
        errors,
        vec![
            "Last name must be at least 2 characters",
            "Please select your area of interest",
            "Please provide at least a brief message",
        ]
    );
}

#[test]
fn test_errors_are_ordered_name_first() {
    let mut form = athlete_form();
    form.name = String::new();
    form.email = "bad".to_string();
    form.sport = String::new();
    let errors = validate_payload(&FormPayload::Athlete(form));
    assert_eq!(errors[0], "Name must be at least 2 characters");
    assert_eq!(errors[1], "Please enter a valid email address");
    assert_eq!(errors[2], "Please select your primary sport");
}
