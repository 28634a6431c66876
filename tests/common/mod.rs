//! Shared fixtures for intake pipeline tests: representative valid payloads
//! for each submission variant and a stored-row builder for notifier tests.

#![allow(dead_code)]

use chrono::Utc;
use uuid::Uuid;

use champs::intake::forms::{AthleteForm, BrandForm, FormPayload, PartnerForm};
use champs::models::submission::Submission;

pub const TEST_IP: &str = "203.0.113.7";

/// Valid athlete payload (mirrors spec scenario 1).
pub fn athlete_form() -> AthleteForm {
    AthleteForm {
        name: "Jo Lee".to_string(),
        email: "jo@example.com".to_string(),
        phone: "5551234567".to_string(),
        sport: "mma".to_string(),
        experience: "amateur".to_string(),
        social_following: "0-10k".to_string(),
        achievements: "Won local meet".to_string(),
        goals: "Go pro".to_string(),
        website_url: Some("".to_string()),
        ..AthleteForm::default()
    }
}

/// Valid brand payload.
pub fn brand_form() -> BrandForm {
    BrandForm {
        name: "Ada Brand".to_string(),
        email: "ada@brand.example".to_string(),
        phone: "+1 (555) 987-6543".to_string(),
        company: "Brandco".to_string(),
        role: "CMO".to_string(),
        website: Some("".to_string()),
        industry: "apparel".to_string(),
        budget: "10k-50k".to_string(),
        target_sports: "mma, boxing".to_string(),
        campaign_goals: "Grow brand awareness in combat sports".to_string(),
        target_audience: "18-34 sports fans across social platforms".to_string(),
        timeline: "q3".to_string(),
        ..BrandForm::default()
    }
}

/// Valid partner payload.
pub fn partner_form() -> PartnerForm {
    PartnerForm {
        first_name: "Sam".to_string(),
        last_name: "Okafor".to_string(),
        email: "sam@example.com".to_string(),
        phone: Some("".to_string()),
        interest: "investment".to_string(),
        message: "I would like to discuss a partnership.".to_string(),
        website_url: Some("".to_string()),
    }
}

pub fn athlete_payload() -> FormPayload {
    FormPayload::Athlete(athlete_form())
}

pub fn brand_payload() -> FormPayload {
    FormPayload::Brand(brand_form())
}

pub fn partner_payload() -> FormPayload {
    FormPayload::Partner(partner_form())
}

/// A stored athlete row, as the persistence gateway would return it.
pub fn stored_submission(form_type: &str) -> Submission {
    Submission {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        form_type: form_type.to_string(),
        name: "Jo Lee".to_string(),
        email: "jo@example.com".to_string(),
        phone: Some("5551234567".to_string()),
        message: None,
        sport: None,
        other_sport: None,
        experience: None,
        social_following: None,
        instagram: None,
        tiktok: None,
        youtube: None,
        twitter: None,
        achievements: None,
        sponsorships: None,
        goals: None,
        company: None,
        role: None,
        website: None,
        industry: None,
        budget: None,
        target_sports: None,
        campaign_goals: None,
        target_audience: None,
        timeline: None,
        ip_address: Some(TEST_IP.to_string()),
        user_agent: Some("test-agent".to_string()),
        referrer: None,
        status: "new".to_string(),
    }
}
