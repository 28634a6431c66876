//! Notifier composition tests — per-variant email bodies and the dashboard
//! link. Delivery itself is best-effort and not exercised here.

mod common;

use champs::notify::compose;
use common::*;

const SITE_URL: &str = "https://prime-champs.com";

#[test]
fn test_athlete_notice_fields() {
    let mut submission = stored_submission("athlete");
    submission.sport = Some("mma".to_string());
    submission.experience = Some("amateur".to_string());
    submission.social_following = Some("0-10k".to_string());

    let (subject, body) = compose(&submission, SITE_URL);
    assert_eq!(subject, "New Athlete Form Submission");
    assert!(body.contains("<strong>Name:</strong> Jo Lee"));
    assert!(body.contains("<strong>Sport:</strong> mma"));
    assert!(body.contains("<strong>Experience:</strong> amateur"));
    assert!(!body.contains("Company"));
}

#[test]
fn test_other_sport_replaces_sport_in_notice() {
    let mut submission = stored_submission("athlete");
    submission.sport = Some("other".to_string());
    submission.other_sport = Some("chess boxing".to_string());

    let (_, body) = compose(&submission, SITE_URL);
    assert!(body.contains("<strong>Sport:</strong> chess boxing"));
}

#[test]
fn test_brand_notice_fields() {
    let mut submission = stored_submission("brand");
    submission.company = Some("Brandco".to_string());
    submission.role = Some("CMO".to_string());
    submission.industry = Some("apparel".to_string());

    let (subject, body) = compose(&submission, SITE_URL);
    assert_eq!(subject, "New Brand Form Submission");
    assert!(body.contains("<strong>Company:</strong> Brandco"));
    assert!(body.contains("<strong>Industry:</strong> apparel"));
    assert!(!body.contains("Sport"));
}

#[test]
fn test_partner_notice_strips_interest_prefix() {
    let mut submission = stored_submission("partner");
    submission.goals = Some("Interest: investment".to_string());
    submission.message = Some("Let's talk.".to_string());

    let (subject, body) = compose(&submission, SITE_URL);
    assert_eq!(subject, "New Partnership Inquiry");
    assert!(body.contains("<strong>Interest:</strong> investment"));
    assert!(body.contains("<strong>Message:</strong> Let's talk."));
}

#[test]
fn test_notice_links_to_admin_detail() {
    let submission = stored_submission("athlete");
    let (_, body) = compose(&submission, SITE_URL);
    let link = format!("{SITE_URL}/admin/submissions/{}", submission.id);
    assert!(body.contains(&link));
}

#[test]
fn test_missing_optionals_fall_back() {
    let mut submission = stored_submission("athlete");
    submission.phone = None;
    submission.message = None;

    let (_, body) = compose(&submission, SITE_URL);
    assert!(body.contains("<strong>Phone:</strong> Not provided"));
    assert!(body.contains("<strong>Message:</strong> No message provided"));
}
