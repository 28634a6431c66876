use askama::Template;

use crate::models::submission::{Submission, SubmissionStatus};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "admin/list.html")]
pub struct SubmissionListTemplate {
    pub flash: Option<String>,
    pub csrf_token: String,
    pub submissions: Vec<Submission>,
}

#[derive(Template)]
#[template(path = "admin/detail.html")]
pub struct SubmissionDetailTemplate {
    pub flash: Option<String>,
    pub csrf_token: String,
    pub submission: Submission,
    /// Variant-specific fields as (label, value) rows; only the fields that
    /// belong to the submission's type, NULLs already dropped.
    pub detail_rows: Vec<(&'static str, String)>,
    pub statuses: Vec<String>,
}

/// Build the variant-specific display rows for the detail page. Partner
/// interest is shown with its storage prefix stripped.
pub fn detail_rows(submission: &Submission) -> Vec<(&'static str, String)> {
    let mut rows: Vec<(&'static str, Option<String>)> = match submission.form_type.as_str() {
        "athlete" => vec![
            ("Sport", submission.sport.clone()),
            ("Other Sport", submission.other_sport.clone()),
            ("Experience", submission.experience.clone()),
            ("Social Following", submission.social_following.clone()),
            ("Instagram", submission.instagram.clone()),
            ("TikTok", submission.tiktok.clone()),
            ("YouTube", submission.youtube.clone()),
            ("Twitter", submission.twitter.clone()),
            ("Achievements", submission.achievements.clone()),
            ("Sponsorships", submission.sponsorships.clone()),
            ("Goals", submission.goals.clone()),
        ],
        "brand" => vec![
            ("Company", submission.company.clone()),
            ("Role", submission.role.clone()),
            ("Website", submission.website.clone()),
            ("Industry", submission.industry.clone()),
            ("Budget", submission.budget.clone()),
            ("Target Sports", submission.target_sports.clone()),
            ("Campaign Goals", submission.campaign_goals.clone()),
            ("Target Audience", submission.target_audience.clone()),
            ("Timeline", submission.timeline.clone()),
        ],
        _ => vec![("Interest", submission.interest().map(str::to_string))],
    };

    rows.push(("Message", submission.message.clone()));
    rows.push(("IP Address", submission.ip_address.clone()));
    rows.push(("User Agent", submission.user_agent.clone()));
    rows.push(("Referrer", submission.referrer.clone()));

    rows.into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
}

pub fn status_options() -> Vec<String> {
    SubmissionStatus::ALL
        .iter()
        .map(|s| s.as_str().to_string())
        .collect()
}
