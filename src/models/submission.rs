use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Admin triage status of a submission. Defaults to `New` at creation and
/// is only ever changed by an explicit admin action; any value may follow
/// any other (no transition graph is enforced).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    New,
    Contacted,
    Qualified,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 4] = [
        SubmissionStatus::New,
        SubmissionStatus::Contacted,
        SubmissionStatus::Qualified,
        SubmissionStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Contacted => "contacted",
            SubmissionStatus::Qualified => "qualified",
            SubmissionStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(SubmissionStatus::New),
            "contacted" => Ok(SubmissionStatus::Contacted),
            "qualified" => Ok(SubmissionStatus::Qualified),
            "rejected" => Ok(SubmissionStatus::Rejected),
            other => Err(format!("Unknown status '{other}'")),
        }
    }
}

/// A stored lead, one row in `submissions`. Variant-foreign fields are NULL
/// by construction (see `intake::normalize`); `form_type` is immutable
/// after insert.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub form_type: String,

    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,

    pub sport: Option<String>,
    pub other_sport: Option<String>,
    pub experience: Option<String>,
    pub social_following: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub achievements: Option<String>,
    pub sponsorships: Option<String>,
    pub goals: Option<String>,

    pub company: Option<String>,
    pub role: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub budget: Option<String>,
    pub target_sports: Option<String>,
    pub campaign_goals: Option<String>,
    pub target_audience: Option<String>,
    pub timeline: Option<String>,

    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,

    pub status: String,
}

impl Submission {
    /// Partner interest is stored in `goals` with an `"Interest: "` prefix;
    /// strip it back out for display.
    pub fn interest(&self) -> Option<&str> {
        self.goals
            .as_deref()
            .and_then(|g| g.strip_prefix("Interest: "))
    }

    /// Timestamp formatted for the admin pages.
    pub fn created_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

/// Canonical record shape produced by the normalizer, ready for insert.
/// Every field foreign to `form_type` must already be `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubmission {
    pub form_type: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,

    pub sport: Option<String>,
    pub other_sport: Option<String>,
    pub experience: Option<String>,
    pub social_following: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub achievements: Option<String>,
    pub sponsorships: Option<String>,
    pub goals: Option<String>,

    pub company: Option<String>,
    pub role: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub budget: Option<String>,
    pub target_sports: Option<String>,
    pub campaign_goals: Option<String>,
    pub target_audience: Option<String>,
    pub timeline: Option<String>,

    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

/// Column list shared by every query so `FromRow` field names line up
/// (the `type` column maps to `form_type`).
const SUBMISSION_COLUMNS: &str = "\
    id, created_at, type AS form_type, name, email, phone, message, \
    sport, other_sport, experience, social_following, \
    instagram, tiktok, youtube, twitter, achievements, sponsorships, goals, \
    company, role, website, industry, budget, \
    target_sports, campaign_goals, target_audience, timeline, \
    ip_address, user_agent, referrer, status";

/// Insert a normalized record and return the stored row, including the
/// generated id, timestamp, and default status.
pub async fn create(pool: &PgPool, new: &NewSubmission) -> Result<Submission, AppError> {
    let sql = format!(
        "INSERT INTO submissions ( \
            type, name, email, phone, message, \
            sport, other_sport, experience, social_following, \
            instagram, tiktok, youtube, twitter, achievements, sponsorships, goals, \
            company, role, website, industry, budget, \
            target_sports, campaign_goals, target_audience, timeline, \
            ip_address, user_agent, referrer \
        ) VALUES ( \
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
            $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28 \
        ) RETURNING {SUBMISSION_COLUMNS}"
    );

    let stored = sqlx::query_as::<_, Submission>(&sql)
        .bind(&new.form_type)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.message)
        .bind(&new.sport)
        .bind(&new.other_sport)
        .bind(&new.experience)
        .bind(&new.social_following)
        .bind(&new.instagram)
        .bind(&new.tiktok)
        .bind(&new.youtube)
        .bind(&new.twitter)
        .bind(&new.achievements)
        .bind(&new.sponsorships)
        .bind(&new.goals)
        .bind(&new.company)
        .bind(&new.role)
        .bind(&new.website)
        .bind(&new.industry)
        .bind(&new.budget)
        .bind(&new.target_sports)
        .bind(&new.campaign_goals)
        .bind(&new.target_audience)
        .bind(&new.timeline)
        .bind(&new.ip_address)
        .bind(&new.user_agent)
        .bind(&new.referrer)
        .fetch_one(pool)
        .await?;
    Ok(stored)
}

/// All submissions, newest first, for the admin list.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Submission>, AppError> {
    let sql = format!("SELECT {SUBMISSION_COLUMNS} FROM submissions ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Submission>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// A single submission, or `NotFound`.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Submission, AppError> {
    let sql = format!("SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE id = $1");
    let row = sqlx::query_as::<_, Submission>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or(AppError::NotFound)
}

/// Set the status of a submission and return the updated row, or `NotFound`.
pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: SubmissionStatus,
) -> Result<Submission, AppError> {
    let sql = format!(
        "UPDATE submissions SET status = $2 WHERE id = $1 RETURNING {SUBMISSION_COLUMNS}"
    );
    let row = sqlx::query_as::<_, Submission>(&sql)
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(pool)
        .await?;
    row.ok_or(AppError::NotFound)
}
