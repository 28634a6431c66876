use serde::Deserialize;

/// Incoming payload for either public form endpoint, discriminated by the
/// `type` field. Variant-specific fields are only legal on their variant;
/// the flattening to one nullable row shape happens in `normalize`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormPayload {
    Athlete(AthleteForm),
    Brand(BrandForm),
    Partner(PartnerForm),
}

impl FormPayload {
    /// The stored `type` discriminant.
    pub fn type_name(&self) -> &'static str {
        match self {
            FormPayload::Athlete(_) => "athlete",
            FormPayload::Brand(_) => "brand",
            FormPayload::Partner(_) => "partner",
        }
    }

    /// Honeypot value, regardless of variant. Hidden from humans by the
    /// form styling; any non-empty value marks the request as a bot.
    pub fn honeypot(&self) -> Option<&str> {
        let value = match self {
            FormPayload::Athlete(f) => f.website_url.as_deref(),
            FormPayload::Brand(f) => f.website_url.as_deref(),
            FormPayload::Partner(f) => f.website_url.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Popup-form payload for athletes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub other_sport: Option<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub social_following: String,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub achievements: String,
    #[serde(default)]
    pub sponsorships: Option<String>,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub message: Option<String>,
    // Honeypot. The wire name is deliberately snake_case so it looks like a
    // plausible URL field to automated submitters.
    #[serde(default, rename = "website_url")]
    pub website_url: Option<String>,
}

/// Popup-form payload for brands.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub target_sports: String,
    #[serde(default)]
    pub campaign_goals: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "website_url")]
    pub website_url: Option<String>,
}

/// Partner-page payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "website_url")]
    pub website_url: Option<String>,
}
