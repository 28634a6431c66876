//! Outbound email notification for new submissions.
//!
//! Best-effort by contract: the record is already persisted when the
//! notifier runs, so a delivery failure is logged and swallowed — it must
//! never fail the submission request.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};

use crate::models::submission::Submission;

const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_ADDRESS: &str = "Prime Champs <forms@prime-champs.com>";

/// Error type for email delivery failures.
#[derive(Debug)]
pub enum EmailError {
    Transport(lettre::transport::smtp::Error),
    Address(lettre::address::AddressError),
    Build(String),
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailError::Transport(e) => write!(f, "SMTP transport error: {e}"),
            EmailError::Address(e) => write!(f, "Email address parse error: {e}"),
            EmailError::Build(e) => write!(f, "Email build error: {e}"),
        }
    }
}

impl From<lettre::transport::smtp::Error> for EmailError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        EmailError::Transport(e)
    }
}

impl From<lettre::address::AddressError> for EmailError {
    fn from(e: lettre::address::AddressError) -> Self {
        EmailError::Address(e)
    }
}

/// SMTP configuration for the notifier.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub from_address: String,
    pub notify_to: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load from the environment. Returns `None` when `SMTP_HOST` or
    /// `NOTIFY_EMAIL` is unset, signalling that notifications are disabled.
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let notify_to = std::env::var("NOTIFY_EMAIL").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            notify_to,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Compose the notification subject and HTML body for a stored submission.
/// Pure, so tests can check the per-variant fields without a transport.
pub fn compose(submission: &Submission, site_url: &str) -> (String, String) {
    let subject = match submission.form_type.as_str() {
        "athlete" => "New Athlete Form Submission".to_string(),
        "brand" => "New Brand Form Submission".to_string(),
        _ => "New Partnership Inquiry".to_string(),
    };

    let mut body = String::new();
    body.push_str(&format!("<h1>{subject}</h1>\n"));
    field(&mut body, "Name", &submission.name);
    field(&mut body, "Email", &submission.email);
    field(
        &mut body,
        "Phone",
        submission.phone.as_deref().unwrap_or("Not provided"),
    );

    match submission.form_type.as_str() {
        "athlete" => {
            // other_sport replaces the "other" placeholder when set.
            let sport = submission
                .other_sport
                .as_deref()
                .or(submission.sport.as_deref())
                .unwrap_or("");
            field(&mut body, "Sport", sport);
            opt_field(&mut body, "Experience", &submission.experience);
            opt_field(&mut body, "Social Following", &submission.social_following);
        }
        "brand" => {
            opt_field(&mut body, "Company", &submission.company);
            opt_field(&mut body, "Role", &submission.role);
            opt_field(&mut body, "Industry", &submission.industry);
        }
        _ => {
            field(&mut body, "Interest", submission.interest().unwrap_or(""));
        }
    }

    field(
        &mut body,
        "Message",
        submission.message.as_deref().unwrap_or("No message provided"),
    );
    body.push_str(&format!(
        "<p>View the full submission in your dashboard: \
         {site_url}/admin/submissions/{}</p>\n",
        submission.id
    ));

    (subject, body)
}

fn field(body: &mut String, label: &str, value: &str) {
    body.push_str(&format!("<p><strong>{label}:</strong> {value}</p>\n"));
}

fn opt_field(body: &mut String, label: &str, value: &Option<String>) {
    if let Some(v) = value {
        field(body, label, v);
    }
}

/// Sends submission notification emails via SMTP. Constructed once per
/// process; an unconfigured mailer silently skips sending.
#[derive(Clone)]
pub struct Mailer {
    config: Option<EmailConfig>,
    site_url: String,
}

impl Mailer {
    pub fn new(config: Option<EmailConfig>, site_url: String) -> Self {
        if config.is_none() {
            log::warn!("SMTP not configured — submission notifications are disabled");
        }
        Self { config, site_url }
    }

    /// Send the notification for a stored submission. Errors are returned
    /// to the caller, which logs and swallows them (never on the response
    /// path).
    pub async fn send_submission_notice(&self, submission: &Submission) -> Result<(), EmailError> {
        let Some(config) = &self.config else {
            log::debug!("Skipping notification for {}: mailer not configured", submission.id);
            return Ok(());
        };

        let (subject, html) = compose(submission, &self.site_url);

        let email = Message::builder()
            .from(config.from_address.parse().map_err(EmailError::Address)?)
            .to(config.notify_to.parse().map_err(EmailError::Address)?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        log::info!("Notification email sent for submission {}", submission.id);
        Ok(())
    }
}
