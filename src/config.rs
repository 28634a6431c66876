//! Environment-driven configuration, loaded once at startup.

/// Runtime configuration for the server process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Listen address for the HTTP server.
    pub bind_addr: String,
    /// Argon2 hash the admin login is checked against. When absent, the
    /// admin area is effectively locked and a warning is logged at boot.
    pub admin_password_hash: Option<String>,
    /// Public base URL, used only to build the dashboard link in
    /// notification emails.
    pub site_url: String,
}

impl Config {
    /// Load configuration from the environment. Panics when `DATABASE_URL`
    /// is missing — the process cannot do anything useful without a store.
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let admin_password_hash = std::env::var("ADMIN_PASSWORD_HASH").ok();
        if admin_password_hash.is_none() {
            log::warn!("No ADMIN_PASSWORD_HASH set — admin login is disabled");
        }
        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        Self {
            database_url,
            bind_addr,
            admin_password_hash,
            site_url,
        }
    }
}
