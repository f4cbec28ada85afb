use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PROFILE_API_URL: &str = "http://localhost:5000/api/users/profile";
const DEFAULT_SITE_BRAND: &str = "Dhanunjaya";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absolute URL of the profile endpoint.
    pub profile_api_url: String,
    /// Navbar and title text; shown before the profile arrives.
    pub site_brand: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            profile_api_url: lookup("PROFILE_API_URL")
                .unwrap_or_else(|| DEFAULT_PROFILE_API_URL.to_string()),
            site_brand: lookup("SITE_BRAND").unwrap_or_else(|| DEFAULT_SITE_BRAND.to_string()),
        })
    }
}
