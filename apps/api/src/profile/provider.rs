//! Profile Provider: the source of the portfolio document.
//!
//! `AppState` holds an `Arc<dyn ProfileProvider>`. The default backend is
//! `StaticProfileProvider`, built once at startup and never mutated.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::profile::Profile;

#[derive(Debug, Error)]
pub enum ProviderError {
    // Never returned by StaticProfileProvider
    #[allow(dead_code)]
    #[error("profile unavailable: {0}")]
    Unavailable(String),
}

/// Implement this to swap where the profile comes from without touching the
/// endpoint or router.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn profile(&self) -> Result<Profile, ProviderError>;
}

/// Serves one immutable in-memory document. Never fails.
#[derive(Debug, Clone)]
pub struct StaticProfileProvider {
    profile: Arc<Profile>,
}

impl StaticProfileProvider {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: Arc::new(profile),
        }
    }

    /// Builds the provider from `PROFILE_PATH` if set, otherwise from the
    /// built-in sample.
    pub fn from_source(path: Option<&Path>) -> Result<Self> {
        let profile = match path {
            Some(path) => load_profile_file(path)?,
            None => {
                info!("No PROFILE_PATH set, serving built-in profile");
                Profile::sample()
            }
        };
        Ok(Self::new(profile))
    }
}

#[async_trait]
impl ProfileProvider for StaticProfileProvider {
    async fn profile(&self) -> Result<Profile, ProviderError> {
        Ok(self.profile.as_ref().clone())
    }
}

fn load_profile_file(path: &Path) -> Result<Profile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile file {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&raw)
        .with_context(|| format!("Profile file {} is not a valid profile", path.display()))?;

    if let Some(field) = profile.missing_required_field() {
        bail!(
            "Profile file {} has an empty '{field}' field",
            path.display()
        );
    }

    info!(
        "Loaded profile for {} from {} ({} skills, {} projects)",
        profile.name,
        path.display(),
        profile.skills.len(),
        profile.projects.len()
    );
    Ok(profile)
}
