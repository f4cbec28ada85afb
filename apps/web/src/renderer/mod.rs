//! Profile Renderer. Holds the page's view of the profile.
//!
//! `mount` launches the one and only fetch as a detached task. The task is
//! fire and forget: it cannot be cancelled, has no timeout and never retries.
//! Until it succeeds the renderer stays `Unloaded`; once `Loaded` it never
//! goes back.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use crate::models::profile::Profile;
use crate::profile_client::ProfileClient;

#[derive(Debug, Clone, Default)]
pub enum ProfileState {
    #[default]
    Unloaded,
    Loaded(Arc<Profile>),
}

impl ProfileState {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileState::Unloaded => None,
            ProfileState::Loaded(profile) => Some(profile.as_ref()),
        }
    }
}

#[derive(Clone)]
pub struct ProfileRenderer {
    state: watch::Receiver<ProfileState>,
}

impl ProfileRenderer {
    /// Starts the fetch and returns immediately in the `Unloaded` state.
    /// Must be called from within a tokio runtime.
    pub fn mount(client: ProfileClient) -> Self {
        let (tx, rx) = watch::channel(ProfileState::Unloaded);

        tokio::spawn(async move {
            match client.fetch_profile().await {
                Ok(profile) => {
                    info!("Profile loaded for {}", profile.name);
                    tx.send_replace(ProfileState::Loaded(Arc::new(profile)));
                }
                Err(e) => {
                    error!("Failed to load profile from {}: {e}", client.url());
                }
            }
        });

        Self { state: rx }
    }

    /// The current state. Never partially populated.
    pub fn snapshot(&self) -> ProfileState {
        self.state.borrow().clone()
    }

    /// Waits until the fetch task has finished and returns the final state.
    pub async fn settled(&self) -> ProfileState {
        let mut rx = self.state.clone();
        loop {
            let current = rx.borrow_and_update().clone();
            if let ProfileState::Loaded(_) = current {
                return current;
            }
            // The sender is dropped when the fetch task ends.
            if rx.changed().await.is_err() {
                return rx.borrow().clone();
            }
        }
    }
}
