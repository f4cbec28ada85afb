//! Profile Provider and the HTTP endpoint that exposes it.

pub mod handlers;
pub mod provider;

pub use provider::{ProfileProvider, StaticProfileProvider};
