use std::sync::Arc;

use origin_policy_rs::config::{self, ConfigError};
use origin_policy_rs::{AllowList, OriginPolicy};

pub type SharedPolicy = Arc<OriginPolicy>;

#[derive(Clone)]
pub struct AppState {
    pub policy: SharedPolicy,
    pub greeting: &'static str,
}

/// Reads `ALLOW_ORIGIN`, falling back to a local development allow-list.
pub fn build_state() -> Result<AppState, ConfigError> {
    let allow_list = match config::allow_list_from_env() {
        Ok(list) => list,
        Err(ConfigError::MissingVar { name }) => {
            tracing::warn!(var = %name, "allow-list not configured, using localhost defaults");
            AllowList::new(["localhost:3000", "127.0.0.1:3000"])?
        }
        Err(err) => return Err(err),
    };

    Ok(AppState {
        policy: Arc::new(OriginPolicy::new(allow_list)),
        greeting: "Welcome to the origin policy demo!",
    })
}

pub mod middleware;
