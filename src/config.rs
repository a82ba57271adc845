//! Loading the allow-list from process configuration.

use crate::allow_list::{AllowList, ValidationError};
use std::env;
use thiserror::Error;

/// Environment variable holding the comma or whitespace separated host list.
pub const ALLOW_ORIGIN_ENV: &str = "ALLOW_ORIGIN";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable '{name}' is not set or is not valid unicode")]
    MissingVar { name: String },
    #[error("invalid allow-list: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parses a host list such as `example.com, test.com` or `example.com test.com`.
pub fn parse_allow_list(raw: &str) -> Result<AllowList, ConfigError> {
    let entries = raw
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|entry| !entry.is_empty());

    Ok(AllowList::new(entries)?)
}

pub fn allow_list_from_env() -> Result<AllowList, ConfigError> {
    allow_list_from_env_var(ALLOW_ORIGIN_ENV)
}

pub fn allow_list_from_env_var(name: &str) -> Result<AllowList, ConfigError> {
    let raw = env::var(name).map_err(|_| ConfigError::MissingVar {
        name: name.to_string(),
    })?;
    let list = parse_allow_list(&raw)?;
    tracing::debug!(var = name, hosts = list.len(), "loaded CORS allow-list");
    Ok(list)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
