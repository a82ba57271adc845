use indexmap::IndexSet;
use thiserror::Error;

/// Errors raised while building an [`AllowList`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allow-list entries must not be empty")]
    EmptyEntry,
    #[error("allow-list entry '{entry}' must be a bare host without a scheme")]
    SchemeNotAllowed { entry: String },
}

/// Hosts permitted to call the server cross-origin.
///
/// Entries are stored ASCII lower-cased because the origin host they are compared
/// against is lower-cased before lookup. Insertion order is preserved for
/// display purposes only; matching is pure membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    hosts: IndexSet<String>,
}

impl AllowList {
    pub fn new<I, S>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut hosts = IndexSet::new();
        for entry in entries.into_iter() {
            let entry = entry.into();
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::EmptyEntry);
            }
            if trimmed.contains("://") {
                return Err(ValidationError::SchemeNotAllowed {
                    entry: trimmed.to_string(),
                });
            }
            hosts.insert(trimmed.to_ascii_lowercase());
        }

        Ok(Self { hosts })
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;
