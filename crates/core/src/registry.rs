//! Namespaced registry keys.
//!
//! Registry keys are stable string identifiers (e.g., `mdsh:oak_shelf`)
//! naming blocks, items, and block-entity types. They are ordered and
//! validated to support deterministic iteration and stable persistence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace assumed when a key string omits an explicit one.
pub const DEFAULT_NAMESPACE: &str = "mdsh";

/// Error returned when parsing an invalid [`RegistryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryKeyError {
    /// The input had no content.
    #[error("registry key cannot be empty")]
    Empty,
    /// The namespace segment failed validation.
    #[error("invalid registry key namespace `{0}`")]
    InvalidNamespace(String),
    /// The path segment failed validation.
    #[error("invalid registry key path `{0}`")]
    InvalidPath(String),
}

/// A namespaced key of the form `namespace:path`.
///
/// Ordering is lexical by `(namespace, path)` and is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryKey {
    namespace: String,
    path: String,
}

impl RegistryKey {
    /// Parse a registry key.
    ///
    /// Accepts either:
    /// - `namespace:path`
    /// - `path` (uses [`DEFAULT_NAMESPACE`])
    pub fn parse(input: &str) -> Result<Self, RegistryKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RegistryKeyError::Empty);
        }

        let (namespace, path) = match input.split_once(':') {
            Some((ns, p)) => (ns, p),
            None => (DEFAULT_NAMESPACE, input),
        };

        if namespace.is_empty()
            || namespace.len() > 64
            || !namespace
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
        {
            return Err(RegistryKeyError::InvalidNamespace(namespace.to_string()));
        }
        if path.is_empty()
            || path.len() > 256
            || !path
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'))
        {
            return Err(RegistryKeyError::InvalidPath(path.to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Registry key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Registry key path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for RegistryKey {
    type Err = RegistryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegistryKey {
    type Error = RegistryKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RegistryKey> for String {
    fn from(key: RegistryKey) -> Self {
        key.to_string()
    }
}
