//! Namespaced game identifiers.
//!
//! Item identities and remembered-contents location keys are both stable
//! string identifiers of the form `namespace:path` (e.g. `game:iron_ingot`,
//! `game:overworld`). They are validated on construction and ordered
//! lexically so iteration and persistence stay deterministic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace assumed when a key omits an explicit one.
pub const DEFAULT_NAMESPACE: &str = "game";

/// Error returned when parsing an invalid [`GameId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The input was empty or whitespace.
    #[error("identifier cannot be empty")]
    Empty,
    /// The namespace segment failed validation.
    #[error("invalid identifier namespace {0:?} (allowed: a-z0-9_.-, max 64)")]
    BadNamespace(String),
    /// The path segment failed validation.
    #[error("invalid identifier path {0:?} (allowed: a-z0-9_./-, max 128)")]
    BadPath(String),
}

/// A namespaced identifier of the form `namespace:path`.
///
/// Ordering is lexical by `(namespace, path)` and stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameId {
    namespace: String,
    path: String,
}

impl GameId {
    /// Parse an identifier, accepting `namespace:path` or a bare `path`
    /// (which uses [`DEFAULT_NAMESPACE`]).
    pub fn parse(input: &str) -> Result<Self, IdError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(IdError::Empty);
        }

        let (namespace, path) = match input.split_once(':') {
            Some((ns, p)) => (ns.trim(), p.trim()),
            None => (DEFAULT_NAMESPACE, input),
        };

        if namespace.is_empty()
            || namespace.len() > 64
            || !namespace
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
        {
            return Err(IdError::BadNamespace(namespace.to_string()));
        }
        if path.is_empty()
            || path.len() > 128
            || !path
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'))
        {
            return Err(IdError::BadPath(path.to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Identifier namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Identifier path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for GameId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GameId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        id.to_string()
    }
}
