//! Person (star) types

use crate::movie::MovieId;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;

/// Identifier of a person as it appears in `people.csv`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A person in the co-star graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Display name (not unique)
    pub name: String,

    /// Birth year, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,

    /// Movies this person starred in
    #[serde(default)]
    pub movies: HashSet<MovieId>,
}

impl Person {
    /// Create a person with no movies
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, birth: Option<i32>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth,
            movies: HashSet::new(),
        }
    }

    /// Key used by the name index
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}
