//! Movie types

use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;

/// Identifier of a movie as it appears in `movies.csv`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for MovieId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A movie in the co-star graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier
    pub id: MovieId,

    /// Title
    pub title: String,

    /// Release year, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// People who starred in this movie
    #[serde(default)]
    pub stars: HashSet<PersonId>,
}

impl Movie {
    /// Create a movie with no stars
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            stars: HashSet::new(),
        }
    }
}
