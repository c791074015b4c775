//! Costar Search - Name suggestions for the co-star graph
//!
//! Provides fuzzy matching (nucleo) of typed names against the people in a
//! loaded store, used for "did you mean" hints.

pub mod fuzzy;

pub use fuzzy::{NameSuggester, Suggestion};
