//! Costar Core - Co-star graph engine
//!
//! This crate loads the people/movies/stars relations into memory and
//! answers "degrees of separation" queries over the implicit
//! person ↔ movie ↔ person graph.

pub mod error;
pub mod movie;
pub mod person;
pub mod resolver;
pub mod store;
pub mod traversal;

pub use error::{Error, Result};
pub use movie::{Movie, MovieId};
pub use person::{Person, PersonId};
pub use resolver::{Candidate, Disambiguator, NameResolver, NoDisambiguation};
pub use store::GraphStore;
pub use traversal::{Path, PathFinder, PathStep, SearchOutcome, SearchStats};
