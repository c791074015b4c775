//! Name to person-id resolution

use crate::person::PersonId;
use crate::store::GraphStore;

/// A person offered to the user when a name is ambiguous
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub id: &'a PersonId,
    pub name: &'a str,
    pub birth: Option<i32>,
}

/// Picks one person out of several sharing a name
///
/// Implementations return the textual id the user chose, or `None` to
/// decline. The resolver validates the answer.
pub trait Disambiguator {
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Option<String>;
}

impl<F> Disambiguator for F
where
    F: FnMut(&str, &[Candidate<'_>]) -> Option<String>,
{
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Option<String> {
        self(name, candidates)
    }
}

/// Declines every choice, so ambiguous names resolve to nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisambiguation;

impl Disambiguator for NoDisambiguation {
    fn choose(&mut self, _name: &str, _candidates: &[Candidate<'_>]) -> Option<String> {
        None
    }
}

/// Resolves display names against a store's name index
pub struct NameResolver<'a> {
    store: &'a GraphStore,
}

impl<'a> NameResolver<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// All people with this name, ordered by id
    pub fn candidates(&self, name: &str) -> Vec<Candidate<'a>> {
        self.store
            .person_ids_for_name(name)
            .into_iter()
            .filter_map(|id| self.store.person(id))
            .map(|person| Candidate {
                id: &person.id,
                name: &person.name,
                birth: person.birth,
            })
            .collect()
    }

    /// Resolve a name to a single person id
    ///
    /// Unknown names, and ambiguous names without a valid selection, give `None`.
    pub fn resolve(&self, name: &str, disambiguator: &mut dyn Disambiguator) -> Option<PersonId> {
        let candidates = self.candidates(name);

        match candidates.as_slice() {
            [] => {
                tracing::debug!("No person named {:?}", name);
                None
            }
            [only] => Some(only.id.clone()),
            many => {
                tracing::debug!(
                    "{} people named {:?}, asking for a choice",
                    many.len(),
                    name
                );
                let choice = disambiguator.choose(name, many)?;
                let choice = choice.trim();
                let chosen = many
                    .iter()
                    .find(|c| c.id.as_str() == choice)
                    .map(|c| c.id.clone());
                if chosen.is_none() {
                    tracing::debug!("Selection {:?} is not one of the candidates", choice);
                }
                chosen
            }
        }
    }
}
