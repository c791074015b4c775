//! In-memory graph store for the people/movies/stars relations

use crate::error::{Error, Result};
use crate::movie::{Movie, MovieId};
use crate::person::{Person, PersonId};
use serde::Deserialize;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::hash::Hash;
use std::io::Read;
use std::path::Path;

/// File holding `id,name,birth` rows
pub const PEOPLE_FILE: &str = "people.csv";

/// File holding `id,title,year` rows
pub const MOVIES_FILE: &str = "movies.csv";

/// File holding `person_id,movie_id` rows
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    birth: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: String,
    title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct StarRecord {
    person_id: String,
    movie_id: String,
}

/// Read-only index over people, movies and who starred in what
///
/// Three indexes are kept: people by id, movies by id, and lowercased
/// names to the (possibly several) people carrying that name.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `people.csv`, `movies.csv` and `stars.csv` from a directory
    pub fn load(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        tracing::debug!("Loading graph from {:?}", directory);

        let open = |name: &str| {
            let path = directory.join(name);
            File::open(&path).map_err(|e| Error::io(path.display().to_string(), e))
        };

        Self::from_readers(open(PEOPLE_FILE)?, open(MOVIES_FILE)?, open(STARS_FILE)?)
    }

    /// Load the three relations from arbitrary readers
    ///
    /// Star links naming an unknown person or movie are skipped. Short rows
    /// are accepted; their trailing optional columns load as absent.
    pub fn from_readers<P: Read, M: Read, S: Read>(people: P, movies: M, stars: S) -> Result<Self> {
        let mut store = Self::new();

        for record in Self::reader(people).deserialize::<PersonRecord>() {
            let record = record.map_err(|e| Error::csv(PEOPLE_FILE, e))?;
            store.insert_person(record.id, record.name, record.birth);
        }

        for record in Self::reader(movies).deserialize::<MovieRecord>() {
            let record = record.map_err(|e| Error::csv(MOVIES_FILE, e))?;
            store.insert_movie(record.id, record.title, record.year);
        }

        let mut skipped = 0usize;
        for record in Self::reader(stars).deserialize::<StarRecord>() {
            let record = record.map_err(|e| Error::csv(STARS_FILE, e))?;
            if !store.link(&record.person_id, &record.movie_id) {
                skipped += 1;
            }
        }

        tracing::debug!(
            "Loaded {} people, {} movies, {} star links ({} dangling links skipped)",
            store.person_count(),
            store.movie_count(),
            store.link_count(),
            skipped
        );

        Ok(store)
    }

    fn reader<R: Read>(source: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new().flexible(true).from_reader(source)
    }

    /// Insert or replace a person by id
    ///
    /// Replacing keeps the movies already linked to that id.
    pub fn insert_person(
        &mut self,
        id: impl Into<PersonId>,
        name: impl Into<String>,
        birth: Option<i32>,
    ) {
        let person = Person::new(id, name, birth);
        let key = person.name_key();
        let id = person.id.clone();

        match self.people.entry(person.id.clone()) {
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                let old_key = existing.name_key();
                if old_key != key {
                    Self::unindex_name(&mut self.names, &old_key, &id);
                }
                existing.name = person.name;
                existing.birth = person.birth;
            }
            Entry::Vacant(slot) => {
                slot.insert(person);
            }
        }

        self.names.entry(key).or_default().insert(id);
    }

    /// Insert or replace a movie by id
    ///
    /// Replacing keeps the stars already linked to that id.
    pub fn insert_movie(
        &mut self,
        id: impl Into<MovieId>,
        title: impl Into<String>,
        year: Option<i32>,
    ) {
        let movie = Movie::new(id, title, year);
        match self.movies.entry(movie.id.clone()) {
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                existing.title = movie.title;
                existing.year = movie.year;
            }
            Entry::Vacant(slot) => {
                slot.insert(movie);
            }
        }
    }

    /// Record that a person starred in a movie
    ///
    /// Returns false, leaving the store untouched, when either id is unknown.
    pub fn link(&mut self, person_id: &str, movie_id: &str) -> bool {
        match (
            self.people.get_mut(person_id),
            self.movies.get_mut(movie_id),
        ) {
            (Some(person), Some(movie)) => {
                person.movies.insert(movie.id.clone());
                movie.stars.insert(person.id.clone());
                true
            }
            _ => {
                tracing::trace!("Skipping star link {} -> {}", person_id, movie_id);
                false
            }
        }
    }

    fn unindex_name(names: &mut HashMap<String, BTreeSet<PersonId>>, key: &str, id: &PersonId) {
        if let Some(ids) = names.get_mut(key) {
            ids.remove(id);
            if ids.is_empty() {
                names.remove(key);
            }
        }
    }

    /// Get a person by id
    pub fn person<Q>(&self, id: &Q) -> Option<&Person>
    where
        PersonId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.people.get(id)
    }

    /// Get a movie by id
    pub fn movie<Q>(&self, id: &Q) -> Option<&Movie>
    where
        MovieId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.movies.get(id)
    }

    /// Ids of everyone with this name (case-insensitive), ordered by id
    pub fn person_ids_for_name(&self, name: &str) -> Vec<&PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    /// All (movie, co-star) pairs reachable from a person in one hop
    ///
    /// The person appears among their own co-stars; callers filter that out.
    pub fn neighbors_for_person<Q>(&self, id: &Q) -> HashSet<(&MovieId, &PersonId)>
    where
        PersonId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(person) = self.people.get(id) else {
            return HashSet::new();
        };

        person
            .movies
            .iter()
            .filter_map(|movie_id| self.movies.get(movie_id))
            .flat_map(|movie| movie.stars.iter().map(move |star| (&movie.id, star)))
            .collect()
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of applied star links
    pub fn link_count(&self) -> usize {
        self.people.values().map(|p| p.movies.len()).sum()
    }
}
