//! Breadth-first shortest path over the co-star graph

use crate::movie::MovieId;
use crate::person::PersonId;
use crate::store::GraphStore;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// One hop of a path: the movie shared with the previous person, and the
/// person reached through it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

/// Chain of co-star links from a source person to a target person
///
/// The source itself is not part of the steps, so the number of steps is
/// the degrees of separation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub steps: Vec<PathStep>,
}

impl Path {
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub neighbors_examined: usize,
    pub max_frontier: usize,
}

/// Result of a search: the path if one exists, plus statistics
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// Arena entry: parent is an index into the same arena
#[derive(Debug)]
struct SearchNode {
    state: PersonId,
    parent: Option<usize>,
    action: Option<MovieId>,
}

/// FIFO frontier of arena indices with O(1) state membership
#[derive(Debug, Default)]
struct QueueFrontier {
    queue: VecDeque<usize>,
    states: HashSet<PersonId>,
}

impl QueueFrontier {
    fn add(&mut self, index: usize, state: PersonId) {
        self.states.insert(state);
        self.queue.push_back(index);
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains(state)
    }

    fn remove(&mut self, nodes: &[SearchNode]) -> Option<usize> {
        let index = self.queue.pop_front()?;
        self.states.remove(&nodes[index].state);
        Some(index)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Shortest-path engine borrowing a loaded store
pub struct PathFinder<'a> {
    store: &'a GraphStore,
}

impl<'a> PathFinder<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// Shortest chain of co-stars from `source` to `target`, or `None` if
    /// they are not connected
    pub fn shortest_path(&self, source: &PersonId, target: &PersonId) -> Option<Path> {
        self.search(source, target).path
    }

    /// Run the search and keep its statistics
    pub fn search(&self, source: &PersonId, target: &PersonId) -> SearchOutcome {
        let mut stats = SearchStats::default();

        if source == target {
            return SearchOutcome {
                path: Some(Path::default()),
                stats,
            };
        }

        tracing::debug!("Searching path: source={}, target={}", source, target);

        let mut nodes = vec![SearchNode {
            state: source.clone(),
            parent: None,
            action: None,
        }];
        let mut frontier = QueueFrontier::default();
        frontier.add(0, source.clone());
        let mut explored: HashSet<PersonId> = HashSet::new();
        stats.max_frontier = frontier.len();

        while let Some(current) = frontier.remove(&nodes) {
            stats.nodes_expanded += 1;
            explored.insert(nodes[current].state.clone());

            for (movie, person) in self.store.neighbors_for_person(&nodes[current].state) {
                stats.neighbors_examined += 1;

                // Checked before queueing, so the match is seen one level early
                if person == target {
                    let path = Self::reconstruct_path(&nodes, current, movie, person);
                    tracing::debug!(
                        "Path found: {} degrees, {} nodes expanded, {} neighbors examined",
                        path.degrees(),
                        stats.nodes_expanded,
                        stats.neighbors_examined
                    );
                    return SearchOutcome {
                        path: Some(path),
                        stats,
                    };
                }

                if !frontier.contains_state(person) && !explored.contains(person) {
                    nodes.push(SearchNode {
                        state: person.clone(),
                        parent: Some(current),
                        action: Some(movie.clone()),
                    });
                    frontier.add(nodes.len() - 1, person.clone());
                }
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        tracing::debug!(
            "No path: {} nodes expanded, {} neighbors examined",
            stats.nodes_expanded,
            stats.neighbors_examined
        );

        SearchOutcome { path: None, stats }
    }

    /// Walk parent indices from `current` back to the root, then reverse
    fn reconstruct_path(
        nodes: &[SearchNode],
        current: usize,
        movie: &MovieId,
        person: &PersonId,
    ) -> Path {
        let mut steps = vec![PathStep {
            movie: movie.clone(),
            person: person.clone(),
        }];

        let mut index = current;
        while let (Some(parent), Some(action)) = (nodes[index].parent, &nodes[index].action) {
            steps.push(PathStep {
                movie: action.clone(),
                person: nodes[index].state.clone(),
            });
            index = parent;
        }

        steps.reverse();
        Path { steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn id(s: &str) -> PersonId {
        PersonId::from(s)
    }

    /// Alice --M1-- Bob --M2-- Carol, plus Dave alone in M3
    fn create_test_store() -> GraphStore {
        let mut store = GraphStore::new();
        store.insert_person("A", "Alice", None);
        store.insert_person("B", "Bob", None);
        store.insert_person("C", "Carol", None);
        store.insert_person("D", "Dave", None);
        store.insert_movie("M1", "First", Some(2000));
        store.insert_movie("M2", "Second", Some(2001));
        store.insert_movie("M3", "Third", Some(2002));
        for (person, movie) in [("A", "M1"), ("B", "M1"), ("B", "M2"), ("C", "M2"), ("D", "M3")] {
            assert!(store.link(person, movie));
        }
        store
    }

    /// Builds a store from movies given as lists of star ids
    fn store_from_casts(people: usize, casts: &[Vec<usize>]) -> GraphStore {
        let mut store = GraphStore::new();
        for p in 0..people {
            store.insert_person(p.to_string(), format!("Person {}", p), None);
        }
        for (m, cast) in casts.iter().enumerate() {
            let movie_id = format!("m{}", m);
            store.insert_movie(movie_id.clone(), format!("Movie {}", m), None);
            for p in cast.iter() {
                store.link(&p.to_string(), &movie_id);
            }
        }
        store
    }

    /// Reference distances from `source`, computed level by level
    fn brute_force_distances(store: &GraphStore, source: &PersonId) -> HashMap<PersonId, usize> {
        let mut dist = HashMap::new();
        dist.insert(source.clone(), 0);
        let mut level = 0;
        loop {
            let current: Vec<PersonId> = dist
                .iter()
                .filter(|(_, d)| **d == level)
                .map(|(p, _)| p.clone())
                .collect();
            if current.is_empty() {
                return dist;
            }
            for person in current {
                for (_, next) in store.neighbors_for_person(&person) {
                    dist.entry(next.clone()).or_insert(level + 1);
                }
            }
            level += 1;
        }
    }

    fn assert_valid_path(store: &GraphStore, source: &PersonId, target: &PersonId, path: &Path) {
        let mut previous = source;
        for step in path {
            let movie = store.movie(&step.movie).unwrap();
            assert!(movie.stars.contains(previous), "{} not in {}", previous, step.movie);
            assert!(movie.stars.contains(&step.person), "{} not in {}", step.person, step.movie);
            previous = &step.person;
        }
        assert_eq!(previous, target);
    }

    #[test]
    fn test_two_degrees() {
        let store = create_test_store();
        let path = PathFinder::new(&store).shortest_path(&id("A"), &id("C")).unwrap();

        assert_eq!(path.degrees(), 2);
        assert_eq!(
            path.steps,
            vec![
                PathStep { movie: "M1".into(), person: "B".into() },
                PathStep { movie: "M2".into(), person: "C".into() },
            ]
        );
    }

    #[test]
    fn test_target_is_matched_before_it_is_queued() {
        let store = create_test_store();
        let outcome = PathFinder::new(&store).search(&id("A"), &id("C"));

        assert_eq!(outcome.path.unwrap().degrees(), 2);
        // C is seen among B's co-stars, so only A and B are expanded
        assert_eq!(outcome.stats.nodes_expanded, 2);
    }

    #[test]
    fn test_person_already_queued_is_not_queued_again() {
        // 4 is a co-star of both 1 and 2, and 2 is expanded while 4 waits
        let casts = vec![vec![1, 2], vec![1, 4], vec![2, 3, 4]];
        let store = store_from_casts(6, &casts);
        let outcome = PathFinder::new(&store).search(&id("1"), &id("5"));

        assert!(outcome.path.is_none());
        assert_eq!(outcome.stats.nodes_expanded, 4);
        assert_eq!(outcome.stats.max_frontier, 2);
        assert_eq!(outcome.stats.neighbors_examined, 17);
    }

    #[test]
    fn test_same_person_is_empty_path() {
        let store = create_test_store();
        let finder = PathFinder::new(&store);

        for person in ["A", "B", "C", "D"] {
            let outcome = finder.search(&id(person), &id(person));
            assert_eq!(outcome.path, Some(Path::default()));
            assert_eq!(outcome.stats.nodes_expanded, 0);
        }
    }

    #[test]
    fn test_direct_co_stars() {
        let store = create_test_store();
        let path = PathFinder::new(&store).shortest_path(&id("B"), &id("A")).unwrap();

        assert_eq!(path.degrees(), 1);
        assert_eq!(path.steps[0].person, id("A"));
    }

    #[test]
    fn test_not_connected() {
        let store = create_test_store();
        let outcome = PathFinder::new(&store).search(&id("A"), &id("D"));

        assert!(outcome.path.is_none());
        // A, B and C are expanded before the frontier runs dry
        assert_eq!(outcome.stats.nodes_expanded, 3);
    }

    #[test]
    fn test_unknown_ids_are_not_connected() {
        let store = create_test_store();
        let finder = PathFinder::new(&store);

        assert!(finder.shortest_path(&id("A"), &id("nobody")).is_none());
        assert!(finder.shortest_path(&id("nobody"), &id("A")).is_none());
    }

    #[test]
    fn test_shared_movies_pick_some_shared_movie() {
        let mut store = create_test_store();
        store.insert_movie("M4", "Reunion", Some(2010));
        store.link("A", "M4");
        store.link("B", "M4");

        let path = PathFinder::new(&store).shortest_path(&id("A"), &id("B")).unwrap();
        assert_eq!(path.degrees(), 1);
        assert!(["M1", "M4"].contains(&path.steps[0].movie.as_str()));
        assert_valid_path(&store, &id("A"), &id("B"), &path);
    }

    #[test]
    fn test_prefers_shortcut_over_long_chain() {
        // 0-1-2-3-4 chain plus a movie joining 0 and 4 with another star
        let casts = vec![vec![0, 1], vec![1, 2], vec![2, 3], vec![3, 4], vec![0, 5], vec![5, 4]];
        let store = store_from_casts(6, &casts);
        let path = PathFinder::new(&store).shortest_path(&id("0"), &id("4")).unwrap();

        assert_eq!(path.degrees(), 2);
        assert_valid_path(&store, &id("0"), &id("4"), &path);
    }

    #[test]
    fn test_paths_are_minimal_on_synthetic_graphs() {
        let graphs: Vec<(usize, Vec<Vec<usize>>)> = vec![
            (5, vec![vec![0, 1, 2], vec![2, 3], vec![3, 4]]),
            (7, vec![vec![0, 1], vec![1, 2, 3], vec![3, 4], vec![4, 0], vec![5, 6]]),
            (8, (0..8).map(|i| vec![i, (i + 1) % 8]).collect()),
            (6, vec![(0..6).collect()]),
            (6, vec![vec![0], vec![1, 2], vec![2, 3, 4], vec![4, 1], vec![5]]),
        ];

        for (people, casts) in graphs {
            let store = store_from_casts(people, &casts);
            let finder = PathFinder::new(&store);

            for s in 0..people {
                let source = id(&s.to_string());
                let distances = brute_force_distances(&store, &source);

                for t in 0..people {
                    let target = id(&t.to_string());
                    match (finder.shortest_path(&source, &target), distances.get(&target)) {
                        (Some(path), Some(expected)) => {
                            assert_eq!(path.degrees(), *expected, "{} -> {}", s, t);
                            assert_valid_path(&store, &source, &target, &path);
                        }
                        (None, None) => {}
                        (found, expected) => {
                            panic!("{} -> {}: found {:?}, expected {:?}", s, t, found, expected)
                        }
                    }
                }
            }
        }
    }
}
