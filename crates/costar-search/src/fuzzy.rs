//! Fuzzy name suggestions using nucleo

use nucleo_matcher::{
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
    Config, Matcher, Utf32Str,
};

use costar_core::{GraphStore, Person};

/// A person whose name fuzzy-matched the query
#[derive(Debug, Clone)]
pub struct Suggestion<'a> {
    pub person: &'a Person,
    pub score: u32,
}

/// Stateless fuzzy matcher over person names
pub struct NameSuggester {
    pub default_limit: usize,
}

impl NameSuggester {
    pub fn new() -> Self {
        Self { default_limit: 5 }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    fn score_name(
        name: &str,
        pattern: &Pattern,
        matcher: &mut Matcher,
        buf: &mut Vec<char>,
    ) -> Option<u32> {
        pattern.score(Utf32Str::new(name, buf), matcher)
    }

    /// Best-scoring people for `query`, at most `default_limit` of them
    ///
    /// Ties are ordered by name, then id, so output is stable.
    pub fn suggest<'a>(&self, store: &'a GraphStore, query: &str) -> Vec<Suggestion<'a>> {
        let query = query.trim();
        if query.is_empty() || self.default_limit == 0 {
            return Vec::new();
        }

        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut scored: Vec<Suggestion<'a>> = store
            .people()
            .filter_map(|person| {
                Self::score_name(&person.name, &pattern, &mut matcher, &mut buf)
                    .map(|score| Suggestion { person, score })
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.person.name.cmp(&b.person.name))
                .then_with(|| a.person.id.cmp(&b.person.id))
        });
        scored.truncate(self.default_limit);

        tracing::debug!("{} suggestions for {:?}", scored.len(), query);
        scored
    }
}

impl Default for NameSuggester {
    fn default() -> Self {
        Self::new()
    }
}
