//! Read-side popularity ranking over films.

use std::sync::Arc;

use cinegraph_foundation::{Error, Result};

use crate::film::Film;
use crate::likes::LikeIndex;
use crate::store::EntityStore;

/// Orders films by how many distinct users currently like them.
///
/// Holds no cached ranking state: every call reads the film store and the
/// like index fresh, so results never go stale relative to concurrent
/// like mutations.
#[derive(Debug)]
pub struct PopularityRanker {
    films: Arc<EntityStore<Film>>,
    likes: Arc<LikeIndex>,
}

impl PopularityRanker {
    /// Creates a ranker over the given film store and like index.
    #[must_use]
    pub fn new(films: Arc<EntityStore<Film>>, likes: Arc<LikeIndex>) -> Self {
        Self { films, likes }
    }

    /// Returns up to `count` films sorted by like count descending, ties
    /// broken by ascending identifier.
    ///
    /// The tie-break makes the output deterministic regardless of store
    /// iteration order. When `count` exceeds the number of films, all
    /// films are returned.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `count` is zero.
    pub fn top_films(&self, count: usize) -> Result<Vec<Film>> {
        if count == 0 {
            return Err(Error::invalid_argument("count must be positive"));
        }

        let counts = self.likes.counts_by_film();
        let mut films = self.films.list();
        films.sort_by(|a, b| {
            let likes_a = counts.get(&a.id).copied().unwrap_or(0);
            let likes_b = counts.get(&b.id).copied().unwrap_or(0);
            likes_b.cmp(&likes_a).then_with(|| a.id.cmp(&b.id))
        });
        films.truncate(count);

        log::debug!(
            "top {count} computed over {} films: {:?}",
            self.films.len(),
            films.iter().map(|film| film.id).collect::<Vec<_>>()
        );
        Ok(films)
    }
}
