//! Directed liked relation from users to films.
//!
//! Likes have set semantics: a given (user, film) pair is present at most
//! once, so repeated likes never inflate counts.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use cinegraph_foundation::{FilmId, Result, UserId};

use crate::film::Film;
use crate::store::EntityStore;
use crate::user::User;

/// Owns the liked relation from user identifiers to film identifiers.
///
/// Keyed by film for O(1) per-film counting; endpoints are validated
/// against the injected stores at mutation time.
#[derive(Debug)]
pub struct LikeIndex {
    users: Arc<EntityStore<User>>,
    films: Arc<EntityStore<Film>>,
    likes: RwLock<HashMap<FilmId, HashSet<UserId>>>,
}

impl LikeIndex {
    /// Creates an empty index over the given stores.
    #[must_use]
    pub fn new(users: Arc<EntityStore<User>>, films: Arc<EntityStore<Film>>) -> Self {
        Self {
            users,
            films,
            likes: RwLock::new(HashMap::new()),
        }
    }

    /// Records that `user` likes `film`.
    ///
    /// A second call with the same pair changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if either endpoint does not exist.
    pub fn add_like(&self, user: UserId, film: FilmId) -> Result<()> {
        self.users.require(user)?;
        self.films.require(film)?;

        let mut likes = self.likes.write().unwrap();
        let fans = likes.entry(film).or_default();
        fans.insert(user);
        log::debug!("like added: user {user} -> film {film} ({} total)", fans.len());
        Ok(())
    }

    /// Removes `user`'s like of `film`.
    ///
    /// Removing an absent like is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if either endpoint does not exist.
    pub fn remove_like(&self, user: UserId, film: FilmId) -> Result<()> {
        self.users.require(user)?;
        self.films.require(film)?;

        let mut likes = self.likes.write().unwrap();
        if let Some(fans) = likes.get_mut(&film) {
            fans.remove(&user);
        }
        log::debug!("like removed: user {user} -> film {film}");
        Ok(())
    }

    /// Checks whether `user` currently likes `film`.
    #[must_use]
    pub fn is_liked_by(&self, user: UserId, film: FilmId) -> bool {
        self.likes
            .read()
            .unwrap()
            .get(&film)
            .is_some_and(|fans| fans.contains(&user))
    }

    /// Returns the number of distinct users who currently like `film`;
    /// 0 for an existing film with no recorded likes.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the film itself does not exist.
    pub fn like_count(&self, film: FilmId) -> Result<usize> {
        self.films.require(film)?;
        Ok(self
            .likes
            .read()
            .unwrap()
            .get(&film)
            .map_or(0, HashSet::len))
    }

    /// Snapshots the per-film like counts under one lock acquisition.
    /// Films with no recorded likes are absent from the map.
    pub(crate) fn counts_by_film(&self) -> HashMap<FilmId, usize> {
        self.likes
            .read()
            .unwrap()
            .iter()
            .map(|(film, fans)| (*film, fans.len()))
            .collect()
    }
}
