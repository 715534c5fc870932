//! Symmetric friendship relation between users.
//!
//! Both directed entries are stored for every edge, so symmetry holds by
//! construction and lookups in either direction are O(1).

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use cinegraph_foundation::{Error, Result, UserId};

use crate::store::EntityStore;
use crate::user::User;

/// Owns the is-friend-of relation over user identifiers.
///
/// Endpoints are validated against the injected user store at mutation
/// time; since users are never deleted, stored edges always resolve.
#[derive(Debug)]
pub struct FriendshipGraph {
    users: Arc<EntityStore<User>>,
    edges: RwLock<HashMap<UserId, HashSet<UserId>>>,
}

impl FriendshipGraph {
    /// Creates an empty graph over the given user store.
    #[must_use]
    pub fn new(users: Arc<EntityStore<User>>) -> Self {
        Self {
            users,
            edges: RwLock::new(HashMap::new()),
        }
    }

    /// Records that `a` and `b` are friends.
    ///
    /// Adding an already-present edge is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `a == b`, or a not-found error
    /// if either user does not exist.
    pub fn add_friend(&self, a: UserId, b: UserId) -> Result<()> {
        if a == b {
            return Err(Error::invalid_argument("a user cannot befriend themselves"));
        }
        self.users.require(a)?;
        self.users.require(b)?;

        let mut edges = self.edges.write().unwrap();
        edges.entry(a).or_default().insert(b);
        edges.entry(b).or_default().insert(a);
        log::debug!("friendship added: {a} <-> {b}");
        Ok(())
    }

    /// Removes the friendship between `a` and `b`.
    ///
    /// Removing a non-existent edge is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `a == b`, or a not-found error
    /// if either user does not exist.
    pub fn remove_friend(&self, a: UserId, b: UserId) -> Result<()> {
        if a == b {
            return Err(Error::invalid_argument(
                "a user cannot unfriend themselves",
            ));
        }
        self.users.require(a)?;
        self.users.require(b)?;

        let mut edges = self.edges.write().unwrap();
        if let Some(friends) = edges.get_mut(&a) {
            friends.remove(&b);
        }
        if let Some(friends) = edges.get_mut(&b) {
            friends.remove(&a);
        }
        log::debug!("friendship removed: {a} <-> {b}");
        Ok(())
    }

    /// Checks whether an edge exists between `a` and `b`.
    #[must_use]
    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.edges
            .read()
            .unwrap()
            .get(&a)
            .is_some_and(|friends| friends.contains(&b))
    }

    /// Returns the resolved records of every current friend of `a`,
    /// sorted by identifier.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `a` does not exist.
    pub fn friends_of(&self, a: UserId) -> Result<Vec<User>> {
        self.users.require(a)?;

        let ids: Vec<UserId> = {
            let edges = self.edges.read().unwrap();
            edges.get(&a).into_iter().flatten().copied().collect()
        };
        self.resolve(&ids)
    }

    /// Returns the friends `a` and `b` share, sorted by identifier.
    ///
    /// For `a == b` this is `a`'s full friend set: the intersection of a
    /// set with itself.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if either user does not exist.
    pub fn common_friends(&self, a: UserId, b: UserId) -> Result<Vec<User>> {
        self.users.require(a)?;
        self.users.require(b)?;

        let ids: Vec<UserId> = {
            let edges = self.edges.read().unwrap();
            let empty = HashSet::new();
            let friends_a = edges.get(&a).unwrap_or(&empty);
            let friends_b = edges.get(&b).unwrap_or(&empty);
            friends_a.intersection(friends_b).copied().collect()
        };
        self.resolve(&ids)
    }

    // Resolves edge endpoints to full records. Friend ids always exist
    // (checked on insert, never deleted), but lookups still propagate.
    fn resolve(&self, ids: &[UserId]) -> Result<Vec<User>> {
        let mut friends = ids
            .iter()
            .map(|id| self.users.get(*id))
            .collect::<Result<Vec<_>>>()?;
        friends.sort_by_key(|user| user.id);
        Ok(friends)
    }
}
