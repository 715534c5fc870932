//! Generic validated entity storage with identity assignment.
//!
//! One [`EntityStore`] instance exists per entity kind. The store owns the
//! authoritative record map, runs the kind's field policy on every create
//! and update, and assigns identifiers on creation. Records are never
//! destroyed; identifiers are never reused.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::RwLock;

use cinegraph_foundation::{Error, IdAllocator, Result};

/// A storable entity kind with its field validation policy.
///
/// `validate` may normalize the draft in place (e.g. defaulting a blank
/// display name) before it is stored; it runs on create and update alike.
pub trait Entity: Clone {
    /// The typed identifier for this kind.
    type Id: Copy + Eq + Ord + Hash + From<u64> + fmt::Debug + fmt::Display;

    /// Kind name used in log output.
    const KIND: &'static str;

    /// Returns this record's identifier.
    fn id(&self) -> Self::Id;

    /// Assigns the identifier on creation.
    fn assign_id(&mut self, id: Self::Id);

    /// Validates field rules, applying any defined normalizations.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    fn validate(&mut self) -> Result<()>;

    /// Builds the not-found error for this kind.
    fn not_found(id: Self::Id) -> Error;
}

/// Owns the authoritative record set for one entity kind.
///
/// All methods take `&self`; the record map sits behind an `RwLock` and
/// every mutation holds the write lock for the whole logical change, so
/// concurrent callers observe each operation atomically.
#[derive(Debug)]
pub struct EntityStore<T: Entity> {
    records: RwLock<HashMap<T::Id, T>>,
    ids: IdAllocator,
}

impl<T: Entity> EntityStore<T> {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            ids: IdAllocator::new(),
        }
    }

    /// Validates a draft, assigns a fresh identifier, and stores the record.
    ///
    /// Returns the stored record, including the assigned identifier and any
    /// defaulted fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any field rule is violated; the draft
    /// is not stored in that case.
    pub fn create(&self, mut draft: T) -> Result<T> {
        draft.validate()?;
        draft.assign_id(T::Id::from(self.ids.next_id()));
        let id = draft.id();
        self.records.write().unwrap().insert(id, draft.clone());
        log::info!("{} created: id={id}", T::KIND);
        Ok(draft)
    }

    /// Re-validates and wholesale-replaces an existing record.
    ///
    /// The identifier is immutable: the stored record is looked up and
    /// replaced under the record's own id, with no partial-field merge.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any field rule is violated, or a
    /// not-found error if the identifier was never created.
    pub fn update(&self, mut record: T) -> Result<T> {
        record.validate()?;
        let id = record.id();
        let mut records = self.records.write().unwrap();
        if !records.contains_key(&id) {
            return Err(T::not_found(id));
        }
        records.insert(id, record.clone());
        log::info!("{} updated: id={id}", T::KIND);
        Ok(record)
    }

    /// Fetches a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the identifier is absent.
    pub fn get(&self, id: T::Id) -> Result<T> {
        self.records
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| T::not_found(id))
    }

    /// Returns all current records in unspecified order.
    ///
    /// Callers must not depend on the iteration order; any caller-visible
    /// ordering is applied explicitly by the caller.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.records.read().unwrap().values().cloned().collect()
    }

    /// Checks whether an identifier exists in this store.
    #[must_use]
    pub fn contains(&self, id: T::Id) -> bool {
        self.records.read().unwrap().contains_key(&id)
    }

    /// Requires an identifier to exist.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the identifier is absent.
    pub fn require(&self, id: T::Id) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(T::not_found(id))
        }
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Returns true if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
