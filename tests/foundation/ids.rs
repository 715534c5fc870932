//! Integration tests for typed identifiers and identity allocation.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use cinegraph::foundation::{FilmId, IdAllocator, UserId};

// =============================================================================
// Typed identifiers
// =============================================================================

#[test]
fn film_and_user_ids_are_distinct_types() {
    // Same raw value, different kinds; they never compare across types.
    let film = FilmId::new(1);
    let user = UserId::new(1);

    assert_eq!(film.raw(), user.raw());
    assert_eq!(format!("{film}"), format!("{user}"));
}

#[test]
fn unassigned_sentinel_is_below_every_allocated_id() {
    let alloc = IdAllocator::new();
    let first = FilmId::new(alloc.next_id());

    assert!(FilmId::UNASSIGNED < first);
    assert!(!first.is_unassigned());
}

#[test]
fn ids_can_key_collections() {
    let mut seen = HashSet::new();
    assert!(seen.insert(UserId::new(1)));
    assert!(seen.insert(UserId::new(2)));
    assert!(!seen.insert(UserId::new(1)));
}

// =============================================================================
// Identity allocation
// =============================================================================

#[test]
fn allocation_starts_at_one_and_increases() {
    let alloc = IdAllocator::new();
    assert_eq!(alloc.next_id(), 1);
    assert_eq!(alloc.next_id(), 2);
    assert_eq!(alloc.next_id(), 3);
}

#[test]
fn independent_allocators_do_not_share_a_counter() {
    let films = IdAllocator::new();
    let users = IdAllocator::new();

    assert_eq!(films.next_id(), 1);
    assert_eq!(users.next_id(), 1);
}

#[test]
fn concurrent_allocation_is_duplicate_free() {
    let alloc = Arc::new(IdAllocator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let alloc = Arc::clone(&alloc);
            thread::spawn(move || (0..1000).map(|_| alloc.next_id()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id));
        }
    }
    assert_eq!(seen.len(), 4000);
}
