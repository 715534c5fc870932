//! Integration tests for the error taxonomy.
//!
//! A presentation layer maps each kind to a transport status, so the kind
//! predicates and display strings are part of the contract.

use cinegraph::foundation::{Error, ErrorKind, FilmId, UserId};

#[test]
fn three_kinds_are_distinguishable() {
    let validation = Error::validation("name", "must not be blank");
    let not_found = Error::user_not_found(UserId::new(3));
    let invalid = Error::invalid_argument("count must be positive");

    assert!(validation.is_validation());
    assert!(not_found.is_not_found());
    assert!(invalid.is_invalid_argument());

    assert!(!validation.is_not_found());
    assert!(!not_found.is_invalid_argument());
    assert!(!invalid.is_validation());
}

#[test]
fn not_found_distinguishes_entity_kind() {
    let film = Error::film_not_found(FilmId::new(9));
    let user = Error::user_not_found(UserId::new(9));

    assert!(matches!(film.kind, ErrorKind::FilmNotFound(_)));
    assert!(matches!(user.kind, ErrorKind::UserNotFound(_)));
    assert!(format!("{film}").contains("film"));
    assert!(format!("{user}").contains("user"));
}

#[test]
fn validation_display_names_field_and_reason() {
    let err = Error::validation("release_date", "must not precede 1895-12-28");
    let msg = format!("{err}");

    assert!(msg.contains("release_date"));
    assert!(msg.contains("1895-12-28"));
}

#[test]
fn errors_implement_std_error() {
    fn accepts_std_error(_: &dyn std::error::Error) {}
    accepts_std_error(&Error::invalid_argument("nope"));
}
