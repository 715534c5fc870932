//! Integration tests for the like index.
//!
//! Tests set semantics, idempotent add/remove, and referential checks
//! against both stores.

use std::sync::Arc;

use chrono::NaiveDate;
use cinegraph::foundation::{FilmId, UserId};
use cinegraph::storage::{EntityStore, Film, LikeIndex, User};

struct Fixture {
    users: Arc<EntityStore<User>>,
    films: Arc<EntityStore<Film>>,
    likes: LikeIndex,
}

fn fixture() -> Fixture {
    let users = Arc::new(EntityStore::new());
    let films = Arc::new(EntityStore::new());
    let likes = LikeIndex::new(Arc::clone(&users), Arc::clone(&films));
    Fixture {
        users,
        films,
        likes,
    }
}

impl Fixture {
    fn user(&self, login: &str) -> UserId {
        self.users
            .create(User::draft(format!("{login}@example.com"), login, "", None))
            .unwrap()
            .id
    }

    fn film(&self, name: &str) -> FilmId {
        self.films
            .create(Film::draft(
                name,
                None,
                NaiveDate::from_ymd_opt(1994, 9, 23).unwrap(),
                142,
            ))
            .unwrap()
            .id
    }
}

#[test]
fn double_like_counts_once() {
    let fx = fixture();
    let user = fx.user("fan");
    let film = fx.film("The Shawshank Redemption");

    fx.likes.add_like(user, film).unwrap();
    fx.likes.add_like(user, film).unwrap();

    assert_eq!(fx.likes.like_count(film).unwrap(), 1);
}

#[test]
fn likes_from_distinct_users_accumulate() {
    let fx = fixture();
    let film = fx.film("Heat");
    for n in 0..4 {
        let user = fx.user(&format!("fan{n}"));
        fx.likes.add_like(user, film).unwrap();
    }

    assert_eq!(fx.likes.like_count(film).unwrap(), 4);
}

#[test]
fn remove_like_round_trips() {
    let fx = fixture();
    let user = fx.user("fan");
    let film = fx.film("Se7en");

    fx.likes.add_like(user, film).unwrap();
    fx.likes.remove_like(user, film).unwrap();

    assert_eq!(fx.likes.like_count(film).unwrap(), 0);
    assert!(!fx.likes.is_liked_by(user, film));
}

#[test]
fn removing_an_absent_like_is_a_no_op_success() {
    let fx = fixture();
    let user = fx.user("fan");
    let film = fx.film("Fargo");

    fx.likes.remove_like(user, film).unwrap();
    fx.likes.remove_like(user, film).unwrap();

    assert_eq!(fx.likes.like_count(film).unwrap(), 0);
}

#[test]
fn endpoints_are_checked_against_both_stores() {
    let fx = fixture();
    let user = fx.user("fan");
    let film = fx.film("Jaws");

    assert!(fx.likes.add_like(user, FilmId::new(404)).unwrap_err().is_not_found());
    assert!(fx.likes.add_like(UserId::new(404), film).unwrap_err().is_not_found());
    assert!(fx.likes.remove_like(user, FilmId::new(404)).unwrap_err().is_not_found());
}

#[test]
fn like_count_is_zero_for_a_film_never_liked() {
    let fx = fixture();
    let film = fx.film("Stalker");

    assert_eq!(fx.likes.like_count(film).unwrap(), 0);
}

#[test]
fn like_count_of_unknown_film_is_not_found() {
    let fx = fixture();
    assert!(fx.likes.like_count(FilmId::new(1)).unwrap_err().is_not_found());
}

#[test]
fn one_user_can_like_many_films() {
    let fx = fixture();
    let user = fx.user("cinephile");
    let films: Vec<_> = (0..3).map(|n| fx.film(&format!("film{n}"))).collect();

    for &film in &films {
        fx.likes.add_like(user, film).unwrap();
    }
    for &film in &films {
        assert_eq!(fx.likes.like_count(film).unwrap(), 1);
    }
}
