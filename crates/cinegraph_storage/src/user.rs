//! The user record and its field validation policy.

use chrono::{NaiveDate, Utc};

use cinegraph_foundation::{Error, Result, UserId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// A person who befriends other users and likes films.
///
/// A blank display name is normalized to the login on create and update;
/// this is the only field normalization in the system.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    /// Assigned identifier; [`UserId::UNASSIGNED`] on drafts.
    pub id: UserId,
    /// Contact address, never blank, must contain `@`.
    pub email: String,
    /// Unique-by-convention handle, never blank, no whitespace.
    pub login: String,
    /// Presentation name; defaults to the login when blank.
    pub display_name: String,
    /// Optional birth date, never in the future.
    pub birthday: Option<NaiveDate>,
}

impl User {
    /// Builds an unstored draft with the unassigned identifier.
    #[must_use]
    pub fn draft(
        email: impl Into<String>,
        login: impl Into<String>,
        display_name: impl Into<String>,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: UserId::UNASSIGNED,
            email: email.into(),
            login: login.into(),
            display_name: display_name.into(),
            birthday,
        }
    }
}

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> UserId {
        self.id
    }

    fn assign_id(&mut self, id: UserId) {
        self.id = id;
    }

    fn validate(&mut self) -> Result<()> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(Error::validation("email", "must be non-blank and contain '@'"));
        }
        if self.login.trim().is_empty() {
            return Err(Error::validation("login", "must not be blank"));
        }
        if self.login.chars().any(char::is_whitespace) {
            return Err(Error::validation("login", "must not contain whitespace"));
        }
        if let Some(birthday) = self.birthday {
            if birthday > Utc::now().date_naive() {
                return Err(Error::validation("birthday", "must not be in the future"));
            }
        }
        if self.display_name.trim().is_empty() {
            self.display_name = self.login.clone();
        }
        Ok(())
    }

    fn not_found(id: UserId) -> Error {
        Error::user_not_found(id)
    }
}
