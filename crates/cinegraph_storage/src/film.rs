//! The film record and its field validation policy.

use chrono::NaiveDate;

use cinegraph_foundation::{Error, FilmId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// Maximum admissible description length, in characters.
pub(crate) const MAX_DESCRIPTION_CHARS: usize = 200;

/// Earliest admissible release date: the first public film screening.
pub const EARLIEST_RELEASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1895, 12, 28) {
    Some(date) => date,
    None => panic!("1895-12-28 is a valid date"),
};

/// A media title.
///
/// The identifier is assigned by the film store on creation and immutable
/// afterward; all other fields are replaceable via update.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Film {
    /// Assigned identifier; [`FilmId::UNASSIGNED`] on drafts.
    pub id: FilmId,
    /// Title, never blank.
    pub name: String,
    /// Optional description, at most 200 characters.
    pub description: Option<String>,
    /// Release date, not before [`EARLIEST_RELEASE_DATE`].
    pub release_date: NaiveDate,
    /// Running time in minutes, strictly positive.
    pub duration_minutes: u32,
}

impl Film {
    /// Builds an unstored draft with the unassigned identifier.
    #[must_use]
    pub fn draft(
        name: impl Into<String>,
        description: Option<String>,
        release_date: NaiveDate,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: FilmId::UNASSIGNED,
            name: name.into(),
            description,
            release_date,
            duration_minutes,
        }
    }
}

impl Entity for Film {
    type Id = FilmId;
    const KIND: &'static str = "film";

    fn id(&self) -> FilmId {
        self.id
    }

    fn assign_id(&mut self, id: FilmId) {
        self.id = id;
    }

    fn validate(&mut self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "must not be blank"));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_CHARS {
                return Err(Error::validation(
                    "description",
                    format!("must be at most {MAX_DESCRIPTION_CHARS} characters"),
                ));
            }
        }
        if self.release_date < EARLIEST_RELEASE_DATE {
            return Err(Error::validation(
                "release_date",
                format!("must not precede {EARLIEST_RELEASE_DATE}"),
            ));
        }
        if self.duration_minutes == 0 {
            return Err(Error::validation(
                "duration_minutes",
                "must be positive",
            ));
        }
        Ok(())
    }

    fn not_found(id: FilmId) -> Error {
        Error::film_not_found(id)
    }
}
