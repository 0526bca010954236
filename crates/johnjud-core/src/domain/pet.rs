//! Pet record and its partial-update patch.

use super::{Gender, PetStatus};
use crate::{JohnjudError, JohnjudResult, PetId};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Pet as persisted in storage.
///
/// The nullable flags distinguish "unknown" (`None`) from `false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub pet_type: String,
    pub species: Option<String>,
    pub name: String,
    /// RFC 3339 timestamp or a `YYYY-MM-DD` date.
    pub birthdate: String,
    pub gender: Gender,
    pub color: String,
    pub pattern: String,
    pub habit: String,
    pub caption: String,
    pub status: PetStatus,
    pub is_sterile: Option<bool>,
    pub is_vaccinated: Option<bool>,
    pub is_visible: Option<bool>,
    pub is_club_pet: Option<bool>,
    pub origin: String,
    pub address: String,
    pub contact: String,
    /// Free-text id of the adopting user, set only by adoption.
    pub adopt_by: Option<String>,
}

impl Pet {
    /// Returns the pet's age in fractional years at `now`.
    ///
    /// Uses a fixed 365-day year. Fails when the stored birthdate does not
    /// parse.
    #[allow(clippy::cast_precision_loss)]
    pub fn age_at(&self, now: DateTime<Utc>) -> JohnjudResult<f64> {
        let birthdate = parse_birthdate(&self.birthdate).ok_or_else(|| {
            JohnjudError::internal(format!(
                "pet {} has an unparseable birthdate '{}'",
                self.id, self.birthdate
            ))
        })?;

        let hours = (now - birthdate).num_seconds() as f64 / 3600.0;
        Ok(hours / HOURS_PER_DAY / DAYS_PER_YEAR)
    }

    /// Returns true unless the record has been soft-deleted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Parses a stored birthdate.
///
/// Accepts a full RFC 3339 timestamp or a date-only `YYYY-MM-DD` string,
/// which is read as midnight UTC.
#[must_use]
pub fn parse_birthdate(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

/// Explicit set of patchable pet fields.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PetPatch {
    pub pet_type: Option<String>,
    pub species: Option<String>,
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub gender: Option<Gender>,
    pub color: Option<String>,
    pub pattern: Option<String>,
    pub habit: Option<String>,
    pub caption: Option<String>,
    pub status: Option<PetStatus>,
    pub is_sterile: Option<bool>,
    pub is_vaccinated: Option<bool>,
    pub is_visible: Option<bool>,
    pub is_club_pet: Option<bool>,
    pub origin: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub adopt_by: Option<String>,
}

impl PetPatch {
    /// Patch touching only the visibility flag.
    #[must_use]
    pub fn visibility(visible: bool) -> Self {
        Self {
            is_visible: Some(visible),
            ..Self::default()
        }
    }

    /// Patch touching only the adopting user.
    #[must_use]
    pub fn adoption(user_id: impl Into<String>) -> Self {
        Self {
            adopt_by: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// Returns true when the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies every present field to `pet`.
    pub fn apply_to(&self, pet: &mut Pet) {
        fn set<T: Clone>(target: &mut T, value: Option<&T>) {
            if let Some(v) = value {
                target.clone_from(v);
            }
        }

        set(&mut pet.pet_type, self.pet_type.as_ref());
        if self.species.is_some() {
            pet.species.clone_from(&self.species);
        }
        set(&mut pet.name, self.name.as_ref());
        set(&mut pet.birthdate, self.birthdate.as_ref());
        set(&mut pet.gender, self.gender.as_ref());
        set(&mut pet.color, self.color.as_ref());
        set(&mut pet.pattern, self.pattern.as_ref());
        set(&mut pet.habit, self.habit.as_ref());
        set(&mut pet.caption, self.caption.as_ref());
        set(&mut pet.status, self.status.as_ref());
        pet.is_sterile = self.is_sterile.or(pet.is_sterile);
        pet.is_vaccinated = self.is_vaccinated.or(pet.is_vaccinated);
        pet.is_visible = self.is_visible.or(pet.is_visible);
        pet.is_club_pet = self.is_club_pet.or(pet.is_club_pet);
        set(&mut pet.origin, self.origin.as_ref());
        set(&mut pet.address, self.address.as_ref());
        set(&mut pet.contact, self.contact.as_ref());
        if self.adopt_by.is_some() {
            pet.adopt_by.clone_from(&self.adopt_by);
        }
    }
}
