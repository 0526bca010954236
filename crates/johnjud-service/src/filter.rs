//! In-memory pet filtering.
//!
//! Every non-empty criterion must hold for a pet to survive. The age window
//! always applies; `max_age == 0` leaves it open at the top.

use chrono::{DateTime, Utc};
use johnjud_core::{JohnjudResult, Pet};
use tracing::trace;

/// Filter criteria for listing pets.
///
/// Empty strings mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    /// Minimum age in years, inclusive.
    pub min_age: i32,
    /// Maximum age in years, inclusive. `0` means unbounded.
    pub max_age: i32,
    /// Case-sensitive substring of the pet's name.
    pub search: String,
    pub pet_type: String,
    /// Gender label, compared against the stored label.
    pub gender: String,
    pub color: String,
    pub origin: String,
}

impl PetFilter {
    fn age_bounds(&self) -> (f64, f64) {
        let max = if self.max_age == 0 {
            f64::INFINITY
        } else {
            f64::from(self.max_age)
        };
        (f64::from(self.min_age), max)
    }

    /// Returns whether `pet` satisfies every criterion at `now`.
    ///
    /// Fails when the pet's birthdate cannot be parsed.
    pub fn matches(&self, pet: &Pet, now: DateTime<Utc>) -> JohnjudResult<bool> {
        let (min_age, max_age) = self.age_bounds();
        let age = pet.age_at(now)?;

        if age < min_age || age > max_age {
            trace!(pet_id = %pet.id, age, "rejected: age not in range");
            return Ok(false);
        }
        if !self.search.is_empty() && !pet.name.contains(&self.search) {
            trace!(pet_id = %pet.id, "rejected: name does not match search");
            return Ok(false);
        }
        if !self.pet_type.is_empty() && pet.pet_type != self.pet_type {
            trace!(pet_id = %pet.id, "rejected: type");
            return Ok(false);
        }
        if !self.gender.is_empty() && pet.gender.as_str() != self.gender {
            trace!(pet_id = %pet.id, "rejected: gender");
            return Ok(false);
        }
        if !self.color.is_empty() && pet.color != self.color {
            trace!(pet_id = %pet.id, "rejected: color");
            return Ok(false);
        }
        if !self.origin.is_empty() && pet.origin != self.origin {
            trace!(pet_id = %pet.id, "rejected: origin");
            return Ok(false);
        }

        Ok(true)
    }
}

/// Keeps the pets matching `filter`, preserving input order.
///
/// One unparseable birthdate fails the whole call.
pub fn filter_pets(
    pets: Vec<Pet>,
    filter: &PetFilter,
    now: DateTime<Utc>,
) -> JohnjudResult<Vec<Pet>> {
    let mut kept = Vec::with_capacity(pets.len());
    for pet in pets {
        if filter.matches(&pet, now)? {
            kept.push(pet);
        }
    }
    Ok(kept)
}
