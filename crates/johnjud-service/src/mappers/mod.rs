//! Conversion between wire DTOs and storage records.
//!
//! Outbound conversion is total. Inbound conversion rejects a malformed id
//! and reads unknown enum labels as `Unspecified`.

use crate::dto::{ImageDto, LikeDto, PetDto};
use johnjud_core::{
    Gender, JohnjudError, JohnjudResult, Like, LikeId, Pet, PetId, PetPatch, PetStatus, UserId,
    ValidateExt,
};

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl PetDto {
    /// Builds the outgoing DTO for `pet` with its images attached.
    #[must_use]
    pub fn from_record(pet: &Pet, images: Vec<ImageDto>) -> Self {
        Self {
            id: pet.id.to_string(),
            pet_type: pet.pet_type.clone(),
            species: pet.species.clone(),
            name: pet.name.clone(),
            birthdate: pet.birthdate.clone(),
            gender: pet.gender.as_str().to_string(),
            color: pet.color.clone(),
            pattern: pet.pattern.clone(),
            habit: pet.habit.clone(),
            caption: pet.caption.clone(),
            status: pet.status.as_str().to_string(),
            images,
            is_sterile: pet.is_sterile,
            is_vaccinated: pet.is_vaccinated,
            is_visible: pet.is_visible,
            is_club_pet: pet.is_club_pet,
            origin: pet.origin.clone(),
            address: pet.address.clone(),
            contact: pet.contact.clone(),
            adopt_by: pet.adopt_by.clone(),
        }
    }

    /// Builds a storage record from the DTO.
    ///
    /// An empty id yields a freshly generated one. Timestamps are left at
    /// their defaults for the repository to set.
    pub fn to_record(&self) -> JohnjudResult<Pet> {
        let id = if self.id.is_empty() {
            PetId::new()
        } else {
            PetId::parse(&self.id).map_err(|e| {
                JohnjudError::validation(format!("invalid pet id '{}': {e}", self.id))
            })?
        };

        Ok(Pet {
            id,
            pet_type: self.pet_type.clone(),
            species: self.species.clone(),
            name: self.name.clone(),
            birthdate: self.birthdate.clone(),
            gender: Gender::from_label(&self.gender),
            color: self.color.clone(),
            pattern: self.pattern.clone(),
            habit: self.habit.clone(),
            caption: self.caption.clone(),
            status: PetStatus::from_label(&self.status),
            is_sterile: self.is_sterile,
            is_vaccinated: self.is_vaccinated,
            is_visible: self.is_visible,
            is_club_pet: self.is_club_pet,
            origin: self.origin.clone(),
            address: self.address.clone(),
            contact: self.contact.clone(),
            adopt_by: self.adopt_by.clone().filter(|s| !s.is_empty()),
            ..Pet::default()
        })
    }

    /// Builds the patch applied to pet `id` by an update.
    ///
    /// Empty strings, `Unspecified` enums and absent flags leave the stored
    /// value unchanged. A non-empty DTO id must parse and name `id`.
    pub fn to_patch(&self, id: PetId) -> JohnjudResult<PetPatch> {
        if !self.id.is_empty() {
            let own = PetId::parse(&self.id).map_err(|e| {
                JohnjudError::validation(format!("invalid pet id '{}': {e}", self.id))
            })?;
            if own != id {
                return Err(JohnjudError::validation(format!(
                    "pet id '{own}' does not match request id '{id}'"
                )));
            }
        }

        let gender = Gender::from_label(&self.gender);
        let status = PetStatus::from_label(&self.status);

        Ok(PetPatch {
            pet_type: non_empty(&self.pet_type),
            species: self.species.as_deref().and_then(non_empty),
            name: non_empty(&self.name),
            birthdate: non_empty(&self.birthdate),
            gender: (!gender.is_unspecified()).then_some(gender),
            color: non_empty(&self.color),
            pattern: non_empty(&self.pattern),
            habit: non_empty(&self.habit),
            caption: non_empty(&self.caption),
            status: (!status.is_unspecified()).then_some(status),
            is_sterile: self.is_sterile,
            is_vaccinated: self.is_vaccinated,
            is_visible: self.is_visible,
            is_club_pet: self.is_club_pet,
            origin: non_empty(&self.origin),
            address: non_empty(&self.address),
            contact: non_empty(&self.contact),
            adopt_by: self.adopt_by.as_deref().and_then(non_empty),
        })
    }
}

/// Pairs each pet with its image list, position by position.
///
/// `images[i]` belongs to `pets[i]`. Mismatched lengths are an error; the
/// longer side is never truncated.
pub fn assemble_images(pets: &[Pet], images: Vec<Vec<ImageDto>>) -> JohnjudResult<Vec<PetDto>> {
    if pets.len() != images.len() {
        return Err(JohnjudError::internal(format!(
            "cannot assemble {} pets with {} image lists",
            pets.len(),
            images.len()
        )));
    }

    Ok(pets
        .iter()
        .zip(images)
        .map(|(pet, images)| PetDto::from_record(pet, images))
        .collect())
}

impl From<&Like> for LikeDto {
    fn from(like: &Like) -> Self {
        Self {
            id: like.id.to_string(),
            user_id: like.user_id.to_string(),
            pet_id: like.pet_id.to_string(),
        }
    }
}

impl LikeDto {
    /// Validates the DTO and builds a fresh like record from it.
    pub fn to_record(&self) -> JohnjudResult<Like> {
        self.validate_request()?;

        let user_id = UserId::parse(&self.user_id)
            .map_err(|e| JohnjudError::validation(format!("user_id: {e}")))?;
        let pet_id = PetId::parse(&self.pet_id)
            .map_err(|e| JohnjudError::validation(format!("pet_id: {e}")))?;

        let mut like = Like::new(user_id, pet_id);
        if !self.id.is_empty() {
            like.id = LikeId::parse(&self.id)
                .map_err(|e| JohnjudError::validation(format!("id: {e}")))?;
        }
        Ok(like)
    }
}
