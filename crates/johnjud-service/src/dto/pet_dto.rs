//! Pet-related DTOs.

use crate::filter::PetFilter;
use johnjud_core::PageInfo;
use serde::{Deserialize, Serialize};

/// Image reference as returned by the image service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageDto {
    pub id: String,
    pub pet_id: String,
    pub image_url: String,
    pub object_key: String,
}

/// Wire-side pet.
///
/// `gender` and `status` carry their string labels. Flags are `None` when
/// the caller did not supply them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PetDto {
    pub id: String,
    pub pet_type: String,
    pub species: Option<String>,
    pub name: String,
    pub birthdate: String,
    pub gender: String,
    pub color: String,
    pub pattern: String,
    pub habit: String,
    pub caption: String,
    pub status: String,
    pub images: Vec<ImageDto>,
    pub is_sterile: Option<bool>,
    pub is_vaccinated: Option<bool>,
    pub is_visible: Option<bool>,
    pub is_club_pet: Option<bool>,
    pub origin: String,
    pub address: String,
    pub contact: String,
    pub adopt_by: Option<String>,
}

impl PetDto {
    /// Ids of the attached images, in order.
    #[must_use]
    pub fn image_ids(&self) -> Vec<String> {
        extract_image_ids(&self.images)
    }
}

/// Reduces an image list to its ids.
#[must_use]
pub fn extract_image_ids(images: &[ImageDto]) -> Vec<String> {
    images.iter().map(|i| i.id.clone()).collect()
}

/// Listing query: filter plus page window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindAllPetsQuery {
    pub filter: PetFilter,
    /// 1-based; values `<= 0` read as the first page.
    pub page: i32,
    /// Values `<= 0` put every match on one page.
    pub page_size: i32,
    /// Admins also see pets marked invisible.
    pub is_admin: bool,
}

/// One page of pets with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetListResponse {
    pub pets: Vec<PetDto>,
    pub metadata: PageInfo,
}
