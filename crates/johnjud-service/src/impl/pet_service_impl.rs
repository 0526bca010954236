//! Pet service implementation.

use super::classify;
use crate::dto::{FindAllPetsQuery, ImageDto, PetDto, PetListResponse};
use crate::filter::filter_pets;
use crate::image_service::ImageService;
use crate::mappers::assemble_images;
use crate::pet_service::PetService;
use async_trait::async_trait;
use chrono::Utc;
use johnjud_core::{paginate, JohnjudError, JohnjudResult, Logger, PetId, PetPatch};
use johnjud_repository::PetRepository;
use shaku::Component;
use std::sync::Arc;

/// Pet service backed by a repository and the remote image service.
#[derive(Component)]
#[shaku(interface = PetService)]
pub struct PetServiceImpl {
    #[shaku(inject)]
    pet_repository: Arc<dyn PetRepository>,
    #[shaku(inject)]
    image_service: Arc<dyn ImageService>,
    #[shaku(default = Logger::new("pet"))]
    logger: Logger,
}

impl PetServiceImpl {
    /// Creates a new pet service.
    #[must_use]
    pub fn new(
        pet_repository: Arc<dyn PetRepository>,
        image_service: Arc<dyn ImageService>,
        logger: Logger,
    ) -> Self {
        Self {
            pet_repository,
            image_service,
            logger,
        }
    }

    async fn images_of(&self, module: &str, pet_id: PetId) -> JohnjudResult<Vec<ImageDto>> {
        self.image_service
            .find_by_pet_id(pet_id)
            .await
            .map_err(|e| classify(&self.logger, module, e, "error querying image service"))
    }

    /// Applies a single-field patch to a pet that must currently exist.
    async fn patch_existing(
        &self,
        module: &str,
        id: PetId,
        patch: PetPatch,
    ) -> JohnjudResult<bool> {
        self.pet_repository
            .find_one(id)
            .await
            .map_err(|e| classify(&self.logger, module, e, "failed to query pet"))?
            .ok_or_else(|| JohnjudError::not_found("Pet", id))?;

        self.pet_repository
            .update(id, &patch)
            .await
            .map_err(|e| classify(&self.logger, module, e, "failed to update pet"))?
            .ok_or_else(|| JohnjudError::not_found("Pet", id))?;

        Ok(true)
    }
}

#[async_trait]
impl PetService for PetServiceImpl {
    async fn create(&self, pet: PetDto) -> JohnjudResult<PetDto> {
        self.logger.debug("create", format_args!("Creating pet: {}", pet.name));

        let mut record = pet.to_record()?;
        record.id = PetId::new();

        let created = self
            .pet_repository
            .create(&record)
            .await
            .map_err(|e| classify(&self.logger, "create", e, "failed to create pet"))?;

        let image_ids = pet.image_ids();
        if !image_ids.is_empty() {
            self.image_service
                .assign_pet(created.id, image_ids)
                .await
                .map_err(|e| {
                    classify(&self.logger, "create", e, "failed to assign pet to images")
                })?;
        }

        let images = self.images_of("create", created.id).await?;

        self.logger.info("create", format_args!("Pet created: {}", created.id));
        Ok(PetDto::from_record(&created, images))
    }

    async fn find_one(&self, id: PetId) -> JohnjudResult<PetDto> {
        self.logger.debug("find one", format_args!("Getting pet: {id}"));

        let pet = self
            .pet_repository
            .find_one(id)
            .await
            .map_err(|e| classify(&self.logger, "find one", e, "failed to query pet"))?
            .ok_or_else(|| JohnjudError::not_found("Pet", id))?;

        let images = self.images_of("find one", id).await?;
        Ok(PetDto::from_record(&pet, images))
    }

    async fn find_all(&self, query: FindAllPetsQuery) -> JohnjudResult<PetListResponse> {
        self.logger.debug(
            "find all",
            format_args!(
                "Listing pets, page: {}, size: {}, admin: {}",
                query.page, query.page_size, query.is_admin
            ),
        );

        let pets = self
            .pet_repository
            .find_all(query.is_admin)
            .await
            .map_err(|e| classify(&self.logger, "find all", e, "failed to query pets"))?;

        let pets = filter_pets(pets, &query.filter, Utc::now())
            .map_err(|e| classify(&self.logger, "find all", e, "failed to filter pets"))?;

        let page = paginate(pets, query.page, query.page_size);

        let mut images = Vec::with_capacity(page.len());
        for pet in &page.content {
            images.push(self.images_of("find all", pet.id).await?);
        }

        let pets = assemble_images(&page.content, images)?;
        Ok(PetListResponse {
            pets,
            metadata: page.info,
        })
    }

    async fn update(&self, id: PetId, pet: PetDto) -> JohnjudResult<PetDto> {
        self.logger.debug("update", format_args!("Updating pet: {id}"));

        let patch = pet.to_patch(id)?;
        let updated = self
            .pet_repository
            .update(id, &patch)
            .await
            .map_err(|e| classify(&self.logger, "update", e, "failed to update pet"))?
            .ok_or_else(|| JohnjudError::not_found("Pet", id))?;

        let images = self.images_of("update", id).await?;

        self.logger.info("update", format_args!("Pet updated: {id}"));
        Ok(PetDto::from_record(&updated, images))
    }

    async fn delete(&self, id: PetId) -> JohnjudResult<bool> {
        self.logger.debug("delete", format_args!("Deleting pet: {id}"));

        let deleted = self
            .pet_repository
            .delete(id)
            .await
            .map_err(|e| classify(&self.logger, "delete", e, "failed to delete pet"))?;

        if !deleted {
            return Err(JohnjudError::not_found("Pet", id));
        }

        self.logger.info("delete", format_args!("Pet deleted: {id}"));
        Ok(true)
    }

    async fn change_view(&self, id: PetId, visible: bool) -> JohnjudResult<bool> {
        self.logger
            .debug("change view", format_args!("Changing visibility of pet {id} to {visible}"));

        self.patch_existing("change view", id, PetPatch::visibility(visible))
            .await
    }

    async fn adopt_pet(&self, id: PetId, user_id: String) -> JohnjudResult<bool> {
        self.logger
            .debug("adopt pet", format_args!("User {user_id} adopting pet {id}"));

        if user_id.trim().is_empty() {
            return Err(JohnjudError::validation("user_id must not be empty"));
        }

        self.patch_existing("adopt pet", id, PetPatch::adoption(user_id))
            .await
    }
}

impl std::fmt::Debug for PetServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetServiceImpl").finish_non_exhaustive()
    }
}
