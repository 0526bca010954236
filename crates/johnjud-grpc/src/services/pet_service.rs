//! Pet gRPC service implementation.

use super::status::{parse_pet_id, to_status};
use crate::proto::{image, pet};
use johnjud_core::PageInfo;
use johnjud_service::{FindAllPetsQuery, ImageDto, PetDto, PetFilter, PetService};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::debug;

/// Pet gRPC service implementation.
pub struct PetGrpcService {
    pet_service: Arc<dyn PetService>,
}

impl PetGrpcService {
    /// Creates a new pet gRPC service.
    pub fn new(pet_service: Arc<dyn PetService>) -> Self {
        Self { pet_service }
    }
}

#[tonic::async_trait]
impl pet::pet_service_server::PetService for PetGrpcService {
    async fn find_all(
        &self,
        request: Request<pet::FindAllPetRequest>,
    ) -> Result<Response<pet::FindAllPetResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC FindAll: page {} size {}", req.page, req.page_size);

        let query = FindAllPetsQuery {
            filter: PetFilter {
                min_age: req.min_age,
                max_age: req.max_age,
                search: req.search,
                pet_type: req.r#type,
                gender: req.gender,
                color: req.color,
                origin: req.origin,
            },
            page: req.page,
            page_size: req.page_size,
            is_admin: req.is_admin,
        };

        let response = self
            .pet_service
            .find_all(query)
            .await
            .map_err(to_status)?;

        Ok(Response::new(pet::FindAllPetResponse {
            pets: response.pets.into_iter().map(to_proto_pet).collect(),
            metadata: Some(to_proto_metadata(&response.metadata)),
        }))
    }

    async fn find_one(
        &self,
        request: Request<pet::FindOnePetRequest>,
    ) -> Result<Response<pet::FindOnePetResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC FindOne: {}", req.id);

        let id = parse_pet_id(&req.id)?;
        let found = self.pet_service.find_one(id).await.map_err(to_status)?;

        Ok(Response::new(pet::FindOnePetResponse {
            pet: Some(to_proto_pet(found)),
        }))
    }

    async fn create(
        &self,
        request: Request<pet::CreatePetRequest>,
    ) -> Result<Response<pet::CreatePetResponse>, Status> {
        let req = request.into_inner();
        let pet = req
            .pet
            .ok_or_else(|| Status::invalid_argument("pet is required"))?;
        debug!("gRPC Create: {}", pet.name);

        let created = self
            .pet_service
            .create(from_proto_pet(pet))
            .await
            .map_err(to_status)?;

        Ok(Response::new(pet::CreatePetResponse {
            pet: Some(to_proto_pet(created)),
        }))
    }

    async fn update(
        &self,
        request: Request<pet::UpdatePetRequest>,
    ) -> Result<Response<pet::UpdatePetResponse>, Status> {
        let req = request.into_inner();
        let pet = req
            .pet
            .ok_or_else(|| Status::invalid_argument("pet is required"))?;
        let raw_id = if req.id.is_empty() { &pet.id } else { &req.id };
        debug!("gRPC Update: {}", raw_id);

        let id = parse_pet_id(raw_id)?;
        let updated = self
            .pet_service
            .update(id, from_proto_pet(pet))
            .await
            .map_err(to_status)?;

        Ok(Response::new(pet::UpdatePetResponse {
            pet: Some(to_proto_pet(updated)),
        }))
    }

    async fn change_view(
        &self,
        request: Request<pet::ChangeViewPetRequest>,
    ) -> Result<Response<pet::ChangeViewPetResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC ChangeView: {} -> {}", req.id, req.visible);

        let id = parse_pet_id(&req.id)?;
        let success = self
            .pet_service
            .change_view(id, req.visible)
            .await
            .map_err(to_status)?;

        Ok(Response::new(pet::ChangeViewPetResponse { success }))
    }

    async fn delete(
        &self,
        request: Request<pet::DeletePetRequest>,
    ) -> Result<Response<pet::DeletePetResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC Delete: {}", req.id);

        let id = parse_pet_id(&req.id)?;
        let success = self.pet_service.delete(id).await.map_err(to_status)?;

        Ok(Response::new(pet::DeletePetResponse { success }))
    }

    async fn adopt_pet(
        &self,
        request: Request<pet::AdoptPetRequest>,
    ) -> Result<Response<pet::AdoptPetResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC AdoptPet: {} by {}", req.pet_id, req.user_id);

        let id = parse_pet_id(&req.pet_id)?;
        let success = self
            .pet_service
            .adopt_pet(id, req.user_id)
            .await
            .map_err(to_status)?;

        Ok(Response::new(pet::AdoptPetResponse { success }))
    }
}

// Helper functions

fn saturating_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn to_proto_metadata(info: &PageInfo) -> pet::FindAllPetMetaData {
    pet::FindAllPetMetaData {
        page: saturating_i32(info.page),
        total_pages: saturating_i32(info.total_pages),
        page_size: saturating_i32(info.page_size),
        total: saturating_i32(info.total),
    }
}

pub(crate) fn to_proto_image(image: ImageDto) -> image::Image {
    image::Image {
        id: image.id,
        pet_id: image.pet_id,
        image_url: image.image_url,
        object_key: image.object_key,
    }
}

pub(crate) fn from_proto_image(image: image::Image) -> ImageDto {
    ImageDto {
        id: image.id,
        pet_id: image.pet_id,
        image_url: image.image_url,
        object_key: image.object_key,
    }
}

fn to_proto_pet(dto: PetDto) -> pet::Pet {
    pet::Pet {
        id: dto.id,
        r#type: dto.pet_type,
        species: dto.species,
        name: dto.name,
        birthdate: dto.birthdate,
        gender: dto.gender,
        color: dto.color,
        pattern: dto.pattern,
        habit: dto.habit,
        caption: dto.caption,
        status: dto.status,
        images: dto.images.into_iter().map(to_proto_image).collect(),
        is_sterile: dto.is_sterile,
        is_vaccinated: dto.is_vaccinated,
        is_visible: dto.is_visible,
        is_club_pet: dto.is_club_pet,
        origin: dto.origin,
        address: dto.address,
        contact: dto.contact,
        adopt_by: dto.adopt_by,
    }
}

fn from_proto_pet(pet: pet::Pet) -> PetDto {
    PetDto {
        id: pet.id,
        pet_type: pet.r#type,
        species: pet.species,
        name: pet.name,
        birthdate: pet.birthdate,
        gender: pet.gender,
        color: pet.color,
        pattern: pet.pattern,
        habit: pet.habit,
        caption: pet.caption,
        status: pet.status,
        images: pet.images.into_iter().map(from_proto_image).collect(),
        is_sterile: pet.is_sterile,
        is_vaccinated: pet.is_vaccinated,
        is_visible: pet.is_visible,
        is_club_pet: pet.is_club_pet,
        origin: pet.origin,
        address: pet.address,
        contact: pet.contact,
        adopt_by: pet.adopt_by,
    }
}
