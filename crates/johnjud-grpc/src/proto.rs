//! Generated protobuf types.
//!
//! Modules nest by package name so cross-package references resolve.

#![allow(clippy::pedantic, clippy::all, missing_docs)]

pub mod johnjud {
    pub mod backend {
        pub mod pet {
            pub mod v1 {
                tonic::include_proto!("johnjud.backend.pet.v1");
            }
        }

        pub mod like {
            pub mod v1 {
                tonic::include_proto!("johnjud.backend.like.v1");
            }
        }
    }

    pub mod file {
        pub mod image {
            pub mod v1 {
                tonic::include_proto!("johnjud.file.image.v1");
            }
        }
    }

    pub mod health {
        pub mod v1 {
            tonic::include_proto!("johnjud.health.v1");
        }
    }
}

/// Encoded descriptors of every compiled proto, served by reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("johnjud_descriptor");

pub use johnjud::backend::like::v1 as like;
pub use johnjud::backend::pet::v1 as pet;
pub use johnjud::file::image::v1 as image;
pub use johnjud::health::v1 as health;
