//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `pet_service.rs`).

pub mod like_service_impl;
pub mod pet_service_impl;

pub use like_service_impl::LikeServiceImpl;
pub use pet_service_impl::PetServiceImpl;

use johnjud_core::{JohnjudError, Logger};

/// Converts a collaborator failure into the error returned to callers.
///
/// The category survives but the collaborator's text is logged and replaced
/// by `message`. `NotFound` carries only ids and passes through unchanged.
pub(crate) fn classify(
    logger: &Logger,
    module: &str,
    err: JohnjudError,
    message: &str,
) -> JohnjudError {
    match err {
        JohnjudError::NotFound { .. } => {
            logger.debug(module, format_args!("{message}: {err}"));
            err
        }
        JohnjudError::Validation(_) => {
            logger.warn(module, format_args!("{message}: {err}"));
            JohnjudError::validation(message)
        }
        JohnjudError::Conflict(_) => {
            logger.warn(module, format_args!("{message}: {err}"));
            JohnjudError::conflict(message)
        }
        JohnjudError::Unavailable(_) => {
            logger.warn(module, format_args!("{message}: {err}"));
            JohnjudError::unavailable(message)
        }
        JohnjudError::Database(_)
        | JohnjudError::Configuration(_)
        | JohnjudError::ExternalService { .. }
        | JohnjudError::NotImplemented(_)
        | JohnjudError::Internal(_)
        | JohnjudError::Other(_) => {
            logger.error(module, format_args!("{message}: {err}"));
            JohnjudError::internal(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_hides_storage_details() {
        let logger = Logger::new("test");
        let err = classify(
            &logger,
            "find one",
            JohnjudError::Database("relation \"pets\" does not exist".to_string()),
            "failed to query pets",
        );

        match err {
            JohnjudError::Internal(msg) => assert_eq!(msg, "failed to query pets"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_keeps_category() {
        let logger = Logger::new("test");
        let err = classify(&logger, "delete", JohnjudError::not_found("Pet", "x"), "failed");
        assert!(err.is_not_found());

        let err = classify(&logger, "create", JohnjudError::unavailable("db down"), "failed");
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_classify_replaces_collaborator_text() {
        let logger = Logger::new("test");

        let cases = [
            JohnjudError::conflict("duplicate key value violates unique constraint \"likes_pkey\""),
            JohnjudError::validation("insert or update on table \"likes\" violates foreign key"),
            JohnjudError::unavailable("pool timed out while waiting for an open connection"),
        ];
        for err in cases {
            let classified = classify(&logger, "create", err, "failed to create like");
            assert!(classified.to_string().ends_with("failed to create like"));
            assert!(!classified.to_string().contains("likes"));
            assert!(!classified.to_string().contains("pool"));
        }
    }
}
