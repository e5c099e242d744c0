use axum::http::StatusCode;
use thiserror::Error;

use crate::modules::activities::core::decision::DecideError;
use crate::shared::inbound::http::ErrorDetail;
use crate::shared::infrastructure::activity_registry::RegistryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<ApplicationError> for ErrorDetail {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(reason @ DecideError::ActivityNotFound) => {
                ErrorDetail::new(StatusCode::NOT_FOUND, reason.to_string())
            }
            ApplicationError::Domain(reason) => {
                ErrorDetail::new(StatusCode::BAD_REQUEST, reason.to_string())
            }
            ApplicationError::Registry(RegistryError::Missing(_)) => ErrorDetail::new(
                StatusCode::NOT_FOUND,
                DecideError::ActivityNotFound.to_string(),
            ),
            ApplicationError::Registry(
                RegistryError::VersionMismatch { .. } | RegistryError::Backend(_),
            ) => ErrorDetail::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}
