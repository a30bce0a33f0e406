use crate::types::ParcelStatus;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Parcel not found: {0}")]
    ParcelNotFound(String),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        from: ParcelStatus,
        to: ParcelStatus,
    },
}

impl DeliveryError {
    /// True for the NotFound error class (unknown parcel or person id).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DeliveryError::ParcelNotFound(_) | DeliveryError::PersonNotFound(_)
        )
    }
}
