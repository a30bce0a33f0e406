use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use delivery::{person_from_identity, Address, Identity, Person};
use serde::Deserialize;
use validator::Validate;

use super::AppState;
use crate::error::AppError;

/// GET /api/me - the authenticated identity projected onto the Person model.
///
/// The address and phone in the response are placeholders (empty), since the
/// identity provider carries no postal data. Clients must not present them as
/// deliverable contact details.
pub async fn me(Extension(identity): Extension<Identity>) -> impl IntoResponse {
    Json(person_from_identity(&identity))
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store_read()?;
    Ok(Json(store.persons().to_vec()))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub address: Address,
}

/// POST /api/users - explicit person registration (the new sender/receiver
/// form path). The id is assigned here, exactly once.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    let person = Person {
        // Person ids share the parcel id scheme.
        id: delivery::new_id(),
        name: request.name,
        email: request.email,
        phone: request.phone,
        address: request.address,
    };
    let mut store = state.store_write()?;
    let person = store.add_person(person)?;
    Ok((StatusCode::CREATED, Json(person)))
}
