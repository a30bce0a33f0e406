use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use delivery::{Dimensions, NewParcel, Parcel, ParcelStatus, Person, TimeSlot};
use serde::Deserialize;

use super::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParcelRequest {
    pub sender: Person,
    pub receiver: Person,
    pub weight: f64,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub description: String,
}

/// POST /api/parcels - the sender workflow's create operation. The store
/// assigns id, tracking number and the pending status.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateParcelRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut store = state.store_write()?;
    let parcel = store.create_parcel(NewParcel {
        sender: request.sender,
        receiver: request.receiver,
        weight: request.weight,
        dimensions: request.dimensions,
        description: request.description,
    })?;
    Ok((StatusCode::CREATED, Json(parcel)))
}

#[derive(Debug, Deserialize, Default)]
pub struct ListParcelsQuery {
    pub status: Option<ParcelStatus>,
    pub receiver: Option<String>,
}

/// GET /api/parcels - optionally filtered by status and/or receiver id.
/// Insertion order is preserved.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListParcelsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store_read()?;
    let parcels: Vec<Parcel> = match (&query.receiver, query.status) {
        (Some(receiver), Some(status)) => store
            .list_by_receiver(receiver)
            .into_iter()
            .filter(|p| p.status == status)
            .collect(),
        (Some(receiver), None) => store.list_by_receiver(receiver),
        (None, Some(status)) => store.list_by_status(status),
        (None, None) => store.parcels().to_vec(),
    };
    Ok(Json(parcels))
}

/// GET /api/parcels/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store_read()?;
    let parcel = store.parcel(&id)?.clone();
    Ok(Json(parcel))
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: ParcelStatus,
}

/// POST /api/parcels/{id}/status - the post-office workflow. Only the next
/// step of the monotonic chain is accepted.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut store = state.store_write()?;
    let parcel = store.set_status(&id, request.status)?;
    Ok(Json(parcel))
}

/// POST /api/parcels/{id}/delivery-slot - the receiver accepts a slot, either
/// a recommended one or one picked from the generated calendar. Re-posting
/// overwrites the earlier choice.
pub async fn assign_slot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(slot): Json<TimeSlot>,
) -> Result<impl IntoResponse, AppError> {
    let mut store = state.store_write()?;
    let parcel = store.assign_delivery_slot(&id, slot)?;
    Ok(Json(parcel))
}
