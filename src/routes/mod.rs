use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use delivery::DeliveryStore;

use crate::config::Config;
use crate::error::AppError;
use crate::middleware::identity_middleware;

mod health;
mod parcels;
mod slots;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<DeliveryStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: DeliveryStore, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }

    pub(crate) fn store_read(&self) -> Result<RwLockReadGuard<'_, DeliveryStore>, AppError> {
        self.store
            .read()
            .map_err(|_| AppError::Internal("parcel store lock poisoned".to_string()))
    }

    pub(crate) fn store_write(&self) -> Result<RwLockWriteGuard<'_, DeliveryStore>, AppError> {
        self.store
            .write()
            .map_err(|_| AppError::Internal("parcel store lock poisoned".to_string()))
    }
}

pub fn router(app_state: AppState) -> Router {
    // Only /api/me needs the caller's identity; everything else trusts the
    // ids in the request, authorization being the outer collaborator's job.
    let identified = Router::new()
        .route("/api/me", get(users::me))
        .route_layer(axum_middleware::from_fn(identity_middleware));

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .merge(identified)
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/parcels", get(parcels::list).post(parcels::create))
        .route("/api/parcels/{id}", get(parcels::detail))
        .route("/api/parcels/{id}/status", post(parcels::set_status))
        .route("/api/parcels/{id}/delivery-slot", post(parcels::assign_slot))
        .route(
            "/api/receivers/{id}/recommended-slots",
            get(slots::recommended),
        )
        .route("/api/slots", get(slots::available))
        .with_state(app_state)
}
