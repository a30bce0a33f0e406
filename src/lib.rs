//! parceldesk - parcel delivery coordination backend.
//!
//! The domain logic lives in the `delivery` crate; this crate is the HTTP
//! surface: configuration, logging, the axum router and the JSON contracts.

pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::AppError;
