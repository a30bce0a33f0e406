use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use delivery::{filter_business_hours, generate_time_slots, DEFAULT_TOP_N};
use serde::Deserialize;

use super::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: NaiveDate,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

/// GET /api/slots?date=YYYY-MM-DD - the candidate windows a receiver can pick
/// from on a given day. Defaults to the configured business hours; callers
/// may narrow or widen the range.
pub async fn available(
    State(state): State<AppState>,
    Query(query): Query<AvailableSlotsQuery>,
) -> impl IntoResponse {
    let start = query
        .start
        .unwrap_or(state.config.delivery.business_start_hour);
    let end = query.end.unwrap_or(state.config.delivery.business_end_hour);
    Json(generate_time_slots(query.date, start, end))
}

#[derive(Debug, Deserialize, Default)]
pub struct RecommendedSlotsQuery {
    /// Reference date; defaults to today. Recommendations always land
    /// strictly after it.
    pub date: Option<NaiveDate>,
    pub limit: Option<usize>,
    /// Restrict suggestions to the configured business hours.
    #[serde(default)]
    pub business_hours: bool,
}

/// GET /api/receivers/{id}/recommended-slots - top slots inferred from the
/// receiver's acceptance history. An empty list means "no data", not an
/// error; clients fall back to the generated calendar.
pub async fn recommended(
    State(state): State<AppState>,
    Path(receiver_id): Path<String>,
    Query(query): Query<RecommendedSlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reference_date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let top_n = query.limit.unwrap_or(DEFAULT_TOP_N);

    let store = state.store_read()?;
    let mut slots = store.recommended_slots(&receiver_id, reference_date, top_n);
    if query.business_hours {
        slots = filter_business_hours(
            &slots,
            state.config.delivery.business_start_hour,
            state.config.delivery.business_end_hour,
        );
    }
    Ok(Json(slots))
}
