use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Postal address attached to a [`Person`].
///
/// Fields are plain text; non-emptiness is the form layer's concern. Addresses
/// produced by [`crate::identity::person_from_identity`] are placeholders and
/// must not be treated as deliverable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// A sender or receiver. Identity is by `id`, which is stable for the lifetime
/// of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Parcel dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn is_positive(&self) -> bool {
        [self.length, self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// A fixed-duration calendar window offered for delivery.
///
/// Invariant: `start_time < end_time`; every generation path produces exactly
/// two-hour windows. Times serialize as zero-padded `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl TimeSlot {
    pub fn is_valid(&self) -> bool {
        self.start_time < self.end_time
    }

    pub fn duration(&self) -> chrono::TimeDelta {
        self.end_time - self.start_time
    }
}

/// Monotonic parcel status chain: pending -> in-transit -> delivered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ParcelStatus {
    Pending,
    InTransit,
    Delivered,
}

impl ParcelStatus {
    /// Whether `next` is the immediate successor of `self`. Delivered is
    /// terminal; skipping or reversing steps is never allowed.
    pub fn can_transition_to(self, next: ParcelStatus) -> bool {
        matches!(
            (self, next),
            (ParcelStatus::Pending, ParcelStatus::InTransit)
                | (ParcelStatus::InTransit, ParcelStatus::Delivered)
        )
    }
}

/// A parcel tracked by the store.
///
/// `id`, `tracking_number`, `sender`, `receiver` and `created_at` are assigned
/// at creation and never change. `accepted_time_slot == true` implies
/// `delivery_slot` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub id: String,
    pub tracking_number: String,
    pub sender: Person,
    pub receiver: Person,
    /// Weight in kilograms, strictly positive.
    pub weight: f64,
    pub dimensions: Dimensions,
    pub description: String,
    pub status: ParcelStatus,
    pub created_at: DateTime<Utc>,
    pub delivery_slot: Option<TimeSlot>,
    pub accepted_time_slot: bool,
}

/// Fresh opaque id for persons and parcels.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Serde adapter for zero-padded `HH:MM` clock times. Parsing also accepts
/// non-padded input such as `9:00`; output is always padded.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
