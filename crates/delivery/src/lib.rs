//! Parcel delivery coordination core.
//!
//! In-memory domain logic for the parceldesk service: the parcel lifecycle
//! store, calendar slot generation, and the preference-driven time-slot
//! recommendation engine. No I/O happens here; the web layer owns transport
//! and serialization concerns.

pub mod error;
pub mod identity;
pub mod preferences;
pub mod recommend;
pub mod seed;
pub mod slots;
pub mod store;
pub mod types;

pub use error::DeliveryError;
pub use identity::{person_from_identity, Identity, Role};
pub use preferences::{PreferenceStore, SlotPreference};
pub use recommend::{recommend, DEFAULT_TOP_N};
pub use slots::{
    filter_business_hours, generate_time_slots, next_seven_days, DEFAULT_END_HOUR,
    DEFAULT_START_HOUR, SLOT_DURATION_HOURS,
};
pub use store::{DeliveryStore, NewParcel};
pub use types::{new_id, Address, Dimensions, Parcel, ParcelStatus, Person, TimeSlot};
