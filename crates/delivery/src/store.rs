//! The in-memory delivery store.
//!
//! All mutation funnels through the named operations here; callers never touch
//! parcel fields directly. Every operation validates its input completely
//! before mutating anything, so a failure always leaves the store unchanged.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Timelike, Utc};
use rand::Rng;

use crate::error::DeliveryError;
use crate::preferences::PreferenceStore;
use crate::recommend;
use crate::types::{Dimensions, Parcel, ParcelStatus, Person, TimeSlot};

/// Input for [`DeliveryStore::create_parcel`]. Id, tracking number, status and
/// timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewParcel {
    pub sender: Person,
    pub receiver: Person,
    /// Kilograms, strictly positive.
    pub weight: f64,
    pub dimensions: Dimensions,
    pub description: String,
}

/// Owns persons, parcels and the acceptance history for one process lifetime.
///
/// Single logical actor: operations are synchronous read/modify/write and the
/// web layer serializes access behind one lock.
#[derive(Debug, Default)]
pub struct DeliveryStore {
    persons: Vec<Person>,
    parcels: Vec<Parcel>,
    preferences: PreferenceStore,
    issued_tracking_numbers: HashSet<String>,
}

impl DeliveryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- persons ----------------------------------------------------------

    /// Register a person explicitly. Ids are assigned exactly once; a second
    /// registration under the same id is rejected.
    pub fn add_person(&mut self, person: Person) -> Result<Person, DeliveryError> {
        validate_person(&person)?;
        if self.persons.iter().any(|p| p.id == person.id) {
            return Err(DeliveryError::Validation(format!(
                "person id already registered: {}",
                person.id
            )));
        }
        self.persons.push(person.clone());
        Ok(person)
    }

    pub fn person(&self, id: &str) -> Result<&Person, DeliveryError> {
        self.persons
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DeliveryError::PersonNotFound(id.to_string()))
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Implicit registration path: keeps the stored record when the id is
    /// already known, otherwise registers the given one.
    fn ensure_person(&mut self, person: &Person) {
        if !self.persons.iter().any(|p| p.id == person.id) {
            self.persons.push(person.clone());
        }
    }

    // ---- parcel lifecycle -------------------------------------------------

    /// Create a parcel: validates the request, then assigns a fresh id and a
    /// unique tracking number, status pending, no delivery slot.
    pub fn create_parcel(&mut self, new: NewParcel) -> Result<Parcel, DeliveryError> {
        validate_person(&new.sender)?;
        validate_person(&new.receiver)?;
        if !(new.weight.is_finite() && new.weight > 0.0) {
            return Err(DeliveryError::Validation(format!(
                "weight must be positive, got {}",
                new.weight
            )));
        }
        if !new.dimensions.is_positive() {
            return Err(DeliveryError::Validation(
                "dimensions must all be positive".to_string(),
            ));
        }

        self.ensure_person(&new.sender);
        self.ensure_person(&new.receiver);

        let parcel = Parcel {
            id: crate::types::new_id(),
            tracking_number: self.next_tracking_number(),
            sender: new.sender,
            receiver: new.receiver,
            weight: new.weight,
            dimensions: new.dimensions,
            description: new.description,
            status: ParcelStatus::Pending,
            created_at: Utc::now(),
            delivery_slot: None,
            accepted_time_slot: false,
        };
        self.parcels.push(parcel.clone());
        tracing::info!(
            parcel_id = %parcel.id,
            tracking_number = %parcel.tracking_number,
            "parcel created"
        );
        Ok(parcel)
    }

    /// Advance a parcel along the monotonic chain
    /// pending -> in-transit -> delivered. Skips, reversals and moves out of
    /// the terminal state are rejected.
    pub fn set_status(
        &mut self,
        parcel_id: &str,
        new_status: ParcelStatus,
    ) -> Result<Parcel, DeliveryError> {
        let parcel = self
            .parcels
            .iter_mut()
            .find(|p| p.id == parcel_id)
            .ok_or_else(|| DeliveryError::ParcelNotFound(parcel_id.to_string()))?;
        if !parcel.status.can_transition_to(new_status) {
            return Err(DeliveryError::InvalidStatusTransition {
                from: parcel.status,
                to: new_status,
            });
        }
        parcel.status = new_status;
        tracing::info!(parcel_id, status = %new_status, "parcel status changed");
        Ok(parcel.clone())
    }

    /// Record the receiver's accepted delivery slot. Overwrites any earlier
    /// choice (last-write-wins, no history), flips `accepted_time_slot`, and
    /// leaves the status untouched. The acceptance is also counted into the
    /// receiver's preference history.
    pub fn assign_delivery_slot(
        &mut self,
        parcel_id: &str,
        slot: TimeSlot,
    ) -> Result<Parcel, DeliveryError> {
        if !slot.is_valid() {
            return Err(DeliveryError::Validation(format!(
                "slot start must be before end, got {} >= {}",
                slot.start_time, slot.end_time
            )));
        }
        let index = self
            .parcels
            .iter()
            .position(|p| p.id == parcel_id)
            .ok_or_else(|| DeliveryError::ParcelNotFound(parcel_id.to_string()))?;

        let receiver_id = self.parcels[index].receiver.id.clone();
        let weekday = slot.date.weekday().num_days_from_sunday();
        let hour = slot.start_time.hour();
        // Cannot fail: weekday and hour come from valid chrono values.
        self.preferences
            .record_acceptance(&receiver_id, weekday, hour)?;

        let parcel = &mut self.parcels[index];
        parcel.delivery_slot = Some(slot);
        parcel.accepted_time_slot = true;
        tracing::info!(parcel_id, receiver_id = %receiver_id, "delivery slot accepted");
        Ok(parcel.clone())
    }

    // ---- reads ------------------------------------------------------------

    pub fn parcel(&self, id: &str) -> Result<&Parcel, DeliveryError> {
        self.parcels
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DeliveryError::ParcelNotFound(id.to_string()))
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Parcels addressed to `receiver_id`, in insertion order.
    pub fn list_by_receiver(&self, receiver_id: &str) -> Vec<Parcel> {
        self.parcels
            .iter()
            .filter(|p| p.receiver.id == receiver_id)
            .cloned()
            .collect()
    }

    /// Parcels currently in `status`, in insertion order.
    pub fn list_by_status(&self, status: ParcelStatus) -> Vec<Parcel> {
        self.parcels
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    // ---- recommendation ---------------------------------------------------

    /// Top-`top_n` recommended slots for a receiver, see [`recommend::recommend`].
    pub fn recommended_slots(
        &self,
        receiver_id: &str,
        reference_date: NaiveDate,
        top_n: usize,
    ) -> Vec<TimeSlot> {
        recommend::recommend(&self.preferences, receiver_id, reference_date, top_n)
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Seed pre-aggregated acceptance history (demo data, tests).
    pub fn add_preference_history(
        &mut self,
        receiver_id: &str,
        weekday: u32,
        hour: u32,
        count: u32,
    ) -> Result<(), DeliveryError> {
        self.preferences
            .add_history(receiver_id, weekday, hour, count)
    }

    // ---- internals --------------------------------------------------------

    /// Draw random `PD-######` numbers until an unissued one comes up. With a
    /// million-number space and store lifetimes of a few thousand parcels,
    /// retries are rare; each one is logged.
    fn next_tracking_number(&mut self) -> String {
        let mut rng = rand::rng();
        loop {
            let candidate = format!("PD-{:06}", rng.random_range(0..1_000_000));
            if self.issued_tracking_numbers.insert(candidate.clone()) {
                return candidate;
            }
            tracing::warn!(tracking_number = %candidate, "tracking number collision, redrawing");
        }
    }
}

fn validate_person(person: &Person) -> Result<(), DeliveryError> {
    if person.id.trim().is_empty() {
        return Err(DeliveryError::Validation(
            "person id must not be empty".to_string(),
        ));
    }
    if person.name.trim().is_empty() {
        return Err(DeliveryError::Validation(
            "person name must not be empty".to_string(),
        ));
    }
    Ok(())
}
