//! Per-receiver delivery-acceptance history.
//!
//! Each receiver accumulates (weekday, hour, count) tuples recording how often
//! they accepted a delivery in that window. Weekday numbering is Sunday-first:
//! 0 = Sunday .. 6 = Saturday.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DeliveryError;

/// Aggregated count of deliveries accepted at a given weekday/hour.
///
/// Multiple hours per weekday are valid; tuples are kept in insertion order,
/// which the recommendation engine relies on for stable tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPreference {
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
    /// Start hour of the accepted window, 0..=23.
    pub hour: u32,
    pub count: u32,
}

/// Historical weekday/hour acceptance counts, keyed by receiver id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceStore {
    records: HashMap<String, Vec<SlotPreference>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// History for one receiver, in insertion order. Empty for unknown
    /// receivers — "no data", never an error.
    pub fn records_for(&self, receiver_id: &str) -> &[SlotPreference] {
        self.records
            .get(receiver_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Record one accepted delivery, bumping an existing tuple or appending a
    /// new one with count 1. Rejects out-of-range weekday/hour without
    /// touching the store.
    pub fn record_acceptance(
        &mut self,
        receiver_id: &str,
        weekday: u32,
        hour: u32,
    ) -> Result<(), DeliveryError> {
        Self::check_range(weekday, hour)?;
        let history = self.records.entry(receiver_id.to_string()).or_default();
        match history
            .iter_mut()
            .find(|p| p.weekday == weekday && p.hour == hour)
        {
            Some(existing) => existing.count += 1,
            None => history.push(SlotPreference {
                weekday,
                hour,
                count: 1,
            }),
        }
        Ok(())
    }

    /// Seed a pre-aggregated tuple (used by demo data and tests). Counts
    /// accumulate if the tuple already exists.
    pub fn add_history(
        &mut self,
        receiver_id: &str,
        weekday: u32,
        hour: u32,
        count: u32,
    ) -> Result<(), DeliveryError> {
        Self::check_range(weekday, hour)?;
        if count == 0 {
            return Err(DeliveryError::Validation(
                "preference count must be positive".to_string(),
            ));
        }
        let history = self.records.entry(receiver_id.to_string()).or_default();
        match history
            .iter_mut()
            .find(|p| p.weekday == weekday && p.hour == hour)
        {
            Some(existing) => existing.count += count,
            None => history.push(SlotPreference {
                weekday,
                hour,
                count,
            }),
        }
        Ok(())
    }

    fn check_range(weekday: u32, hour: u32) -> Result<(), DeliveryError> {
        if weekday > 6 {
            return Err(DeliveryError::Validation(format!(
                "weekday must be 0 (Sunday) through 6 (Saturday), got {weekday}"
            )));
        }
        if hour > 23 {
            return Err(DeliveryError::Validation(format!(
                "hour must be 0 through 23, got {hour}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_receiver_has_empty_history() {
        let store = PreferenceStore::new();
        assert!(store.records_for("nobody").is_empty());
    }

    #[test]
    fn acceptance_bumps_existing_tuple() {
        let mut store = PreferenceStore::new();
        store.record_acceptance("r1", 3, 14).unwrap();
        store.record_acceptance("r1", 3, 14).unwrap();
        store.record_acceptance("r1", 1, 10).unwrap();

        let history = store.records_for("r1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].count, 2);
        assert_eq!(history[1].count, 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = PreferenceStore::new();
        store.add_history("r1", 5, 16, 3).unwrap();
        store.add_history("r1", 1, 10, 5).unwrap();
        store.add_history("r1", 3, 14, 8).unwrap();

        let weekdays: Vec<u32> = store.records_for("r1").iter().map(|p| p.weekday).collect();
        assert_eq!(weekdays, vec![5, 1, 3]);
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        let mut store = PreferenceStore::new();
        assert!(store.record_acceptance("r1", 7, 10).is_err());
        assert!(store.record_acceptance("r1", 0, 24).is_err());
        assert!(store.add_history("r1", 0, 10, 0).is_err());
        assert!(store.records_for("r1").is_empty());
    }
}
