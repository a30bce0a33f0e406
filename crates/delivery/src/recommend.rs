//! Frequency-weighted delivery-slot recommendation.
//!
//! A receiver's history is ranked by acceptance count and each top record is
//! projected onto the next calendar occurrence of its weekday. This is a
//! deterministic heuristic, not a statistical model: the properties that
//! matter are stable ordering and repeatable output, not predictive accuracy.

use chrono::{Datelike, Days, NaiveDate};

use crate::preferences::{PreferenceStore, SlotPreference};
use crate::slots::{is_valid_start_hour, slot_at};
use crate::types::TimeSlot;

/// How many slots to suggest when the caller has no preference.
pub const DEFAULT_TOP_N: usize = 3;

/// Suggest up to `top_n` delivery slots for `receiver_id` on or after
/// `reference_date`.
///
/// Rules:
/// - No history means no output; an empty vec is valid "no data", never
///   fabricated recommendations.
/// - Records are ranked descending by count with a stable sort, so ties keep
///   their insertion order.
/// - Records whose two-hour window would not fit inside a day (`hour > 21`)
///   are data-quality rejects, dropped before ranking.
/// - Each record projects to the next date strictly after `reference_date`
///   falling on its weekday: recommendations always look forward, so a
///   reference date already on the preferred weekday projects a full week out.
/// - Output keeps rank order (highest count first).
pub fn recommend(
    preferences: &PreferenceStore,
    receiver_id: &str,
    reference_date: NaiveDate,
    top_n: usize,
) -> Vec<TimeSlot> {
    let records = preferences.records_for(receiver_id);
    if records.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<&SlotPreference> = records
        .iter()
        .filter(|p| is_valid_start_hour(p.hour))
        .collect();
    if ranked.len() < records.len() {
        tracing::warn!(
            receiver_id,
            dropped = records.len() - ranked.len(),
            "ignoring preference records whose window would cross midnight"
        );
    }

    // Vec::sort_by is stable: equal counts keep insertion order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    ranked
        .into_iter()
        .take(top_n)
        .filter_map(|p| slot_at(next_occurrence(reference_date, p.weekday), p.hour))
        .collect()
}

/// The next date strictly after `reference` whose weekday (Sunday-first,
/// 0..=6) equals `weekday`. Same weekday projects to the following week.
pub fn next_occurrence(reference: NaiveDate, weekday: u32) -> NaiveDate {
    let current = reference.weekday().num_days_from_sunday();
    let mut days_ahead = (weekday % 7 + 7 - current) % 7;
    if days_ahead == 0 {
        days_ahead = 7;
    }
    reference
        .checked_add_days(Days::new(days_ahead as u64))
        .unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_always_forward() {
        // 2025-05-05 is a Monday (weekday 1).
        let monday = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();

        // Wednesday of the same week.
        assert_eq!(
            next_occurrence(monday, 3),
            NaiveDate::from_ymd_opt(2025, 5, 7).unwrap()
        );
        // Same weekday goes a full week out, never same-day.
        assert_eq!(
            next_occurrence(monday, 1),
            NaiveDate::from_ymd_opt(2025, 5, 12).unwrap()
        );
        // Sunday wraps to the end of the week.
        assert_eq!(
            next_occurrence(monday, 0),
            NaiveDate::from_ymd_opt(2025, 5, 11).unwrap()
        );
    }
}
