//! Calendar-aligned time window generation.
//!
//! The generator enforces no business policy of its own: callers express rules
//! like "no early-morning deliveries" by passing a restricted hour range.

use chrono::{Days, NaiveDate, NaiveTime, Timelike};

use crate::types::TimeSlot;

/// Every generated window is exactly this long.
pub const SLOT_DURATION_HOURS: u32 = 2;

/// Default generation range when the caller has no policy of its own.
pub const DEFAULT_START_HOUR: u32 = 8;
pub const DEFAULT_END_HOUR: u32 = 18;

/// Produce contiguous, non-overlapping two-hour windows on `date`, starting at
/// `start_hour` and stopping once the next window would end past `end_hour`.
///
/// `(10, 17)` therefore yields 10-12, 12-14 and 14-16: a 16-18 window would
/// end at 18 > 17. Returns an empty sequence when `start_hour >= end_hour`.
/// Slot ids are derived from date and hour, so repeated calls with the same
/// inputs produce identical output.
pub fn generate_time_slots(date: NaiveDate, start_hour: u32, end_hour: u32) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut hour = start_hour;
    while hour + SLOT_DURATION_HOURS <= end_hour {
        if let Some(slot) = slot_at(date, hour) {
            slots.push(slot);
        }
        hour += SLOT_DURATION_HOURS;
    }
    slots
}

/// Build the two-hour slot starting at `hour` on `date`, with the generator's
/// deterministic id scheme. `None` when the window would not fit inside the
/// day as a pair of clock times (i.e. `hour > 21`).
pub fn slot_at(date: NaiveDate, hour: u32) -> Option<TimeSlot> {
    let start_time = NaiveTime::from_hms_opt(hour, 0, 0)?;
    let end_time = NaiveTime::from_hms_opt(hour + SLOT_DURATION_HOURS, 0, 0)?;
    Some(TimeSlot {
        id: format!("slot-{date}-{hour}"),
        date,
        start_time,
        end_time,
    })
}

/// Whether a preference hour can produce a slot: the window must end at a
/// valid clock time within the same day.
pub fn is_valid_start_hour(hour: u32) -> bool {
    hour + SLOT_DURATION_HOURS < 24
}

/// The seven consecutive calendar dates starting at `from` (the original
/// selector offers "today plus the next six days").
pub fn next_seven_days(from: NaiveDate) -> Vec<NaiveDate> {
    (0..7)
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .collect()
}

/// Keep only slots that fall entirely inside `[start_hour, end_hour]`.
///
/// This is the pure post-filter callers apply to recommended slots to express
/// a business-hours policy; it never touches the preference store and leaves
/// the input untouched.
pub fn filter_business_hours(slots: &[TimeSlot], start_hour: u32, end_hour: u32) -> Vec<TimeSlot> {
    slots
        .iter()
        .filter(|slot| slot.start_time.hour() >= start_hour && slot.end_time.hour() <= end_hour)
        .cloned()
        .collect()
}
