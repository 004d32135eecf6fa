//! Canonical hour-slot ordering and labels for the timetable.
//!
//! # Responsibility
//! - Produce the fixed display sequence of the 24 hour slots.
//! - Own the slot-key encoding shared by grid, persistence and rendering.
//!
//! # Invariants
//! - Hours run 1-11, then 13-23, then 12 last; hour 0 (midnight) is never
//!   represented. Both facts are observable behavior and must not change.
//! - Slot keys are two-digit zero-padded hours with a fixed ":00" minute.

use once_cell::sync::Lazy;

/// Number of distinct hour slots per day.
pub const SLOT_COUNT: usize = 23;

/// Hours in display order: 1-11 AM, 13-23 PM, noon last.
pub const DISPLAY_ORDER: [u8; SLOT_COUNT] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 12,
];

/// One displayable hour slot: storage key plus human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    /// Canonical storage key, e.g. `"09:00"` or `"13:00"`.
    pub key: String,
    /// 12-hour clock label, e.g. `"9:00 AM"` or `"1:00 PM"`.
    pub label: String,
}

static ORDERED_SLOTS: Lazy<Vec<HourSlot>> = Lazy::new(|| {
    DISPLAY_ORDER
        .iter()
        .map(|&hour| HourSlot {
            key: slot_key(hour),
            label: slot_label(hour),
        })
        .collect()
});

/// Returns the 24 `(key, label)` slots in display order. Computed once.
pub fn ordered_slots() -> &'static [HourSlot] {
    &ORDERED_SLOTS
}

/// Canonical storage key for an hour: zero-padded hour plus ":00".
pub fn slot_key(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// 12-hour clock label with AM/PM suffix.
///
/// Noon is special-cased to `"12:00 PM"`; every other hour maps through
/// `hour % 12` with 0 displayed as 12.
pub fn slot_label(hour: u8) -> String {
    if hour == 12 {
        return "12:00 PM".to_string();
    }
    let period = if hour > 12 { "PM" } else { "AM" };
    let displayed = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{displayed}:00 {period}")
}

/// Whether `key` is one of the 24 canonical slot keys.
pub fn is_slot_key(key: &str) -> bool {
    ORDERED_SLOTS.iter().any(|slot| slot.key == key)
}

/// Truncates a raw `HH:MM` input to its hour slot, e.g. `"09:30"` -> `"09:00"`.
///
/// Only truncates; the result still has to pass [`is_slot_key`] before use.
pub fn normalize_slot_key(input: &str) -> String {
    let hour_part = input.split(':').next().unwrap_or(input);
    format!("{hour_part}:00")
}

#[cfg(test)]
mod tests {
    use super::{is_slot_key, normalize_slot_key, ordered_slots, slot_key, slot_label};

    #[test]
    fn slot_keys_are_zero_padded() {
        assert_eq!(slot_key(1), "01:00");
        assert_eq!(slot_key(13), "13:00");
        assert_eq!(slot_key(12), "12:00");
    }

    #[test]
    fn midnight_is_never_a_slot() {
        assert!(!is_slot_key("00:00"));
        assert!(ordered_slots().iter().all(|slot| slot.key != "00:00"));
    }

    #[test]
    fn labels_follow_twelve_hour_clock() {
        assert_eq!(slot_label(12), "12:00 PM");
        assert_eq!(slot_label(9), "9:00 AM");
        assert_eq!(slot_label(13), "1:00 PM");
        assert_eq!(slot_label(23), "11:00 PM");
    }

    #[test]
    fn normalize_drops_minutes_only() {
        assert_eq!(normalize_slot_key("09:30"), "09:00");
        assert_eq!(normalize_slot_key("13:05"), "13:00");
        assert_eq!(normalize_slot_key("7"), "7:00");
        assert!(!is_slot_key(&normalize_slot_key("7")));
    }
}
