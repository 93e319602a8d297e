use crate::config::Config;
use crate::core::models::{DaySchedule, WeeklySchedule};
use crate::core::types::{DayOfWeek, TimeWindow};
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Builds the full 7-day aggregate from whatever subset of day records
/// the server returned. Days the server never mentioned come out closed.
/// On duplicate day numbers the last record wins. Idempotent:
/// `normalize(normalize(s).days())` equals `normalize(s.days())`.
pub fn normalize(server_days: &[DaySchedule]) -> WeeklySchedule {
    let mut by_day: HashMap<DayOfWeek, &DaySchedule> = HashMap::new();
    for day in server_days {
        by_day.insert(day.day, day);
    }

    WeeklySchedule::from_complete_days(
        DayOfWeek::iter()
            .map(|d| {
                by_day
                    .get(&d)
                    .map(|found| (*found).clone())
                    .unwrap_or_else(|| DaySchedule::closed(d))
            })
            .collect(),
    )
}

/// Flips a day's availability. Enabling a day that has no stored windows
/// materializes the configured default window; disabling keeps the
/// windows in memory so re-enabling restores them (they are stripped at
/// save time, not here).
pub fn toggle_day(schedule: &mut WeeklySchedule, day: DayOfWeek, default_window: TimeWindow) {
    let entry = schedule.day_mut(day);
    entry.is_available = !entry.is_available;
    if entry.is_available && entry.windows.is_empty() {
        entry.windows.push(default_window);
    }
}

/// Produces the day records sent to the backend. Closed days go out with
/// no windows so stale windows cannot be resurrected by a later read.
pub fn serialize_for_save(schedule: &WeeklySchedule) -> Vec<DaySchedule> {
    schedule
        .days()
        .iter()
        .map(|d| {
            if d.is_available {
                d.clone()
            } else {
                DaySchedule::closed(d.day)
            }
        })
        .collect()
}

/// The first-ever-load template: configured open days (Mon-Fri out of
/// the box) with the single default window, the rest closed. Applied by
/// the editor when the provider has never saved a schedule or when the
/// fetch fails; never by `normalize` itself.
pub fn default_template(config: &Config) -> WeeklySchedule {
    let window = *config.default_window();
    WeeklySchedule::from_complete_days(
        DayOfWeek::iter()
            .map(|d| {
                if config.default_open_days().contains(&d) {
                    DaySchedule::open(d, vec![window])
                } else {
                    DaySchedule::closed(d)
                }
            })
            .collect(),
    )
}
