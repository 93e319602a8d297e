use crate::core::models::{DaySchedule, WeeklySchedule};
use crate::core::types::{DayOfWeek, TimeWindow};

/// A run of consecutive days sharing identical availability, produced
/// for read-only schedule views. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleGroup {
    pub days: Vec<DayOfWeek>,
    pub is_available: bool,
    pub windows: Vec<TimeWindow>,
}

impl ScheduleGroup {
    fn from_day(day: &DaySchedule) -> Self {
        Self {
            days: vec![day.day],
            is_available: day.is_available,
            windows: if day.is_available {
                day.windows.clone()
            } else {
                Vec::new()
            },
        }
    }

    /// Availability signature comparison: closed matches closed; open
    /// matches open only with identical window lists in the same order.
    fn matches(&self, day: &DaySchedule) -> bool {
        if self.is_available != day.is_available {
            return false;
        }
        !day.is_available || self.windows == day.windows
    }

    /// "Lunes – Viernes" for three or more days, "Lunes y Martes" for
    /// exactly two, the single day name otherwise. Cosmetic only; group
    /// membership is the part views rely on.
    pub fn label(&self) -> String {
        match self.days.as_slice() {
            [single] => single.display_name().to_string(),
            [first, second] => format!("{} y {}", first.display_name(), second.display_name()),
            [first, .., last] => format!("{} – {}", first.display_name(), last.display_name()),
            [] => String::new(),
        }
    }
}

/// Collapses the week into display groups with a single Monday-to-Sunday
/// pass. Only adjacent days merge: two non-adjacent days with identical
/// schedules stay in separate groups, favoring calendar readability over
/// compactness.
pub fn group_week(schedule: &WeeklySchedule) -> Vec<ScheduleGroup> {
    let mut groups: Vec<ScheduleGroup> = Vec::new();

    for day in schedule.days() {
        match groups.last_mut() {
            Some(group) if group.matches(day) => group.days.push(day.day),
            _ => groups.push(ScheduleGroup::from_day(day)),
        }
    }

    groups
}
