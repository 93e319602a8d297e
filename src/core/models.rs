use crate::core::types::{DayOfWeek, TimeOfDay, TimeWindow};
use chrono::NaiveDate;
use std::fmt;
use strum::IntoEnumIterator;

/// One weekday's declared availability. A closed day may still carry
/// windows in memory; they are stripped at save time, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: DayOfWeek,
    pub is_available: bool,
    pub windows: Vec<TimeWindow>,
}

impl DaySchedule {
    pub fn closed(day: DayOfWeek) -> Self {
        Self {
            day,
            is_available: false,
            windows: Vec::new(),
        }
    }

    pub fn open(day: DayOfWeek, windows: Vec<TimeWindow>) -> Self {
        Self {
            day,
            is_available: true,
            windows,
        }
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_available {
            return write!(f, "{}: cerrado", self.day.display_name());
        }
        let windows = self
            .windows
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}: {}", self.day.display_name(), windows)
    }
}

/// The full 7-day aggregate, always Monday-first and always complete.
/// Normalization (schedule::weekly) is the only constructor path from
/// server data; a day the server never mentioned shows up closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: Vec<DaySchedule>,
}

impl WeeklySchedule {
    /// Builds the aggregate from one entry per weekday, reordering to
    /// the canonical Monday-first layout. Callers are expected to hand
    /// in exactly one `DaySchedule` per `DayOfWeek`; normalization does.
    pub(crate) fn from_complete_days(mut days: Vec<DaySchedule>) -> Self {
        days.sort_by_key(|d| d.day.index());
        debug_assert_eq!(days.len(), DayOfWeek::COUNT);
        Self { days }
    }

    /// All seven closed days.
    pub fn all_closed() -> Self {
        Self::from_complete_days(DayOfWeek::iter().map(DaySchedule::closed).collect())
    }

    pub fn day(&self, day: DayOfWeek) -> &DaySchedule {
        &self.days[day.index() as usize]
    }

    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut DaySchedule {
        &mut self.days[day.index() as usize]
    }

    /// Monday-first slice over all seven days.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn open_days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter().filter(|d| d.is_available)
    }

    /// The weekly entry governing a concrete calendar date.
    pub fn for_date(&self, date: NaiveDate) -> &DaySchedule {
        use crate::extensions::chrono::WeekdayExt;
        use chrono::Datelike;
        self.day(date.weekday().to_day_of_week())
    }
}

/// Opaque identifier of a place-to-professional link relationship. It
/// names the accepted invitation, not the professional account itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkId(pub String);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whose schedule an editing session operates on. Decided once at
/// session start; never re-evaluated mid-session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOwnership {
    Own,
    Linked(LinkId),
}

impl ScheduleOwnership {
    pub fn linked<S: Into<String>>(link_id: S) -> Self {
        ScheduleOwnership::Linked(LinkId(link_id.into()))
    }

    pub fn is_linked(&self) -> bool {
        matches!(self, ScheduleOwnership::Linked(_))
    }
}

/// A concrete bookable start time on a specific date, as reported by
/// the backend. Distinct from the recurring weekly `TimeWindow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotCandidate {
    pub time: TimeOfDay,
    pub available: bool,
    pub duration_minutes: Option<u32>,
}

/// Parameters for the backend's slot listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotQuery {
    pub service_id: i64,
    pub date: NaiveDate,
    pub service_type: String,
}
