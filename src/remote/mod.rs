use crate::core::models::{DaySchedule, LinkId, SlotQuery, TimeSlotCandidate};
use crate::core::types::{DayOfWeek, TimeOfDay, TimeWindow};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// One availability window as the backend transmits it. Times arrive as
/// "HH:MM" or "HH:MM:SS"; seconds are dropped on conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindowDto {
    pub start_time: String,
    pub end_time: String,
}

/// One stored day record. The backend may return anywhere between zero
/// and seven of these; normalization fills the gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecordDto {
    pub day_of_week: u8,
    pub is_available: bool,
    #[serde(default)]
    pub time_slots: Vec<TimeWindowDto>,
}

/// One bookable slot candidate for a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDto {
    pub time: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl TimeWindowDto {
    pub fn to_model(&self) -> Result<TimeWindow> {
        Ok(TimeWindow::new(
            TimeOfDay::try_from_str(&self.start_time)?,
            TimeOfDay::try_from_str(&self.end_time)?,
        ))
    }

    pub fn from_model(window: &TimeWindow) -> Self {
        Self {
            start_time: window.start.to_string(),
            end_time: window.end.to_string(),
        }
    }
}

impl DayRecordDto {
    pub fn to_model(&self) -> Result<DaySchedule> {
        let day = DayOfWeek::try_from_index(self.day_of_week)?;
        let windows = self
            .time_slots
            .iter()
            .map(|w| w.to_model())
            .collect::<Result<Vec<_>>>()?;
        Ok(DaySchedule {
            day,
            is_available: self.is_available,
            windows,
        })
    }

    pub fn from_model(day: &DaySchedule) -> Self {
        Self {
            day_of_week: day.day.index(),
            is_available: day.is_available,
            time_slots: day.windows.iter().map(TimeWindowDto::from_model).collect(),
        }
    }
}

impl SlotDto {
    pub fn to_model(&self) -> Result<TimeSlotCandidate> {
        Ok(TimeSlotCandidate {
            time: TimeOfDay::try_from_str(&self.time)?,
            available: self.available,
            duration_minutes: self.duration_minutes,
        })
    }
}

pub fn days_to_model(records: &[DayRecordDto]) -> Result<Vec<DaySchedule>> {
    records.iter().map(|r| r.to_model()).collect()
}

pub fn days_from_model(days: &[DaySchedule]) -> Vec<DayRecordDto> {
    days.iter().map(DayRecordDto::from_model).collect()
}

pub fn slots_to_model(slots: &[SlotDto]) -> Result<Vec<TimeSlotCandidate>> {
    slots.iter().map(|s| s.to_model()).collect()
}

/// The remote collaborator owning persistence and conflict resolution.
/// Saves replace the provider's full stored day set; there is no partial
/// patch. The client applies last-write-wins semantics by construction.
pub trait ScheduleBackend {
    fn fetch_own_schedule(&self) -> Result<Vec<DayRecordDto>>;
    fn fetch_linked_schedule(&self, link: &LinkId) -> Result<Vec<DayRecordDto>>;
    /// Returns the stored records as the server canonicalized them.
    fn save_own_schedule(&self, days: &[DayRecordDto]) -> Result<Vec<DayRecordDto>>;
    fn save_linked_schedule(&self, link: &LinkId, days: &[DayRecordDto])
    -> Result<Vec<DayRecordDto>>;
    fn fetch_available_slots(&self, query: &SlotQuery) -> Result<Vec<SlotDto>>;
}
