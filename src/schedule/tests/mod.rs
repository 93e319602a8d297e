
use crate::core::context::SessionContext;
use crate::core::models::{DaySchedule, LinkId, ScheduleOwnership, SlotQuery, TimeSlotCandidate};
use crate::core::types::{DayOfWeek, TimeWindow};
use crate::errors::{Error, Result};
use crate::remote::{DayRecordDto, ScheduleBackend, SlotDto, TimeWindowDto};
use std::cell::{Cell, RefCell};

pub(super) fn make_ctx() -> SessionContext {
    let ctx = SessionContext::new(ScheduleOwnership::Own);
    ctx.logger.set_file_logging_enabled(false);
    ctx
}

pub(super) fn make_linked_ctx(link_id: &str) -> SessionContext {
    let ctx = SessionContext::new(ScheduleOwnership::linked(link_id));
    ctx.logger.set_file_logging_enabled(false);
    ctx
}

pub(super) fn window(s: &str) -> TimeWindow {
    TimeWindow::try_from_str(s).unwrap()
}

pub(super) fn open_day(day: DayOfWeek, windows: &[&str]) -> DaySchedule {
    DaySchedule::open(day, windows.iter().map(|w| window(w)).collect())
}

pub(super) fn record(day_of_week: u8, is_available: bool, windows: &[(&str, &str)]) -> DayRecordDto {
    DayRecordDto {
        day_of_week,
        is_available,
        time_slots: windows
            .iter()
            .map(|(start, end)| TimeWindowDto {
                start_time: (*start).to_string(),
                end_time: (*end).to_string(),
            })
            .collect(),
    }
}

pub(super) fn candidate(time: &str, duration_minutes: Option<u32>) -> TimeSlotCandidate {
    TimeSlotCandidate {
        time: crate::core::types::TimeOfDay::try_from_str(time).unwrap(),
        available: true,
        duration_minutes,
    }
}

/// In-memory stand-in for the remote collaborator. Tracks which endpoint
/// pair each call went through so routing tests can assert dispatch.
#[derive(Default)]
pub(super) struct FakeBackend {
    pub own_days: RefCell<Vec<DayRecordDto>>,
    pub linked_days: RefCell<Vec<DayRecordDto>>,
    pub slots: Vec<SlotDto>,
    pub fail_fetch: bool,
    pub fail_save: bool,
    pub own_fetches: Cell<u32>,
    pub linked_fetches: Cell<u32>,
    pub own_saves: Cell<u32>,
    pub linked_saves: Cell<u32>,
    pub last_link: RefCell<Option<LinkId>>,
}

impl FakeBackend {
    pub fn with_own_days(days: Vec<DayRecordDto>) -> Self {
        Self {
            own_days: RefCell::new(days),
            ..Self::default()
        }
    }
}

impl ScheduleBackend for FakeBackend {
    fn fetch_own_schedule(&self) -> Result<Vec<DayRecordDto>> {
        self.own_fetches.set(self.own_fetches.get() + 1);
        if self.fail_fetch {
            return Err(Error::fetch("network unreachable"));
        }
        Ok(self.own_days.borrow().clone())
    }

    fn fetch_linked_schedule(&self, link: &LinkId) -> Result<Vec<DayRecordDto>> {
        self.linked_fetches.set(self.linked_fetches.get() + 1);
        *self.last_link.borrow_mut() = Some(link.clone());
        if self.fail_fetch {
            return Err(Error::fetch("network unreachable"));
        }
        Ok(self.linked_days.borrow().clone())
    }

    fn save_own_schedule(&self, days: &[DayRecordDto]) -> Result<Vec<DayRecordDto>> {
        self.own_saves.set(self.own_saves.get() + 1);
        if self.fail_save {
            return Err(Error::save("backend rejected the payload"));
        }
        *self.own_days.borrow_mut() = days.to_vec();
        Ok(days.to_vec())
    }

    fn save_linked_schedule(
        &self,
        link: &LinkId,
        days: &[DayRecordDto],
    ) -> Result<Vec<DayRecordDto>> {
        self.linked_saves.set(self.linked_saves.get() + 1);
        *self.last_link.borrow_mut() = Some(link.clone());
        if self.fail_save {
            return Err(Error::save("backend rejected the payload"));
        }
        *self.linked_days.borrow_mut() = days.to_vec();
        Ok(days.to_vec())
    }

    fn fetch_available_slots(&self, _query: &SlotQuery) -> Result<Vec<SlotDto>> {
        if self.fail_fetch {
            return Err(Error::fetch("network unreachable"));
        }
        Ok(self.slots.clone())
    }
}

pub(super) fn sample_query() -> SlotQuery {
    SlotQuery {
        service_id: 42,
        date: chrono::NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
        service_type: "profesional".to_string(),
    }
}
