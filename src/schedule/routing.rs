use crate::core::models::{DaySchedule, ScheduleOwnership};
use crate::errors::Result;
use crate::remote::{ScheduleBackend, days_from_model, days_to_model};

/// Binds an editing session to one pair of remote read/write operations,
/// decided once from the ownership context at session start. The model
/// and validation paths are identical in both modes; only the endpoint
/// pair differs, and a bound route never switches mid-session.
#[derive(Debug, Clone)]
pub struct ScheduleRoute {
    ownership: ScheduleOwnership,
}

impl ScheduleRoute {
    pub fn bind(ownership: ScheduleOwnership) -> Self {
        Self { ownership }
    }

    pub fn ownership(&self) -> &ScheduleOwnership {
        &self.ownership
    }

    pub fn fetch(&self, backend: &dyn ScheduleBackend) -> Result<Vec<DaySchedule>> {
        let records = match &self.ownership {
            ScheduleOwnership::Own => backend.fetch_own_schedule()?,
            ScheduleOwnership::Linked(link) => backend.fetch_linked_schedule(link)?,
        };
        days_to_model(&records)
    }

    /// Full-replace save; returns the server's canonicalized echo.
    pub fn save(
        &self,
        backend: &dyn ScheduleBackend,
        days: &[DaySchedule],
    ) -> Result<Vec<DaySchedule>> {
        let payload = days_from_model(days);
        let echo = match &self.ownership {
            ScheduleOwnership::Own => backend.save_own_schedule(&payload)?,
            ScheduleOwnership::Linked(link) => backend.save_linked_schedule(link, &payload)?,
        };
        days_to_model(&echo)
    }
}
