use crate::core::context::SessionContext;
use crate::core::models::WeeklySchedule;
use crate::core::types::{DayOfWeek, TimeWindow};
use crate::errors::{Error, Result};
use crate::logging::LogTarget;
use crate::remote::ScheduleBackend;
use crate::schedule::routing::ScheduleRoute;
use crate::schedule::validate::WindowField;

pub mod grouping;
pub mod routing;
pub mod slots;
#[cfg(test)]
mod tests;
pub mod validate;
pub mod weekly;

/// Where an editing session currently is. There is no terminal state;
/// the editor lives until the screen is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Loading,
    Ready,
    Saving,
}

impl EditorState {
    fn busy_name(self) -> &'static str {
        match self {
            EditorState::Loading => "loading",
            EditorState::Saving => "saving",
            EditorState::Ready => "ready",
        }
    }
}

/// Orchestrates one schedule-editing session end to end: fetch and
/// normalize on load, free-form edits while ready, validate-then-submit
/// on save. Each screen instance owns its own editor; nothing is shared
/// between sessions.
pub struct ScheduleEditor<'a, B: ScheduleBackend> {
    ctx: &'a SessionContext,
    backend: &'a B,
    route: ScheduleRoute,
    schedule: WeeklySchedule,
    state: EditorState,
    dirty: bool,
}

impl<'a, B: ScheduleBackend> ScheduleEditor<'a, B> {
    /// Opens a session in `Loading`. The ownership routing is bound here,
    /// once, and never re-evaluated afterwards.
    pub fn begin(ctx: &'a SessionContext, backend: &'a B) -> Self {
        let route = ScheduleRoute::bind(ctx.ownership.clone());
        let target = if route.ownership().is_linked() {
            "linked schedule"
        } else {
            "own schedule"
        };
        ctx.logger.info(
            format!("Schedule edit session started ({target})."),
            LogTarget::FileOnly,
        );

        Self {
            ctx,
            backend,
            route,
            schedule: WeeklySchedule::all_closed(),
            state: EditorState::Loading,
            dirty: false,
        }
    }

    /// Fetches the remote schedule and becomes `Ready`. This never fails:
    /// a fetch error falls open to the default template (the provider is
    /// never blocked from an editable calendar), and an empty record set
    /// means the provider has never saved a schedule, which also gets the
    /// template. Only a non-empty response goes through `normalize`.
    pub fn load(&mut self) {
        if self.state != EditorState::Loading {
            return;
        }

        self.schedule = match self.route.fetch(self.backend) {
            Ok(days) if days.is_empty() => {
                self.ctx.logger.info(
                    "No stored schedule found; starting from the default template.",
                    LogTarget::FileOnly,
                );
                weekly::default_template(&self.ctx.config)
            }
            Ok(days) => weekly::normalize(&days),
            Err(err) => {
                self.ctx.logger.warn(
                    format!("Schedule fetch failed ({err}); falling open to the default template."),
                    LogTarget::FileOnly,
                );
                weekly::default_template(&self.ctx.config)
            }
        };

        self.state = EditorState::Ready;
        self.dirty = false;
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state {
            EditorState::Ready => Ok(()),
            other => Err(Error::EditorBusy(other.busy_name())),
        }
    }

    pub fn toggle_day(&mut self, day: DayOfWeek) -> Result<()> {
        self.ensure_ready()?;
        weekly::toggle_day(&mut self.schedule, day, *self.ctx.config.default_window());
        self.dirty = true;
        Ok(())
    }

    pub fn add_window(&mut self, day: DayOfWeek, window: TimeWindow) -> Result<()> {
        self.ensure_ready()?;
        validate::add_window(self.schedule.day_mut(day), window);
        self.dirty = true;
        Ok(())
    }

    pub fn remove_window(&mut self, day: DayOfWeek, index: usize) -> Result<()> {
        self.ensure_ready()?;
        if validate::remove_window(self.schedule.day_mut(day), index) {
            self.dirty = true;
        }
        Ok(())
    }

    pub fn update_window(
        &mut self,
        day: DayOfWeek,
        index: usize,
        field: WindowField,
        raw: &str,
    ) -> Result<()> {
        self.ensure_ready()?;
        if validate::update_window(self.schedule.day_mut(day), index, field, raw)? {
            self.dirty = true;
        }
        Ok(())
    }

    /// Validates every enabled day, then submits the full replacement
    /// set. The first validation failure aborts before any network call.
    /// On success the server's echoed records become the new in-memory
    /// schedule (picking up server-side canonicalization) and the dirty
    /// flag clears. On failure the session is preserved as-is.
    pub fn save(&mut self) -> Result<()> {
        self.ensure_ready()?;

        for day in self.schedule.open_days() {
            validate::validate(day)?;
        }

        self.state = EditorState::Saving;
        let payload = weekly::serialize_for_save(&self.schedule);

        match self.route.save(self.backend, &payload) {
            Ok(echo) => {
                self.schedule = weekly::normalize(&echo);
                self.dirty = false;
                self.state = EditorState::Ready;
                self.ctx
                    .logger
                    .info("Schedule saved.", LogTarget::FileOnly);
                Ok(())
            }
            Err(err) => {
                self.state = EditorState::Ready;
                self.ctx.logger.error(
                    format!("Schedule save failed: {err}"),
                    LogTarget::FileOnly,
                );
                Err(err)
            }
        }
    }
}
