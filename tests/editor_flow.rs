use std::cell::{Cell, RefCell};

use turnero::core::context::SessionContext;
use turnero::core::models::{LinkId, ScheduleOwnership, SlotQuery};
use turnero::core::types::{DayOfWeek, TimeWindow};
use turnero::errors::{Error, Result};
use turnero::remote::{DayRecordDto, ScheduleBackend, SlotDto};
use turnero::schedule::grouping::group_week;
use turnero::schedule::slots::fetch_compatible_slots;
use turnero::schedule::validate::WindowField;
use turnero::schedule::{EditorState, ScheduleEditor};

/// In-memory backend shared by the scenarios below. Own and linked
/// schedules live in separate stores so routing mistakes show up as
/// wrong-store writes.
#[derive(Default)]
struct MemoryBackend {
    own_days: RefCell<Vec<DayRecordDto>>,
    linked_days: RefCell<Vec<DayRecordDto>>,
    slots: Vec<SlotDto>,
    fail_fetch: Cell<bool>,
    fail_save: Cell<bool>,
}

impl ScheduleBackend for MemoryBackend {
    fn fetch_own_schedule(&self) -> Result<Vec<DayRecordDto>> {
        if self.fail_fetch.get() {
            return Err(Error::fetch("503 service unavailable"));
        }
        Ok(self.own_days.borrow().clone())
    }

    fn fetch_linked_schedule(&self, _link: &LinkId) -> Result<Vec<DayRecordDto>> {
        if self.fail_fetch.get() {
            return Err(Error::fetch("503 service unavailable"));
        }
        Ok(self.linked_days.borrow().clone())
    }

    fn save_own_schedule(&self, days: &[DayRecordDto]) -> Result<Vec<DayRecordDto>> {
        if self.fail_save.get() {
            return Err(Error::save("422 invalid schedule"));
        }
        *self.own_days.borrow_mut() = days.to_vec();
        Ok(days.to_vec())
    }

    fn save_linked_schedule(
        &self,
        _link: &LinkId,
        days: &[DayRecordDto],
    ) -> Result<Vec<DayRecordDto>> {
        if self.fail_save.get() {
            return Err(Error::save("422 invalid schedule"));
        }
        *self.linked_days.borrow_mut() = days.to_vec();
        Ok(days.to_vec())
    }

    fn fetch_available_slots(&self, _query: &SlotQuery) -> Result<Vec<SlotDto>> {
        Ok(self.slots.clone())
    }
}

fn quiet_ctx(ownership: ScheduleOwnership) -> SessionContext {
    let ctx = SessionContext::new(ownership);
    ctx.logger.set_file_logging_enabled(false);
    ctx
}

fn window(s: &str) -> TimeWindow {
    TimeWindow::try_from_str(s).unwrap()
}

#[test]
fn first_session_edits_and_persists_a_schedule() {
    let backend = MemoryBackend::default();

    // First ever session: nothing stored, so the editor starts from the
    // Mon-Fri default template.
    let ctx = quiet_ctx(ScheduleOwnership::Own);
    let mut editor = ScheduleEditor::begin(&ctx, &backend);
    editor.load();
    assert_eq!(editor.state(), EditorState::Ready);
    assert!(editor.schedule().day(DayOfWeek::Mon).is_available);
    assert!(!editor.schedule().day(DayOfWeek::Sat).is_available);

    // Open Saturday mornings and trim Friday.
    editor.toggle_day(DayOfWeek::Sat).unwrap();
    editor
        .update_window(DayOfWeek::Sat, 0, WindowField::End, "14:00")
        .unwrap();
    editor
        .update_window(DayOfWeek::Fri, 0, WindowField::End, "15:00")
        .unwrap();
    editor.save().unwrap();
    assert!(!editor.is_dirty());

    // A later session sees the saved schedule, normalized to 7 days.
    let ctx2 = quiet_ctx(ScheduleOwnership::Own);
    let mut second = ScheduleEditor::begin(&ctx2, &backend);
    second.load();
    assert_eq!(
        second.schedule().day(DayOfWeek::Sat).windows,
        vec![window("09:00-14:00")]
    );
    assert_eq!(
        second.schedule().day(DayOfWeek::Fri).windows,
        vec![window("09:00-15:00")]
    );

    // The read-only view groups Mon-Thu, then Fri, Sat and Sun apart.
    let groups = group_week(second.schedule());
    let labels: Vec<_> = groups.iter().map(|g| g.label()).collect();
    assert_eq!(
        labels,
        vec!["Lunes – Jueves", "Viernes", "Sábado", "Domingo"]
    );
}

#[test]
fn a_place_manages_a_linked_professionals_calendar() {
    let backend = MemoryBackend::default();
    let ctx = quiet_ctx(ScheduleOwnership::linked("invite-301"));

    let mut editor = ScheduleEditor::begin(&ctx, &backend);
    editor.load();
    editor.toggle_day(DayOfWeek::Sun).unwrap();
    editor.save().unwrap();

    // The write landed in the linked store, not the place's own.
    assert!(backend.own_days.borrow().is_empty());
    let stored = backend.linked_days.borrow();
    assert_eq!(stored.len(), 7);
    let sun = stored
        .iter()
        .find(|r| r.day_of_week == DayOfWeek::Sun.index())
        .unwrap();
    assert!(sun.is_available);
}

#[test]
fn degraded_network_never_strands_the_provider() {
    let backend = MemoryBackend::default();
    backend.fail_fetch.set(true);

    let ctx = quiet_ctx(ScheduleOwnership::Own);
    let mut editor = ScheduleEditor::begin(&ctx, &backend);
    editor.load();

    // Fail-open: an editable default calendar instead of an error screen.
    assert_eq!(editor.state(), EditorState::Ready);
    editor.toggle_day(DayOfWeek::Sat).unwrap();

    // The save also fails; the session and its edits survive.
    backend.fail_save.set(true);
    let err = editor.save().unwrap_err();
    assert!(matches!(err, Error::SaveFailed(_)));
    assert!(editor.is_dirty());
    assert!(editor.schedule().day(DayOfWeek::Sat).is_available);

    // Once the backend recovers the same session saves cleanly.
    backend.fail_save.set(false);
    editor.save().unwrap();
    assert!(!editor.is_dirty());
    assert_eq!(backend.own_days.borrow().len(), 7);
}

#[test]
fn booking_flow_filters_slots_by_service_duration() {
    let backend = MemoryBackend {
        slots: vec![
            SlotDto {
                time: "09:00".into(),
                available: true,
                duration_minutes: Some(30),
            },
            SlotDto {
                time: "10:00:00".into(),
                available: true,
                duration_minutes: Some(90),
            },
            SlotDto {
                time: "12:00".into(),
                available: true,
                duration_minutes: None,
            },
        ],
        ..MemoryBackend::default()
    };

    let query = SlotQuery {
        service_id: 7,
        date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        service_type: "lugar".to_string(),
    };

    let slots = fetch_compatible_slots(&backend, &query, Some(60)).unwrap();
    let times: Vec<_> = slots.iter().map(|s| s.time.to_string()).collect();
    assert_eq!(times, vec!["10:00", "12:00"]);
}
