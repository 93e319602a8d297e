use crate::core::models::DaySchedule;
use crate::core::types::{TimeOfDay, TimeWindow};
use crate::errors::{Error, Result};

/// Which side of a window a field edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowField {
    Start,
    End,
}

/// Checks a single day before save. A closed day always passes, whatever
/// its stored windows contain. For an open day every window must end
/// after it starts, and after sorting by start no window may begin
/// before the previous one ends.
///
/// Format errors cannot reach this point: windows are typed, so
/// `InvalidTimeFormat` is raised where strings are parsed (field edits
/// and the wire boundary).
pub fn validate(day: &DaySchedule) -> Result<()> {
    if !day.is_available {
        return Ok(());
    }

    for window in &day.windows {
        if window.duration_minutes().is_none() {
            return Err(Error::InvalidRange {
                day: day.day,
                start: window.start,
                end: window.end,
            });
        }
    }

    let sorted = sorted_windows(day);
    for pair in sorted.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(Error::OverlappingWindows {
                day: day.day,
                first: pair[0],
                second: pair[1],
            });
        }
    }

    Ok(())
}

/// Windows ordered by start time. The source guarantees no ordering, so
/// adjacency checks always run over this.
pub fn sorted_windows(day: &DaySchedule) -> Vec<TimeWindow> {
    let mut windows = day.windows.clone();
    windows.sort_by_key(|w| w.start);
    windows
}

/// Appends a window without validating it. Overlap and range checks are
/// deferred to save so exploratory edits are never rejected mid-typing.
pub fn add_window(day: &mut DaySchedule, window: TimeWindow) {
    day.windows.push(window);
}

/// Removes by position. Out-of-bounds is a silent no-op, matching the
/// permissive editing UX. Returns whether anything changed.
pub fn remove_window(day: &mut DaySchedule, index: usize) -> bool {
    if index < day.windows.len() {
        day.windows.remove(index);
        true
    } else {
        false
    }
}

/// Replaces one side of one window from a raw field value. The time must
/// parse, but the resulting window is not re-validated; an inverted range
/// is allowed to exist until save. Returns whether anything changed.
pub fn update_window(
    day: &mut DaySchedule,
    index: usize,
    field: WindowField,
    raw: &str,
) -> Result<bool> {
    let Some(window) = day.windows.get_mut(index) else {
        return Ok(false);
    };
    let time = TimeOfDay::try_from_str(raw)?;
    match field {
        WindowField::Start => window.start = time,
        WindowField::End => window.end = time,
    }
    Ok(true)
}
