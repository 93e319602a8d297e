use crate::core::models::{SlotQuery, TimeSlotCandidate};
use crate::errors::Result;
use crate::remote::{ScheduleBackend, slots_to_model};

/// Whether a slot can host a service of the requested duration. With no
/// duration constraint every slot fits. A slot without capacity metadata
/// also fits: the backend makes the final bookability call at
/// confirmation time, so the filter stays permissive.
pub fn slot_fits(slot: &TimeSlotCandidate, service_duration: Option<u32>) -> bool {
    match (service_duration, slot.duration_minutes) {
        (None, _) => true,
        (Some(_), None) => true,
        (Some(required), Some(capacity)) => capacity >= required,
    }
}

/// Retains only the slots able to host the service. `available` is never
/// touched here; booked-status display is the caller's concern and kept
/// orthogonal to duration fit.
pub fn compatible_slots(
    slots: &[TimeSlotCandidate],
    service_duration: Option<u32>,
) -> Vec<TimeSlotCandidate> {
    slots
        .iter()
        .filter(|s| slot_fits(s, service_duration))
        .cloned()
        .collect()
}

/// Booking-flow convenience: fetch the day's candidates and keep the
/// duration-compatible ones.
pub fn fetch_compatible_slots(
    backend: &dyn ScheduleBackend,
    query: &SlotQuery,
    service_duration: Option<u32>,
) -> Result<Vec<TimeSlotCandidate>> {
    let slots = slots_to_model(&backend.fetch_available_slots(query)?)?;
    Ok(compatible_slots(&slots, service_duration))
}
