use crate::domain::day::Day;
use crate::domain::room::RoomRegistry;
use crate::domain::session::SessionStore;
use crate::domain::slot::{Occupant, Slot};
use crate::error::{Error, Result};

/// Aligns each slot's occupants against the full room list of its day,
/// inserting an explicit gap for every room with nothing scheduled. After
/// this pass every slot has exactly one entry per room of its day, in
/// column order.
pub fn fill_gaps(
    store: &SessionStore,
    registry: &RoomRegistry,
    days: &[Day],
    slots: &mut [Slot],
) -> Result<()> {
    for slot in slots.iter_mut() {
        let date = slot.start.date_naive();
        let day = days.iter().find(|d| d.date == date).ok_or_else(|| {
            Error::ModelConstructionError(format!(
                "slot {}..{} does not fall on any scheduled day",
                slot.start, slot.end
            ))
        })?;
        fill_slot(store, registry, day, slot)?;
    }
    Ok(())
}

/// Two-pointer merge of the slot's occupants (sorted by room column key)
/// against the day's sorted room list. A room with a matching occupant
/// consumes it; any other room gets a gap. A leftover occupant means its
/// room is double-booked or missing from the day, which is a fatal data
/// inconsistency.
fn fill_slot(
    store: &SessionStore,
    registry: &RoomRegistry,
    day: &Day,
    slot: &mut Slot,
) -> Result<()> {
    slot.sort_occupants(store, registry);

    if slot.occupants.len() > day.rooms.len() {
        return Err(Error::OverbookedSlot {
            start: slot.start,
            end: slot.end,
            occupied: slot.occupants.len(),
            rooms: day.rooms.len(),
        });
    }

    let mut aligned = Vec::with_capacity(day.rooms.len());
    let mut next = 0usize;

    for &room in &day.rooms {
        match slot.occupants.get(next) {
            Some(occupant)
                if occupant
                    .session_id()
                    .is_some_and(|id| store[id].room == room) =>
            {
                aligned.push(*occupant);
                next += 1;
            }
            _ => aligned.push(Occupant::Gap),
        }
    }

    if let Some(leftover) = slot.occupants.get(next) {
        // At this point the occupant list holds no gaps yet.
        let (room, session) = match leftover.session_id() {
            Some(id) => (
                registry.label(store[id].room),
                store[id].kind.label().to_string(),
            ),
            None => ("unknown".to_string(), "gap".to_string()),
        };
        return Err(Error::RoomNotFree {
            room,
            session,
            start: slot.start,
            end: slot.end,
        });
    }

    slot.occupants = aligned;
    Ok(())
}
