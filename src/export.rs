use crate::domain::room::RoomRegistry;
use crate::domain::schedule::Schedule;
use crate::domain::session::{IntervalKind, SessionStore};
use crate::domain::slot::Occupant;
use crate::error::Result;

const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M";

/// Writes the laid-out grid as long-format CSV: one record per slot entry,
/// with the slot's date and time range, the room column, the entry kind and
/// the rendered title.
pub fn write_schedule_csv(
    path: &str,
    schedule: &Schedule,
    store: &SessionStore,
    registry: &RoomRegistry,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "slot_start", "slot_end", "room", "entry", "title"])?;

    for slot in &schedule.slots {
        let date = slot.start.date_naive();
        let Some(day) = schedule.days.iter().find(|d| d.date == date) else {
            log::warn!("Slot {}..{} has no matching day; skipping", slot.start, slot.end);
            continue;
        };

        // After gap filling the occupants align one-to-one with the day's rooms.
        for (occupant, &room) in slot.occupants.iter().zip(&day.rooms) {
            let room_name = registry
                .get(room)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| room.to_string());

            let (entry, title) = describe(occupant, store);
            writer.write_record([
                date.format(DATE_FMT).to_string(),
                slot.start.format(TIME_FMT).to_string(),
                slot.end.format(TIME_FMT).to_string(),
                room_name,
                entry.to_string(),
                title,
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn describe(occupant: &Occupant, store: &SessionStore) -> (&'static str, String) {
    match occupant {
        Occupant::Gap => ("free", String::new()),
        Occupant::Continuation(id) => ("continued", store[*id].kind.label().to_string()),
        Occupant::Session(id) => {
            let interval = &store[*id];
            let entry = match &interval.kind {
                IntervalKind::Talk(_) => "talk",
                IntervalKind::Break { .. } => "break",
                IntervalKind::Extra { .. } => "extra",
                IntervalKind::Meta { .. } => "meta",
            };
            let title = match &interval.kind {
                IntervalKind::Talk(details) => details.title.clone(),
                other => other.label().to_string(),
            };
            (entry, title)
        }
    }
}
