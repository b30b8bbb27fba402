use slotmap::SecondaryMap;

use crate::domain::EventTime;
use crate::domain::session::{SessionId, SessionStore};
use crate::domain::slot::{Occupant, Slot};

/// Walks the sessions in (start, end) order, finds each one's home slot,
/// counts the slots it spans, and registers it into them: the session
/// itself into the home slot, a continuation marker into every later slot
/// it covers.
///
/// Sessions arrive in non-decreasing start order, so the cursor only ever
/// moves forward. A session whose home slot was discarded (its whole block
/// exceeds the maximum slot length) has nowhere to appear and is skipped
/// with a warning.
pub fn assign_row_spans(
    store: &SessionStore,
    order: &[SessionId],
    slots: &mut [Slot],
) -> SecondaryMap<SessionId, u32> {
    let mut row_spans = SecondaryMap::new();
    let mut cursor = 0usize;

    for &id in order {
        let session = &store[id];

        let home = (cursor..slots.len()).find(|&i| slots[i].start == session.start);
        let Some(home) = home else {
            log::warn!(
                "Session '{}' starting {} has no slot to occupy; skipping",
                session.kind.label(),
                session.start
            );
            continue;
        };
        cursor = home;

        let span = count_spanned_slots(slots, home, session.end);
        row_spans.insert(id, span as u32);

        slots[home].add(Occupant::Session(id));
        for later in &mut slots[home + 1..home + span] {
            later.add(Occupant::Continuation(id));
        }
    }

    row_spans
}

/// Recomputes every placed session's span against the final slot sequence
/// and overwrites diverging entries. The forward count during assignment
/// agrees with this unless slots between a session's home slot and its end
/// were discarded; the recomputed value wins.
pub fn repair_row_spans(
    store: &SessionStore,
    slots: &[Slot],
    row_spans: &mut SecondaryMap<SessionId, u32>,
) {
    for (home, slot) in slots.iter().enumerate() {
        for occupant in &slot.occupants {
            let Occupant::Session(id) = occupant else {
                continue;
            };

            let span = count_spanned_slots(slots, home, store[*id].end) as u32;
            if row_spans.get(*id) != Some(&span) {
                log::debug!(
                    "Row span of '{}' corrected to {}",
                    store[*id].kind.label(),
                    span
                );
                row_spans.insert(*id, span);
            }
        }
    }
}

/// Number of consecutive slots from `home` whose start lies before `end`.
/// The home slot itself always qualifies, so the result is at least 1.
fn count_spanned_slots(slots: &[Slot], home: usize, end: EventTime) -> usize {
    let mut span = 0usize;
    while home + span < slots.len() && slots[home + span].start < end {
        span += 1;
    }
    span
}
