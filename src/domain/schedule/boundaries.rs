use crate::domain::EventTime;
use crate::domain::schedule::LayoutConfig;
use crate::domain::session::{SessionId, SessionStore};
use crate::domain::slot::Slot;

/// Distinct (start, end) pairs in first-occurrence order. The input is
/// sorted by (start, end), so duplicates are adjacent and sessions sharing
/// an identical interval contribute one pair.
fn distinct_intervals(store: &SessionStore, order: &[SessionId]) -> Vec<(EventTime, EventTime)> {
    let mut pairs: Vec<(EventTime, EventTime)> = Vec::new();

    for &id in order {
        let interval = &store[id];
        let pair = (interval.start, interval.end);
        if pairs.last() != Some(&pair) {
            pairs.push(pair);
        }
    }

    pairs
}

/// The strictly increasing sequence of instants at which some session's
/// occupancy state changes: the union of all start and end instants, sorted
/// and deduplicated.
pub fn boundary_instants(store: &SessionStore, order: &[SessionId]) -> Vec<EventTime> {
    let mut times = Vec::new();
    for (start, end) in distinct_intervals(store, order) {
        times.push(start);
        times.push(end);
    }

    times.sort();
    times.dedup();
    times
}

/// Cuts the boundary sequence into slots: one slot per adjacent boundary
/// pair, except pairs further apart than the configured maximum. Those
/// ranges are unscheduled gaps (overnight, between event blocks) and
/// produce no slot, leaving holes in coverage.
///
/// An empty session list yields an empty slot list.
pub fn derive_slots(
    store: &SessionStore,
    order: &[SessionId],
    config: &LayoutConfig,
) -> Vec<Slot> {
    let times = boundary_instants(store, order);

    let mut slots = Vec::new();
    for pair in times.windows(2) {
        if pair[1] - pair[0] > config.max_slot_length {
            log::debug!(
                "No slot for {} .. {}: longer than the maximum slot length",
                pair[0],
                pair[1]
            );
            continue;
        }
        slots.push(Slot::new(pair[0], pair[1]));
    }

    slots
}
