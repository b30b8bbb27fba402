use std::collections::HashSet;

use crate::domain::session::{IntervalKind, SessionId, SessionStore};

/// Folds talks into their enclosing meta sessions.
///
/// A talk becomes a child of a meta session when both share a room and the
/// talk's interval lies within the meta session's interval. Children are
/// sorted by start time and no longer take part in the grid layout; the
/// meta session itself is laid out as one opaque interval.
///
/// Returns the ids of all absorbed talks.
pub fn aggregate_meta_sessions(store: &mut SessionStore) -> HashSet<SessionId> {
    let meta_ids: Vec<SessionId> = store
        .iter()
        .filter(|(_, interval)| matches!(interval.kind, IntervalKind::Meta { .. }))
        .map(|(id, _)| id)
        .collect();
    let talk_ids: Vec<SessionId> = store
        .iter()
        .filter(|(_, interval)| interval.is_talk())
        .map(|(id, _)| id)
        .collect();

    let mut absorbed = HashSet::new();

    for meta_id in meta_ids {
        let container = &store[meta_id];
        let (start, end, room) = (container.start, container.end, container.room);

        let mut children: Vec<SessionId> = talk_ids
            .iter()
            .copied()
            .filter(|id| !absorbed.contains(id))
            .filter(|&id| {
                let talk = &store[id];
                talk.room == room && talk.start >= start && talk.end <= end
            })
            .collect();
        children.sort_by_key(|&id| store[id].start);

        if children.is_empty() {
            continue;
        }

        log::info!(
            "Meta session '{}' absorbed {} talks",
            store[meta_id].kind.label(),
            children.len()
        );

        absorbed.extend(children.iter().copied());
        if let Some(container) = store.get_mut(meta_id) {
            if let IntervalKind::Meta {
                children: slot_children,
                ..
            } = &mut container.kind
            {
                *slot_children = children;
            }
        }
    }

    absorbed
}
