#![allow(dead_code)]

use chrono::{FixedOffset, TimeZone};

use schedule_grid::domain::EventTime;
use schedule_grid::domain::room::{Room, RoomId, RoomRegistry};
use schedule_grid::domain::schedule::{
    BreakDef, LayoutConfig, Schedule, build_schedule,
};
use schedule_grid::domain::session::{
    Interval, IntervalKind, SessionId, SessionStore, TalkDetails,
};
use schedule_grid::domain::slot::{Occupant, Slot};
use schedule_grid::error::Result;

/// Instant on the given June 2024 day, UTC.
pub fn at(day: u32, hour: u32, minute: u32) -> EventTime {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 6, day, hour, minute, 0)
        .unwrap()
}

pub fn registry(rooms: &[(i64, &str, Option<i64>)]) -> RoomRegistry {
    let mut registry = RoomRegistry::new();
    for &(id, name, position) in rooms {
        registry.insert(Room::new(RoomId(id), name, position));
    }
    registry
}

pub fn talk(
    store: &mut SessionStore,
    room: i64,
    start: EventTime,
    end: EventTime,
    title: &str,
) -> SessionId {
    let details = TalkDetails {
        code: title.to_string(),
        title: title.to_string(),
        state: Some("confirmed".to_string()),
        speakers: Vec::new(),
        short_abstract: String::new(),
        long_abstract: String::new(),
        resources: Vec::new(),
        answers: Vec::new(),
    };
    store.insert(Interval::new(start, end, RoomId(room), IntervalKind::Talk(details)).unwrap())
}

pub fn extra(
    store: &mut SessionStore,
    room: i64,
    start: EventTime,
    end: EventTime,
    title: &str,
) -> SessionId {
    store.insert(
        Interval::new(
            start,
            end,
            RoomId(room),
            IntervalKind::Extra {
                title: title.to_string(),
            },
        )
        .unwrap(),
    )
}

pub fn meta(
    store: &mut SessionStore,
    room: i64,
    start: EventTime,
    end: EventTime,
    title: &str,
) -> SessionId {
    store.insert(
        Interval::new(
            start,
            end,
            RoomId(room),
            IntervalKind::Meta {
                title: title.to_string(),
                children: Vec::new(),
            },
        )
        .unwrap(),
    )
}

pub fn layout(
    store: &mut SessionStore,
    registry: &RoomRegistry,
    breaks: &[BreakDef],
    max_minutes: i64,
) -> Result<Schedule> {
    build_schedule(
        store,
        registry,
        breaks,
        &LayoutConfig::with_max_length_minutes(max_minutes),
    )
}

/// One string per column: the session label, `~label` for a continuation,
/// `-` for a gap.
pub fn columns(slot: &Slot, store: &SessionStore) -> Vec<String> {
    slot.occupants
        .iter()
        .map(|occupant| match occupant {
            Occupant::Gap => "-".to_string(),
            Occupant::Session(id) => store[*id].kind.label().to_string(),
            Occupant::Continuation(id) => format!("~{}", store[*id].kind.label()),
        })
        .collect()
}

/// Structural snapshot of a schedule, independent of session ids: per slot
/// the time range and the column descriptions.
pub fn snapshot(schedule: &Schedule, store: &SessionStore) -> Vec<(String, Vec<String>)> {
    schedule
        .slots
        .iter()
        .map(|slot| {
            (
                format!("{}..{}", slot.start, slot.end),
                columns(slot, store),
            )
        })
        .collect()
}
