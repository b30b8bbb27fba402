use crate::domain::EventTime;
use crate::domain::room::RoomRegistry;
use crate::domain::session::{SessionId, SessionStore};

/// One row of the schedule grid: a derived time range plus one entry per
/// room column. Before gap filling the occupant list holds only the sessions
/// registered for this range; afterwards it is aligned to the day's room
/// list, one entry per room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub start: EventTime,
    pub end: EventTime,
    pub occupants: Vec<Occupant>,
}

/// Entry of a slot column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    /// First slot of a session; full content is rendered here.
    Session(SessionId),
    /// Later slot of a multi-slot session; the room is occupied but there
    /// is nothing new to render.
    Continuation(SessionId),
    /// No session in this room for this time range.
    Gap,
}

impl Occupant {
    pub fn session_id(&self) -> Option<SessionId> {
        match self {
            Occupant::Session(id) | Occupant::Continuation(id) => Some(*id),
            Occupant::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Occupant::Gap)
    }
}

impl Slot {
    pub fn new(start: EventTime, end: EventTime) -> Self {
        Slot {
            start,
            end,
            occupants: Vec::new(),
        }
    }

    pub fn add(&mut self, occupant: Occupant) {
        self.occupants.push(occupant);
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// True if any occupant of this slot is a break.
    pub fn has_break(&self, store: &SessionStore) -> bool {
        self.occupants
            .iter()
            .filter_map(Occupant::session_id)
            .any(|id| store[id].is_break())
    }

    /// Orders the occupants by their room's column key.
    pub fn sort_occupants(&mut self, store: &SessionStore, registry: &RoomRegistry) {
        self.occupants.sort_by(|a, b| {
            let key = |occupant: &Occupant| occupant.session_id().map(|id| store[id].room);
            let room_a = key(a).map(|room| registry.order_key(room));
            let room_b = key(b).map(|room| registry.order_key(room));
            room_a.cmp(&room_b)
        });
    }
}
