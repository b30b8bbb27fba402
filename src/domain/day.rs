use chrono::NaiveDate;

use crate::domain::room::{RoomId, RoomRegistry};
use crate::domain::session::{SessionId, SessionStore};

/// One calendar date of the event plus the rooms with at least one
/// scheduled interval on that date. Membership is by date only; the time of
/// day is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    /// Rooms in first-seen order until `sort_rooms` establishes column order.
    pub rooms: Vec<RoomId>,
}

impl Day {
    pub fn new(date: NaiveDate, room: RoomId) -> Self {
        Day {
            date,
            rooms: vec![room],
        }
    }

    pub fn add_room(&mut self, room: RoomId) {
        if !self.rooms.contains(&room) {
            self.rooms.push(room);
        }
    }

    pub fn sort_rooms(&mut self, registry: &RoomRegistry) {
        self.rooms
            .sort_by(|a, b| registry.order_key(*a).cmp(&registry.order_key(*b)));
    }
}

/// Partitions the given intervals into days. Every interval lands on the day
/// of its start instant; each day's room set is the union of the rooms seen
/// on that date. Days come back sorted by date.
pub fn group_days(store: &SessionStore, order: &[SessionId]) -> Vec<Day> {
    let mut days: Vec<Day> = Vec::new();

    for &id in order {
        let interval = &store[id];
        let date = interval.start.date_naive();
        match days.iter_mut().find(|d| d.date == date) {
            Some(day) => day.add_room(interval.room),
            None => days.push(Day::new(date, interval.room)),
        }
    }

    days.sort_by_key(|d| d.date);
    days
}
