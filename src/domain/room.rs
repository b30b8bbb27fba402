use std::collections::HashMap;
use std::fmt;

use crate::api::room_dto::RoomDto;
use crate::error::{Error, Result};

/// Rooms without an explicit position sort after all positioned rooms.
const UNPOSITIONED: i64 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub i64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub position: i64,
    /// True if talks in this room are video-recorded.
    pub video: bool,
    /// Booked talk time in half-hour units. Bookkeeping only.
    pub occupied: f64,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, position: Option<i64>) -> Self {
        Room {
            id,
            name: name.into(),
            position: position.unwrap_or(UNPOSITIONED),
            video: false,
            occupied: 0.0,
        }
    }

    /// Builds a Room from a serialized room-listing entry.
    pub fn from_dto(dto: &RoomDto, locale: &str, video_rooms: &[String]) -> Result<Self> {
        let name = dto.name.get(locale).cloned().ok_or_else(|| {
            Error::ModelConstructionError(format!(
                "room {} has no name for locale '{}'",
                dto.id, locale
            ))
        })?;

        let mut room = Room::new(RoomId(dto.id), name, dto.position);
        room.video = video_rooms.contains(&room.name);
        Ok(room)
    }

    /// Sort key for column order: explicit position first, then name.
    pub fn order_key(&self) -> (i64, &str) {
        (self.position, self.name.as_str())
    }

    pub fn occupy(&mut self, minutes: i64) {
        self.occupied += minutes as f64 / 30.0;
    }
}

/// The stable set of rooms of one event, looked up by id or display name.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomId, Room>,
    by_name: HashMap<String, RoomId>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        RoomRegistry::default()
    }

    pub fn from_dtos(dtos: &[RoomDto], locale: &str, video_rooms: &[String]) -> Result<Self> {
        let mut registry = RoomRegistry::new();
        for dto in dtos {
            registry.insert(Room::from_dto(dto, locale, video_rooms)?);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, room: Room) {
        self.by_name.insert(room.name.clone(), room.id);
        self.rooms.insert(room.id, room);
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Looks up a room, reporting the referencing record on failure.
    pub fn resolve(&self, id: RoomId, context: &str) -> Result<&Room> {
        self.rooms.get(&id).ok_or_else(|| Error::UnknownRoom {
            reference: id.to_string(),
            context: context.to_string(),
        })
    }

    pub fn lookup_name(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// Column sort key for `id`. Ids are validated at construction; the
    /// sentinel keeps the ordering total for the comparator.
    pub fn order_key(&self, id: RoomId) -> (i64, &str) {
        match self.rooms.get(&id) {
            Some(room) => room.order_key(),
            None => (i64::MAX, ""),
        }
    }

    /// Display label for log and error messages.
    pub fn label(&self, id: RoomId) -> String {
        match self.rooms.get(&id) {
            Some(room) => format!("'{}' (id {})", room.name, room.id),
            None => format!("id {}", id),
        }
    }

    pub fn occupy(&mut self, id: RoomId, minutes: i64) {
        if let Some(room) = self.rooms.get_mut(&id) {
            room.occupy(minutes);
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }
}
