use chrono::{DateTime, FixedOffset};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse export JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write CSV output: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid interval for '{context}': end {end} is not after start {start}")]
    InvalidInterval {
        context: String,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },

    #[error("Room {reference} of '{context}' does not exist in the room listing")]
    UnknownRoom { reference: String, context: String },

    #[error(
        "Room {room} cannot take '{session}' in slot {start}..{end}: \
         the room is double-booked or missing from that day's columns"
    )]
    RoomNotFree {
        room: String,
        session: String,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },

    #[error("Slot {start}..{end} holds {occupied} sessions but its day only has {rooms} rooms")]
    OverbookedSlot {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        occupied: usize,
        rooms: usize,
    },

    #[error("Failed to build internal schedule model: {0}")]
    ModelConstructionError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
