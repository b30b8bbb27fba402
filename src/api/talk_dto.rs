use serde::Deserialize;
use std::collections::HashMap;

/// One entry of the talk export.
///
/// Two shapes exist in the wild: the public schedule API nests times and the
/// room name under `slot`, the schedule editor API puts `start`, `end` and a
/// numeric `room` id at the top level. Both are accepted; unscheduled drafts
/// carry neither and are dropped by the loader.
#[derive(Deserialize, Debug, Clone)]
pub struct TalkDto {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "abstract", default)]
    pub short_abstract: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub speakers: Vec<SpeakerDto>,
    #[serde(default)]
    pub resources: Vec<ResourceDto>,
    #[serde(default)]
    pub answers: Vec<AnswerDto>,

    #[serde(default)]
    pub slot: Option<TalkSlotDto>,

    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub room: Option<i64>,
}

impl TalkDto {
    /// Raw start/end strings from whichever export shape is present.
    pub fn scheduled_times(&self) -> Option<(&str, &str)> {
        if let Some(slot) = &self.slot {
            return Some((slot.start.as_str(), slot.end.as_str()));
        }
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }

    /// True if the talk carries a complete room/time assignment.
    pub fn is_scheduled(&self) -> bool {
        match &self.slot {
            Some(slot) => !slot.room.is_empty(),
            None => self.scheduled_times().is_some() && self.room.is_some(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct TalkSlotDto {
    pub start: String,
    pub end: String,
    /// Room display name, keyed by locale.
    pub room: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpeakerDto {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResourceDto {
    pub resource: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AnswerDto {
    pub question: QuestionDto,
    pub answer: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct QuestionDto {
    pub id: i64,
    /// Question text, keyed by locale.
    pub question: HashMap<String, String>,
}
