use slotmap::{SlotMap, new_key_type};

use crate::api::config_dto::{ExtraSessionDto, MetaSessionDto};
use crate::api::talk_dto::TalkDto;
use crate::domain::room::{RoomId, RoomRegistry};
use crate::domain::{EventTime, parse_event_time};
use crate::error::{Error, Result};

new_key_type! {
    pub struct SessionId;
}

/// One scheduled block on the timeline.
///
/// Construction enforces `end > start`; zero-length sessions are invalid.
/// Start and end never change afterwards. Row spans live in a side table of
/// the layout result, not here.
#[derive(Debug, Clone)]
pub struct Interval {
    pub start: EventTime,
    pub end: EventTime,
    pub room: RoomId,
    pub kind: IntervalKind,
}

#[derive(Debug, Clone)]
pub enum IntervalKind {
    Talk(TalkDetails),
    Break { label: String },
    Extra { title: String },
    /// Container interval. Its children are rendered through its own detail
    /// view and never placed in slots directly.
    Meta {
        title: String,
        children: Vec<SessionId>,
    },
}

impl IntervalKind {
    /// Short label used to locate the record in logs and error messages.
    pub fn label(&self) -> &str {
        match self {
            IntervalKind::Talk(details) => &details.code,
            IntervalKind::Break { label } => label,
            IntervalKind::Extra { title } => title,
            IntervalKind::Meta { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TalkDetails {
    pub code: String,
    pub title: String,
    pub state: Option<String>,
    pub speakers: Vec<String>,
    pub short_abstract: String,
    pub long_abstract: String,
    pub resources: Vec<ResourceLink>,
    pub answers: Vec<QuestionAnswer>,
}

#[derive(Debug, Clone)]
pub struct ResourceLink {
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct QuestionAnswer {
    pub question_id: i64,
    pub question: String,
    pub answer: String,
}

impl Interval {
    pub fn new(start: EventTime, end: EventTime, room: RoomId, kind: IntervalKind) -> Result<Self> {
        if end <= start {
            return Err(Error::InvalidInterval {
                context: kind.label().to_string(),
                start,
                end,
            });
        }
        Ok(Interval {
            start,
            end,
            room,
            kind,
        })
    }

    /// Builds a talk interval from an export entry, resolving the room
    /// against the registry (by localized name for the public export shape,
    /// by id for the editor shape).
    pub fn from_talk(
        dto: &TalkDto,
        registry: &RoomRegistry,
        locale: &str,
        url_prefix: &str,
    ) -> Result<Self> {
        let (start_raw, end_raw) = dto.scheduled_times().ok_or_else(|| {
            Error::ModelConstructionError(format!("talk {} has no scheduling slot", dto.code))
        })?;
        let start = parse_event_time(start_raw)?;
        let end = parse_event_time(end_raw)?;

        let room = match &dto.slot {
            Some(slot) => {
                let name = slot.room.get(locale).ok_or_else(|| {
                    Error::ModelConstructionError(format!(
                        "talk {} has no room name for locale '{}'",
                        dto.code, locale
                    ))
                })?;
                registry.lookup_name(name).ok_or_else(|| Error::UnknownRoom {
                    reference: name.clone(),
                    context: dto.code.clone(),
                })?
            }
            None => {
                let id = dto.room.ok_or_else(|| {
                    Error::ModelConstructionError(format!(
                        "talk {} has no scheduling slot",
                        dto.code
                    ))
                })?;
                registry.resolve(RoomId(id), &dto.code)?.id
            }
        };

        let details = TalkDetails {
            code: dto.code.clone(),
            title: dto.title.clone(),
            state: dto.state.clone(),
            speakers: dto.speakers.iter().map(|s| s.name.clone()).collect(),
            short_abstract: dto.short_abstract.clone().unwrap_or_default(),
            long_abstract: dto.description.clone().unwrap_or_default(),
            resources: dto
                .resources
                .iter()
                .map(|r| ResourceLink {
                    description: r.description.clone(),
                    url: resolve_resource_url(&r.resource, url_prefix),
                })
                .collect(),
            answers: dto
                .answers
                .iter()
                .filter_map(|a| {
                    let question = a.question.question.get(locale)?;
                    Some(QuestionAnswer {
                        question_id: a.question.id,
                        question: question.clone(),
                        answer: a.answer.clone(),
                    })
                })
                .collect(),
        };

        Interval::new(start, end, room, IntervalKind::Talk(details))
    }

    /// Builds one replica of a break for a single room.
    pub fn break_for_room(
        label: &str,
        start: EventTime,
        end: EventTime,
        room: RoomId,
    ) -> Result<Self> {
        Interval::new(
            start,
            end,
            room,
            IntervalKind::Break {
                label: label.to_string(),
            },
        )
    }

    pub fn from_extra(dto: &ExtraSessionDto, registry: &RoomRegistry) -> Result<Self> {
        let room = registry.resolve(RoomId(dto.room), &dto.name)?.id;
        Interval::new(
            parse_event_time(&dto.start)?,
            parse_event_time(&dto.end)?,
            room,
            IntervalKind::Extra {
                title: dto.name.clone(),
            },
        )
    }

    pub fn from_meta(dto: &MetaSessionDto, registry: &RoomRegistry) -> Result<Self> {
        let room = registry.resolve(RoomId(dto.room), &dto.name)?.id;
        Interval::new(
            parse_event_time(&dto.start)?,
            parse_event_time(&dto.end)?,
            room,
            IntervalKind::Meta {
                title: dto.name.clone(),
                children: Vec::new(),
            },
        )
    }

    pub fn is_break(&self) -> bool {
        matches!(self.kind, IntervalKind::Break { .. })
    }

    pub fn is_talk(&self) -> bool {
        matches!(self.kind, IntervalKind::Talk(_))
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Relative resource paths get the platform prefix, absolute URLs pass through.
fn resolve_resource_url(resource: &str, url_prefix: &str) -> String {
    if resource.starts_with("https://") || resource.starts_with("http://") {
        resource.to_string()
    } else {
        format!("{}{}", url_prefix, resource)
    }
}

/// Owns every interval of the event. Slots, day lists and the layout tables
/// refer to intervals by `SessionId` only, so dropping a slot never drops a
/// session.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: SlotMap<SessionId, Interval>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    pub fn insert(&mut self, interval: Interval) -> SessionId {
        self.sessions.insert(interval)
    }

    pub fn get(&self, id: SessionId) -> Option<&Interval> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Interval> {
        self.sessions.get_mut(id)
    }

    /// All ids sorted by (start, end). The sort is stable, so sessions with
    /// identical intervals keep their insertion order and layout output is
    /// deterministic.
    pub fn ids_by_start(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.keys().collect();
        ids.sort_by_key(|&id| (self.sessions[id].start, self.sessions[id].end));
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (SessionId, &Interval)> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl std::ops::Index<SessionId> for SessionStore {
    type Output = Interval;

    fn index(&self, id: SessionId) -> &Interval {
        &self.sessions[id]
    }
}
