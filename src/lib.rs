use chrono::NaiveDateTime;

use crate::api::ResultsDto;
use crate::api::config_dto::ConfigDto;
use crate::api::room_dto::RoomDto;
use crate::api::talk_dto::TalkDto;
use crate::domain::parse_event_time;
use crate::domain::room::RoomRegistry;
use crate::domain::schedule::{self, BreakDef, LayoutConfig, Schedule};
use crate::domain::session::{Interval, SessionStore};
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod export;
pub mod loader;
pub mod logger;

/// Filters applied to the talk export before layout starts. The layout
/// engine itself never filters.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Keep confirmed talks only.
    pub confirmed_only: bool,
    /// Keep talks ending at or after this local time.
    pub time_from: Option<NaiveDateTime>,
    /// Keep talks starting at or before this local time.
    pub time_to: Option<NaiveDateTime>,
}

/// The fully constructed event: room registry, session store and the
/// computed day/slot grid.
#[derive(Debug)]
pub struct EventModel {
    pub registry: RoomRegistry,
    pub store: SessionStore,
    pub schedule: Schedule,
}

/// Loads the room and talk exports, applies the render options, builds the
/// domain model and lays it out.
pub fn generate_schedule(
    rooms_path: &str,
    talks_path: &str,
    config: &ConfigDto,
    locale: &str,
    options: &RenderOptions,
) -> Result<EventModel> {
    let rooms_dto: ResultsDto<RoomDto> = parse_json_file(rooms_path)?;
    let mut registry = RoomRegistry::from_dtos(&rooms_dto.results, locale, &config.video_rooms)?;
    log::info!("Room listing parsed: {} rooms.", registry.len());

    let talks_dto: ResultsDto<TalkDto> = parse_json_file(talks_path)?;
    let total = talks_dto.results.len();
    let talks = filter_talks(talks_dto.results, options);
    log::info!(
        "Talk export parsed: {} of {} talks scheduled after filters.",
        talks.len(),
        total
    );

    let mut store = SessionStore::new();
    for dto in &talks {
        let interval = Interval::from_talk(dto, &registry, locale, &config.pretalx_url_prefix)?;
        registry.occupy(interval.room, interval.duration_minutes());
        store.insert(interval);
    }
    for extra in &config.extra_sessions {
        store.insert(Interval::from_extra(extra, &registry)?);
    }
    for meta in &config.meta_sessions {
        store.insert(Interval::from_meta(meta, &registry)?);
    }

    let breaks: Vec<BreakDef> = config
        .breaks
        .iter()
        .map(BreakDef::from_dto)
        .collect::<Result<_>>()?;

    let layout = LayoutConfig::with_max_length_minutes(config.max_length);
    let schedule = schedule::build_schedule(&mut store, &registry, &breaks, &layout)?;
    log::info!(
        "Layout complete: {} days, {} slots.",
        schedule.days.len(),
        schedule.slots.len()
    );

    Ok(EventModel {
        registry,
        store,
        schedule,
    })
}

/// Drops unscheduled drafts and applies the confirmed-only and time-range
/// filters. Talks whose timestamps fail to parse are kept here so that
/// domain construction reports them with full context.
fn filter_talks(talks: Vec<TalkDto>, options: &RenderOptions) -> Vec<TalkDto> {
    talks
        .into_iter()
        .filter(|t| t.is_scheduled())
        .filter(|t| {
            if options.confirmed_only {
                t.state.as_deref() == Some("confirmed")
            } else {
                true
            }
        })
        .filter(|t| match options.time_from {
            Some(from) => match t.scheduled_times().map(|(_, end)| parse_event_time(end)) {
                Some(Ok(end)) => end.naive_local() >= from,
                _ => true,
            },
            None => true,
        })
        .filter(|t| match options.time_to {
            Some(to) => match t.scheduled_times().map(|(start, _)| parse_event_time(start)) {
                Some(Ok(start)) => start.naive_local() <= to,
                _ => true,
            },
            None => true,
        })
        .collect()
}
