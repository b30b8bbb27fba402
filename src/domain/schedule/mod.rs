pub mod boundaries;
pub mod gap_fill;
pub mod meta;
pub mod row_span;

use chrono::Duration;
use slotmap::SecondaryMap;
use std::collections::HashSet;

use crate::api::config_dto::BreakDto;
use crate::domain::day::{self, Day};
use crate::domain::room::RoomRegistry;
use crate::domain::session::{Interval, SessionId, SessionStore};
use crate::domain::slot::Slot;
use crate::domain::{EventTime, parse_event_time};
use crate::error::{Error, Result};

/// Tuning for the grid derivation.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Boundary gaps longer than this produce no slot (overnight etc.).
    pub max_slot_length: Duration,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            max_slot_length: Duration::minutes(240),
        }
    }
}

impl LayoutConfig {
    pub fn with_max_length_minutes(minutes: i64) -> Self {
        LayoutConfig {
            max_slot_length: Duration::minutes(minutes),
        }
    }
}

/// A break definition resolved from configuration. One break is replicated
/// across every room active on its day.
#[derive(Debug, Clone)]
pub struct BreakDef {
    pub label: String,
    pub start: EventTime,
    pub end: EventTime,
}

impl BreakDef {
    pub fn from_dto(dto: &BreakDto) -> Result<Self> {
        let start = parse_event_time(&dto.start)?;
        let end = parse_event_time(&dto.end)?;
        if end <= start {
            return Err(Error::InvalidInterval {
                context: dto.name.clone(),
                start,
                end,
            });
        }
        Ok(BreakDef {
            label: dto.name.clone(),
            start,
            end,
        })
    }
}

/// Result of a layout run: the day list, the slot grid, and the row-span
/// side table. Everything refers to sessions by id; the store stays the
/// single owner.
#[derive(Debug)]
pub struct Schedule {
    pub days: Vec<Day>,
    pub slots: Vec<Slot>,
    row_spans: SecondaryMap<SessionId, u32>,
}

impl Schedule {
    /// Number of consecutive slots the session visually occupies.
    pub fn row_span(&self, id: SessionId) -> u32 {
        self.row_spans.get(id).copied().unwrap_or(1)
    }

    /// Logs a per-day and per-slot overview of the computed layout.
    pub fn print_summary(&self, store: &SessionStore, registry: &RoomRegistry) {
        log::info!("--- Schedule Summary ---");
        log::info!("Days: {}  Slots: {}", self.days.len(), self.slots.len());

        for day in &self.days {
            let rooms: Vec<String> = day
                .rooms
                .iter()
                .map(|&room| registry.label(room))
                .collect();
            log::info!("  - {}: rooms [{}]", day.date, rooms.join(", "));
        }

        for slot in &self.slots {
            let occupied = slot
                .occupants
                .iter()
                .filter(|occupant| !occupant.is_gap())
                .count();
            let marker = if slot.has_break(store) { " (break)" } else { "" };
            log::debug!(
                "  {} .. {}: {}/{} columns occupied{}",
                slot.start,
                slot.end,
                occupied,
                slot.occupants.len(),
                marker
            );
        }
        log::info!("------------------------");
    }
}

/// Lays out every interval of the store onto a day/slot grid.
///
/// The steps, in order: meta sessions absorb their short talks, the
/// remaining intervals are grouped into days, breaks are replicated across
/// each day's rooms, slot boundaries are derived, row spans assigned and
/// repaired, and finally every slot is aligned against its day's room list.
///
/// An empty store yields an empty schedule; inconsistent input (a
/// double-booked room, more sessions than rooms in a slot) is a fatal error.
pub fn build_schedule(
    store: &mut SessionStore,
    registry: &RoomRegistry,
    breaks: &[BreakDef],
    config: &LayoutConfig,
) -> Result<Schedule> {
    // Fold short talks into their enclosing meta sessions first, so they
    // take no part in day grouping or slot derivation on their own.
    let absorbed = meta::aggregate_meta_sessions(store);

    let order = placement_order(store, &absorbed);

    // Days and room sets come from talks, extra and meta sessions. Breaks
    // are replicated afterwards and cannot introduce new rooms or days.
    let mut days = day::group_days(store, &order);
    replicate_breaks(store, &days, breaks)?;

    let order = placement_order(store, &absorbed);

    let mut slots = boundaries::derive_slots(store, &order, config);
    let mut row_spans = row_span::assign_row_spans(store, &order, &mut slots);
    row_span::repair_row_spans(store, &slots, &mut row_spans);

    for day in &mut days {
        day.sort_rooms(registry);
    }
    gap_fill::fill_gaps(store, registry, &days, &mut slots)?;

    Ok(Schedule {
        days,
        slots,
        row_spans,
    })
}

/// Ids to lay out, sorted by (start, end), without meta-session children.
fn placement_order(store: &SessionStore, absorbed: &HashSet<SessionId>) -> Vec<SessionId> {
    store
        .ids_by_start()
        .into_iter()
        .filter(|id| !absorbed.contains(id))
        .collect()
}

/// Creates one break interval per room of the matching day. A break on a
/// date with no scheduled day has no room set to replicate into and is
/// skipped.
fn replicate_breaks(store: &mut SessionStore, days: &[Day], breaks: &[BreakDef]) -> Result<()> {
    for def in breaks {
        let date = def.start.date_naive();
        let Some(day) = days.iter().find(|d| d.date == date) else {
            log::warn!(
                "Break '{}' on {} falls on a day without scheduled sessions; skipping",
                def.label,
                date
            );
            continue;
        };

        for &room in &day.rooms {
            let replica = Interval::break_for_room(&def.label, def.start, def.end, room)?;
            store.insert(replica);
        }
    }
    Ok(())
}
