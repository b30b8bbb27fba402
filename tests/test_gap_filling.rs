mod common;

use common::{at, columns, layout, registry, talk};
use schedule_grid::domain::room::RoomId;
use schedule_grid::domain::session::SessionStore;
use schedule_grid::error::Error;

#[test]
fn every_slot_has_one_entry_per_room_of_its_day() {
    let registry = registry(&[
        (1, "Main Hall", Some(1)),
        (2, "Workshop Room", Some(2)),
        (3, "Open Stage", None),
    ]);
    let mut store = SessionStore::new();
    talk(&mut store, 1, at(10, 9, 0), at(10, 10, 0), "A");
    talk(&mut store, 2, at(10, 9, 30), at(10, 10, 0), "B");
    talk(&mut store, 3, at(10, 9, 0), at(10, 9, 30), "C");
    talk(&mut store, 1, at(11, 9, 0), at(11, 10, 0), "D");

    let schedule = layout(&mut store, &registry, &[], 240).unwrap();

    for slot in &schedule.slots {
        let day = schedule
            .days
            .iter()
            .find(|d| d.date == slot.start.date_naive())
            .unwrap();
        assert_eq!(slot.occupants.len(), day.rooms.len());
    }
}

#[test]
fn columns_follow_room_position_then_name() {
    // Positions win over names; rooms without a position go last.
    let registry = registry(&[
        (1, "Zelt", Some(2)),
        (2, "Aula", Some(1)),
        (3, "Balkon", None),
    ]);
    let mut store = SessionStore::new();
    talk(&mut store, 1, at(10, 9, 0), at(10, 10, 0), "InZelt");
    talk(&mut store, 2, at(10, 9, 0), at(10, 10, 0), "InAula");
    talk(&mut store, 3, at(10, 9, 0), at(10, 10, 0), "InBalkon");

    let schedule = layout(&mut store, &registry, &[], 240).unwrap();

    assert_eq!(
        schedule.days[0].rooms,
        vec![RoomId(2), RoomId(1), RoomId(3)]
    );
    assert_eq!(
        columns(&schedule.slots[0], &store),
        vec!["InAula", "InZelt", "InBalkon"]
    );
}

#[test]
fn double_booked_single_room_day_is_overbooked() {
    // Two overlapping talks in the only room of the day: the shared slot
    // holds more sessions than the day has rooms.
    let registry = registry(&[(1, "Main Hall", Some(1))]);
    let mut store = SessionStore::new();
    talk(&mut store, 1, at(10, 10, 0), at(10, 11, 0), "First");
    talk(&mut store, 1, at(10, 10, 30), at(10, 11, 30), "Second");

    let result = layout(&mut store, &registry, &[], 240);

    assert!(matches!(result, Err(Error::OverbookedSlot { .. })));
}

#[test]
fn double_booked_room_among_free_rooms_is_detected() {
    // The day has two rooms, so the occupant count alone looks fine; the
    // merge still has to reject the second session in the same room.
    let registry = registry(&[(1, "Main Hall", Some(1)), (2, "Workshop Room", Some(2))]);
    let mut store = SessionStore::new();
    talk(&mut store, 1, at(10, 10, 0), at(10, 11, 0), "First");
    talk(&mut store, 1, at(10, 10, 30), at(10, 11, 30), "Second");
    talk(&mut store, 2, at(10, 10, 0), at(10, 10, 30), "Other");

    let result = layout(&mut store, &registry, &[], 240);

    assert!(matches!(result, Err(Error::RoomNotFree { .. })));
}

#[test]
fn gaps_alone_never_fail_the_merge() {
    let registry = registry(&[(1, "Main Hall", Some(1)), (2, "Workshop Room", Some(2))]);
    let mut store = SessionStore::new();
    talk(&mut store, 1, at(10, 9, 0), at(10, 10, 0), "Solo");
    talk(&mut store, 2, at(10, 12, 0), at(10, 13, 0), "Later");

    let schedule = layout(&mut store, &registry, &[], 240).unwrap();

    assert_eq!(schedule.slots.len(), 3);
    assert_eq!(columns(&schedule.slots[0], &store), vec!["Solo", "-"]);
    assert_eq!(columns(&schedule.slots[1], &store), vec!["-", "-"]);
    assert_eq!(columns(&schedule.slots[2], &store), vec!["-", "Later"]);
}
