use std::fs;

use schedule_grid::api::config_dto::ConfigDto;
use schedule_grid::domain::room::RoomId;
use schedule_grid::error::Error;
use schedule_grid::{RenderOptions, export, generate_schedule};

fn fixture(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn load_config() -> ConfigDto {
    let data = fs::read_to_string(fixture("config.json")).unwrap();
    serde_json::from_str(&data).unwrap()
}

#[test]
fn full_export_lays_out_into_a_two_day_grid() {
    let model = generate_schedule(
        &fixture("rooms.json"),
        &fixture("talks.json"),
        &load_config(),
        "en",
        &RenderOptions::default(),
    )
    .unwrap();

    assert_eq!(model.registry.len(), 3);
    assert!(model.registry.get(RoomId(101)).unwrap().video);
    assert!(!model.registry.get(RoomId(102)).unwrap().video);

    let schedule = &model.schedule;
    assert_eq!(schedule.days.len(), 2);
    // Day one: three talk slots, the coffee break, the social event. The
    // afternoon gap and the overnight gap produce no slots.
    assert_eq!(schedule.slots.len(), 7);

    // Column order on day one is Main Hall, Workshop Room, Open Stage.
    assert_eq!(
        schedule.days[0].rooms,
        vec![RoomId(101), RoomId(102), RoomId(103)]
    );
    assert_eq!(schedule.days[1].rooms, vec![RoomId(101), RoomId(102)]);

    for slot in &schedule.slots {
        let day = schedule
            .days
            .iter()
            .find(|d| d.date == slot.start.date_naive())
            .unwrap();
        assert_eq!(slot.occupants.len(), day.rooms.len());
    }

    // The coffee break covers every room of its day.
    let coffee = schedule
        .slots
        .iter()
        .find(|slot| slot.has_break(&model.store))
        .unwrap();
    assert_eq!(coffee.occupants.len(), 3);
    assert!(coffee.occupants.iter().all(|o| !o.is_gap()));

    // The two mini talks are absorbed by the configured meta session and
    // never show up as slot occupants.
    let titles: Vec<String> = schedule
        .slots
        .iter()
        .flat_map(|slot| slot.occupants.iter())
        .filter_map(|o| o.session_id())
        .map(|id| model.store[id].kind.label().to_string())
        .collect();
    assert!(!titles.contains(&"MINI01".to_string()));
    assert!(!titles.contains(&"MINI02".to_string()));
    assert!(titles.contains(&"Mini Sessions".to_string()));
}

#[test]
fn confirmed_only_drops_accepted_talks() {
    let options = RenderOptions {
        confirmed_only: true,
        ..RenderOptions::default()
    };
    let model = generate_schedule(
        &fixture("rooms.json"),
        &fixture("talks.json"),
        &load_config(),
        "en",
        &options,
    )
    .unwrap();

    let codes: Vec<String> = model
        .store
        .iter()
        .map(|(_, interval)| interval.kind.label().to_string())
        .collect();
    assert!(!codes.contains(&"LGT01".to_string()));
    assert!(codes.contains(&"OPEN01".to_string()));
}

#[test]
fn time_from_keeps_later_days_only() {
    let options = RenderOptions {
        time_from: Some(
            chrono::NaiveDateTime::parse_from_str("2024-06-11 00:00", "%Y-%m-%d %H:%M").unwrap(),
        ),
        ..RenderOptions::default()
    };
    let model = generate_schedule(
        &fixture("rooms.json"),
        &fixture("talks.json"),
        &load_config(),
        "en",
        &options,
    )
    .unwrap();

    let codes: Vec<String> = model
        .store
        .iter()
        .map(|(_, interval)| interval.kind.label().to_string())
        .collect();
    assert!(!codes.contains(&"OPEN01".to_string()));
    assert!(codes.contains(&"CLS01".to_string()));
    // Configured extra sessions are not talks and pass through untouched.
    assert!(codes.contains(&"Social Event".to_string()));
}

#[test]
fn csv_export_writes_one_record_per_grid_cell() {
    let model = generate_schedule(
        &fixture("rooms.json"),
        &fixture("talks.json"),
        &load_config(),
        "en",
        &RenderOptions::default(),
    )
    .unwrap();

    let out = std::env::temp_dir().join("schedule_grid_export_test.csv");
    let out_path = out.to_str().unwrap();
    export::write_schedule_csv(out_path, &model.schedule, &model.store, &model.registry).unwrap();

    let cells: usize = model
        .schedule
        .slots
        .iter()
        .map(|slot| slot.occupants.len())
        .sum();
    let contents = fs::read_to_string(out_path).unwrap();
    assert_eq!(contents.lines().count(), cells + 1);

    let _ = fs::remove_file(out_path);
}

#[test]
fn missing_files_report_an_io_error() {
    let result = generate_schedule(
        "no_such_rooms.json",
        "no_such_talks.json",
        &ConfigDto::default(),
        "en",
        &RenderOptions::default(),
    );

    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn unknown_rooms_are_reported_with_the_talk_code() {
    let result = generate_schedule(
        &fixture("rooms.json"),
        &fixture("talks_bad_room.json"),
        &ConfigDto::default(),
        "en",
        &RenderOptions::default(),
    );

    match result {
        Err(Error::UnknownRoom { reference, context }) => {
            assert_eq!(reference, "Nonexistent Hall");
            assert_eq!(context, "GHOST1");
        }
        other => panic!("expected an unknown room error, got {:?}", other),
    }
}
