//! Integration tests for JSON stage loading and full fixed-step runs.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use stagekit::components::activation::Activation;
use stagekit::components::completion::Completion;
use stagekit::components::fuse::Fuse;
use stagekit::components::sequence::Sequence;
use stagekit::components::stagelayout::{StageData, StageLayout, UnitTag};
use stagekit::events::sequence::SequenceFinishedEvent;
use stagekit::resources::inputlatch::{InputLatch, InputSnapshot};
use stagekit::resources::inputscript::InputScript;
use stagekit::resources::simtime::SimTime;
use stagekit::systems::fuse::fuse_system;
use stagekit::systems::input::{poll_input_system, replay_input_script};
use stagekit::systems::sequence::{sequence_start_system, sequence_tick_system};
use stagekit::systems::stageloader::stage_spawn_system;
use stagekit::systems::time::advance_sim_time;

fn write_stage(name: &str, json: &str) -> String {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, json).expect("failed to write stage file");
    path.to_string_lossy().into_owned()
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(SimTime::default());
    let mut latch = InputLatch::default();
    latch.register("jump");
    world.insert_resource(latch);
    world.insert_resource(InputSnapshot::default());
    world
}

fn make_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            stage_spawn_system,
            sequence_start_system,
            replay_input_script,
            poll_input_system,
            fuse_system,
            sequence_tick_system,
        )
            .chain(),
    );
    schedule
}

#[test]
fn stage_data_parses_defaults() {
    let data: StageData = serde_json::from_str(
        r#"{ "name": "minimal", "units": [ { "name": "door" } ] }"#,
    )
    .expect("parse failed");
    assert_eq!(data.name, "minimal");
    assert_eq!(data.units.len(), 1);
    assert!(!data.units[0].completion);
    assert_eq!(data.units[0].fuse, None);
    assert!(data.cues.is_empty());
}

#[test]
fn loader_spawns_units_in_file_order() {
    let path = write_stage(
        "stagekit_order_test.json",
        r#"{
            "name": "order",
            "units": [
                { "name": "first", "completion": true },
                { "name": "second", "fuse": 0.5 },
                { "name": "third" }
            ]
        }"#,
    );

    let mut world = make_world();
    world.spawn((StageLayout::new(&path),));

    let mut schedule = make_schedule();
    advance_sim_time(&mut world, 0.1);
    schedule.run(&mut world);

    let mut sequences = world.query::<&Sequence>();
    let sequence = sequences.iter(&world).next().expect("no sequence spawned");
    assert_eq!(sequence.len(), 3);

    let units: Vec<Entity> = sequence.units().to_vec();
    let names: Vec<String> = units
        .iter()
        .map(|&unit| world.get::<UnitTag>(unit).unwrap().name.clone())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);

    // Capability and fuse land on the right units.
    assert!(world.get::<Completion>(units[0]).is_some());
    assert!(world.get::<Completion>(units[1]).is_none());
    assert!(world.get::<Fuse>(units[1]).is_some());
    assert!(world.get::<Fuse>(units[2]).is_none());

    // The chain already started: exactly the first unit is active.
    assert!(world.get::<Activation>(units[0]).unwrap().active);
    assert!(!world.get::<Activation>(units[1]).unwrap().active);
    assert!(!world.get::<Activation>(units[2]).unwrap().active);

    std::fs::remove_file(&path).ok();
}

#[test]
fn fuse_only_stage_runs_to_completion() {
    let path = write_stage(
        "stagekit_fuse_run_test.json",
        r#"{
            "name": "fuses",
            "units": [
                { "name": "door", "completion": true, "fuse": 0.2 },
                { "name": "lift", "fuse": 0.1 }
            ]
        }"#,
    );

    let mut world = make_world();
    world.spawn((StageLayout::new(&path),));

    let finished = Arc::new(Mutex::new(false));
    let finished_clone = finished.clone();
    world.add_observer(move |_trigger: On<SequenceFinishedEvent>| {
        *finished_clone.lock().unwrap() = true;
    });
    world.flush();

    let mut schedule = make_schedule();
    for _ in 0..20 {
        advance_sim_time(&mut world, 0.1);
        schedule.run(&mut world);
    }

    assert!(*finished.lock().unwrap());
    let mut sequences = world.query::<&Sequence>();
    assert!(sequences.iter(&world).next().unwrap().is_finished());

    std::fs::remove_file(&path).ok();
}

#[test]
fn cues_install_an_input_script_and_reach_the_latch() {
    let path = write_stage(
        "stagekit_cue_test.json",
        r#"{
            "name": "cued",
            "units": [ { "name": "door", "fuse": 10.0 } ],
            "cues": [
                { "tick": 2, "input": "jump", "edge": "down" },
                { "tick": 2, "input": "jump", "edge": "up" }
            ]
        }"#,
    );

    let mut world = make_world();
    world.spawn((StageLayout::new(&path),));

    let mut schedule = make_schedule();

    // Tick 1 spawns the stage; the script resource appears at the sync point.
    advance_sim_time(&mut world, 0.1);
    schedule.run(&mut world);
    assert!(world.get_resource::<InputScript>().is_some());

    // Tick 2 delivers the full press-and-release into one snapshot.
    advance_sim_time(&mut world, 0.1);
    schedule.run(&mut world);
    let snapshot = world.resource::<InputSnapshot>();
    assert!(snapshot.went_down("jump"));
    assert!(snapshot.went_up("jump"));
    assert!(!snapshot.is_held("jump"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_stage_file_spawns_nothing_and_does_not_retry() {
    let mut world = make_world();
    world.spawn((StageLayout::new("/nonexistent/stage.json"),));

    let mut schedule = make_schedule();
    advance_sim_time(&mut world, 0.1);
    schedule.run(&mut world);
    advance_sim_time(&mut world, 0.1);
    schedule.run(&mut world);

    let mut sequences = world.query::<&Sequence>();
    assert!(sequences.iter(&world).next().is_none());

    let mut layouts = world.query::<&StageLayout>();
    assert!(layouts.iter(&world).next().unwrap().spawned);
}
