//! Integration tests for the input latch, the poll system, and edge events.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use stagekit::events::input::InputEvent;
use stagekit::resources::inputlatch::{Edge, InputLatch, InputSnapshot};
use stagekit::resources::inputscript::{InputCue, InputScript};
use stagekit::resources::simtime::SimTime;
use stagekit::systems::input::{poll_input_system, replay_input_script};
use stagekit::systems::time::advance_sim_time;

fn make_world(inputs: &[&str]) -> World {
    let mut world = World::new();
    world.insert_resource(SimTime::default());
    let mut latch = InputLatch::default();
    for input in inputs {
        latch.register(*input);
    }
    world.insert_resource(latch);
    world.insert_resource(InputSnapshot::default());
    world
}

fn tick_poll(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(poll_input_system);
    schedule.run(world);
}

fn tick_replay_and_poll(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((replay_input_script, poll_input_system).chain());
    schedule.run(world);
}

#[test]
fn press_and_release_within_one_tick_surfaces_both_edges() {
    let mut world = make_world(&["jump"]);

    world
        .resource_mut::<InputLatch>()
        .record_edge("jump", Edge::Down);
    world
        .resource_mut::<InputLatch>()
        .record_edge("jump", Edge::Up);

    tick_poll(&mut world);

    let snapshot = world.resource::<InputSnapshot>();
    assert!(snapshot.went_down("jump"));
    assert!(snapshot.went_up("jump"));
    assert!(!snapshot.is_held("jump"));
}

#[test]
fn down_up_down_within_one_tick_reads_held() {
    let mut world = make_world(&["jump"]);

    {
        let mut latch = world.resource_mut::<InputLatch>();
        latch.record_edge("jump", Edge::Down);
        latch.record_edge("jump", Edge::Up);
        latch.record_edge("jump", Edge::Down);
    }

    tick_poll(&mut world);

    let snapshot = world.resource::<InputSnapshot>();
    assert!(snapshot.went_down("jump"));
    assert!(snapshot.went_up("jump"));
    assert!(snapshot.is_held("jump"));
}

#[test]
fn quiet_poll_keeps_level_and_clears_edges() {
    let mut world = make_world(&["jump"]);

    world
        .resource_mut::<InputLatch>()
        .record_edge("jump", Edge::Down);
    tick_poll(&mut world);
    assert!(world.resource::<InputSnapshot>().went_down("jump"));

    // No edges between polls: second snapshot has no edges, same level.
    tick_poll(&mut world);
    let snapshot = world.resource::<InputSnapshot>();
    assert!(!snapshot.went_down("jump"));
    assert!(!snapshot.went_up("jump"));
    assert!(snapshot.is_held("jump"));
}

#[test]
fn poll_triggers_press_before_release_for_one_input() {
    let mut world = make_world(&["fire"]);

    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    world.add_observer(move |trigger: On<InputEvent>| {
        let event = trigger.event();
        events_clone
            .lock()
            .unwrap()
            .push((event.input.clone(), event.pressed));
    });
    world.flush();

    {
        let mut latch = world.resource_mut::<InputLatch>();
        latch.record_edge("fire", Edge::Down);
        latch.record_edge("fire", Edge::Up);
    }
    tick_poll(&mut world);

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![("fire".to_string(), true), ("fire".to_string(), false)]
    );
}

#[test]
fn quiet_poll_triggers_no_events() {
    let mut world = make_world(&["fire"]);

    let count = Arc::new(Mutex::new(0u32));
    let count_clone = count.clone();
    world.add_observer(move |_trigger: On<InputEvent>| {
        *count_clone.lock().unwrap() += 1;
    });
    world.flush();

    tick_poll(&mut world);
    tick_poll(&mut world);

    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn scripted_cues_land_in_the_snapshot_of_their_tick() {
    let mut world = make_world(&["jump"]);
    world.insert_resource(InputScript::new(vec![
        InputCue {
            tick: 1,
            input: "jump".to_string(),
            edge: Edge::Down,
        },
        InputCue {
            tick: 1,
            input: "jump".to_string(),
            edge: Edge::Up,
        },
        InputCue {
            tick: 3,
            input: "jump".to_string(),
            edge: Edge::Down,
        },
    ]));

    // Tick 1: full press-and-release, coalesced into one snapshot.
    advance_sim_time(&mut world, 0.1);
    tick_replay_and_poll(&mut world);
    {
        let snapshot = world.resource::<InputSnapshot>();
        assert!(snapshot.went_down("jump"));
        assert!(snapshot.went_up("jump"));
        assert!(!snapshot.is_held("jump"));
    }

    // Tick 2: nothing scheduled.
    advance_sim_time(&mut world, 0.1);
    tick_replay_and_poll(&mut world);
    {
        let snapshot = world.resource::<InputSnapshot>();
        assert!(!snapshot.went_down("jump"));
        assert!(!snapshot.went_up("jump"));
    }

    // Tick 3: the second press arrives and stays held.
    advance_sim_time(&mut world, 0.1);
    tick_replay_and_poll(&mut world);
    {
        let snapshot = world.resource::<InputSnapshot>();
        assert!(snapshot.went_down("jump"));
        assert!(!snapshot.went_up("jump"));
        assert!(snapshot.is_held("jump"));
    }
}

#[test]
fn replay_without_a_script_resource_is_a_noop() {
    let mut world = make_world(&["jump"]);

    advance_sim_time(&mut world, 0.1);
    tick_replay_and_poll(&mut world);

    let snapshot = world.resource::<InputSnapshot>();
    assert!(!snapshot.went_down("jump"));
    assert!(!snapshot.is_held("jump"));
}

#[test]
#[should_panic(expected = "unregistered input")]
fn scripted_cue_for_unknown_input_panics() {
    let mut world = make_world(&["jump"]);
    world.insert_resource(InputScript::new(vec![InputCue {
        tick: 1,
        input: "dash".to_string(),
        edge: Edge::Down,
    }]));

    advance_sim_time(&mut world, 0.1);
    tick_replay_and_poll(&mut world);
}
