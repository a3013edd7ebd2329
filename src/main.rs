//! Stagekit headless runner.
//!
//! A small sequencing and input core for 2D platformer gameplay, built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **serde_json** for data-driven stage definitions
//!
//! This executable loads a JSON stage, then drives it with a fixed-step
//! loop until the chain finishes or the tick budget runs out. Scripted
//! input cues from the stage file are replayed into the input latch, so a
//! full run is deterministic and needs no window or devices.
//!
//! # Project Structure
//!
//! - `components` – activation switch, completion capability, fuses, chains
//! - `events` – chain progress and logical input events
//! - `resources` – input latch + snapshot, simulation time, run config
//! - `systems` – stage loading, chain start/advance, input replay/poll
//!
//! # Main Loop
//!
//! 1. Load the INI run configuration (defaults if missing)
//! 2. Build the ECS world, register configured inputs with the latch
//! 3. Spawn the stage layout and register logging observers
//! 4. Per tick: advance time, replay due cues, poll the latch, burn fuses,
//!    advance chains
//! 5. Stop when every chain is finished or the budget is spent
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --stage assets/stages/demo.json
//! ```

use stagekit::components::completion::Completion;
use stagekit::components::sequence::Sequence;
use stagekit::components::stagelayout::{StageLayout, UnitTag};
use stagekit::events::input::InputEvent;
use stagekit::events::sequence::{SequenceAdvancedEvent, SequenceFinishedEvent};
use stagekit::resources::inputlatch::{InputLatch, InputSnapshot};
use stagekit::resources::runconfig::RunConfig;
use stagekit::resources::simtime::SimTime;
use stagekit::systems::fuse::fuse_system;
use stagekit::systems::input::{poll_input_system, replay_input_script};
use stagekit::systems::sequence::{sequence_start_system, sequence_tick_system};
use stagekit::systems::stageloader::stage_spawn_system;
use stagekit::systems::time::advance_sim_time;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Stagekit headless runner
#[derive(Parser)]
#[command(version, about = "Runs a JSON stage definition to completion")]
struct Cli {
    /// Path to the INI run configuration (default: ./stagekit.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the JSON stage definition to run.
    #[arg(long, value_name = "PATH", default_value = "assets/stages/demo.json")]
    stage: PathBuf,

    /// Override the tick budget (0 = run until the stage finishes).
    #[arg(long, value_name = "TICKS")]
    ticks: Option<u64>,
}

/// Observer logging each chain step with the completed unit's name.
fn log_sequence_advance(
    trigger: On<SequenceAdvancedEvent>,
    sequences: Query<&Sequence>,
    tags: Query<&UnitTag>,
) {
    let event = trigger.event();
    let Ok(sequence) = sequences.get(event.entity) else {
        return;
    };
    let name = sequence
        .units()
        .get(event.index)
        .and_then(|&unit| tags.get(unit).ok())
        .map(|tag| tag.name.as_str())
        .unwrap_or("?");
    log::info!(
        "unit {} ('{}') complete, {} of {} remaining",
        event.index,
        name,
        sequence.len() - sequence.cursor(),
        sequence.len()
    );
}

fn log_sequence_finished(trigger: On<SequenceFinishedEvent>, time: Res<SimTime>) {
    log::info!(
        "sequence {:?} finished at tick {} ({:.2}s)",
        trigger.event().entity,
        time.tick,
        time.elapsed
    );
}

fn log_input_event(trigger: On<InputEvent>) {
    let event = trigger.event();
    log::info!(
        "input '{}' {}",
        event.input,
        if event.pressed { "pressed" } else { "released" }
    );
}

/// Observer finishing the current unit of every chain when 'action' is
/// pressed. Stands in for the gameplay code that would normally decide a
/// unit is done.
fn action_finishes_current_unit(
    trigger: On<InputEvent>,
    sequences: Query<&Sequence>,
    mut completions: Query<&mut Completion>,
) {
    let event = trigger.event();
    if event.input != "action" || !event.pressed {
        return;
    }
    for sequence in sequences.iter() {
        let Some(current) = sequence.current() else {
            continue;
        };
        if let Ok(mut completion) = completions.get_mut(current) {
            completion.finish();
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => RunConfig::with_path(path),
        None => RunConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(ticks) = cli.ticks {
        config.max_ticks = ticks;
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(SimTime::default().with_time_scale(1.0));

    let mut latch = InputLatch::default();
    for input in &config.inputs {
        latch.register(input.as_str());
    }
    world.insert_resource(latch);
    world.insert_resource(InputSnapshot::default());

    world.spawn((StageLayout::new(cli.stage.to_string_lossy()),));

    world.add_observer(log_sequence_advance);
    world.add_observer(log_sequence_finished);
    world.add_observer(log_input_event);
    world.add_observer(action_finishes_current_unit);
    world.flush();

    let dt = config.tick_delta();
    let max_ticks = config.max_ticks;
    world.insert_resource(config);

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

    log::info!("Running stage {} at dt={:.4}s", cli.stage.display(), dt);

    // --------------- Fixed-step loop ---------------
    let mut ticks: u64 = 0;
    loop {
        advance_sim_time(&mut world, dt);
        schedule.run(&mut world);
        ticks += 1;

        let mut query = world.query::<&Sequence>();
        let mut any = false;
        let mut all_finished = true;
        for sequence in query.iter(&world) {
            any = true;
            if !sequence.is_finished() {
                all_finished = false;
            }
        }

        if !any {
            // Stage failed to load; the loader already logged why.
            log::error!("No sequence spawned, stopping");
            std::process::exit(1);
        }
        if all_finished {
            log::info!("All sequences finished after {ticks} tick(s)");
            break;
        }
        if max_ticks > 0 && ticks >= max_ticks {
            log::warn!("Tick budget of {max_ticks} reached with the stage unfinished");
            break;
        }
    }
}
