//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `inputlatch` – edge-accumulating latch over raw input, plus the per-tick snapshot
//! - `inputscript` – scripted raw input edges replayed by tick number
//! - `runconfig` – tick rate, tick budget, and registered inputs from an INI file
//! - `simtime` – simulation time, delta, and tick counter

pub mod inputlatch;
pub mod inputscript;
pub mod runconfig;
pub mod simtime;
