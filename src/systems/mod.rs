//! ECS systems.
//!
//! This module groups the systems that advance chains, input, and time.
//!
//! Submodules overview
//! - [`fuse`] – burn down [`Fuse`](crate::components::fuse::Fuse) timers and complete their units
//! - [`input`] – replay scripted edges into the latch and poll it once per tick
//! - [`sequence`] – start newly added chains and advance them on completion
//! - [`stageloader`] – spawn unit chains from JSON stage definitions
//! - [`time`] – update simulation time and delta

pub mod fuse;
pub mod input;
pub mod sequence;
pub mod stageloader;
pub mod time;
