//! ECS components for sequenced entities.
//!
//! This module groups the component types that can be attached to entities
//! taking part in staged activation chains.
//!
//! Submodules overview:
//! - [`activation`] – the on/off switch every sequenced unit must carry
//! - [`completion`] – optional "am I done" capability for a unit
//! - [`fuse`] – countdown that completes a unit after burning while active
//! - [`sequence`] – ordered chain of units activated one at a time
//! - [`stagelayout`] – data-driven spawning of a unit chain from a JSON file

pub mod activation;
pub mod completion;
pub mod fuse;
pub mod sequence;
pub mod stagelayout;
