//! Event types exchanged across systems.
//!
//! Events provide a decoupled way for systems to communicate without tight
//! coupling or direct dependencies.
//!
//! Submodules:
//! - [`input`] – logical input press/release notifications from the poll system
//! - [`sequence`] – chain progress and completion notifications

pub mod input;
pub mod sequence;
