//! Camera system for the showcase view.
//!
//! Provides the perspective camera math and a spring-driven turntable rig
//! that derives pose targets from selection state.

/// Core camera struct and the per-tick pose record.
pub mod core;
/// Spring-driven turntable rig.
pub mod rig;
