//! Animation primitives: spring channels and time-parametric float motion.

pub mod float;
pub mod spring;
