// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison: animation math frequently compares against 0.0, 1.0
#![allow(clippy::float_cmp)]
// Graphics-style casts (slot indices to f32 etc.) are intentional
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Interactive 3D showcase carousel engine.
//!
//! Vitrine drives a fixed set of 3D items the user can hover, select, and
//! cycle through. Selecting an item glides it — and the camera — into a
//! focused view with decorative particle effects; keyboard and pointer
//! intents navigate between items. The crate is the headless core: it owns
//! the selection state machine, the spring-physics interpolation for all
//! transforms, the procedural particle fields, and the frame-scheduling
//! contract. Rendering happens behind the
//! [`scene::SceneGraphAdapter`] boundary.
//!
//! # Key entry points
//!
//! - [`engine::ShowcaseEngine`] - the carousel session
//! - [`options::Options`] - immutable configuration (items, camera,
//!   springs, effects, keybindings)
//! - [`scheduler::FrameScheduler`] - per-refresh tick driver
//! - [`scene::SceneGraphAdapter`] - the renderer boundary
//!
//! # Architecture
//!
//! Everything is single-threaded and tick-driven. Input events are queued
//! as intents and applied deterministically at the start of the next tick,
//! before transforms are recomputed; spring channels integrate under a
//! shared clamped-delta policy; particle and float motion are pure
//! functions of absolute elapsed time, so the session survives pauses and
//! frame-rate swings without drifting.

pub mod animation;
pub mod camera;
pub mod effects;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod scheduler;
pub mod selection;
pub mod util;
