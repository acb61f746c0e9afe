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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! View choreography and configurator state for an interactive vehicle
//! showroom.
//!
//! A user browses a small catalog of car models, changes the paint color,
//! and switches between named camera viewpoints. The camera glides between
//! viewpoints instead of snapping, and a new selection mid-flight carries
//! on from wherever the camera currently is.
//!
//! # Key entry points
//!
//! - [`engine::ShowroomEngine`] - session facade: `execute` commands, call
//!   `frame` once per rendered frame
//! - [`configurator::ConfiguratorState`] - selected model, paint and view
//! - [`camera::CameraChoreographer`] - interruptible view transitions
//! - [`camera::ViewPresetTable`] - validated view → pose table
//! - [`options::Options`] - TOML configuration
//!
//! # Architecture
//!
//! Rendering, asset loading and lighting belong to the host. Each frame the
//! host passes a monotonic timestamp to the engine and draws the returned
//! [`engine::RenderFrame`]: a scene description keyed by model and paint,
//! plus a GPU-ready camera uniform.

pub mod animation;
pub mod camera;
pub mod configurator;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
