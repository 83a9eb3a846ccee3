//! # frame_core - Timber Frame Sizing Engine
//!
//! `frame_core` sizes the posts, beams and rafters of a post-and-beam timber
//! frame and lays out its bents along the building. Give it a building
//! (length, width, wall height, roof pitch) and a design snow load; it returns
//! the members, the bent spacing, a material takeoff and a board-foot estimate.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Configurable**: Engineering constants live in [`config::DesignConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use frame_core::{design, DesignConfig, GeometryInput, LoadInput};
//!
//! let geometry = GeometryInput { length_ft: 40.0, width_ft: 24.0, wall_height_ft: 10.0, pitch: 6.0 };
//! let loads = LoadInput { snow_load_psf: 50.0 };
//!
//! let result = design(&geometry, &loads, &DesignConfig::default()).unwrap();
//! println!("{}", frame_core::report::render_text(&result));
//!
//! // Serialize to JSON for a viewer or another program
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`input`] - Building geometry and snow load, with range validation
//! - [`loads`] - Dead + governing snow load and per-member demand
//! - [`materials`] - Timber sizes, grade design values and the lumber table
//! - [`calculations`] - Member checks and first-fit sizing
//! - [`layout`] - Bent-count search
//! - [`report`] - Design result, takeoff and text report
//! - [`design`] - End-to-end design runs
//! - [`config`] - Engineering constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod design;
pub mod errors;
pub mod input;
pub mod layout;
pub mod loads;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use config::DesignConfig;
pub use design::{design, design_scenarios};
pub use errors::{CalcError, CalcResult};
pub use input::{GeometryInput, LoadInput};
pub use report::DesignResult;
