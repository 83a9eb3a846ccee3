//! Roof loads and member demand
//!
//! The load calculator: dead load plus governing snow, by tributary width, for
//! each member class of a bent.
//!
//! # Overview
//!
//! - [`governing_snow`] - Flat vs slope-reduced snow, larger governs
//! - [`roof_load`] - Dead + governing snow per square foot of plan
//! - [`member_demand`] / [`frame_demands`] - Line loads, spans and required
//!   section properties per member class
//!
//! # Example
//!
//! ```
//! use frame_core::config::DesignConfig;
//! use frame_core::input::{GeometryInput, LoadInput};
//! use frame_core::loads::frame_demands;
//! use frame_core::units::Feet;
//!
//! let geometry = GeometryInput { length_ft: 40.0, width_ft: 24.0, wall_height_ft: 10.0, pitch: 6.0 };
//! let loads = LoadInput { snow_load_psf: 50.0 };
//! let [post, beam, rafter] = frame_demands(&geometry, &loads, Feet(8.0), &DesignConfig::default());
//!
//! assert!(post.axial_load_lb > 0.0);
//! assert_eq!(beam.span_ft, 24.0);
//! assert!(rafter.span_ft > 12.0);
//! ```

pub mod demand;
pub mod snow;

pub use demand::{frame_demands, member_demand, roof_load, MemberDemand, RoofLoad};
pub use snow::{governing_snow, unloading_factor, GoverningSnow, SnowCase};
