//! # Error Types
//!
//! Structured error types for frame_core. Every failure of a design run is
//! terminal and carries enough context for a caller (GUI, CLI, or another
//! program reading JSON) to explain what went wrong and what to relax.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_ft: f64) -> CalcResult<()> {
//!     if !(10.0..=100.0).contains(&length_ft) {
//!         return Err(CalcError::invalid_input(
//!             "length_ft",
//!             length_ft.to_string(),
//!             "must be between 10 and 100 ft",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_length(4.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::MemberClass;

/// Result type alias for frame_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A geometry or load value is outside its documented range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No lumber table entry satisfies the demand on a member
    #[error(
        "No standard section fits the {member}: span {span_ft:.2} ft, load {load_plf:.1} plf, \
         S_req {required_section_modulus_in3:.1} in³, I_req {required_moment_of_inertia_in4:.1} in⁴"
    )]
    Undersized {
        member: MemberClass,
        span_ft: f64,
        load_plf: f64,
        required_section_modulus_in3: f64,
        required_moment_of_inertia_in4: f64,
        /// Axial load for posts (lb), zero for flexural members
        axial_load_lb: f64,
    },

    /// The bent-count search reached its cap without a fitting spacing
    #[error("No feasible bent layout: {member} still undersized at {bent_count} bents (utilization {utilization:.2})")]
    NoFeasibleLayout {
        bent_count: u32,
        /// Class whose best section fails by the widest margin
        member: MemberClass,
        utilization: f64,
    },

    /// Engineering configuration could not be read or is non-physical
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// JSON/TOML serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NoFeasibleLayout error
    pub fn no_feasible_layout(bent_count: u32, member: MemberClass, utilization: f64) -> Self {
        CalcError::NoFeasibleLayout {
            bent_count,
            member,
            utilization,
        }
    }

    /// Create a ConfigError
    pub fn config(reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether the failure came from the structure itself rather than bad input.
    ///
    /// Callers typically respond to these by suggesting a lighter snow load or a
    /// narrower building.
    pub fn is_capacity_failure(&self) -> bool {
        matches!(self, CalcError::Undersized { .. } | CalcError::NoFeasibleLayout { .. })
    }

    /// Member class that ran out of capacity, for capacity failures
    pub fn failing_member(&self) -> Option<MemberClass> {
        match self {
            CalcError::Undersized { member, .. } | CalcError::NoFeasibleLayout { member, .. } => Some(*member),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Undersized { .. } => "UNDERSIZED",
            CalcError::NoFeasibleLayout { .. } => "NO_FEASIBLE_LAYOUT",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("pitch", "1.5", "must be between 2 and 16 (rise per 12)");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::config("bad").error_code(), "CONFIG_ERROR");
        assert_eq!(
            CalcError::no_feasible_layout(17, MemberClass::Beam, 1.4).error_code(),
            "NO_FEASIBLE_LAYOUT"
        );
        assert_eq!(CalcError::serialization("eof").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_undersized_message_names_member() {
        let error = CalcError::Undersized {
            member: MemberClass::Beam,
            span_ft: 24.0,
            load_plf: 1500.0,
            required_section_modulus_in3: 1440.0,
            required_moment_of_inertia_in4: 9000.0,
            axial_load_lb: 0.0,
        };
        let message = error.to_string();
        assert!(message.contains("beam"));
        assert!(message.contains("24.00 ft"));
        assert!(error.is_capacity_failure());
    }

    #[test]
    fn test_no_feasible_layout_names_member() {
        let error = CalcError::no_feasible_layout(7, MemberClass::Rafter, 1.09);
        assert_eq!(error.failing_member(), Some(MemberClass::Rafter));
        assert!(error.to_string().contains("rafter still undersized at 7 bents"));

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"member\":\"rafter\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_invalid_input_is_not_capacity_failure() {
        assert!(!CalcError::invalid_input("snow_load_psf", "300", "too high").is_capacity_failure());
    }
}
