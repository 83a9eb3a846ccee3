//! # Unit Types
//!
//! Type-safe wrappers for the engineering units that cross the load path.
//! These are plain f64 newtypes: JSON stays clean (just numbers) and the
//! runtime cost is nil.
//!
//! Everything is US customary, matching the snow-load maps and lumber design
//! values the engine works from:
//! - Length: feet (ft), inches (in)
//! - Area load: pounds per square foot (psf)
//! - Line load: pounds per linear foot (plf)
//! - Force: pounds (lb)
//! - Stress: pounds per square inch (psi)
//! - Moment: foot-pounds (ft-lb), inch-pounds (in-lb)
//!
//! ## Example
//!
//! ```rust
//! use frame_core::units::{Feet, Inches, PlF, Psf};
//!
//! let spacing = Feet(8.0);
//! let inches: Inches = spacing.into();
//! assert_eq!(inches.0, 96.0);
//!
//! // An area load times a tributary width is a line load
//! let line: PlF = Psf(50.0) * spacing;
//! assert_eq!(line, PlF(400.0));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Load Units
// ============================================================================

/// Area load in pounds per square foot (psf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Distributed load in pounds per linear foot (plf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlF(pub f64);

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl Mul<Feet> for Psf {
    type Output = PlF;

    fn mul(self, width: Feet) -> PlF {
        PlF(self.0 * width.0)
    }
}

impl Mul<Feet> for PlF {
    type Output = Pounds;

    fn mul(self, length: Feet) -> Pounds {
        Pounds(self.0 * length.0)
    }
}

impl Add for Psf {
    type Output = Psf;

    fn add(self, rhs: Psf) -> Psf {
        Psf(self.0 + rhs.0)
    }
}

impl Add for PlF {
    type Output = PlF;

    fn add(self, rhs: PlF) -> PlF {
        PlF(self.0 + rhs.0)
    }
}

impl Mul<f64> for Psf {
    type Output = Psf;

    fn mul(self, factor: f64) -> Psf {
        Psf(self.0 * factor)
    }
}

// ============================================================================
// Stress and Moment Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Moment in foot-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtLb(pub f64);

/// Moment in inch-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

impl From<FtLb> for InLb {
    fn from(ftlb: FtLb) -> Self {
        InLb(ftlb.0 * 12.0)
    }
}

impl From<InLb> for FtLb {
    fn from(inlb: InLb) -> Self {
        FtLb(inlb.0 / 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let inches: Inches = Feet(10.0).into();
        assert_eq!(inches, Inches(120.0));
        let feet: Feet = Inches(18.0).into();
        assert_eq!(feet, Feet(1.5));
    }

    #[test]
    fn test_area_load_to_line_load() {
        let w = Psf(15.0) * Feet(8.0) + Psf(50.0) * Feet(8.0);
        assert_eq!(w, PlF(520.0));
        assert_eq!(w * Feet(12.0), Pounds(6240.0));
    }

    #[test]
    fn test_moment_conversion() {
        let m: InLb = FtLb(2700.0).into();
        assert_eq!(m.0, 32400.0);
    }

    #[test]
    fn test_transparent_serialization() {
        assert_eq!(serde_json::to_string(&Psf(42.5)).unwrap(), "42.5");
        let parsed: Feet = serde_json::from_str("12.0").unwrap();
        assert_eq!(parsed, Feet(12.0));
    }
}
