//! Governing snow load
//!
//! Two snow cases are evaluated for every roof and the larger one governs:
//!
//! - **Flat**: the design snow load on the horizontal projection of the roof.
//! - **Slope-reduced**: for pitches above the unloading threshold, the design
//!   snow load times an unloading factor, acting along the roof surface (so it
//!   grows with the slope-length factor like dead load does).
//!
//! Neither case is assumed to dominate by pitch alone. Just above the
//! threshold the slope-length growth outpaces the unloading and the sloped case
//! governs; on steep roofs the unloading wins and the flat case governs.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::config::SnowConfig;
//! use frame_core::input::{GeometryInput, LoadInput};
//! use frame_core::loads::{governing_snow, SnowCase};
//!
//! let geometry = GeometryInput { length_ft: 40.0, width_ft: 24.0, wall_height_ft: 10.0, pitch: 12.0 };
//! let snow = governing_snow(&geometry, &LoadInput { snow_load_psf: 50.0 }, &SnowConfig::default());
//! assert_eq!(snow.case, SnowCase::Flat);
//! assert_eq!(snow.governing_psf, 50.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::SnowConfig;
use crate::input::{GeometryInput, LoadInput};
use crate::units::Psf;

/// Which snow case governs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnowCase {
    /// Design snow on the horizontal projection
    Flat,
    /// Unloaded snow along the sloped roof surface
    SlopeReduced,
}

impl SnowCase {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SnowCase::Flat => "flat-projected",
            SnowCase::SlopeReduced => "slope-reduced",
        }
    }
}

impl std::fmt::Display for SnowCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Both snow cases and the one that governs.
///
/// All loads are per square foot of horizontal projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoverningSnow {
    /// Case (a): flat-projected snow (psf)
    pub flat_psf: f64,
    /// Case (b): slope-reduced snow (psf), only above the unloading threshold
    pub sloped_psf: Option<f64>,
    /// Unloading factor used for case (b)
    pub unloading_factor: Option<f64>,
    /// max(a, b) (psf)
    pub governing_psf: f64,
    /// Which case produced `governing_psf`
    pub case: SnowCase,
}

impl GoverningSnow {
    /// Governing snow as a typed unit
    pub fn governing(&self) -> Psf {
        Psf(self.governing_psf)
    }
}

/// Unloading factor for a pitch: 1 at the threshold, falling linearly, floored.
pub fn unloading_factor(pitch: f64, snow: &SnowConfig) -> f64 {
    let excess = (pitch - snow.unloading_threshold_pitch).max(0.0);
    (1.0 - snow.unloading_rate_per_pitch * excess).max(snow.min_unloading_factor)
}

/// Evaluate both snow cases and pick the larger.
///
/// Ties go to the flat case.
pub fn governing_snow(geometry: &GeometryInput, loads: &LoadInput, snow: &SnowConfig) -> GoverningSnow {
    let flat_psf = loads.snow_load_psf;

    if geometry.pitch <= snow.unloading_threshold_pitch {
        return GoverningSnow {
            flat_psf,
            sloped_psf: None,
            unloading_factor: None,
            governing_psf: flat_psf,
            case: SnowCase::Flat,
        };
    }

    let factor = unloading_factor(geometry.pitch, snow);
    let sloped = Psf(loads.snow_load_psf) * factor * geometry.slope_factor();

    let (governing_psf, case) = if sloped.0 > flat_psf {
        (sloped.0, SnowCase::SlopeReduced)
    } else {
        (flat_psf, SnowCase::Flat)
    };

    GoverningSnow {
        flat_psf,
        sloped_psf: Some(sloped.0),
        unloading_factor: Some(factor),
        governing_psf,
        case,
    }
}
