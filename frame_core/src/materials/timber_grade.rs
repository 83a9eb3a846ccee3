//! Timber Design Values
//!
//! Reference design values for the single allowable-stress grade the lumber
//! table is built from. The default is Douglas Fir-Larch No. 1 Beams and
//! Stringers (NDS Supplement Table 4D), a common stock grade for frame
//! timbers. Values are used as-is: no wet-service, temperature, or treatment
//! adjustments are applied.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Psi;

/// Reference design values for the timber grade
///
/// All values are in psi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimberGrade {
    /// Species and grade label for reports (e.g., "DF-L No.1")
    pub label: String,
    /// Bending stress Fb (psi)
    pub fb_psi: f64,
    /// Shear parallel to grain Fv (psi)
    pub fv_psi: f64,
    /// Compression parallel to grain Fc (psi)
    pub fc_psi: f64,
    /// Modulus of elasticity E (psi)
    pub e_psi: f64,
}

impl Default for TimberGrade {
    fn default() -> Self {
        TimberGrade {
            label: "DF-L No.1".to_string(),
            fb_psi: 1350.0,
            fv_psi: 170.0,
            fc_psi: 925.0,
            e_psi: 1_600_000.0,
        }
    }
}

impl TimberGrade {
    /// Reject non-physical design values
    pub fn validate(&self) -> CalcResult<()> {
        let values = [
            ("lumber.fb_psi", self.fb_psi),
            ("lumber.fv_psi", self.fv_psi),
            ("lumber.fc_psi", self.fc_psi),
            ("lumber.e_psi", self.e_psi),
        ];
        for (field, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::config(format!("{} must be positive, got {}", field, value)));
            }
        }
        Ok(())
    }

    /// Get Fb as a typed unit
    pub fn fb(&self) -> Psi {
        Psi(self.fb_psi)
    }

    /// Get E as a typed unit
    pub fn e(&self) -> Psi {
        Psi(self.e_psi)
    }
}

impl std::fmt::Display for TimberGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
