//! # Design Inputs
//!
//! Building geometry and snow load as entered by the user. Both are validated
//! against their documented ranges before any load is computed; a value out
//! of range stops the run with [`CalcError::InvalidInput`] naming the field.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "geometry": { "length_ft": 40.0, "width_ft": 24.0, "wall_height_ft": 10.0, "pitch": 6.0 },
//!   "loads": { "snow_load_psf": 50.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Feet;

/// Building geometry.
///
/// Pitch is given as rise in inches per 12 inches of run (6.0 = 6/12).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryInput {
    /// Building length along the ridge (ft); bents repeat along it
    pub length_ft: f64,
    /// Building width across the bents (ft); the beam span
    pub width_ft: f64,
    /// Post height from sill to plate (ft)
    pub wall_height_ft: f64,
    /// Roof rise per 12 of run
    pub pitch: f64,
}

impl GeometryInput {
    /// Valid building length (ft)
    pub const LENGTH_RANGE_FT: (f64, f64) = (10.0, 100.0);
    /// Valid building width (ft)
    pub const WIDTH_RANGE_FT: (f64, f64) = (10.0, 100.0);
    /// Valid wall height (ft)
    pub const WALL_HEIGHT_RANGE_FT: (f64, f64) = (6.0, 20.0);
    /// Valid pitch (rise per 12)
    pub const PITCH_RANGE: (f64, f64) = (2.0, 16.0);

    /// Validate against the documented ranges.
    pub fn validate(&self) -> CalcResult<()> {
        check_range("length_ft", self.length_ft, Self::LENGTH_RANGE_FT, "ft")?;
        check_range("width_ft", self.width_ft, Self::WIDTH_RANGE_FT, "ft")?;
        check_range("wall_height_ft", self.wall_height_ft, Self::WALL_HEIGHT_RANGE_FT, "ft")?;
        check_range("pitch", self.pitch, Self::PITCH_RANGE, "(rise per 12)")?;
        Ok(())
    }

    /// Roof slope angle from horizontal (radians)
    pub fn roof_angle_rad(&self) -> f64 {
        (self.pitch / 12.0).atan()
    }

    /// Roof surface length per unit of horizontal run, 1/cos(θ)
    pub fn slope_factor(&self) -> f64 {
        1.0 / self.roof_angle_rad().cos()
    }

    /// Horizontal run of one rafter, eave to ridge
    pub fn rafter_run(&self) -> Feet {
        Feet(self.width_ft / 2.0)
    }

    /// Sloped length of one rafter, eave to ridge
    pub fn rafter_length(&self) -> Feet {
        Feet(self.rafter_run().0 * self.slope_factor())
    }

    /// Ridge height above the sill (ft)
    pub fn ridge_height_ft(&self) -> f64 {
        self.wall_height_ft + self.rafter_run().0 * self.pitch / 12.0
    }
}

/// Design snow load.
///
/// Dead load is not an input; it comes from the engineering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadInput {
    /// Flat-roof design snow load (psf)
    pub snow_load_psf: f64,
}

impl LoadInput {
    /// Valid design snow load (psf)
    pub const SNOW_RANGE_PSF: (f64, f64) = (5.0, 200.0);

    /// Validate against the documented range.
    pub fn validate(&self) -> CalcResult<()> {
        check_range("snow_load_psf", self.snow_load_psf, Self::SNOW_RANGE_PSF, "psf")
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64), unit: &str) -> CalcResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("must be between {} and {} {}", min, max, unit),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barn() -> GeometryInput {
        GeometryInput {
            length_ft: 40.0,
            width_ft: 24.0,
            wall_height_ft: 10.0,
            pitch: 6.0,
        }
    }

    #[test]
    fn test_roof_geometry() {
        let g = barn();
        // 6/12: cos(atan(0.5)) = 0.8944
        assert!((g.slope_factor() - 1.1180).abs() < 0.0001);
        assert!((g.rafter_length().0 - 13.4164).abs() < 0.0001);
        assert_eq!(g.ridge_height_ft(), 16.0);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let low = GeometryInput {
            length_ft: 10.0,
            width_ft: 10.0,
            wall_height_ft: 6.0,
            pitch: 2.0,
        };
        let high = GeometryInput {
            length_ft: 100.0,
            width_ft: 100.0,
            wall_height_ft: 20.0,
            pitch: 16.0,
        };
        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
        assert!(LoadInput { snow_load_psf: 5.0 }.validate().is_ok());
        assert!(LoadInput { snow_load_psf: 200.0 }.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_names_field_and_range() {
        let g = GeometryInput {
            pitch: 1.5,
            ..barn()
        };
        match g.validate() {
            Err(CalcError::InvalidInput { field, value, reason }) => {
                assert_eq!(field, "pitch");
                assert_eq!(value, "1.5");
                assert!(reason.contains("between 2 and 16"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_first_bad_field_reported() {
        let g = GeometryInput {
            length_ft: 5.0,
            width_ft: 500.0,
            ..barn()
        };
        match g.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "length_ft"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_rejected() {
        let loads = LoadInput {
            snow_load_psf: f64::NAN,
        };
        assert!(loads.validate().is_err());
        let g = GeometryInput {
            wall_height_ft: f64::INFINITY,
            ..barn()
        };
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let g = barn();
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains("\"wall_height_ft\":10.0"));
        let roundtrip: GeometryInput = serde_json::from_str(&json).unwrap();
        assert_eq!(g, roundtrip);
    }
}
