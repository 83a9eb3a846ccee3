//! # Engineering Configuration
//!
//! Every engineering constant the engine relies on (dead-load assumption,
//! snow unloading curve, deflection limit, timber design values, layout search
//! bounds) lives in [`DesignConfig`]. Engine functions take the configuration
//! explicitly, so tests can run with overridden constants; front ends install
//! one process-wide copy at startup with [`init`] and read it back with
//! [`global`].
//!
//! Configuration files are TOML. Every section and field is optional and
//! falls back to the documented default:
//!
//! ```toml
//! [loads]
//! roof_dead_load_psf = 15.0
//!
//! [snow]
//! unloading_threshold_pitch = 4.0
//! unloading_rate_per_pitch = 0.05
//! min_unloading_factor = 0.5
//!
//! [deflection]
//! limit_ratio = 240.0
//!
//! [lumber]
//! label = "DF-L No.1"
//! fb_psi = 1350.0
//! fv_psi = 170.0
//! fc_psi = 925.0
//! e_psi = 1600000.0
//!
//! [layout]
//! initial_spacing_ft = 8.0
//! min_spacing_ft = 6.0
//! upper_utilization = 0.95
//! lower_utilization = 0.5
//!
//! [post]
//! effective_length_factor = 1.0
//! max_slenderness = 50.0
//! ```
//!
//! ## Example
//!
//! ```rust
//! use frame_core::config::DesignConfig;
//!
//! let config = DesignConfig::from_toml_str("[loads]\nroof_dead_load_psf = 20.0\n").unwrap();
//! assert_eq!(config.loads.roof_dead_load_psf, 20.0);
//! assert_eq!(config.deflection.limit_ratio, 240.0);
//! ```

use std::path::Path;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::TimberGrade;

static GLOBAL: OnceCell<DesignConfig> = OnceCell::new();

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignConfig {
    /// Gravity loads other than snow
    pub loads: LoadConfig,
    /// Pitch-based snow unloading curve
    pub snow: SnowConfig,
    /// Serviceability limits
    pub deflection: DeflectionConfig,
    /// Design values for the lumber table
    pub lumber: TimberGrade,
    /// Bent-count search bounds
    pub layout: LayoutConfig,
    /// Simplified post axial check
    pub post: PostConfig,
}

/// Dead-load assumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    /// Roof dead load per square foot of roof surface (psf)
    ///
    /// Covers roofing, sheathing, purlins and timber self-weight.
    pub roof_dead_load_psf: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            roof_dead_load_psf: 15.0,
        }
    }
}

/// Slope unloading curve for the pitch-reduced snow case.
///
/// `factor = max(min_unloading_factor, 1 - rate * (pitch - threshold))` for
/// pitches above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnowConfig {
    /// Pitch (rise per 12) above which the sloped case is considered
    pub unloading_threshold_pitch: f64,
    /// Factor reduction per unit of rise above the threshold
    pub unloading_rate_per_pitch: f64,
    /// Floor of the unloading factor
    pub min_unloading_factor: f64,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            unloading_threshold_pitch: 4.0,
            unloading_rate_per_pitch: 0.05,
            min_unloading_factor: 0.5,
        }
    }
}

/// Deflection limit as span / ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeflectionConfig {
    /// Allowable deflection is span / `limit_ratio` under total load
    pub limit_ratio: f64,
}

impl Default for DeflectionConfig {
    fn default() -> Self {
        Self { limit_ratio: 240.0 }
    }
}

/// Bent-count search parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Target spacing used for the first guess (ft)
    pub initial_spacing_ft: f64,
    /// Tightest spacing allowed; sets the bent-count cap (ft)
    pub min_spacing_ft: f64,
    /// Beam utilization above which another bent is added
    pub upper_utilization: f64,
    /// Beam utilization below which a bent is removed if the wider spacing fits
    pub lower_utilization: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            initial_spacing_ft: 8.0,
            min_spacing_ft: 6.0,
            upper_utilization: 0.95,
            lower_utilization: 0.5,
        }
    }
}

impl LayoutConfig {
    /// Tightest spacing a configuration may ask for (ft)
    pub const MIN_SPACING_LOWER_BOUND_FT: f64 = 1.0;

    /// First bent-count guess for a building length, never below two end bents
    pub fn initial_bents(&self, length_ft: f64) -> u32 {
        ((length_ft / self.initial_spacing_ft).round() as u32).saturating_add(1).max(2)
    }

    /// Most bents the search may use for a building length
    pub fn max_bents(&self, length_ft: f64) -> u32 {
        ((length_ft / self.min_spacing_ft).floor() as u32).saturating_add(1).max(2)
    }
}

/// Simplified post axial check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostConfig {
    /// Effective length factor K (pin-pin = 1.0)
    pub effective_length_factor: f64,
    /// Sections with le/d above this are not considered
    pub max_slenderness: f64,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            effective_length_factor: 1.0,
            max_slenderness: 50.0,
        }
    }
}

impl DesignConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(s: &str) -> CalcResult<Self> {
        let config: DesignConfig = toml::from_str(s).map_err(|e| CalcError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML configuration file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config(format!("cannot read '{}': {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Render as TOML, e.g. to show the effective configuration.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Reject constants that would make the engine meaningless or non-terminating.
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("loads.roof_dead_load_psf", self.loads.roof_dead_load_psf)?;

        non_negative("snow.unloading_threshold_pitch", self.snow.unloading_threshold_pitch)?;
        non_negative("snow.unloading_rate_per_pitch", self.snow.unloading_rate_per_pitch)?;
        if !(self.snow.min_unloading_factor > 0.0 && self.snow.min_unloading_factor <= 1.0) {
            return Err(CalcError::config(format!(
                "snow.min_unloading_factor must be in (0, 1], got {}",
                self.snow.min_unloading_factor
            )));
        }

        positive("deflection.limit_ratio", self.deflection.limit_ratio)?;
        self.lumber.validate()?;

        positive("layout.initial_spacing_ft", self.layout.initial_spacing_ft)?;
        positive("layout.min_spacing_ft", self.layout.min_spacing_ft)?;
        if self.layout.min_spacing_ft < LayoutConfig::MIN_SPACING_LOWER_BOUND_FT {
            return Err(CalcError::config(format!(
                "layout.min_spacing_ft must be at least {} ft, got {}",
                LayoutConfig::MIN_SPACING_LOWER_BOUND_FT,
                self.layout.min_spacing_ft
            )));
        }
        if self.layout.initial_spacing_ft < self.layout.min_spacing_ft {
            return Err(CalcError::config(format!(
                "layout.initial_spacing_ft ({}) must not be tighter than layout.min_spacing_ft ({})",
                self.layout.initial_spacing_ft, self.layout.min_spacing_ft
            )));
        }
        let (lower, upper) = (self.layout.lower_utilization, self.layout.upper_utilization);
        if !(lower > 0.0 && lower < upper && upper <= 1.0) {
            return Err(CalcError::config(format!(
                "layout utilization band must satisfy 0 < lower < upper <= 1, got {} and {}",
                lower, upper
            )));
        }

        positive("post.effective_length_factor", self.post.effective_length_factor)?;
        positive("post.max_slenderness", self.post.max_slenderness)?;
        Ok(())
    }
}

fn positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::config(format!("{} must be positive, got {}", field, value)));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::config(format!("{} must not be negative, got {}", field, value)));
    }
    Ok(())
}

/// Install the process-wide configuration. Succeeds once per process.
pub fn init(config: DesignConfig) -> CalcResult<&'static DesignConfig> {
    config.validate()?;
    GLOBAL
        .try_insert(config)
        .map_err(|_| CalcError::config("configuration already installed"))
}

/// The installed configuration, or the defaults if none was installed.
pub fn global() -> &'static DesignConfig {
    GLOBAL.get_or_init(DesignConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DesignConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = DesignConfig::from_toml_str("").unwrap();
        assert_eq!(config, DesignConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DesignConfig::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("roof_dead_load_psf"));
        assert_eq!(DesignConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DesignConfig::from_toml_str("[loads]\nwind_psf = 30.0\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_unknown_lumber_field_rejected() {
        let err = DesignConfig::from_toml_str("[lumber]\nfb = 900.0\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        let grade = DesignConfig::from_toml_str("[lumber]\nfb_psi = 900.0\n").unwrap();
        assert_eq!(grade.lumber.fb_psi, 900.0);
    }

    #[test]
    fn test_tiny_min_spacing_rejected() {
        let err = DesignConfig::from_toml_str("[layout]\nmin_spacing_ft = 1e-9\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("layout.min_spacing_ft"));
    }

    #[test]
    fn test_initial_spacing_tighter_than_min_rejected() {
        let err = DesignConfig::from_toml_str("[layout]\ninitial_spacing_ft = 4.0\n").unwrap_err();
        assert!(err.to_string().contains("layout.initial_spacing_ft"));
    }

    #[test]
    fn test_bent_counts_saturate() {
        let layout = LayoutConfig {
            initial_spacing_ft: 1e-12,
            min_spacing_ft: 1e-12,
            ..LayoutConfig::default()
        };
        assert_eq!(layout.initial_bents(100.0), u32::MAX);
        assert_eq!(layout.max_bents(100.0), u32::MAX);
    }

    #[test]
    fn test_inverted_band_rejected() {
        let mut config = DesignConfig::default();
        config.layout.lower_utilization = 0.97;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_deflection_ratio_rejected() {
        let err = DesignConfig::from_toml_str("[deflection]\nlimit_ratio = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("deflection.limit_ratio"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[snow]\nmin_unloading_factor = 0.7").unwrap();
        let config = DesignConfig::load(file.path()).unwrap();
        assert_eq!(config.snow.min_unloading_factor, 0.7);
        assert_eq!(config.snow.unloading_threshold_pitch, 4.0);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = DesignConfig::load(Path::new("/nonexistent/timberframe.toml")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_bent_bounds() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.initial_bents(40.0), 6);
        assert_eq!(layout.max_bents(40.0), 7);
        assert_eq!(layout.initial_bents(10.0), 2);
        assert_eq!(layout.max_bents(10.0), 2);
        assert_eq!(layout.max_bents(100.0), 17);
    }

    #[test]
    fn test_global_defaults_to_default() {
        // Unit tests never call init, so the lazily created defaults are returned
        assert_eq!(global().deflection.limit_ratio, 240.0);
    }
}
