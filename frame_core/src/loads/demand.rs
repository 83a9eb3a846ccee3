//! Member demand
//!
//! Turns the roof load and a trial bent spacing into one [`MemberDemand`] per
//! member class. Loads are expressed per foot of horizontal run:
//!
//! - dead load acts on the roof surface, so it is scaled by the slope-length
//!   factor: `D · sf · spacing`
//! - snow is the governing case from [`governing_snow`]: `S_gov · spacing`
//!
//! Beams span the building width and rafters their sloped length, both under
//! the full line load. Posts each take half of the bent's roof load as axial
//! compression over the wall height.

use serde::{Deserialize, Serialize};

use crate::calculations::beam::{simple_span_forces, SimpleSpanForces};
use crate::calculations::MemberClass;
use crate::config::DesignConfig;
use crate::input::{GeometryInput, LoadInput};
use crate::loads::snow::{governing_snow, GoverningSnow};
use crate::units::{Feet, PlF, Psf};

/// Roof load per square foot of horizontal projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofLoad {
    /// Dead load on the horizontal projection, D · sf (psf)
    pub dead_psf: f64,
    /// Snow cases and the governing one
    pub snow: GoverningSnow,
    /// Dead + governing snow (psf)
    pub total_psf: f64,
}

impl RoofLoad {
    /// Total roof load as a typed unit
    pub fn total(&self) -> Psf {
        Psf(self.total_psf)
    }
}

/// Compute the roof load for a building and snow load.
pub fn roof_load(geometry: &GeometryInput, loads: &LoadInput, config: &DesignConfig) -> RoofLoad {
    let dead = Psf(config.loads.roof_dead_load_psf) * geometry.slope_factor();
    let snow = governing_snow(geometry, loads, &config.snow);
    RoofLoad {
        dead_psf: dead.0,
        snow,
        total_psf: (dead + snow.governing()).0,
    }
}

/// Demand on one member for one trial spacing.
///
/// Created fresh per sizing pass and discarded after selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberDemand {
    /// Member class
    pub class: MemberClass,
    /// Tributary width along the building (ft)
    pub tributary_width_ft: f64,
    /// Design span; for posts the unbraced length (ft)
    pub span_ft: f64,
    /// Governing uniform load, dead + snow (plf)
    pub load_plf: f64,
    /// M = wL²/8 (ft-lb), zero for posts
    pub max_moment_ftlb: f64,
    /// V = wL/2 (lb), zero for posts
    pub max_shear_lb: f64,
    /// Axial compression (lb), zero for beams and rafters
    pub axial_load_lb: f64,
    /// S_req = M / Fb (in³)
    pub required_section_modulus_in3: f64,
    /// I_req from the deflection limit (in⁴)
    pub required_moment_of_inertia_in4: f64,
}

impl MemberDemand {
    /// Demand on a beam or rafter
    pub fn flexural(
        class: MemberClass,
        tributary_width: Feet,
        span: Feet,
        load: PlF,
        forces: SimpleSpanForces,
    ) -> Self {
        MemberDemand {
            class,
            tributary_width_ft: tributary_width.0,
            span_ft: span.0,
            load_plf: load.0,
            max_moment_ftlb: forces.max_moment_ftlb,
            max_shear_lb: forces.max_shear_lb,
            axial_load_lb: 0.0,
            required_section_modulus_in3: forces.required_section_modulus_in3,
            required_moment_of_inertia_in4: forces.required_moment_of_inertia_in4,
        }
    }

    /// Demand on a post
    pub fn axial(tributary_width: Feet, unbraced_length: Feet, load: PlF, axial_load_lb: f64) -> Self {
        MemberDemand {
            class: MemberClass::Post,
            tributary_width_ft: tributary_width.0,
            span_ft: unbraced_length.0,
            load_plf: load.0,
            max_moment_ftlb: 0.0,
            max_shear_lb: 0.0,
            axial_load_lb,
            required_section_modulus_in3: 0.0,
            required_moment_of_inertia_in4: 0.0,
        }
    }
}

/// Demand on one member class for a trial bent spacing.
pub fn member_demand(
    class: MemberClass,
    geometry: &GeometryInput,
    loads: &LoadInput,
    bent_spacing: Feet,
    config: &DesignConfig,
) -> MemberDemand {
    let roof = roof_load(geometry, loads, config);
    demand_from_roof(class, geometry, &roof, bent_spacing, config)
}

/// Demands on every member class for a trial bent spacing, in report order.
pub fn frame_demands(
    geometry: &GeometryInput,
    loads: &LoadInput,
    bent_spacing: Feet,
    config: &DesignConfig,
) -> [MemberDemand; 3] {
    let roof = roof_load(geometry, loads, config);
    MemberClass::ALL.map(|class| demand_from_roof(class, geometry, &roof, bent_spacing, config))
}

fn demand_from_roof(
    class: MemberClass,
    geometry: &GeometryInput,
    roof: &RoofLoad,
    bent_spacing: Feet,
    config: &DesignConfig,
) -> MemberDemand {
    let tributary = class.tributary_width(bent_spacing);
    let line_load = roof.total() * tributary;
    let span = class.span(geometry);

    match class {
        MemberClass::Post => {
            // Each post carries the half of the bent's roof on its side of the ridge
            let axial = line_load * geometry.rafter_run();
            MemberDemand::axial(tributary, span, line_load, axial.0)
        }
        MemberClass::Beam | MemberClass::Rafter => {
            let forces = simple_span_forces(line_load, span, &config.lumber, config.deflection.limit_ratio);
            MemberDemand::flexural(class, tributary, span, line_load, forces)
        }
    }
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

    fn fifty() -> LoadInput {
        LoadInput { snow_load_psf: 50.0 }
    }

    #[test]
    fn test_roof_load_components() {
        let roof = roof_load(&barn(), &fifty(), &DesignConfig::default());
        // 15 psf * 1.1180
        assert!((roof.dead_psf - 16.7705).abs() < 0.0001);
        assert!((roof.total_psf - 67.0820).abs() < 0.0001);
    }

    #[test]
    fn test_beam_demand() {
        let d = member_demand(MemberClass::Beam, &barn(), &fifty(), Feet(8.0), &DesignConfig::default());
        assert_eq!(d.span_ft, 24.0);
        assert!((d.load_plf - 536.656).abs() < 0.001);
        // M = w * 24² / 8
        assert!((d.max_moment_ftlb - 536.656 * 72.0).abs() < 0.1);
        assert!((d.max_shear_lb - 536.656 * 12.0).abs() < 0.01);
        assert_eq!(d.axial_load_lb, 0.0);
    }

    #[test]
    fn test_rafter_uses_slope_length() {
        let d = member_demand(MemberClass::Rafter, &barn(), &fifty(), Feet(8.0), &DesignConfig::default());
        assert!((d.span_ft - 13.4164).abs() < 0.0001);
        assert!(d.required_section_modulus_in3 > 0.0);
    }

    #[test]
    fn test_post_takes_half_the_bent() {
        let d = member_demand(MemberClass::Post, &barn(), &fifty(), Feet(8.0), &DesignConfig::default());
        assert_eq!(d.span_ft, 10.0);
        assert!((d.axial_load_lb - 536.656 * 12.0).abs() < 0.01);
        assert_eq!(d.required_section_modulus_in3, 0.0);
    }

    #[test]
    fn test_dead_load_override() {
        let mut config = DesignConfig::default();
        config.loads.roof_dead_load_psf = 0.0;
        let roof = roof_load(&barn(), &fifty(), &config);
        assert_eq!(roof.dead_psf, 0.0);
        assert_eq!(roof.total_psf, roof.snow.governing_psf);
    }

    #[test]
    fn test_frame_demands_order_and_scaling() {
        let config = DesignConfig::default();
        let narrow = frame_demands(&barn(), &fifty(), Feet(6.0), &config);
        let wide = frame_demands(&barn(), &fifty(), Feet(12.0), &config);
        for (n, w) in narrow.iter().zip(wide.iter()) {
            assert_eq!(n.class, w.class);
            assert!((w.load_plf / n.load_plf - 2.0).abs() < 1e-9);
        }
        assert_eq!(narrow.map(|d| d.class), MemberClass::ALL);
    }
}
