//! # Simply-Supported Flexural Members
//!
//! Demand and capacity checks for beams and rafters, both treated as single
//! simple spans under a uniform load.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Uniform load over the full span
//! - Rectangular section from the lumber table
//! - Reference design values used without adjustment factors
//! - Deflection checked under total (dead + snow) load
//!
//! ## Formulas
//!
//! - M = wL²/8, V = wL/2
//! - fb = M/S, fv = 3V/(2bd)
//! - δ = 5wL⁴/(384EI)
//!
//! ## Example
//!
//! ```rust
//! use frame_core::calculations::beam::simple_span_forces;
//! use frame_core::materials::TimberGrade;
//! use frame_core::units::{Feet, PlF};
//!
//! let forces = simple_span_forces(PlF(150.0), Feet(12.0), &TimberGrade::default(), 240.0);
//! assert!((forces.max_moment_ftlb - 2700.0).abs() < 1e-9);
//! assert!((forces.max_shear_lb - 900.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::Utilization;
use crate::loads::MemberDemand;
use crate::materials::{LumberEntry, TimberGrade};
use crate::units::{Feet, FtLb, InLb, Inches, PlF, Psi};

/// Demand on a simple span and the section properties it requires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleSpanForces {
    /// Maximum bending moment M = wL²/8 (ft-lb)
    pub max_moment_ftlb: f64,
    /// Maximum shear V = wL/2 (lb)
    pub max_shear_lb: f64,
    /// S_req = M / Fb (in³)
    pub required_section_modulus_in3: f64,
    /// I_req such that δ = L / limit_ratio (in⁴)
    pub required_moment_of_inertia_in4: f64,
}

/// Compute simple-span forces and required section properties.
///
/// `deflection_limit_ratio` is the denominator of the span/ratio limit (240
/// for L/240).
pub fn simple_span_forces(
    load: PlF,
    span: Feet,
    grade: &TimberGrade,
    deflection_limit_ratio: f64,
) -> SimpleSpanForces {
    let w = load.0;
    let l = span.0;

    let max_moment = FtLb(w * l * l / 8.0);
    let max_shear_lb = w * l / 2.0;

    let moment_inlb: InLb = max_moment.into();
    let Psi(fb) = grade.fb();
    let Psi(e) = grade.e();
    let required_section_modulus_in3 = moment_inlb.0 / fb;

    // δ = 5wL⁴/(384EI) = L/ratio  =>  I = 5wL³·ratio/(384E), w in lb/in, L in in
    let span_in: Inches = span.into();
    let w_lb_per_in = w / 12.0;
    let required_moment_of_inertia_in4 =
        5.0 * w_lb_per_in * span_in.0.powi(3) * deflection_limit_ratio / (384.0 * e);

    SimpleSpanForces {
        max_moment_ftlb: max_moment.0,
        max_shear_lb,
        required_section_modulus_in3,
        required_moment_of_inertia_in4,
    }
}

/// Midspan deflection of a uniformly loaded simple span (in)
pub fn max_deflection_in(load: PlF, span: Feet, e_psi: f64, moment_of_inertia_in4: f64) -> f64 {
    let span_in: Inches = span.into();
    let w_lb_per_in = load.0 / 12.0;
    5.0 * w_lb_per_in * span_in.0.powi(4) / (384.0 * e_psi * moment_of_inertia_in4)
}

/// Check a section against a flexural demand.
///
/// Returns bending, shear, and deflection ratios; the axial ratio is zero.
pub fn check(entry: &LumberEntry, demand: &MemberDemand, deflection_limit_ratio: f64) -> Utilization {
    let span = Feet(demand.span_ft);

    // fb = M/S with M converted to in-lb
    let moment_inlb: InLb = FtLb(demand.max_moment_ftlb).into();
    let actual_fb_psi = moment_inlb.0 / entry.section_modulus_in3;

    // fv = 3V/(2bd)
    let actual_fv_psi = 1.5 * demand.max_shear_lb / entry.area_in2;

    let deflection_in = max_deflection_in(PlF(demand.load_plf), span, entry.e_psi, entry.moment_of_inertia_in4);
    let span_in: Inches = span.into();
    let allowable_deflection_in = span_in.0 / deflection_limit_ratio;

    Utilization {
        bending: actual_fb_psi / entry.fb_psi,
        shear: actual_fv_psi / entry.fv_psi,
        deflection: deflection_in / allowable_deflection_in,
        axial: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::MemberClass;
    use crate::materials::TimberSize;

    fn demand(load_plf: f64, span_ft: f64) -> MemberDemand {
        let grade = TimberGrade::default();
        let forces = simple_span_forces(PlF(load_plf), Feet(span_ft), &grade, 240.0);
        MemberDemand::flexural(MemberClass::Beam, Feet(8.0), Feet(span_ft), PlF(load_plf), forces)
    }

    #[test]
    fn test_required_section_modulus() {
        let grade = TimberGrade::default();
        let forces = simple_span_forces(PlF(500.0), Feet(20.0), &grade, 240.0);
        // M = 500 * 400 / 8 = 25000 ft-lb = 300000 in-lb; S = 300000 / 1350
        assert!((forces.max_moment_ftlb - 25_000.0).abs() < 1e-9);
        assert!((forces.required_section_modulus_in3 - 222.222).abs() < 0.001);
        // I = 5 * (500/12) * 240³ * 240 / (384 * 1.6e6)
        assert!((forces.required_moment_of_inertia_in4 - 1125.0).abs() < 0.001);
    }

    #[test]
    fn test_required_properties_follow_grade() {
        let base = TimberGrade::default();
        let weaker = TimberGrade {
            fb_psi: base.fb_psi / 2.0,
            e_psi: base.e_psi / 2.0,
            ..base.clone()
        };
        let a = simple_span_forces(PlF(500.0), Feet(20.0), &base, 240.0);
        let b = simple_span_forces(PlF(500.0), Feet(20.0), &weaker, 240.0);
        assert!((b.required_section_modulus_in3 - 2.0 * a.required_section_modulus_in3).abs() < 1e-9);
        assert!((b.required_moment_of_inertia_in4 - 2.0 * a.required_moment_of_inertia_in4).abs() < 1e-9);
        assert_eq!(a.max_moment_ftlb, b.max_moment_ftlb);
    }

    #[test]
    fn test_deflection_formula() {
        // w = 120 plf (10 lb/in), L = 10 ft, E = 1.6e6, I = 1000
        let d = max_deflection_in(PlF(120.0), Feet(10.0), 1_600_000.0, 1000.0);
        let expected = 5.0 * 10.0 * 120.0_f64.powi(4) / (384.0 * 1_600_000.0 * 1000.0);
        assert!((d - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ratios_match_required_properties() {
        let entry = LumberEntry::new(TimberSize::T10x14, &TimberGrade::default());
        let dm = demand(536.6, 24.0);
        let u = check(&entry, &dm, 240.0);
        assert!((u.bending - dm.required_section_modulus_in3 / entry.section_modulus_in3).abs() < 1e-9);
        assert!((u.deflection - dm.required_moment_of_inertia_in4 / entry.moment_of_inertia_in4).abs() < 1e-9);
        assert_eq!(u.axial, 0.0);
    }

    #[test]
    fn test_shear_stress_ratio() {
        let entry = LumberEntry::new(TimberSize::T6x6, &TimberGrade::default());
        let dm = demand(400.0, 10.0);
        let u = check(&entry, &dm, 240.0);
        // V = 2000 lb; fv = 1.5 * 2000 / 30.25 = 99.17 psi; / 170
        assert!((u.shear - 99.1736 / 170.0).abs() < 0.001);
    }

    #[test]
    fn test_heavier_load_raises_every_ratio() {
        let entry = LumberEntry::new(TimberSize::T8x12, &TimberGrade::default());
        let light = check(&entry, &demand(200.0, 16.0), 240.0);
        let heavy = check(&entry, &demand(400.0, 16.0), 240.0);
        assert!(heavy.bending > light.bending);
        assert!(heavy.shear > light.shear);
        assert!(heavy.deflection > light.deflection);
    }
}
