//! # Post Axial Check
//!
//! Posts carry the bent's roof load down to the sill in compression. They are
//! checked with a simplified stability factor rather than a full NDS 3.7
//! buckling analysis:
//!
//! - le = K · H, slenderness = le / d_min
//! - Cp = 1 − 0.5 · (le/d) / 50, so Cp falls linearly from 1.0 to 0.5
//! - Sections with le/d above the configured limit are not considered
//! - fc = P / A ≤ Fc · Cp
//!
//! ## Example
//!
//! ```rust
//! use frame_core::calculations::column::stability_factor;
//!
//! assert_eq!(stability_factor(0.0), 1.0);
//! assert_eq!(stability_factor(50.0), 0.5);
//! ```

use crate::calculations::Utilization;
use crate::config::PostConfig;
use crate::loads::MemberDemand;
use crate::materials::LumberEntry;
use crate::units::{Feet, Inches};

/// Slenderness at which the simplified Cp reaches 0.5
const CP_REFERENCE_SLENDERNESS: f64 = 50.0;

/// Simplified column stability factor for a slenderness ratio le/d
pub fn stability_factor(slenderness: f64) -> f64 {
    1.0 - 0.5 * (slenderness / CP_REFERENCE_SLENDERNESS)
}

/// Slenderness ratio le/d of a section over an unbraced length
pub fn slenderness_ratio(entry: &LumberEntry, unbraced_length: Feet, k_factor: f64) -> f64 {
    let le: Inches = Feet(unbraced_length.0 * k_factor).into();
    le.0 / entry.least_dimension_in()
}

/// Check a section against a post demand.
///
/// Returns `None` when the section is too slender to be used at all.
pub fn check(entry: &LumberEntry, demand: &MemberDemand, post: &PostConfig) -> Option<Utilization> {
    let slenderness = slenderness_ratio(entry, Feet(demand.span_ft), post.effective_length_factor);
    if slenderness > post.max_slenderness {
        return None;
    }

    let allowable_fc_psi = entry.fc_psi * stability_factor(slenderness);
    let actual_fc_psi = demand.axial_load_lb / entry.area_in2;

    Some(Utilization {
        axial: actual_fc_psi / allowable_fc_psi,
        ..Utilization::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{TimberGrade, TimberSize};
    use crate::units::PlF;

    fn post_demand(height_ft: f64, axial_lb: f64) -> MemberDemand {
        MemberDemand::axial(Feet(8.0), Feet(height_ft), PlF(0.0), axial_lb)
    }

    #[test]
    fn test_slenderness_ratio() {
        let entry = LumberEntry::new(TimberSize::T6x6, &TimberGrade::default());
        // le/d = 120 / 5.5
        let sl = slenderness_ratio(&entry, Feet(10.0), 1.0);
        assert!((sl - 21.818).abs() < 0.001);
    }

    #[test]
    fn test_axial_ratio() {
        let entry = LumberEntry::new(TimberSize::T6x6, &TimberGrade::default());
        let u = check(&entry, &post_demand(10.0, 6000.0), &PostConfig::default()).unwrap();
        let cp = 1.0 - 0.5 * (120.0 / 5.5) / 50.0;
        let expected = (6000.0 / 30.25) / (925.0 * cp);
        assert!((u.axial - expected).abs() < 1e-9);
        assert_eq!(u.bending, 0.0);
        assert_eq!(u.governing_condition(), "Axial");
    }

    #[test]
    fn test_too_slender_rejected() {
        let entry = LumberEntry::new(TimberSize::T6x6, &TimberGrade::default());
        // 24 ft post: le/d = 288 / 5.5 = 52.4
        assert!(check(&entry, &post_demand(24.0, 100.0), &PostConfig::default()).is_none());
        let relaxed = PostConfig {
            max_slenderness: 60.0,
            ..PostConfig::default()
        };
        assert!(check(&entry, &post_demand(24.0, 100.0), &relaxed).is_some());
    }

    #[test]
    fn test_effective_length_factor() {
        let entry = LumberEntry::new(TimberSize::T8x8, &TimberGrade::default());
        let pinned = slenderness_ratio(&entry, Feet(12.0), 1.0);
        let cantilever = slenderness_ratio(&entry, Feet(12.0), 2.1);
        assert!((cantilever / pinned - 2.1).abs() < 1e-9);
    }
}
