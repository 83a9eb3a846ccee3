//! # Member Sizer
//!
//! Selects the lightest lumber-table section that satisfies a demand. The
//! table is scanned in ascending section-modulus order and the first passing
//! entry wins; there is no further optimization. When nothing in the catalog
//! passes, the demand is reported back as [`CalcError::Undersized`] instead of
//! extrapolating past the largest size.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::calculations::{size, MemberClass};
//! use frame_core::config::DesignConfig;
//! use frame_core::input::{GeometryInput, LoadInput};
//! use frame_core::loads::member_demand;
//! use frame_core::materials::LumberTable;
//! use frame_core::units::Feet;
//!
//! let config = DesignConfig::default();
//! let table = LumberTable::new(&config.lumber);
//! let geometry = GeometryInput { length_ft: 40.0, width_ft: 24.0, wall_height_ft: 10.0, pitch: 6.0 };
//! let loads = LoadInput { snow_load_psf: 50.0 };
//!
//! let demand = member_demand(MemberClass::Beam, &geometry, &loads, Feet(8.0), &config);
//! let beam = size(&demand, &table, &config).unwrap();
//! assert!(beam.utilization.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{beam, column, MemberClass, Utilization};
use crate::config::DesignConfig;
use crate::errors::{CalcError, CalcResult};
use crate::loads::MemberDemand;
use crate::materials::{LumberEntry, LumberTable};

/// A member with its chosen section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizedMember {
    /// Member class
    pub class: MemberClass,
    /// Chosen catalog entry
    pub entry: LumberEntry,
    /// Design span (posts: unbraced length) in feet
    pub span_ft: f64,
    /// Tributary width the member was sized for (ft)
    pub tributary_width_ft: f64,
    /// Uniform load the member was sized for (plf)
    pub load_plf: f64,
    /// Axial load for posts (lb)
    pub axial_load_lb: f64,
    /// Demand ÷ capacity for each check
    pub utilization: Utilization,
}

/// Check one section against a demand.
///
/// Returns `None` when the section cannot be used for the demand at all (a post
/// too slender for its height).
pub fn check(entry: &LumberEntry, demand: &MemberDemand, config: &DesignConfig) -> Option<Utilization> {
    if demand.class.is_flexural() {
        Some(beam::check(entry, demand, config.deflection.limit_ratio))
    } else {
        column::check(entry, demand, &config.post)
    }
}

/// Select the first catalog entry whose every utilization is ≤ 1.0.
pub fn size(demand: &MemberDemand, table: &LumberTable, config: &DesignConfig) -> CalcResult<SizedMember> {
    for entry in table.lookup(demand.class) {
        let Some(utilization) = check(entry, demand, config) else {
            continue;
        };
        if utilization.passes() {
            debug!(
                member = %demand.class,
                size = %entry.size,
                utilization = utilization.governing(),
                "section selected"
            );
            return Ok(SizedMember {
                class: demand.class,
                entry: *entry,
                span_ft: demand.span_ft,
                tributary_width_ft: demand.tributary_width_ft,
                load_plf: demand.load_plf,
                axial_load_lb: demand.axial_load_lb,
                utilization,
            });
        }
    }

    Err(CalcError::Undersized {
        member: demand.class,
        span_ft: demand.span_ft,
        load_plf: demand.load_plf,
        required_section_modulus_in3: demand.required_section_modulus_in3,
        required_moment_of_inertia_in4: demand.required_moment_of_inertia_in4,
        axial_load_lb: demand.axial_load_lb,
    })
}

/// Lowest governing utilization any catalog entry reaches for a demand.
///
/// Above 1.0 means the demand is beyond the catalog; infinite when no entry is
/// usable at all.
pub fn best_utilization(demand: &MemberDemand, table: &LumberTable, config: &DesignConfig) -> f64 {
    table
        .lookup(demand.class)
        .iter()
        .filter_map(|entry| check(entry, demand, config))
        .map(|u| u.governing())
        .fold(f64::INFINITY, f64::min)
}
