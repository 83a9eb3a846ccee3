//! # Frame Layout Planner
//!
//! Chooses how many bents to put along the building. Bent spacing sets the
//! tributary width of every member, and the sized members in turn decide
//! whether the spacing can widen or must tighten. The cycle is resolved by an
//! explicit, bounded loop:
//!
//! 1. Start from `round(length / initial spacing) + 1` bents, at least two,
//!    never above the cap.
//! 2. Size every member class for `spacing = length / (N - 1)`.
//! 3. Add a bent when a class is undersized or the beam is above the upper
//!    utilization band. Remove one when the beam is below the lower band and
//!    the wider spacing still sizes.
//! 4. Stop when N is stable. A move that would undo the previous move instead
//!    settles on the tighter of the two candidates (higher beam utilization
//!    that still fits, ties to fewer bents).
//!
//! The cap is `floor(length / min spacing) + 1`. Reaching it with a class still
//! undersized is [`CalcError::NoFeasibleLayout`]; reaching it with a fitting
//! but heavily utilized beam is accepted.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::config::DesignConfig;
//! use frame_core::input::{GeometryInput, LoadInput};
//! use frame_core::layout::plan;
//! use frame_core::materials::LumberTable;
//!
//! let config = DesignConfig::default();
//! let table = LumberTable::new(&config.lumber);
//! let geometry = GeometryInput { length_ft: 40.0, width_ft: 24.0, wall_height_ft: 10.0, pitch: 6.0 };
//! let planned = plan(&geometry, &LoadInput { snow_load_psf: 50.0 }, &table, &config).unwrap();
//!
//! assert_eq!(planned.layout.bent_count, 7);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculations::{size, sizing, MemberClass, SizedMember};
use crate::config::DesignConfig;
use crate::errors::{CalcError, CalcResult};
use crate::input::{GeometryInput, LoadInput};
use crate::loads::frame_demands;
use crate::materials::LumberTable;
use crate::units::Feet;

/// Bents along the building length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BentLayout {
    /// Number of bents, end bents included (≥ 2)
    pub bent_count: u32,
    /// Center-to-center spacing (ft)
    pub spacing_ft: f64,
    /// Roof width carried by one interior bent (ft)
    pub tributary_width_ft: f64,
}

impl BentLayout {
    /// Evenly spaced layout of `bent_count` bents over a building length
    pub fn for_count(length_ft: f64, bent_count: u32) -> Self {
        let bent_count = bent_count.max(2);
        let spacing_ft = length_ft / f64::from(bent_count - 1);
        BentLayout {
            bent_count,
            spacing_ft,
            tributary_width_ft: spacing_ft,
        }
    }

    /// Bent count whose spacing is closest to a tributary width
    pub fn bents_for_tributary(length_ft: f64, tributary_width_ft: f64) -> u32 {
        ((length_ft / tributary_width_ft).round() as u32 + 1).max(2)
    }

    /// Spacing as a typed length
    pub fn spacing(&self) -> Feet {
        Feet(self.spacing_ft)
    }
}

/// How the planner settled on its layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convergence {
    /// The beam landed inside the utilization band, or no move was possible
    Stable,
    /// Stopped at the most bents allowed with every member fitting
    CapReached,
    /// Two neighbouring counts pulled in opposite directions; the tighter won
    OscillationResolved,
}

impl Convergence {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Convergence::Stable => "stable",
            Convergence::CapReached => "bent cap reached",
            Convergence::OscillationResolved => "oscillation resolved",
        }
    }
}

impl std::fmt::Display for Convergence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Converged layout with the members sized for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedFrame {
    /// Final bent layout
    pub layout: BentLayout,
    /// One sized member per class, in report order
    pub members: Vec<SizedMember>,
    /// How the search ended
    pub convergence: Convergence,
    /// Number of bent counts evaluated
    pub iterations: u32,
}

impl PlannedFrame {
    /// Sized member of a class
    pub fn member(&self, class: MemberClass) -> Option<&SizedMember> {
        self.members.iter().find(|m| m.class == class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Up,
    Down,
}

/// One evaluated bent count
struct Trial {
    layout: BentLayout,
    members: CalcResult<Vec<SizedMember>>,
}

impl Trial {
    fn beam_utilization(&self) -> Option<f64> {
        let members = self.members.as_ref().ok()?;
        members
            .iter()
            .find(|m| m.class == MemberClass::Beam)
            .map(|m| m.utilization.governing())
    }

    fn into_frame(self, convergence: Convergence, iterations: u32) -> CalcResult<PlannedFrame> {
        Ok(PlannedFrame {
            layout: self.layout,
            members: self.members?,
            convergence,
            iterations,
        })
    }
}

/// Plan the bent layout starting from the configured initial spacing.
pub fn plan(
    geometry: &GeometryInput,
    loads: &LoadInput,
    table: &LumberTable,
    config: &DesignConfig,
) -> CalcResult<PlannedFrame> {
    let initial = config.layout.initial_bents(geometry.length_ft);
    plan_from(geometry, loads, table, config, initial)
}

/// Plan the bent layout starting from an explicit bent count.
///
/// The start is clamped to `2..=cap`.
pub fn plan_from(
    geometry: &GeometryInput,
    loads: &LoadInput,
    table: &LumberTable,
    config: &DesignConfig,
    initial_bents: u32,
) -> CalcResult<PlannedFrame> {
    let band = &config.layout;
    let cap = band.max_bents(geometry.length_ft);
    let max_iterations = cap.saturating_add(2);

    let mut bents = initial_bents.clamp(2, cap);
    let mut previous: Option<(Step, Trial)> = None;
    let mut iterations = 0;

    while iterations < max_iterations {
        iterations += 1;
        let trial = evaluate(geometry, loads, table, config, bents);
        let utilization = trial.beam_utilization();

        debug!(
            iteration = iterations,
            bents,
            spacing_ft = trial.layout.spacing_ft,
            beam_utilization = utilization.unwrap_or(f64::NAN),
            "layout iteration"
        );

        let wants_more = utilization.map_or(true, |u| u > band.upper_utilization);
        let wants_fewer = utilization.is_some_and(|u| u < band.lower_utilization) && bents > 2;

        if wants_more {
            if bents >= cap {
                if utilization.is_none() {
                    let (member, worst) = worst_best_utilization(geometry, loads, table, config, &trial.layout);
                    warn!(bents, %member, utilization = worst, "bent cap reached with an undersized member");
                    return Err(CalcError::no_feasible_layout(bents, member, worst));
                }
                warn!(bents, "bent cap reached, accepting a highly utilized beam");
                return trial.into_frame(Convergence::CapReached, iterations);
            }
            if let Some((Step::Down, other)) = previous {
                return settle(trial, other, iterations);
            }
            bents += 1;
            previous = Some((Step::Up, trial));
            continue;
        }

        if wants_fewer {
            let fewer = evaluate(geometry, loads, table, config, bents - 1);
            if fewer.members.is_ok() {
                if let Some((Step::Up, other)) = previous {
                    return settle(trial, other, iterations);
                }
                bents -= 1;
                previous = Some((Step::Down, trial));
                continue;
            }
        }

        info!(bents, spacing_ft = trial.layout.spacing_ft, iterations, "layout converged");
        return trial.into_frame(Convergence::Stable, iterations);
    }

    // The loop only reverses once, so this bound is never reached in practice
    let trial = evaluate(geometry, loads, table, config, bents);
    let utilization = trial.beam_utilization().unwrap_or(f64::INFINITY);
    warn!(bents, iterations, "layout search hit its iteration bound");
    Err(CalcError::no_feasible_layout(bents, MemberClass::Beam, utilization))
}

fn evaluate(
    geometry: &GeometryInput,
    loads: &LoadInput,
    table: &LumberTable,
    config: &DesignConfig,
    bents: u32,
) -> Trial {
    let layout = BentLayout::for_count(geometry.length_ft, bents);
    let members = frame_demands(geometry, loads, layout.spacing(), config)
        .iter()
        .map(|demand| size(demand, table, config))
        .collect();
    Trial { layout, members }
}

/// Pick the tighter of two neighbouring bent counts.
fn settle(current: Trial, other: Trial, iterations: u32) -> CalcResult<PlannedFrame> {
    let tighter = match (current.beam_utilization(), other.beam_utilization()) {
        (Some(a), Some(b)) => {
            let current_wins = a > b || (a == b && current.layout.bent_count < other.layout.bent_count);
            if current_wins {
                current
            } else {
                other
            }
        }
        (Some(_), None) => current,
        (None, Some(_)) => other,
        (None, None) => return current.into_frame(Convergence::OscillationResolved, iterations),
    };
    info!(
        bents = tighter.layout.bent_count,
        spacing_ft = tighter.layout.spacing_ft,
        iterations,
        "layout oscillation resolved"
    );
    tighter.into_frame(Convergence::OscillationResolved, iterations)
}

/// Member class with the highest best achievable utilization at a layout
fn worst_best_utilization(
    geometry: &GeometryInput,
    loads: &LoadInput,
    table: &LumberTable,
    config: &DesignConfig,
    layout: &BentLayout,
) -> (MemberClass, f64) {
    frame_demands(geometry, loads, layout.spacing(), config)
        .iter()
        .map(|demand| (demand.class, sizing::best_utilization(demand, table, config)))
        .fold((MemberClass::Beam, 0.0), |worst, candidate| {
            if candidate.1 > worst.1 {
                candidate
            } else {
                worst
            }
        })
}
