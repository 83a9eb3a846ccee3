//! # Design Runs
//!
//! Entry points that take raw user input through validation, load
//! calculation, layout planning and report assembly.
//!
//! Every run owns its state: the lumber table is built per run from the
//! configured grade and nothing is shared between runs except the read-only
//! configuration. [`design_scenarios`] relies on that to run several snow loads
//! in parallel.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::config::DesignConfig;
//! use frame_core::design::design;
//! use frame_core::input::{GeometryInput, LoadInput};
//!
//! let geometry = GeometryInput { length_ft: 40.0, width_ft: 24.0, wall_height_ft: 10.0, pitch: 6.0 };
//! let result = design(&geometry, &LoadInput { snow_load_psf: 50.0 }, &DesignConfig::default()).unwrap();
//!
//! assert_eq!(result.layout.bent_count, 7);
//! assert!((result.total_board_feet - 3632.2).abs() < 0.1);
//! ```

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::DesignConfig;
use crate::errors::CalcResult;
use crate::input::{GeometryInput, LoadInput};
use crate::layout::plan;
use crate::loads::roof_load;
use crate::materials::LumberTable;
use crate::report::{assemble, DesignResult};

/// Run one complete design.
///
/// Inputs are validated before anything is computed.
pub fn design(geometry: &GeometryInput, loads: &LoadInput, config: &DesignConfig) -> CalcResult<DesignResult> {
    geometry.validate()?;
    loads.validate()?;
    config.validate()?;

    let table = LumberTable::new(&config.lumber);
    let roof = roof_load(geometry, loads, config);
    debug!(
        dead_psf = roof.dead_psf,
        snow_psf = roof.snow.governing_psf,
        snow_case = %roof.snow.case,
        total_psf = roof.total_psf,
        "roof load"
    );

    let planned = plan(geometry, loads, &table, config)?;
    let result = assemble(geometry, loads, roof, planned);

    info!(
        bents = result.layout.bent_count,
        spacing_ft = result.layout.spacing_ft,
        board_feet = result.total_board_feet,
        "design complete"
    );
    Ok(result)
}

/// Run the same building under several snow loads.
///
/// Runs are independent and execute in parallel; results come back in the
/// order of `snow_loads_psf`.
pub fn design_scenarios(
    geometry: &GeometryInput,
    snow_loads_psf: &[f64],
    config: &DesignConfig,
) -> Vec<CalcResult<DesignResult>> {
    snow_loads_psf
        .par_iter()
        .map(|&snow_load_psf| design(geometry, &LoadInput { snow_load_psf }, config))
        .collect()
}
