//! # Structural Calculations
//!
//! Member checks and member selection for the three member classes of a bent.
//!
//! - [`beam`] - Simply-supported flexural checks (beams and rafters)
//! - [`column`] - Simplified axial check (posts)
//! - [`sizing`] - Scans the lumber table for the lightest passing section
//!
//! ## Bent anatomy
//!
//! ```text
//!            ridge
//!             /\
//!   rafter   /  \   rafter
//!           /    \
//!     +----+------+----+   <- beam (spans the building width)
//!     |                |
//!     | post      post |
//!     |                |
//! ```

pub mod beam;
pub mod column;
pub mod sizing;

use serde::{Deserialize, Serialize};

use crate::input::GeometryInput;
use crate::units::Feet;

pub use sizing::{size, SizedMember};

/// Member classes of a bent.
///
/// This is a closed set; each class carries its own span and count rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberClass {
    /// Vertical member at each eave wall, checked in axial compression
    Post,
    /// Horizontal member spanning the building width at plate height
    Beam,
    /// Sloped member from plate to ridge
    Rafter,
}

impl MemberClass {
    /// All member classes, in report order
    pub const ALL: [MemberClass; 3] = [MemberClass::Post, MemberClass::Beam, MemberClass::Rafter];

    /// Get display name (e.g., "Beam")
    pub fn display_name(&self) -> &'static str {
        match self {
            MemberClass::Post => "Post",
            MemberClass::Beam => "Beam",
            MemberClass::Rafter => "Rafter",
        }
    }

    /// Lowercase label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            MemberClass::Post => "post",
            MemberClass::Beam => "beam",
            MemberClass::Rafter => "rafter",
        }
    }

    /// Pieces of this class in each bent
    pub fn per_bent(&self) -> u32 {
        match self {
            MemberClass::Post => 2,
            MemberClass::Beam => 1,
            MemberClass::Rafter => 2,
        }
    }

    /// Design length of one piece.
    ///
    /// For posts this is the unbraced length (wall height), not a bending span.
    pub fn span(&self, geometry: &GeometryInput) -> Feet {
        match self {
            MemberClass::Post => Feet(geometry.wall_height_ft),
            MemberClass::Beam => Feet(geometry.width_ft),
            MemberClass::Rafter => geometry.rafter_length(),
        }
    }

    /// Width of roof, measured along the building length, that loads one member
    pub fn tributary_width(&self, bent_spacing: Feet) -> Feet {
        match self {
            // Every member of a bent collects the roof halfway to each neighbor
            MemberClass::Post | MemberClass::Beam | MemberClass::Rafter => bent_spacing,
        }
    }

    /// Whether the class is checked in bending (as opposed to axial compression)
    pub fn is_flexural(&self) -> bool {
        !matches!(self, MemberClass::Post)
    }
}

impl std::fmt::Display for MemberClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Utilization ratios (demand ÷ capacity) of a member.
///
/// Checks that do not apply to a class are zero: posts have no bending, shear
/// or deflection ratio; beams and rafters have no axial ratio.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Utilization {
    /// fb / Fb
    pub bending: f64,
    /// fv / Fv
    pub shear: f64,
    /// δ / (L / limit)
    pub deflection: f64,
    /// fc / (Fc · Cp)
    pub axial: f64,
}

impl Utilization {
    /// Highest ratio of all checks
    pub fn governing(&self) -> f64 {
        self.bending.max(self.shear).max(self.deflection).max(self.axial)
    }

    /// Check if all ratios are ≤ 1.0
    pub fn passes(&self) -> bool {
        self.governing() <= 1.0
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        let max = self.governing();
        if self.axial >= max && self.axial > 0.0 {
            "Axial"
        } else if self.bending >= max {
            "Bending"
        } else if self.shear >= max {
            "Shear"
        } else {
            "Deflection"
        }
    }
}
