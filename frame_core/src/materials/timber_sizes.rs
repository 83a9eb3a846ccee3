//! Standard Timber Sizes
//!
//! Nominal timber designations with nominal-to-actual conversions for dressed
//! (S4S) heavy timbers, the stock a timber frame is cut from.
//!
//! ## Nominal vs Actual Dimensions
//!
//! Timbers 5" and thicker lose 1/2" to surfacing on each axis:
//!
//! - 6x nominal = 5.5" actual
//! - 8x nominal = 7.5" actual
//! - 10x nominal = 9.5" actual
//! - etc.

use serde::{Deserialize, Serialize};

/// Standard timber size designation
///
/// Serializes as its display name (`"10x14"`), which is also the nominal label
/// handed to downstream report and visualization consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimberSize {
    #[serde(rename = "6x6")]
    T6x6,
    #[serde(rename = "6x8")]
    T6x8,
    #[serde(rename = "6x10")]
    T6x10,
    #[serde(rename = "6x12")]
    T6x12,
    #[serde(rename = "6x14")]
    T6x14,
    #[serde(rename = "6x16")]
    T6x16,
    #[serde(rename = "8x8")]
    T8x8,
    #[serde(rename = "8x10")]
    T8x10,
    #[serde(rename = "8x12")]
    T8x12,
    #[serde(rename = "8x14")]
    T8x14,
    #[serde(rename = "8x16")]
    T8x16,
    #[serde(rename = "8x18")]
    T8x18,
    #[serde(rename = "8x20")]
    T8x20,
    #[serde(rename = "10x10")]
    T10x10,
    #[serde(rename = "10x12")]
    T10x12,
    #[serde(rename = "10x14")]
    T10x14,
    #[serde(rename = "10x16")]
    T10x16,
    #[serde(rename = "10x18")]
    T10x18,
    #[serde(rename = "10x20")]
    T10x20,
    #[serde(rename = "12x12")]
    T12x12,
    #[serde(rename = "12x14")]
    T12x14,
    #[serde(rename = "12x16")]
    T12x16,
    #[serde(rename = "12x18")]
    T12x18,
    #[serde(rename = "12x20")]
    T12x20,
    #[serde(rename = "14x14")]
    T14x14,
    #[serde(rename = "14x16")]
    T14x16,
    #[serde(rename = "14x18")]
    T14x18,
    #[serde(rename = "14x20")]
    T14x20,
}

impl TimberSize {
    /// Every stocked timber size, grouped by nominal width
    pub const ALL: [TimberSize; 28] = [
        TimberSize::T6x6,
        TimberSize::T6x8,
        TimberSize::T6x10,
        TimberSize::T6x12,
        TimberSize::T6x14,
        TimberSize::T6x16,
        TimberSize::T8x8,
        TimberSize::T8x10,
        TimberSize::T8x12,
        TimberSize::T8x14,
        TimberSize::T8x16,
        TimberSize::T8x18,
        TimberSize::T8x20,
        TimberSize::T10x10,
        TimberSize::T10x12,
        TimberSize::T10x14,
        TimberSize::T10x16,
        TimberSize::T10x18,
        TimberSize::T10x20,
        TimberSize::T12x12,
        TimberSize::T12x14,
        TimberSize::T12x16,
        TimberSize::T12x18,
        TimberSize::T12x20,
        TimberSize::T14x14,
        TimberSize::T14x16,
        TimberSize::T14x18,
        TimberSize::T14x20,
    ];

    /// Get the nominal dimensions (width, depth) in inches
    pub fn nominal_dimensions(&self) -> (u8, u8) {
        match self {
            TimberSize::T6x6 => (6, 6),
            TimberSize::T6x8 => (6, 8),
            TimberSize::T6x10 => (6, 10),
            TimberSize::T6x12 => (6, 12),
            TimberSize::T6x14 => (6, 14),
            TimberSize::T6x16 => (6, 16),
            TimberSize::T8x8 => (8, 8),
            TimberSize::T8x10 => (8, 10),
            TimberSize::T8x12 => (8, 12),
            TimberSize::T8x14 => (8, 14),
            TimberSize::T8x16 => (8, 16),
            TimberSize::T8x18 => (8, 18),
            TimberSize::T8x20 => (8, 20),
            TimberSize::T10x10 => (10, 10),
            TimberSize::T10x12 => (10, 12),
            TimberSize::T10x14 => (10, 14),
            TimberSize::T10x16 => (10, 16),
            TimberSize::T10x18 => (10, 18),
            TimberSize::T10x20 => (10, 20),
            TimberSize::T12x12 => (12, 12),
            TimberSize::T12x14 => (12, 14),
            TimberSize::T12x16 => (12, 16),
            TimberSize::T12x18 => (12, 18),
            TimberSize::T12x20 => (12, 20),
            TimberSize::T14x14 => (14, 14),
            TimberSize::T14x16 => (14, 16),
            TimberSize::T14x18 => (14, 18),
            TimberSize::T14x20 => (14, 20),
        }
    }

    /// Get the actual dressed dimensions (width, depth) in inches
    pub fn actual_dimensions(&self) -> (f64, f64) {
        let (w, d) = self.nominal_dimensions();
        (f64::from(w) - 0.5, f64::from(d) - 0.5)
    }

    /// Get display name (e.g., "10x14")
    pub fn display_name(&self) -> &'static str {
        match self {
            TimberSize::T6x6 => "6x6",
            TimberSize::T6x8 => "6x8",
            TimberSize::T6x10 => "6x10",
            TimberSize::T6x12 => "6x12",
            TimberSize::T6x14 => "6x14",
            TimberSize::T6x16 => "6x16",
            TimberSize::T8x8 => "8x8",
            TimberSize::T8x10 => "8x10",
            TimberSize::T8x12 => "8x12",
            TimberSize::T8x14 => "8x14",
            TimberSize::T8x16 => "8x16",
            TimberSize::T8x18 => "8x18",
            TimberSize::T8x20 => "8x20",
            TimberSize::T10x10 => "10x10",
            TimberSize::T10x12 => "10x12",
            TimberSize::T10x14 => "10x14",
            TimberSize::T10x16 => "10x16",
            TimberSize::T10x18 => "10x18",
            TimberSize::T10x20 => "10x20",
            TimberSize::T12x12 => "12x12",
            TimberSize::T12x14 => "12x14",
            TimberSize::T12x16 => "12x16",
            TimberSize::T12x18 => "12x18",
            TimberSize::T12x20 => "12x20",
            TimberSize::T14x14 => "14x14",
            TimberSize::T14x16 => "14x16",
            TimberSize::T14x18 => "14x18",
            TimberSize::T14x20 => "14x20",
        }
    }

    /// Square sections, the shapes stocked as posts
    pub fn is_square(&self) -> bool {
        let (w, d) = self.nominal_dimensions();
        w == d
    }

    /// Board feet per linear foot of this timber (nominal w × d / 12)
    pub fn board_feet_per_ft(&self) -> f64 {
        let (w, d) = self.nominal_dimensions();
        f64::from(w) * f64::from(d) / 12.0
    }

    /// Get actual area in square inches
    pub fn area_in2(&self) -> f64 {
        let (w, d) = self.actual_dimensions();
        w * d
    }

    /// Get section modulus (bd²/6) in in³
    pub fn section_modulus_in3(&self) -> f64 {
        let (w, d) = self.actual_dimensions();
        w * d * d / 6.0
    }

    /// Get moment of inertia (bd³/12) in in⁴
    pub fn moment_of_inertia_in4(&self) -> f64 {
        let (w, d) = self.actual_dimensions();
        w * d.powi(3) / 12.0
    }
}

impl std::fmt::Display for TimberSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
