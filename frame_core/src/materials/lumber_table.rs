//! Lumber Table
//!
//! The allowable-stress catalog the member sizer scans. Each entry pairs a
//! stocked timber size with its section properties and the grade's design
//! values. Entries are ordered ascending by section modulus, so the first entry
//! that satisfies a demand is also the lightest one in bending.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::calculations::MemberClass;
//! use frame_core::materials::{LumberTable, TimberGrade};
//!
//! let table = LumberTable::new(&TimberGrade::default());
//! let posts = table.lookup(MemberClass::Post);
//! assert_eq!(posts[0].size.display_name(), "6x6");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::MemberClass;
use crate::materials::{TimberGrade, TimberSize};

/// One catalog row: a timber size with its section properties and design values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumberEntry {
    /// Nominal size (serializes as its label, e.g. "8x12")
    pub size: TimberSize,
    /// Actual width b (in)
    pub width_in: f64,
    /// Actual depth d (in)
    pub depth_in: f64,
    /// Cross-sectional area A = bd (in²)
    pub area_in2: f64,
    /// Section modulus S = bd²/6 (in³)
    pub section_modulus_in3: f64,
    /// Moment of inertia I = bd³/12 (in⁴)
    pub moment_of_inertia_in4: f64,
    /// Allowable bending stress Fb (psi)
    pub fb_psi: f64,
    /// Allowable shear stress Fv (psi)
    pub fv_psi: f64,
    /// Allowable compression parallel to grain Fc (psi)
    pub fc_psi: f64,
    /// Modulus of elasticity E (psi)
    pub e_psi: f64,
}

impl LumberEntry {
    /// Build an entry from a size and the grade's design values
    pub fn new(size: TimberSize, grade: &TimberGrade) -> Self {
        let (width_in, depth_in) = size.actual_dimensions();
        LumberEntry {
            size,
            width_in,
            depth_in,
            area_in2: size.area_in2(),
            section_modulus_in3: size.section_modulus_in3(),
            moment_of_inertia_in4: size.moment_of_inertia_in4(),
            fb_psi: grade.fb_psi,
            fv_psi: grade.fv_psi,
            fc_psi: grade.fc_psi,
            e_psi: grade.e_psi,
        }
    }

    /// Least cross-section dimension, the one that governs post slenderness
    pub fn least_dimension_in(&self) -> f64 {
        self.width_in.min(self.depth_in)
    }
}

/// Immutable catalog of timber sections, pre-sorted per member class
#[derive(Debug, Clone, PartialEq)]
pub struct LumberTable {
    flexural: Vec<LumberEntry>,
    posts: Vec<LumberEntry>,
}

impl LumberTable {
    /// Build the catalog for a grade.
    ///
    /// Beams and rafters may use any stocked size; posts use the square
    /// sections. Both sequences are sorted ascending by section modulus, then
    /// area, then label, so ordering never depends on float ties.
    pub fn new(grade: &TimberGrade) -> Self {
        let mut flexural: Vec<LumberEntry> = TimberSize::ALL
            .iter()
            .map(|size| LumberEntry::new(*size, grade))
            .collect();
        flexural.sort_by(|a, b| {
            a.section_modulus_in3
                .total_cmp(&b.section_modulus_in3)
                .then(a.area_in2.total_cmp(&b.area_in2))
                .then_with(|| a.size.display_name().cmp(b.size.display_name()))
        });

        let posts = flexural
            .iter()
            .filter(|entry| entry.size.is_square())
            .copied()
            .collect();

        LumberTable {
            flexural,
            posts,
        }
    }

    /// Ordered candidate sections for a member class, smallest first
    pub fn lookup(&self, class: MemberClass) -> &[LumberEntry] {
        match class {
            MemberClass::Post => &self.posts,
            MemberClass::Beam | MemberClass::Rafter => &self.flexural,
        }
    }

    /// Number of distinct sections stocked
    pub fn len(&self) -> usize {
        self.flexural.len()
    }

    /// Whether the catalog holds no sections
    pub fn is_empty(&self) -> bool {
        self.flexural.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LumberTable {
        LumberTable::new(&TimberGrade::default())
    }

    #[test]
    fn test_sorted_by_section_modulus() {
        let table = table();
        for class in MemberClass::ALL {
            let entries = table.lookup(class);
            assert!(!entries.is_empty());
            for pair in entries.windows(2) {
                assert!(pair[0].section_modulus_in3 <= pair[1].section_modulus_in3);
            }
        }
    }

    #[test]
    fn test_catalog_spans_timber_sizes() {
        let table = table();
        assert_eq!(table.len(), TimberSize::ALL.len());
        let beams = table.lookup(MemberClass::Beam);
        assert_eq!(beams.first().map(|e| e.size), Some(TimberSize::T6x6));
        assert_eq!(beams.last().map(|e| e.size), Some(TimberSize::T14x20));
    }

    #[test]
    fn test_posts_are_square() {
        let table = table();
        let posts: Vec<_> = table.lookup(MemberClass::Post).iter().map(|e| e.size).collect();
        assert_eq!(
            posts,
            vec![
                TimberSize::T6x6,
                TimberSize::T8x8,
                TimberSize::T10x10,
                TimberSize::T12x12,
                TimberSize::T14x14,
            ]
        );
    }

    #[test]
    fn test_entry_carries_grade_values() {
        let grade = TimberGrade {
            fb_psi: 1000.0,
            ..TimberGrade::default()
        };
        let table = LumberTable::new(&grade);
        assert!(table.lookup(MemberClass::Rafter).iter().all(|e| e.fb_psi == 1000.0));
    }

    #[test]
    fn test_interleaved_widths() {
        // A deep narrow timber can out-rank a wider shallow one in bending
        let table = table();
        let beams = table.lookup(MemberClass::Beam);
        let pos = |size: TimberSize| beams.iter().position(|e| e.size == size).unwrap();
        assert!(pos(TimberSize::T6x12) < pos(TimberSize::T10x10));
        assert!(pos(TimberSize::T6x16) < pos(TimberSize::T8x14));
    }
}
