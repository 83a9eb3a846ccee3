//! # Materials Database
//!
//! Timber sizes, the grade's design values, and the allowable-stress lumber
//! table built from them.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::materials::{LumberTable, TimberGrade, TimberSize};
//!
//! let table = LumberTable::new(&TimberGrade::default());
//! assert_eq!(table.len(), TimberSize::ALL.len());
//! ```

pub mod lumber_table;
pub mod timber_grade;
pub mod timber_sizes;

pub use lumber_table::{LumberEntry, LumberTable};
pub use timber_grade::TimberGrade;
pub use timber_sizes::TimberSize;
