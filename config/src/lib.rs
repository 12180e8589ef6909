//! # Config Crate
//!
//! Centralized configuration constants for the shell scene generators.
//! Tolerances, layout rules, file locations and the reference sensor profile
//! are defined here so the geometry and I/O crates never carry literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_ELEVATION_POINTS};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! let rows = 1u32.max(MIN_ELEVATION_POINTS);
//! assert_eq!(rows, 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Radians Inside**: Degree tables are converted by helper functions
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
