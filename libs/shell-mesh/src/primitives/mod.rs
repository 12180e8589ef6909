//! # Primitives
//!
//! Scene generators: the deterministic shell band and the random sampler.

pub mod sampler;
pub mod shell;

pub use sampler::{cell_triangle, sample_triangles};
pub use shell::{build_shell_band, ShellBand, ShellLayout, ShellParams};
