//! # Shell Mesh
//!
//! Synthetic geometry for benchmarking a LiDAR ray tracer. A sensor's angular
//! sampling pattern (azimuth steps × elevation channels) is turned into
//! triangles on a sphere around the sensor.
//!
//! ## Generators
//!
//! - **Shell band**: a closed ring of quads covering the elevation span of
//!   the sensor, wound to face the origin ([`primitives::build_shell_band`])
//! - **Random sampler**: independent single-cell triangles facing away from
//!   the origin ([`primitives::sample_triangles`])
//!
//! All angles are radians.
//!
//! ## Usage
//!
//! ```rust
//! use shell_mesh::primitives::{build_shell_band, ShellParams};
//!
//! let params = ShellParams {
//!     azimuth_steps: 4,
//!     elevation_angles: vec![0.5, -0.5],
//!     target_vertices: 8,
//!     radius: 10.0,
//!     angular_margin: 0.0,
//! };
//! let band = build_shell_band(&params)?;
//! assert_eq!(band.mesh.vertex_count(), 8);
//! assert_eq!(band.mesh.triangle_count(), 8);
//! # Ok::<(), shell_mesh::MeshError>(())
//! ```

pub mod error;
pub mod grid;
pub mod mesh;
pub mod primitives;
pub mod triangle;

pub use error::MeshError;
pub use grid::AngularGrid;
pub use mesh::Mesh;
pub use triangle::{Scene, Triangle};
