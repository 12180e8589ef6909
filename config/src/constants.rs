//! # Configuration Constants
//!
//! Centralized constants for the scene generators. Precision values, layout
//! limits, file locations and the reference sensor profile are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Layout**: Shell tessellation rules and sampler offsets
//! - **Limits**: Maximum values for safety bounds
//! - **Files**: Config discovery and scene output locations
//! - **Reference Profile**: Built-in 32-channel sensor

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Smallest triangle area (twice the area, i.e. cross product length) that
/// still counts as a proper triangle during mesh validation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

/// Relative tolerance when checking that a vertex lies on its shell.
///
/// A vertex at distance `d` from the origin is on a shell of radius `r`
/// when `|d - r| <= SHELL_RADIUS_TOLERANCE * r`.
pub const SHELL_RADIUS_TOLERANCE: f64 = 1e-9;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Minimum number of elevation rows in a shell band.
///
/// Two rows are needed to form a single band of quads. When the vertex
/// budget would give fewer rows, the row count is clamped to this value and
/// the azimuth resolution is recomputed from the budget.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_ELEVATION_POINTS;
///
/// let target_vertices = 3u32;
/// let azimuth_steps = 4u32;
/// let rows = (target_vertices / azimuth_steps).max(MIN_ELEVATION_POINTS);
/// assert_eq!(rows, 2);
/// ```
pub const MIN_ELEVATION_POINTS: u32 = 2;

/// Elevation step (degrees) used by the random sampler when the anchor sits
/// on the last elevation channel. Elevation is not cyclic, so the next row is
/// fabricated instead of wrapping.
///
/// # Example
///
/// ```rust
/// use config::constants::LAST_ELEVATION_STEP_DEG;
///
/// let last = -0.5_f64;
/// let next = last + LAST_ELEVATION_STEP_DEG.to_radians();
/// assert!(next > last);
/// ```
pub const LAST_ELEVATION_STEP_DEG: f64 = 1.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single shell mesh.
///
/// Safety limit to prevent memory exhaustion from runaway vertex budgets.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 3600 * 28;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single scene.
///
/// Applies to both the shell builder and the random sampler.
pub const MAX_TRIANGLES: usize = 20_000_000;

// =============================================================================
// FILE CONSTANTS
// =============================================================================

/// File name looked up when no explicit configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// How many parent directories above the working directory are searched for
/// [`DEFAULT_CONFIG_FILE`]. `2` means: cwd, parent, grandparent.
pub const CONFIG_SEARCH_DEPTH: usize = 2;

/// Directory (relative to the output root) holding generated scenes.
pub const SCENES_DIR: &str = "scenes";

/// Scene file written for the dense preset, relative to [`SCENES_DIR`].
pub const DENSE_SCENE_FILE: &str = "dense/scene_triangles_dense.csv";

/// Scene file written for the sparse preset, relative to [`SCENES_DIR`].
pub const SPARSE_SCENE_FILE: &str = "sparse/scene_triangles_sparse.csv";

/// Default output file of the random triangle sampler.
pub const DEFAULT_SAMPLER_OUTPUT: &str = "triangles.csv";

/// Column names of a triangle row, in write order.
///
/// # Example
///
/// ```rust
/// use config::constants::TRIANGLE_COLUMNS;
///
/// assert_eq!(TRIANGLE_COLUMNS.join(","), "x0,y0,z0,x1,y1,z1,x2,y2,z2");
/// ```
pub const TRIANGLE_COLUMNS: [&str; 9] = ["x0", "y0", "z0", "x1", "y1", "z1", "x2", "y2", "z2"];

/// Column names of a reference ray direction row.
pub const RAY_COLUMNS: [&str; 3] = ["dx", "dy", "dz"];

// =============================================================================
// SAMPLER DEFAULTS
// =============================================================================

/// Number of triangles emitted by the random sampler when not overridden.
pub const DEFAULT_SAMPLER_TRIANGLES: u32 = 100_000;

/// Shell radius used by the random sampler when not overridden.
pub const DEFAULT_SAMPLER_RADIUS: f64 = 1.0;

// =============================================================================
// REFERENCE SENSOR PROFILE
// =============================================================================

/// Azimuth steps per revolution of the reference sensor.
pub const REFERENCE_AZIMUTH_STEPS: u32 = 3600;

/// Elevation channels of the reference 32-channel sensor, in **degrees**,
/// top channel first. Convert with [`reference_elevation_angles`] before use;
/// the geometry crates only accept radians.
pub const REFERENCE_ELEVATION_ANGLES_DEG: [f64; 32] = [
    10.67, 9.34, 8.01, 6.68, 5.35, 4.02, 2.69, 1.36, 0.03, -1.30, -2.63, -3.96, -5.29, -6.62,
    -7.95, -9.28, -10.61, -11.94, -13.27, -14.60, -15.93, -17.26, -18.59, -19.92, -21.25, -22.58,
    -23.91, -25.24, -26.57, -27.90, -29.23, -30.56,
];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the reference elevation table converted to radians.
///
/// # Example
///
/// ```rust
/// use config::constants::{reference_elevation_angles, REFERENCE_ELEVATION_ANGLES_DEG};
///
/// let radians = reference_elevation_angles();
/// assert_eq!(radians.len(), REFERENCE_ELEVATION_ANGLES_DEG.len());
/// assert!((radians[0] - 10.67_f64.to_radians()).abs() < 1e-15);
/// ```
pub fn reference_elevation_angles() -> Vec<f64> {
    REFERENCE_ELEVATION_ANGLES_DEG
        .iter()
        .map(|deg| deg.to_radians())
        .collect()
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
