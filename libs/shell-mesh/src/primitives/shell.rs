//! # Shell Band Primitive
//!
//! Generates a triangulated spherical band covering the elevation span of a
//! sensor, at a fixed radius and an approximate vertex budget.

use crate::error::MeshError;
use crate::grid::{azimuth_at, spherical_to_cartesian};
use crate::mesh::Mesh;
use crate::triangle::Scene;
use config::constants::{approx_zero, MAX_TRIANGLES, MAX_VERTICES, MIN_ELEVATION_POINTS};
use std::f64::consts::FRAC_PI_2;

/// Inputs of the shell builder. Angles are radians.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellParams {
    /// Azimuth steps of the sensor, reused as the mesh azimuth resolution.
    pub azimuth_steps: u32,
    /// Elevation channels of the sensor; only their extent is used.
    pub elevation_angles: Vec<f64>,
    /// Approximate number of vertices to spend on the band.
    pub target_vertices: u32,
    /// Shell radius.
    pub radius: f64,
    /// Extra elevation added below the lowest and above the highest channel.
    pub angular_margin: f64,
}

impl ShellParams {
    /// Checks every field against its valid range.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.azimuth_steps == 0 {
            return Err(MeshError::invalid("azimuth_steps", "must be at least 1"));
        }
        if self.elevation_angles.is_empty() {
            return Err(MeshError::EmptyElevations);
        }
        if let Some(bad) = self.elevation_angles.iter().find(|e| !e.is_finite()) {
            return Err(MeshError::invalid(
                "elevation_angles",
                format!("contains a non-finite angle: {bad}"),
            ));
        }
        if self.target_vertices == 0 {
            return Err(MeshError::invalid("target_vertices", "must be at least 1"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(MeshError::invalid(
                "radius",
                format!("must be positive: {}", self.radius),
            ));
        }
        if !(self.angular_margin.is_finite() && self.angular_margin >= 0.0) {
            return Err(MeshError::invalid(
                "angular_margin",
                format!("must be zero or positive: {}", self.angular_margin),
            ));
        }
        Ok(())
    }
}

/// Grid resolution actually used for a band, derived from [`ShellParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellLayout {
    /// Vertex budget that was requested.
    pub target_vertices: u32,
    /// Points around the azimuth (`N_az`).
    pub azimuth_points: u32,
    /// Rows across the elevation span (`N_el`).
    pub elevation_points: u32,
    /// Set when `N_el` had to be raised to the two-row minimum.
    pub clamped: bool,
    /// Elevation of row 0.
    pub min_elevation: f64,
    /// Elevation of the last row.
    pub max_elevation: f64,
}

impl ShellLayout {
    /// Derives the grid resolution for `params`.
    ///
    /// # Algorithm
    ///
    /// - `N_az = azimuth_steps`
    /// - `N_el = floor(target / N_az)`; below 2 it is clamped to 2 and
    ///   `N_az` is recomputed as `floor(target / 2)` (at least 1)
    /// - rows span `[min(elevations) - margin, max(elevations) + margin]`
    ///
    /// # Example
    ///
    /// ```rust
    /// use shell_mesh::primitives::{ShellLayout, ShellParams};
    ///
    /// let params = ShellParams {
    ///     azimuth_steps: 4,
    ///     elevation_angles: vec![0.5, -0.5],
    ///     target_vertices: 8,
    ///     radius: 10.0,
    ///     angular_margin: 0.0,
    /// };
    /// let layout = ShellLayout::plan(&params).unwrap();
    /// assert_eq!((layout.azimuth_points, layout.elevation_points), (4, 2));
    /// assert_eq!(layout.triangle_count(), 8);
    /// ```
    pub fn plan(params: &ShellParams) -> Result<Self, MeshError> {
        params.validate()?;

        let target = params.target_vertices;
        let mut azimuth_points = params.azimuth_steps;
        let mut elevation_points = target / azimuth_points;
        let clamped = elevation_points < MIN_ELEVATION_POINTS;
        if clamped {
            elevation_points = MIN_ELEVATION_POINTS;
            azimuth_points = (target / elevation_points).max(1);
        }

        let (lowest, highest) = params
            .elevation_angles
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &e| {
                (lo.min(e), hi.max(e))
            });
        let min_elevation = lowest - params.angular_margin;
        let max_elevation = highest + params.angular_margin;

        let layout = Self {
            target_vertices: target,
            azimuth_points,
            elevation_points,
            clamped,
            min_elevation,
            max_elevation,
        };

        if layout.vertex_count() > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: layout.vertex_count(),
                max: MAX_VERTICES,
            });
        }
        if layout.triangle_count() > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: layout.triangle_count(),
                max: MAX_TRIANGLES,
            });
        }

        layout.report(params.azimuth_steps);
        Ok(layout)
    }

    fn report(&self, azimuth_steps: u32) {
        if self.clamped {
            log::warn!(
                "Vertex budget {} is below two rows of {} azimuth steps: \
                 elevation points clamped to {}, azimuth points reduced to {}, \
                 {} vertices generated instead of {}",
                self.target_vertices,
                azimuth_steps,
                self.elevation_points,
                self.azimuth_points,
                self.vertex_count(),
                self.target_vertices,
            );
        }
        if approx_zero(self.max_elevation - self.min_elevation) {
            log::warn!(
                "Elevation span is empty ({} rad): band triangles will have zero area",
                self.min_elevation
            );
        }
        if self.azimuth_points < 3 {
            log::warn!(
                "Only {} azimuth point(s): band triangles will be degenerate",
                self.azimuth_points
            );
        }
        if self.min_elevation < -FRAC_PI_2 || self.max_elevation > FRAC_PI_2 {
            log::warn!(
                "Elevation span [{:.4}, {:.4}] rad crosses a pole; winding flips past it",
                self.min_elevation,
                self.max_elevation
            );
        }
        log::debug!("Shell layout: {:?}", self);
    }

    /// Vertices in the grid, `N_az * N_el`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.azimuth_points as usize * self.elevation_points as usize
    }

    /// Elevation bands between adjacent rows, `N_el - 1`.
    #[inline]
    pub fn band_count(&self) -> u32 {
        self.elevation_points.saturating_sub(1)
    }

    /// Triangles in the band, `2 * N_az * (N_el - 1)`.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        2 * self.azimuth_points as usize * self.band_count() as usize
    }

    /// True when the generated vertex count differs from the budget.
    #[inline]
    pub fn diverges_from_target(&self) -> bool {
        self.vertex_count() != self.target_vertices as usize
    }

    /// Azimuth of column `i`.
    #[inline]
    pub fn azimuth(&self, i: u32) -> f64 {
        azimuth_at(i, self.azimuth_points)
    }

    /// Elevation of row `j`, linear between the span ends.
    #[inline]
    pub fn elevation(&self, j: u32) -> f64 {
        // N_el >= 2 after planning; the guard keeps a hand-built layout finite
        let divisor = if self.elevation_points > 1 {
            f64::from(self.elevation_points - 1)
        } else {
            1.0
        };
        self.min_elevation + (self.max_elevation - self.min_elevation) * f64::from(j) / divisor
    }

    /// Index of the grid vertex at column `i`, row `j`.
    #[inline]
    pub fn vertex_index(&self, i: u32, j: u32) -> u32 {
        i * self.elevation_points + j
    }
}

/// A generated band together with the layout it was built from.
#[derive(Debug, Clone)]
pub struct ShellBand {
    pub layout: ShellLayout,
    pub mesh: Mesh,
}

impl ShellBand {
    /// Resolved triangles in generation order.
    pub fn to_scene(&self) -> Scene {
        self.mesh.to_scene()
    }
}

/// Creates the shell band mesh described by `params`.
///
/// # Arguments
///
/// * `params` - Sensor sampling, vertex budget, radius and margin
///
/// # Returns
///
/// The band mesh and the layout it was built with.
///
/// # Winding
///
/// Each quad between columns `i`, `i' = (i + 1) mod N_az` and rows `j`,
/// `j + 1` is split into
///
/// - A = (v[i,j], v[i,j+1], v[i',j])
/// - B = (v[i',j], v[i,j+1], v[i',j+1])
///
/// With rows ascending in elevation and columns ascending in azimuth, both
/// normals point toward the origin: counter-clockwise as seen from inside.
///
/// # Example
///
/// ```rust
/// use shell_mesh::primitives::{build_shell_band, ShellParams};
///
/// let params = ShellParams {
///     azimuth_steps: 16,
///     elevation_angles: vec![0.2, 0.0, -0.2],
///     target_vertices: 64,
///     radius: 5.0,
///     angular_margin: 0.01,
/// };
/// let band = build_shell_band(&params).unwrap();
/// assert_eq!(band.mesh.vertex_count(), 64);
/// assert_eq!(band.mesh.triangle_count(), 2 * 16 * 3);
/// ```
pub fn build_shell_band(params: &ShellParams) -> Result<ShellBand, MeshError> {
    let layout = ShellLayout::plan(params)?;
    let mesh = tessellate(&layout, params.radius);
    Ok(ShellBand { layout, mesh })
}

fn tessellate(layout: &ShellLayout, radius: f64) -> Mesh {
    let n_az = layout.azimuth_points;
    let n_el = layout.elevation_points;
    let mut mesh = Mesh::with_capacity(layout.vertex_count(), layout.triangle_count());

    let elevations: Vec<f64> = (0..n_el).map(|j| layout.elevation(j)).collect();
    for i in 0..n_az {
        let azimuth = layout.azimuth(i);
        for &elevation in &elevations {
            mesh.add_vertex(spherical_to_cartesian(azimuth, elevation, radius));
        }
    }

    for i in 0..n_az {
        let i_next = (i + 1) % n_az;
        for j in 0..layout.band_count() {
            let a0 = layout.vertex_index(i, j);
            let a1 = layout.vertex_index(i, j + 1);
            let b0 = layout.vertex_index(i_next, j);
            let b1 = layout.vertex_index(i_next, j + 1);

            mesh.add_triangle(a0, a1, b0);
            mesh.add_triangle(b0, a1, b1);
        }
    }

    mesh
}
