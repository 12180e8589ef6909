//! # Random Triangle Sampler
//!
//! Scatters independent triangles over the sensor grid. Each one spans a
//! single grid cell (next azimuth, next elevation) and faces away from the
//! origin.

use crate::error::MeshError;
use crate::grid::{spherical_to_cartesian, AngularGrid};
use crate::triangle::{Scene, Triangle};
use config::constants::{LAST_ELEVATION_STEP_DEG, MAX_TRIANGLES};
use rand::Rng;

/// Samples `count` triangles on a shell of `radius`.
///
/// Per triangle, an azimuth index `a` and an elevation index `e` are drawn
/// uniformly and independently, then
///
/// - `v0` = point at (`a`, `e`)
/// - `v1` = point at (`a + 1 mod N`, `e`)
/// - `v2` = point at (`a`, `e + 1`); on the last channel the elevation is
///   extended by one degree instead of wrapping
///
/// If `(v1 - v0) × (v2 - v0)` points toward the origin, `v1` and `v2` are
/// swapped. Duplicates are kept.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use shell_mesh::{primitives::sample_triangles, AngularGrid};
///
/// let grid = AngularGrid::new(360, vec![0.1, 0.0, -0.1]).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let scene = sample_triangles(&grid, 10, 1.0, &mut rng).unwrap();
/// assert_eq!(scene.len(), 10);
/// assert!(scene.iter().all(|t| t.faces_outward()));
/// ```
pub fn sample_triangles<R: Rng + ?Sized>(
    grid: &AngularGrid,
    count: u32,
    radius: f64,
    rng: &mut R,
) -> Result<Scene, MeshError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::invalid(
            "radius",
            format!("must be positive: {radius}"),
        ));
    }
    if count as usize > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: count as usize,
            max: MAX_TRIANGLES,
        });
    }
    if grid.azimuth_count() == 1 {
        log::warn!("Single azimuth step: sampled triangles will be degenerate");
    }

    let mut scene = Scene::with_capacity(count as usize);
    for _ in 0..count {
        let az = rng.gen_range(0..grid.azimuth_count());
        let el = rng.gen_range(0..grid.elevation_count());
        scene.push(cell_triangle(grid, az, el, radius));
    }

    log::debug!(
        "Sampled {} triangles over {} x {} grid cells",
        scene.len(),
        grid.azimuth_count(),
        grid.elevation_count()
    );
    Ok(scene)
}

/// Outward-facing triangle anchored at grid cell (`az`, `el`).
pub fn cell_triangle(grid: &AngularGrid, az: usize, el: usize, radius: f64) -> Triangle {
    let azimuth = grid.azimuth(az);
    let elevation = grid.elevation(el);
    let next_azimuth = grid.azimuth((az + 1) % grid.azimuth_count());
    let next_elevation = match grid.elevations().get(el + 1) {
        Some(&e) => e,
        None => elevation + LAST_ELEVATION_STEP_DEG.to_radians(),
    };

    let triangle = Triangle::new(
        spherical_to_cartesian(azimuth, elevation, radius),
        spherical_to_cartesian(next_azimuth, elevation, radius),
        spherical_to_cartesian(azimuth, next_elevation, radius),
    );

    if triangle.faces_outward() {
        triangle
    } else {
        triangle.flipped()
    }
}
