//! # Angular Grid
//!
//! The sampling pattern of a rotating LiDAR: evenly spaced azimuth steps over
//! one revolution, crossed with an explicit list of elevation channels.
//! All angles are radians.

use crate::error::MeshError;
use glam::DVec3;
use std::f64::consts::TAU;

/// Maps spherical coordinates onto a Cartesian point.
///
/// `x = r·cos(el)·cos(az)`, `y = r·cos(el)·sin(az)`, `z = r·sin(el)`.
///
/// # Example
///
/// ```rust
/// use shell_mesh::grid::spherical_to_cartesian;
///
/// let p = spherical_to_cartesian(0.0, 0.0, 2.0);
/// assert_eq!(p, glam::DVec3::new(2.0, 0.0, 0.0));
/// ```
#[inline]
pub fn spherical_to_cartesian(azimuth: f64, elevation: f64, radius: f64) -> DVec3 {
    let (sin_el, cos_el) = elevation.sin_cos();
    let (sin_az, cos_az) = azimuth.sin_cos();
    DVec3::new(
        radius * cos_el * cos_az,
        radius * cos_el * sin_az,
        radius * sin_el,
    )
}

/// Azimuth `i` of `steps` evenly spaced values over `[0, 2π)`.
#[inline]
pub fn azimuth_at(i: u32, steps: u32) -> f64 {
    TAU * f64::from(i) / f64::from(steps)
}

/// Azimuth steps × elevation channels of a sensor.
///
/// # Example
///
/// ```rust
/// use shell_mesh::AngularGrid;
///
/// let grid = AngularGrid::new(4, vec![0.5, -0.5]).unwrap();
/// assert_eq!(grid.azimuth_count(), 4);
/// assert_eq!(grid.elevation_count(), 2);
/// assert_eq!(grid.ray_directions().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AngularGrid {
    azimuths: Vec<f64>,
    elevations: Vec<f64>,
}

impl AngularGrid {
    /// Builds a grid from the number of azimuth steps per revolution and the
    /// elevation channels (radians, in channel order).
    pub fn new(azimuth_steps: u32, elevations: Vec<f64>) -> Result<Self, MeshError> {
        if azimuth_steps == 0 {
            return Err(MeshError::invalid("azimuth_steps", "must be at least 1"));
        }
        if elevations.is_empty() {
            return Err(MeshError::EmptyElevations);
        }
        if let Some(bad) = elevations.iter().find(|e| !e.is_finite()) {
            return Err(MeshError::invalid(
                "elevation_angles",
                format!("contains a non-finite angle: {bad}"),
            ));
        }

        let azimuths = (0..azimuth_steps)
            .map(|i| azimuth_at(i, azimuth_steps))
            .collect();

        Ok(Self {
            azimuths,
            elevations,
        })
    }

    /// Number of azimuth steps per revolution.
    #[inline]
    pub fn azimuth_count(&self) -> usize {
        self.azimuths.len()
    }

    /// Number of elevation channels.
    #[inline]
    pub fn elevation_count(&self) -> usize {
        self.elevations.len()
    }

    #[inline]
    pub fn azimuths(&self) -> &[f64] {
        &self.azimuths
    }

    #[inline]
    pub fn elevations(&self) -> &[f64] {
        &self.elevations
    }

    #[inline]
    pub fn azimuth(&self, index: usize) -> f64 {
        self.azimuths[index]
    }

    #[inline]
    pub fn elevation(&self, index: usize) -> f64 {
        self.elevations[index]
    }

    /// Lowest and highest elevation channel.
    pub fn elevation_bounds(&self) -> (f64, f64) {
        self.elevations
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &e| {
                (lo.min(e), hi.max(e))
            })
    }

    /// Point on a sphere of `radius` at grid cell (`azimuth_index`, `elevation_index`).
    #[inline]
    pub fn point(&self, azimuth_index: usize, elevation_index: usize, radius: f64) -> DVec3 {
        spherical_to_cartesian(
            self.azimuths[azimuth_index],
            self.elevations[elevation_index],
            radius,
        )
    }

    /// Unit ray directions of one full revolution.
    ///
    /// Ordered azimuth-major: every elevation channel of azimuth 0, then
    /// every channel of azimuth 1, and so on.
    pub fn ray_directions(&self) -> Vec<DVec3> {
        let mut directions = Vec::with_capacity(self.azimuths.len() * self.elevations.len());
        for &azimuth in &self.azimuths {
            for &elevation in &self.elevations {
                directions.push(spherical_to_cartesian(azimuth, elevation, 1.0));
            }
        }
        directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_spherical_axes() {
        let x = spherical_to_cartesian(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(x.x, 1.0, epsilon = 1e-12);

        let y = spherical_to_cartesian(FRAC_PI_2, 0.0, 1.0);
        assert_abs_diff_eq!(y.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y.x, 0.0, epsilon = 1e-12);

        let z = spherical_to_cartesian(1.234, FRAC_PI_2, 3.0);
        assert_abs_diff_eq!(z.z, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z.truncate().length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spherical_length_is_radius() {
        let p = spherical_to_cartesian(2.1, -0.4, 7.5);
        assert_abs_diff_eq!(p.length(), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_azimuths_cover_one_turn() {
        let grid = AngularGrid::new(4, vec![0.0]).unwrap();
        assert_eq!(grid.azimuths(), &[0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]);
        assert!(grid.azimuths().iter().all(|&a| (0.0..TAU).contains(&a)));
    }

    #[test]
    fn test_grid_rejects_empty_elevations() {
        assert_eq!(AngularGrid::new(8, vec![]), Err(MeshError::EmptyElevations));
    }

    #[test]
    fn test_grid_rejects_zero_azimuth_steps() {
        assert!(matches!(
            AngularGrid::new(0, vec![0.1]),
            Err(MeshError::InvalidParameter { name: "azimuth_steps", .. })
        ));
    }

    #[test]
    fn test_grid_rejects_nan_elevation() {
        assert!(AngularGrid::new(8, vec![0.1, f64::NAN]).is_err());
    }

    #[test]
    fn test_elevation_bounds_unordered() {
        let grid = AngularGrid::new(2, vec![0.1, -0.3, 0.25, 0.0]).unwrap();
        assert_eq!(grid.elevation_bounds(), (-0.3, 0.25));
    }

    #[test]
    fn test_ray_directions_azimuth_major() {
        let grid = AngularGrid::new(3, vec![0.2, -0.2]).unwrap();
        let rays = grid.ray_directions();
        assert_eq!(rays.len(), 6);
        // Second ray: same azimuth as the first, next elevation
        assert_abs_diff_eq!(rays[1].z, (-0.2f64).sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(rays[1].y, 0.0, epsilon = 1e-12);
        for ray in rays {
            assert_abs_diff_eq!(ray.length(), 1.0, epsilon = 1e-12);
        }
    }
}
