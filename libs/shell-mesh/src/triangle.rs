//! # Triangles and Scenes
//!
//! Free-standing triangles (vertex triples, not indices) as they are handed
//! to the exporter, and the scene that collects them.

use glam::DVec3;

/// An ordered vertex triple. The order encodes the winding, and with it the
/// direction of [`Triangle::normal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: DVec3,
    pub v1: DVec3,
    pub v2: DVec3,
}

impl Triangle {
    #[inline]
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Unnormalized face normal `(v1 - v0) × (v2 - v0)`.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        (self.v1 - self.v0).cross(self.v2 - self.v0)
    }

    #[inline]
    pub fn centroid(&self) -> DVec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// True when the normal does not point toward the origin.
    ///
    /// Measured against `v0`, the sampler's anchor vertex.
    #[inline]
    pub fn faces_outward(&self) -> bool {
        self.normal().dot(self.v0) >= 0.0
    }

    /// True when the normal does not point away from the origin.
    ///
    /// Measured against the centroid, so it holds for triangles spanning a
    /// whole quad of the shell band.
    #[inline]
    pub fn faces_inward(&self) -> bool {
        self.normal().dot(-self.centroid()) >= 0.0
    }

    /// Returns the triangle with the opposite winding (v1 and v2 swapped).
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            v0: self.v0,
            v1: self.v2,
            v2: self.v1,
        }
    }

    /// Coordinates in export column order `x0,y0,z0,x1,y1,z1,x2,y2,z2`.
    pub fn to_array(&self) -> [f64; 9] {
        [
            self.v0.x, self.v0.y, self.v0.z, self.v1.x, self.v1.y, self.v1.z, self.v2.x,
            self.v2.y, self.v2.z,
        ]
    }

    /// Inverse of [`Triangle::to_array`].
    pub fn from_array(c: [f64; 9]) -> Self {
        Self {
            v0: DVec3::new(c[0], c[1], c[2]),
            v1: DVec3::new(c[3], c[4], c[5]),
            v2: DVec3::new(c[6], c[7], c[8]),
        }
    }
}

/// All triangles produced by one generator run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    triangles: Vec<Triangle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }
}

impl FromIterator<Triangle> for Scene {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
