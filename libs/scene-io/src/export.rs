//! # CSV Export
//!
//! One row per triangle, `x0,y0,z0,x1,y1,z1,x2,y2,z2`, after a header row.
//! Floats are written in their shortest round-trip form, so reading a file
//! back yields the exact in-memory values.

use crate::error::SceneIoResult;
use crate::sink::OutputSink;
use config::constants::{RAY_COLUMNS, TRIANGLE_COLUMNS};
use glam::DVec3;
use shell_mesh::Triangle;
use std::io;
use std::path::Path;

fn csv_writer<W: io::Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer)
}

/// Writes `triangles` as CSV to `writer`.
pub fn write_triangles<'a, W, I>(writer: W, triangles: I) -> SceneIoResult<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a Triangle>,
{
    let mut csv = csv_writer(writer);
    csv.write_record(TRIANGLE_COLUMNS)?;
    for triangle in triangles {
        csv.serialize(triangle.to_array())?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Encodes `triangles` as a complete CSV document.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use scene_io::export::triangles_to_csv;
/// use shell_mesh::Triangle;
///
/// let tri = Triangle::new(DVec3::X, DVec3::Y, DVec3::Z);
/// let bytes = triangles_to_csv(&[tri]).unwrap();
/// assert_eq!(
///     String::from_utf8(bytes).unwrap(),
///     "x0,y0,z0,x1,y1,z1,x2,y2,z2\n1.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,1.0\n"
/// );
/// ```
pub fn triangles_to_csv<'a, I>(triangles: I) -> SceneIoResult<Vec<u8>>
where
    I: IntoIterator<Item = &'a Triangle>,
{
    let mut buffer = Vec::new();
    write_triangles(&mut buffer, triangles)?;
    Ok(buffer)
}

/// Writes unit ray directions as CSV `dx,dy,dz`.
pub fn write_ray_directions<W: io::Write>(writer: W, directions: &[DVec3]) -> SceneIoResult<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(RAY_COLUMNS)?;
    for d in directions {
        csv.serialize((d.x, d.y, d.z))?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Encodes ray directions as a complete CSV document.
pub fn rays_to_csv(directions: &[DVec3]) -> SceneIoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_ray_directions(&mut buffer, directions)?;
    Ok(buffer)
}

/// Encodes `triangles` and hands the finished file to `sink`.
///
/// Encoding completes before the sink is called, so a failure leaves no
/// partial file behind. Returns the number of bytes written.
pub fn export_triangles<'a, S, I>(sink: &mut S, path: &Path, triangles: I) -> SceneIoResult<usize>
where
    S: OutputSink + ?Sized,
    I: IntoIterator<Item = &'a Triangle>,
{
    let bytes = triangles_to_csv(triangles)?;
    sink.write(path, &bytes)?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_header_only_for_empty_scene() {
        let bytes = triangles_to_csv(&[]).unwrap();
        assert_eq!(bytes, b"x0,y0,z0,x1,y1,z1,x2,y2,z2\n");
    }

    #[test]
    fn test_one_row_per_triangle() {
        let tri = Triangle::new(DVec3::new(0.5, -1.25, 3.0), DVec3::X, DVec3::Y);
        let text = String::from_utf8(triangles_to_csv(&[tri, tri.flipped()]).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0.5,-1.25,3.0,1.0,0.0,0.0,0.0,1.0,0.0");
        assert_eq!(lines[2], "0.5,-1.25,3.0,0.0,1.0,0.0,1.0,0.0,0.0");
        assert!(lines[1..].iter().all(|l| l.split(',').count() == 9));
    }

    #[test]
    fn test_rays_csv() {
        let text = String::from_utf8(rays_to_csv(&[DVec3::Z]).unwrap()).unwrap();
        assert_eq!(text, "dx,dy,dz\n0.0,0.0,1.0\n");
    }

    #[test]
    fn test_export_goes_to_sink() {
        let mut sink = MemorySink::new();
        let tri = Triangle::new(DVec3::X, DVec3::Y, DVec3::Z);
        let path = Path::new("scenes/dense/scene.csv");
        let written = export_triangles(&mut sink, path, &[tri]).unwrap();
        assert_eq!(sink.get(path).map(<[u8]>::len), Some(written));
    }
}
