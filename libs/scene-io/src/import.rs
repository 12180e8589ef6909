//! # CSV Import
//!
//! Reads triangle CSVs produced by [`crate::export`]. Parsing stops at the
//! first bad row; errors carry the 1-based data row number.

use crate::error::{read_error, SceneIoError, SceneIoResult};
use config::constants::TRIANGLE_COLUMNS;
use shell_mesh::{Scene, Triangle};
use std::fs::File;
use std::io;
use std::path::Path;

/// Parses a triangle CSV (header row plus nine numbers per row).
pub fn read_triangles<R: io::Read>(reader: R) -> SceneIoResult<Scene> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header = csv.headers()?;
    if header.iter().ne(TRIANGLE_COLUMNS) {
        return Err(SceneIoError::BadHeader {
            found: header.iter().collect::<Vec<_>>().join(","),
            expected: TRIANGLE_COLUMNS.join(","),
        });
    }

    let mut scene = Scene::new();
    for (index, record) in csv.records().enumerate() {
        let row = index as u64 + 1;
        let record = record.map_err(|e| SceneIoError::row(row, e.to_string()))?;
        scene.push(parse_row(&record, row)?);
    }
    Ok(scene)
}

fn parse_row(record: &csv::StringRecord, row: u64) -> SceneIoResult<Triangle> {
    if record.len() != TRIANGLE_COLUMNS.len() {
        return Err(SceneIoError::row(
            row,
            format!(
                "expected {} fields, but found {}",
                TRIANGLE_COLUMNS.len(),
                record.len()
            ),
        ));
    }

    let mut coords = [0.0; 9];
    for (slot, (field, column)) in coords.iter_mut().zip(record.iter().zip(TRIANGLE_COLUMNS)) {
        *slot = field.parse::<f64>().map_err(|e| {
            SceneIoError::row(row, format!("field {column}: cannot convert `{field}` ({e})"))
        })?;
    }
    Ok(Triangle::from_array(coords))
}

/// Reads a triangle CSV file.
pub fn load_triangles(path: &Path) -> SceneIoResult<Scene> {
    if !path.is_file() {
        return Err(read_error(
            path,
            io::Error::new(io::ErrorKind::NotFound, "not a regular file"),
        ));
    }
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    let scene = read_triangles(io::BufReader::new(file))?;
    log::debug!("Read {} triangles from {}", scene.len(), path.display());
    Ok(scene)
}
