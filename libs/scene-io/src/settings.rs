//! # Settings
//!
//! Loading of the shared `config.toml`:
//!
//! ```toml
//! [LIDAR_SENSOR]
//! azimuth_steps = 3600
//! elevation_angles = [0.186, 0.163, -0.533]
//! elevation_unit = "radians"   # optional, "radians" or "degrees"
//!
//! [SCENE_GENERATION]
//! target_vertices = 100000
//! dense_radius = 10.0
//! sparse_radius = 200.0
//! angular_margin = 0.02
//!
//! [RAY_TRACER]
//! ray_t_min = 0.001
//! ray_t_max = 100.0
//! ```
//!
//! Elevation angles leave this module in radians, whatever unit the file
//! uses. Unknown keys and sections are ignored so the same file can carry
//! settings for the ray tracer.

use crate::error::{read_error, SceneIoError, SceneIoResult};
use config::constants::{CONFIG_SEARCH_DEPTH, DEFAULT_CONFIG_FILE, DENSE_SCENE_FILE, SCENES_DIR, SPARSE_SCENE_FILE};
use serde::{Deserialize, Serialize};
use shell_mesh::primitives::ShellParams;
use shell_mesh::AngularGrid;
use std::fmt;
use std::path::{Path, PathBuf};

/// Unit of the `elevation_angles` list in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Converts `value`, expressed in this unit, to radians.
    #[inline]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }
}

/// `[LIDAR_SENSOR]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LidarSensor {
    /// Azimuth steps per revolution.
    pub azimuth_steps: u32,
    /// Elevation of each channel, in `elevation_unit`.
    pub elevation_angles: Vec<f64>,
    #[serde(default)]
    pub elevation_unit: AngleUnit,
}

impl LidarSensor {
    /// Channel elevations in radians.
    pub fn elevation_angles_rad(&self) -> Vec<f64> {
        self.elevation_angles
            .iter()
            .map(|&a| self.elevation_unit.to_radians(a))
            .collect()
    }

    /// Sampling grid of the sensor.
    pub fn angular_grid(&self) -> SceneIoResult<AngularGrid> {
        Ok(AngularGrid::new(self.azimuth_steps, self.elevation_angles_rad())?)
    }
}

/// `[SCENE_GENERATION]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGeneration {
    /// Vertex budget of the shell band.
    pub target_vertices: u32,
    pub dense_radius: f64,
    pub sparse_radius: f64,
    /// Radians added beyond the outermost channels.
    #[serde(default)]
    pub angular_margin: f64,
}

/// `[RAY_TRACER]`, echoed only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayTracer {
    pub ray_t_min: f64,
    pub ray_t_max: f64,
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "LIDAR_SENSOR")]
    pub lidar_sensor: LidarSensor,
    #[serde(rename = "SCENE_GENERATION", default)]
    pub scene_generation: Option<SceneGeneration>,
    #[serde(rename = "RAY_TRACER", default)]
    pub ray_tracer: Option<RayTracer>,
}

/// Radius preset selecting which shell is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Small radius: rays are expected to hit the shell.
    Dense,
    /// Large radius: rays may run out of travel distance first.
    Sparse,
}

impl SceneKind {
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Dense => "dense",
            SceneKind::Sparse => "sparse",
        }
    }

    /// Scene file relative to the output root.
    pub fn output_path(self) -> PathBuf {
        let file = match self {
            SceneKind::Dense => DENSE_SCENE_FILE,
            SceneKind::Sparse => SPARSE_SCENE_FILE,
        };
        Path::new(SCENES_DIR).join(file)
    }

    pub fn radius(self, generation: &SceneGeneration) -> f64 {
        match self {
            SceneKind::Dense => generation.dense_radius,
            SceneKind::Sparse => generation.sparse_radius,
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Settings {
    /// Parses and validates settings from TOML text. `origin` is only used
    /// in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> SceneIoResult<Self> {
        let settings: Settings = toml::from_str(text).map_err(|source| SceneIoError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load(path: &Path) -> SceneIoResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
        let settings = Self::from_toml_str(&text, path)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(settings)
    }

    /// Loads `explicit` when given, otherwise the first [`DEFAULT_CONFIG_FILE`]
    /// found by [`discover`] from the working directory.
    pub fn load_from(explicit: Option<&Path>) -> SceneIoResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let cwd = std::env::current_dir().map_err(|e| read_error(Path::new("."), e))?;
                Self::load(&discover(&cwd)?)
            }
        }
    }

    /// Checks value ranges of every present section.
    pub fn validate(&self) -> SceneIoResult<()> {
        let sensor = &self.lidar_sensor;
        if sensor.azimuth_steps == 0 {
            return Err(SceneIoError::invalid(
                "LIDAR_SENSOR.azimuth_steps",
                "must be at least 1",
            ));
        }
        if sensor.elevation_angles.is_empty() {
            return Err(SceneIoError::invalid(
                "LIDAR_SENSOR.elevation_angles",
                "must list at least one channel",
            ));
        }
        if let Some(bad) = sensor.elevation_angles.iter().find(|a| !a.is_finite()) {
            return Err(SceneIoError::invalid(
                "LIDAR_SENSOR.elevation_angles",
                format!("non-finite angle {bad}"),
            ));
        }

        if let Some(generation) = &self.scene_generation {
            if generation.target_vertices == 0 {
                return Err(SceneIoError::invalid(
                    "SCENE_GENERATION.target_vertices",
                    "must be at least 1",
                ));
            }
            for (field, radius) in [
                ("SCENE_GENERATION.dense_radius", generation.dense_radius),
                ("SCENE_GENERATION.sparse_radius", generation.sparse_radius),
            ] {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(SceneIoError::invalid(field, format!("must be positive: {radius}")));
                }
            }
            if !(generation.angular_margin.is_finite() && generation.angular_margin >= 0.0) {
                return Err(SceneIoError::invalid(
                    "SCENE_GENERATION.angular_margin",
                    format!("must be zero or positive: {}", generation.angular_margin),
                ));
            }
        }

        if let Some(tracer) = &self.ray_tracer {
            if tracer.ray_t_min >= tracer.ray_t_max {
                log::warn!(
                    "RAY_TRACER.ray_t_min ({}) is not below ray_t_max ({})",
                    tracer.ray_t_min,
                    tracer.ray_t_max
                );
            }
        }
        Ok(())
    }

    /// The `[SCENE_GENERATION]` section, required by the shell generator.
    pub fn scene_generation(&self) -> SceneIoResult<&SceneGeneration> {
        self.scene_generation
            .as_ref()
            .ok_or(SceneIoError::MissingSection("SCENE_GENERATION"))
    }

    /// Shell builder inputs for the given preset.
    pub fn shell_params(&self, kind: SceneKind) -> SceneIoResult<ShellParams> {
        let generation = self.scene_generation()?;
        Ok(ShellParams {
            azimuth_steps: self.lidar_sensor.azimuth_steps,
            elevation_angles: self.lidar_sensor.elevation_angles_rad(),
            target_vertices: generation.target_vertices,
            radius: kind.radius(generation),
            angular_margin: generation.angular_margin,
        })
    }

    /// Logs the loaded values at info level.
    pub fn log_summary(&self) {
        let sensor = &self.lidar_sensor;
        log::info!(
            "Sensor: {} azimuth steps, {} elevation channels ({:?} in file)",
            sensor.azimuth_steps,
            sensor.elevation_angles.len(),
            sensor.elevation_unit
        );
        if let Some(generation) = &self.scene_generation {
            log::info!(
                "Scene generation: target {} vertices, dense radius {}, sparse radius {}, margin {} rad",
                generation.target_vertices,
                generation.dense_radius,
                generation.sparse_radius,
                generation.angular_margin
            );
        }
        if let Some(tracer) = &self.ray_tracer {
            log::info!("Ray tracer: t in [{}, {}]", tracer.ray_t_min, tracer.ray_t_max);
        }
    }
}

/// Finds [`DEFAULT_CONFIG_FILE`] in `start` or up to [`CONFIG_SEARCH_DEPTH`]
/// of its parents, nearest first.
pub fn discover(start: &Path) -> SceneIoResult<PathBuf> {
    let mut tried = Vec::with_capacity(CONFIG_SEARCH_DEPTH + 1);
    for dir in start.ancestors().take(CONFIG_SEARCH_DEPTH + 1) {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            log::debug!("Found configuration at {}", candidate.display());
            return Ok(candidate);
        }
        tried.push(candidate);
    }
    Err(SceneIoError::ConfigNotFound { tried })
}
