//! Command-line arguments of both binaries.

use clap::{Parser, ValueEnum};
use config::constants::{DEFAULT_SAMPLER_OUTPUT, DEFAULT_SAMPLER_RADIUS, DEFAULT_SAMPLER_TRIANGLES};
use scene_io::SceneKind;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliSceneKind {
    /// Dense radius preset
    Dense,
    /// Sparse radius preset
    Sparse,
}

impl From<CliSceneKind> for SceneKind {
    fn from(value: CliSceneKind) -> Self {
        match value {
            CliSceneKind::Dense => SceneKind::Dense,
            CliSceneKind::Sparse => SceneKind::Sparse,
        }
    }
}

/// Generate a spherical shell scene for LiDAR ray-tracing benchmarks
#[derive(Parser, Debug)]
#[command(name = "gen-scene", version, about)]
pub struct GenSceneArgs {
    /// Scene preset selecting radius and output file
    #[arg(value_enum, ignore_case = true)]
    pub scene: CliSceneKind,

    /// Configuration file (default: config.toml in the working directory or up to two levels above)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root directory for the scenes/ tree
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Also write the reference ray directions to this CSV (relative to --out-dir)
    #[arg(long, value_name = "FILE")]
    pub rays: Option<PathBuf>,
}

/// Scatter random outward-facing triangles over a LiDAR sampling grid
#[derive(Parser, Debug)]
#[command(name = "gen-triangles", version, about)]
pub struct GenTrianglesArgs {
    /// Number of triangles to emit
    #[arg(long, default_value_t = DEFAULT_SAMPLER_TRIANGLES)]
    pub count: u32,

    /// Shell radius
    #[arg(long, default_value_t = DEFAULT_SAMPLER_RADIUS)]
    pub radius: f64,

    /// Random seed (drawn at random and logged when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Take the sensor grid from this configuration file instead of the
    /// built-in 32-channel reference profile
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output CSV
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SAMPLER_OUTPUT)]
    pub out: PathBuf,
}
