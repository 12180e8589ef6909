//! Generation runs behind the two binaries.
//!
//! Each run builds its scene and encodes every CSV file in memory before the
//! first [`OutputSink::write`], so generation and encoding failures leave
//! nothing on disk. A `gen-scene` run with `--rays` writes two files; if the
//! second write fails the first one stays behind.

use crate::args::{GenSceneArgs, GenTrianglesArgs};
use anyhow::{Context, Result};
use config::constants::{reference_elevation_angles, REFERENCE_AZIMUTH_STEPS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scene_io::{export_triangles, rays_to_csv, triangles_to_csv, OutputSink, SceneKind, Settings};
use shell_mesh::primitives::{build_shell_band, sample_triangles, ShellLayout};
use shell_mesh::AngularGrid;
use std::path::{Path, PathBuf};

/// Outcome of a `gen-scene` run.
#[derive(Debug, Clone)]
pub struct ShellRun {
    pub kind: SceneKind,
    pub layout: ShellLayout,
    pub output: PathBuf,
    pub triangles: usize,
    pub rays: Option<PathBuf>,
}

/// Outcome of a `gen-triangles` run.
#[derive(Debug, Clone)]
pub struct SampleRun {
    pub seed: u64,
    pub output: PathBuf,
    pub triangles: usize,
}

/// Initializes `env_logger` at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

/// Loads the configuration named by `args` and generates the shell scene.
pub fn gen_scene<S: OutputSink + ?Sized>(args: &GenSceneArgs, sink: &mut S) -> Result<ShellRun> {
    let settings = Settings::load_from(args.config.as_deref()).context("failed to load configuration")?;
    shell_scene(&settings, args.scene.into(), args.rays.as_deref(), sink)
}

/// Builds the shell band for `kind` and exports it to the preset path.
pub fn shell_scene<S: OutputSink + ?Sized>(
    settings: &Settings,
    kind: SceneKind,
    rays: Option<&Path>,
    sink: &mut S,
) -> Result<ShellRun> {
    settings.log_summary();
    log::info!("Generating {} scene", kind);

    let params = settings
        .shell_params(kind)
        .with_context(|| format!("configuration cannot produce a {kind} scene"))?;
    let band = build_shell_band(&params).context("failed to build shell band")?;
    let layout = band.layout;

    log::info!(
        "Grid: {} azimuth x {} elevation points = {} vertices (target {})",
        layout.azimuth_points,
        layout.elevation_points,
        layout.vertex_count(),
        layout.target_vertices
    );
    log::info!(
        "Elevation span: [{:.6}, {:.6}] rad, radius {}",
        layout.min_elevation,
        layout.max_elevation,
        params.radius
    );

    let scene = band.to_scene();
    let output = kind.output_path();
    let scene_csv = triangles_to_csv(scene.triangles()).context("failed to encode scene")?;
    let rays_csv = match rays {
        Some(path) => {
            let directions = settings.lidar_sensor.angular_grid()?.ray_directions();
            let bytes = rays_to_csv(&directions).context("failed to encode ray directions")?;
            Some((path, directions.len(), bytes))
        }
        None => None,
    };

    sink.write(&output, &scene_csv)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!(
        "Wrote {} triangles ({} bytes) to {}",
        scene.len(),
        scene_csv.len(),
        output.display()
    );

    if let Some((path, count, bytes)) = rays_csv {
        sink.write(path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Wrote {} ray directions to {}", count, path.display());
    }

    Ok(ShellRun {
        kind,
        layout,
        output,
        triangles: scene.len(),
        rays: rays.map(Path::to_path_buf),
    })
}

/// Samples random outward triangles as described by `args`.
pub fn gen_triangles<S: OutputSink + ?Sized>(args: &GenTrianglesArgs, sink: &mut S) -> Result<SampleRun> {
    let grid = match &args.config {
        Some(path) => {
            let settings = Settings::load(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            settings.lidar_sensor.angular_grid()?
        }
        None => reference_grid()?,
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    sampled_scene(&grid, args.count, args.radius, seed, &args.out, sink)
}

/// The built-in 32-channel sensor profile.
pub fn reference_grid() -> Result<AngularGrid> {
    Ok(AngularGrid::new(
        REFERENCE_AZIMUTH_STEPS,
        reference_elevation_angles(),
    )?)
}

/// Draws `count` triangles on `grid` with a ChaCha8 stream seeded from `seed`.
pub fn sampled_scene<S: OutputSink + ?Sized>(
    grid: &AngularGrid,
    count: u32,
    radius: f64,
    seed: u64,
    output: &Path,
    sink: &mut S,
) -> Result<SampleRun> {
    log::info!(
        "Sampling {} triangles on {} x {} grid, radius {}, seed {}",
        count,
        grid.azimuth_count(),
        grid.elevation_count(),
        radius,
        seed
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let scene = sample_triangles(grid, count, radius, &mut rng).context("failed to sample triangles")?;
    export_triangles(sink, output, scene.triangles())
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("Wrote {} triangles to {}", scene.len(), output.display());

    Ok(SampleRun {
        seed,
        output: output.to_path_buf(),
        triangles: scene.len(),
    })
}
