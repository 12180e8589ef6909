//! # Scene IO
//!
//! File plumbing around the shell generators: configuration in, CSV out.
//!
//! ## Architecture
//!
//! ```text
//! config.toml → Settings → ShellParams / AngularGrid → shell-mesh → Scene
//!                                                                  ↓
//!                                         export (CSV bytes) → OutputSink
//! ```
//!
//! Generators never touch the filesystem; everything written goes through
//! an [`sink::OutputSink`].

pub mod error;
pub mod export;
pub mod import;
pub mod settings;
pub mod sink;

pub use error::{SceneIoError, SceneIoResult};
pub use export::{export_triangles, rays_to_csv, triangles_to_csv};
pub use import::{load_triangles, read_triangles};
pub use settings::{discover, AngleUnit, SceneKind, Settings};
pub use sink::{DirectorySink, MemorySink, OutputSink};
