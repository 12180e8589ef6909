use anyhow::Result;
use clap::Parser;
use scene_cli::{gen_triangles, init_logging, GenTrianglesArgs};
use scene_io::DirectorySink;

fn main() -> Result<()> {
    let args = GenTrianglesArgs::parse();
    init_logging();

    let mut sink = DirectorySink::new(".");
    let run = gen_triangles(&args, &mut sink)?;
    log::info!("Done (seed {})", run.seed);
    Ok(())
}
