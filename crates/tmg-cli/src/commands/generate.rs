use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use tmg_core::archive::write_archive;
use tmg_generator::Generator;
use tracing::warn;

pub fn run(output: &Path, width: usize, height: usize, seed: Option<i64>) -> Result<(), String> {
    let options = super::options(width, height, seed);

    // Generate before touching the filesystem so a failed run leaves no file.
    let document = Generator::new()
        .generate_map(&options)
        .map_err(|e| e.to_string())?;

    let file = File::create(output)
        .map_err(|e| format!("cannot create {}: {e}", output.display()))?;

    let written = write_archive(BufWriter::new(file), &document)
        .map_err(|e| e.to_string())
        .and_then(|sink| sink.into_inner().map(drop).map_err(|e| e.to_string()));

    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(output) {
            warn!(path = %output.display(), error = %rm, "could not remove partial archive");
        }
        return Err(format!("cannot write {}: {e}", output.display()));
    }

    println!(
        "  Wrote {}x{} map with {} entities to {}",
        options.width,
        options.height,
        document.entities.len(),
        output.display()
    );
    Ok(())
}
