use tmg_core::{Grid, MapError};
use tmg_generator::sources::find_sources;
use tmg_generator::start::find_start;
use tmg_generator::topology::generate_topology;

pub fn run(width: usize, height: usize, seed: Option<i64>) -> Result<(), String> {
    let options = super::options(width, height, seed);
    let topology = generate_topology(&options).map_err(|e| e.to_string())?;

    print!("{}", render_heights(&topology));

    let start = find_start(&options, &topology).map_err(|e| e.to_string())?;
    println!();
    println!("  Start: {start}");

    match find_sources(&options, &topology) {
        Ok(sources) => {
            println!("  {} water source cells:", sources.len());
            for source in &sources {
                println!("    {source}");
            }
        }
        Err(MapError::SourceNotFound) => println!("  No water sources; try another seed."),
        Err(e) => return Err(e.to_string()),
    }

    Ok(())
}

/// One base-32 digit per cell, one line per row.
fn render_heights(topology: &Grid<i64>) -> String {
    let mut out = String::with_capacity(topology.len() + topology.height());
    for (x, _, &h) in topology.iter() {
        out.push(char::from_digit(h as u32, 32).unwrap_or('?'));
        if x + 1 == topology.width() {
            out.push('\n');
        }
    }
    out
}
