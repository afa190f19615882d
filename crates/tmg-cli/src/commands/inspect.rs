use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use serde_json::Value;
use tmg_core::Template;
use tmg_core::archive::read_archive;

pub fn run(path: &Path) -> Result<(), String> {
    let file = File::open(path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
    let contents = read_archive(BufReader::new(file)).map_err(|e| e.to_string())?;
    let world = contents.world_json().map_err(|e| e.to_string())?;

    let size = &world["Singletons"]["MapSize"]["Size"];
    println!("  Game version: {}", text(&world["GameVersion"]));
    println!("  Generated:    {}", text(&world["Timestamp"]));
    println!("  Size:         {} x {}", size["X"], size["Y"]);
    println!();

    let entities = world["Entities"].as_array().map(Vec::as_slice).unwrap_or_default();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for entity in entities {
        *counts.entry(text(&entity["Template"])).or_default() += 1;
    }

    if counts.is_empty() {
        println!("  No entities.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Template", "Count"]);
    for (template, count) in &counts {
        let label = if Template::parse(template).is_some() {
            template.clone()
        } else {
            format!("{template} (unknown)")
        };
        table.add_row(vec![label, count.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} entities", entities.len());
    Ok(())
}

fn text(value: &Value) -> String {
    value.as_str().map_or_else(|| value.to_string(), str::to_owned)
}
