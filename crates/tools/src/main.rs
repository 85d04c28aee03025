use anyhow::{Context, Result};
use clap::Parser;
use delve_core::{DungeonConfig, DungeonRng, GlyphBuffer, generate_dungeon};
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the dungeon RNG
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Path to a JSON generation config; built-in defaults otherwise
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            serde_json::from_str(&data).with_context(|| "Failed to deserialize config JSON")?
        }
        None => DungeonConfig::default(),
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid generation config: {e}"))?;

    let mut rng = DungeonRng::seed_from_u64(args.seed);
    let mut map = generate_dungeon(&config, &mut rng);
    map.reveal_all();

    let mut buffer = GlyphBuffer::new(map.width, map.height);
    map.render(&mut buffer);
    for row in buffer.cells.chunks(buffer.width) {
        let line: String = row.iter().map(|glyph| glyph.ch).collect();
        println!("{line}");
    }

    println!("Seed: {}", args.seed);
    println!("Actors: {}", map.actors.len());
    println!("Items: {}", map.items.len());
    println!(
        "Downstairs: ({}, {})",
        map.downstairs_location.x, map.downstairs_location.y
    );

    Ok(())
}
