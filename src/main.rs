use std::process::ExitCode;

use clap::Parser;

use grotto::cave_generator::generate_seeded;
use grotto::cave_generator::params::GenerationConfig;
use grotto::cave_visualizer::{CaveVisualizer, OPEN_GLYPH, WALL_GLYPH};

/// Generates a cave map and prints it to stdout.
#[derive(Parser, Debug)]
#[command(name = "grotto", version, about)]
struct Args {
    /// Number of columns.
    #[arg(long, default_value_t = 160, allow_negative_numbers = true)]
    width: i32,

    /// Number of rows.
    #[arg(long, default_value_t = 90, allow_negative_numbers = true)]
    height: i32,

    /// Initial wall density in 0..=100, rounded to the nearest integer.
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    noise_density: f32,

    /// Number of smoothing passes.
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    iterations: i32,

    /// Seed for the noise; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = OPEN_GLYPH)]
    open_glyph: char,

    #[arg(long, default_value_t = WALL_GLYPH)]
    wall_glyph: char,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = GenerationConfig {
        width: args.width,
        height: args.height,
        iterations: args.iterations,
        seed: args.seed.unwrap_or_else(rand::random),
        ..Default::default()
    }
    .with_noise_density_from_slider(args.noise_density);

    match generate_seeded(&config) {
        Ok(map) => {
            print!("{}", CaveVisualizer::render_with(&map, args.open_glyph, args.wall_glyph));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
