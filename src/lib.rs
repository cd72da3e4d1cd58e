//! Cave Generator
//!
//! Procedural cave map generator based on a cellular automaton: random noise is smoothed over a
//! number of passes until it settles into contiguous, cave-like regions closed off by walls.
//!
//! # Features
//!
//! - Seed based generation.
//!     - All random elements of the generation follow the provided seed. This means that every map is 100% reproducible.
//!     - The source of randomness can also be injected directly through the [`RandomSource`](cave_generator::random_source::RandomSource) trait.
//! - Noise seeding.
//!     - Each cell starts as a wall or as open space based on a random draw and the `noise_density` parameter.
//!       Higher densities produce more walls.
//! - Smoothing.
//!     - Every pass turns a cell into a wall when more than 4 of its 8 neighbours are walls, and opens it otherwise.
//!     - Cells on the border of the map always become walls, so after at least one pass the map is closed.
//!     - Each pass reads from the previous map and writes into a new one; the cells of a pass are computed in parallel.
//! - Text rendering.
//!     - Maps can be printed with the [`CaveVisualizer`](cave_visualizer::CaveVisualizer), or through their `Display` implementation.
//!
//! # Examples
//!
//! ```
//! // Import the parameters and the generation function
//! use grotto::cave_generator::{generate_seeded, params::GenerationConfig};
//!
//! // Import the visualizer if you want to view a text render of your map
//! use grotto::cave_visualizer::CaveVisualizer;
//!
//! # fn main() {
//! // Define the generation parameters using the dedicated struct
//! let config = GenerationConfig {
//!     width: 80,
//!     height: 40,
//!     ..Default::default()
//! };
//!
//! let map = generate_seeded(&config).unwrap();
//!
//! // Use the 'render' method to get a text render of the generated map
//! let text = CaveVisualizer::render(&map);
//! assert_eq!(text.lines().count(), 40);
//! # }
//! ```

/// Cave Generator
pub mod cave_generator;

/// A simple text renderer for the generated maps
pub mod cave_visualizer;
