pub mod error;
pub mod grid;
pub mod isize_index_matrix;
pub mod params;
pub mod random_source;
mod performance_profiler;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use error::InvalidConfig;
use grid::{Cell, Grid};
use params::{slider_to_density, GenerationConfig};
use performance_profiler::PerformanceProfiler;
use random_source::RandomSource;

/// A cell with more wall neighbours than this becomes a wall.
pub const WALL_NEIGHBOR_THRESHOLD: usize = 4;

/// Generates a cave map from `config`, drawing the initial noise from `rng`.
///
/// The configuration is validated before anything else happens: on error nothing is drawn from
/// `rng` and no grid is produced. Otherwise the grid is seeded with one draw per cell (column by
/// column, `x` outer and `y` inner) and then smoothed `config.iterations` times.
///
/// Border cells are guaranteed to be walls only when `config.iterations >= 1`; with zero
/// iterations the seeded noise is returned as is.
///
/// # Examples
/// ```
/// # use grotto::cave_generator::{generate, grid::Cell, params::GenerationConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let config = GenerationConfig { width: 40, height: 20, ..Default::default() };
/// let grid = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();
/// assert_eq!(grid.get(0, 0), Some(Cell::Wall));
/// ```
pub fn generate<R: RandomSource + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<Grid, InvalidConfig> {
    let config = config.validate().map_err(|e| {
        log::warn!("refusing to generate: {e}");
        e
    })?;

    let mut profiler = PerformanceProfiler::new(Instant::now());

    let mut grid = seed_noise(config.width, config.height, config.noise_density, rng);
    profiler.log_elapsed_time_in_ms("noise seeding time");

    for pass in 0..config.iterations {
        grid = smooth(&grid);
        log::trace!("smoothing pass {}: {} walls out of {} cells", pass + 1, grid.wall_count(), config.width * config.height);
    }
    profiler.log_elapsed_time_in_ms("smoothing time");

    profiler.log_total_elapsed_time_in_ms("Total generation time");
    Ok(grid)
}

/// Same as [`generate`], with a `StdRng` seeded from `config.seed`.
pub fn generate_seeded(config: &GenerationConfig) -> Result<Grid, InvalidConfig> {
    generate(config, &mut StdRng::seed_from_u64(config.seed))
}

/// Fills a new grid with noise: a cell is open when its draw is above `noise_density`.
///
/// Draws happen in column-major order, one per cell, so the same source sequence always lays out
/// the same grid.
pub fn seed_noise<R: RandomSource + ?Sized>(width: usize, height: usize, noise_density: u32, rng: &mut R) -> Grid {
    let mut cells = Vec::with_capacity(width * height);
    for _x in 0..width {
        for _y in 0..height {
            let cell = if rng.next_percent() > noise_density { Cell::Open } else { Cell::Wall };
            cells.push(cell);
        }
    }
    Grid::from_columns(width, height, cells)
}

/// Runs one smoothing pass and returns the resulting grid.
///
/// Every cell of the result is computed from `grid` alone: it is a wall when it lies on the border
/// or has more than [`WALL_NEIGHBOR_THRESHOLD`] wall neighbours, open otherwise. `grid` is never
/// written to, so cells later in the scan still see the old state of their neighbours. Columns are
/// computed in parallel.
pub fn smooth(grid: &Grid) -> Grid {
    let (width, height) = (grid.width(), grid.height());
    let mut next = vec![Cell::Open; width * height];

    if height > 0 {
        next.par_chunks_mut(height).enumerate().for_each(|(x, column)| {
            for (y, cell) in column.iter_mut().enumerate() {
                *cell = next_state(grid, x, y);
            }
        });
    }

    Grid::from_columns(width, height, next)
}

fn next_state(grid: &Grid, x: usize, y: usize) -> Cell {
    if grid.is_border(x, y) || grid.count_wall_neighbors(x, y) > WALL_NEIGHBOR_THRESHOLD {
        Cell::Wall
    } else {
        Cell::Open
    }
}

/// Keeps a configuration together with the last map generated from it.
///
/// Parameters can be changed at any time (for example from UI sliders); the held map only changes
/// when [`regenerate`](CaveGenerator::regenerate) succeeds, so a consumer never sees a half built
/// or invalid map.
///
/// # Examples
/// ```
/// # use grotto::cave_generator::{CaveGenerator, params::GenerationConfig};
/// let mut generator = CaveGenerator::new(GenerationConfig { seed: 3, ..Default::default() });
/// generator.regenerate().unwrap();
///
/// generator.set_noise_density(250.0);
/// assert!(generator.regenerate().is_err());
/// assert!(generator.grid().is_some()); // the previous map is still there
/// ```
pub struct CaveGenerator {
    config: GenerationConfig,
    grid: Option<Grid>,
}

impl CaveGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config, grid: None }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The last successfully generated map, if any.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Sets the noise density from a slider value, see
    /// [`GenerationConfig::with_noise_density_from_slider`].
    pub fn set_noise_density(&mut self, density: f32) {
        self.config.noise_density = slider_to_density(density);
    }

    pub fn set_iterations(&mut self, iterations: i32) {
        self.config.iterations = iterations;
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
    }

    /// Generates a new map from the current parameters and keeps it.
    ///
    /// On error the previously held map (if any) is left untouched.
    pub fn regenerate(&mut self) -> Result<&Grid, InvalidConfig> {
        let grid = generate_seeded(&self.config)?;
        Ok(self.grid.insert(grid))
    }
}
