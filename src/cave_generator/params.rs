use super::error::InvalidConfig;

/// Contains parameters passed to [`generate`](super::generate) or to a
/// [`CaveGenerator`](super::CaveGenerator) to tweak its behaviour
///
/// For most use cases `GenerationConfig::default()` should be ok, and it is recommended when
/// setting parameters to start from a default instance.
///
/// The fields are signed on purpose: they usually come straight from user input (sliders,
/// command line flags), and nonsense values are rejected with an [`InvalidConfig`] by the
/// generator instead of being silently clamped.
///
/// # Examples
/// Users can simply use the default parameters:
/// ```
/// # use grotto::cave_generator::{generate_seeded, params::GenerationConfig};
/// let grid = generate_seeded(&GenerationConfig::default()).unwrap();
/// assert_eq!((grid.width(), grid.height()), (160, 90));
/// ```
///
/// Or they can change them to their liking:
/// ```
/// # use grotto::cave_generator::{generate_seeded, params::GenerationConfig};
/// let config = GenerationConfig {
///     seed: 15, // fixed seed
///     width: 64, // smaller map
///     height: 32,
///     iterations: 8, // smoother caves
///     ..Default::default() // the rest of the parameters keep their default value
/// };
/// let grid = generate_seeded(&config).unwrap();
/// assert_eq!(grid.width(), 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// number of columns of the map, must be positive
    pub width: i32,

    /// number of rows of the map, must be positive
    pub height: i32,

    /// percentage in `0..=100` controlling the initial noise: a cell starts as a wall when its
    /// random draw in `0..100` is not above this value, so higher values mean more walls.
    pub noise_density: i32,

    /// number of smoothing passes. With `0` the raw noise is returned, borders included.
    pub iterations: i32,

    /// Seed used by [`generate_seeded`](super::generate_seeded) and by
    /// [`CaveGenerator`](super::CaveGenerator).
    pub seed: u64,
}

impl Default for GenerationConfig {
    /// The default values are the following:
    /// ```
    /// # use grotto::cave_generator::params::GenerationConfig;
    /// # GenerationConfig {
    /// width: 160,
    /// height: 90,
    /// noise_density: 50,
    /// iterations: 5,
    /// seed: rand::random(),
    /// # };
    /// ```
    fn default() -> Self {
        Self {
            width: 160,
            height: 90,
            noise_density: 50,
            iterations: 5,
            seed: rand::random(),
        }
    }
}

impl GenerationConfig {
    /// Returns a copy with the noise density taken from a continuous slider value.
    ///
    /// The value is rounded to the nearest integer, ties going to the even neighbour (`50.5`
    /// becomes `50`, `51.5` becomes `52`). It is not clamped: an out-of-range slider still
    /// produces an [`InvalidConfig`] once generated.
    pub fn with_noise_density_from_slider(self, density: f32) -> Self {
        Self { noise_density: slider_to_density(density), ..self }
    }

    /// Checks every constraint, in field order, and returns the first violation.
    pub fn validate(&self) -> Result<ValidatedConfig, InvalidConfig> {
        if self.width <= 0 {
            return Err(InvalidConfig::NonPositiveWidth(self.width));
        }
        if self.height <= 0 {
            return Err(InvalidConfig::NonPositiveHeight(self.height));
        }
        if !(0..=100).contains(&self.noise_density) {
            return Err(InvalidConfig::NoiseDensityOutOfRange(self.noise_density));
        }
        if self.iterations < 0 {
            return Err(InvalidConfig::NegativeIterations(self.iterations));
        }

        Ok(ValidatedConfig {
            width: self.width as usize,
            height: self.height as usize,
            noise_density: self.noise_density as u32,
            iterations: self.iterations as usize,
        })
    }
}

pub(crate) fn slider_to_density(density: f32) -> i32 {
    // `as` saturates and maps NaN to 0
    density.round_ties_even() as i32
}

/// A [`GenerationConfig`] that passed validation, with its values in the types the generator
/// works with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub width: usize,
    pub height: usize,
    pub noise_density: u32,
    pub iterations: usize,
}
