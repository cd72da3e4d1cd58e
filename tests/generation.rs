use grotto::cave_generator::error::InvalidConfig;
use grotto::cave_generator::grid::{Cell, Grid};
use grotto::cave_generator::params::GenerationConfig;
use grotto::cave_generator::random_source::ScriptedSource;
use grotto::cave_generator::{generate, generate_seeded, seed_noise, smooth};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config(width: i32, height: i32, noise_density: i32, iterations: i32, seed: u64) -> GenerationConfig {
    GenerationConfig { width, height, noise_density, iterations, seed }
}

fn border_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if x == 0 || y == 0 || x == grid.width() - 1 || y == grid.height() - 1 {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn same_seed_same_map() {
    let config = config(64, 48, 47, 4, 1234);
    let first = generate_seeded(&config).unwrap();
    let second = generate_seeded(&config).unwrap();
    assert_eq!(first, second, "a fixed seed should always produce the same map");

    let third = generate(&config, &mut StdRng::seed_from_u64(1234)).unwrap();
    assert_eq!(first, third, "generate_seeded should match generate with the same StdRng seed");
}

#[test]
fn different_seeds_differ() {
    let a = generate_seeded(&config(64, 48, 47, 4, 1)).unwrap();
    let b = generate_seeded(&config(64, 48, 47, 4, 2)).unwrap();
    assert_ne!(a, b, "two seeds producing identical 64x48 maps is practically impossible");
}

#[test]
fn output_has_requested_dimensions() {
    for (width, height) in [(1, 1), (1, 9), (9, 1), (2, 2), (17, 5), (160, 90)] {
        let grid = generate_seeded(&config(width, height, 50, 3, 7)).unwrap();
        assert_eq!(grid.width(), width as usize);
        assert_eq!(grid.height(), height as usize);
        assert_eq!(grid.wall_count() + grid.open_count(), (width * height) as usize);
    }
}

#[test]
fn borders_are_walls_after_one_pass() {
    for seed in 0..20 {
        for iterations in [1, 2, 5] {
            let grid = generate_seeded(&config(30, 20, 10, iterations, seed)).unwrap();
            for (x, y) in border_cells(&grid) {
                assert_eq!(
                    grid.get(x, y),
                    Some(Cell::Wall),
                    "border cell ({x}, {y}) should be a wall (seed {seed}, {iterations} iterations)",
                );
            }
        }
    }
}

#[test]
fn zero_iterations_returns_the_seeded_noise() {
    let grid = generate_seeded(&config(25, 15, 50, 0, 99)).unwrap();
    let noise = seed_noise(25, 15, 50, &mut StdRng::seed_from_u64(99));
    assert_eq!(grid, noise);
}

#[test]
fn zero_iterations_leaves_borders_open() {
    // every draw is above the density, so nothing closes the border
    let grid = generate(&config(6, 6, 10, 0, 0), &mut ScriptedSource::new(vec![80])).unwrap();
    assert_eq!(grid.wall_count(), 0);
    assert_eq!(grid.get(0, 0), Some(Cell::Open));
}

#[test]
fn seeded_wall_fraction_grows_with_density() {
    let seeds = 0..50u64;
    let mean_fraction = |density: i32| {
        let total: f64 = seeds
            .clone()
            .map(|seed| generate_seeded(&config(40, 40, density, 0, seed)).unwrap().wall_fraction())
            .sum();
        total / seeds.clone().count() as f64
    };

    let fractions: Vec<f64> = [10, 30, 50, 70, 90].into_iter().map(mean_fraction).collect();
    for pair in fractions.windows(2) {
        assert!(pair[0] <= pair[1] + 0.01, "wall fraction should not drop as density grows: {fractions:?}");
    }

    // a draw in 0..100 is a wall when it is <= density
    for (fraction, density) in fractions.iter().zip([10, 30, 50, 70, 90]) {
        let expected = (density + 1) as f64 / 100.0;
        assert!((fraction - expected).abs() < 0.03, "density {density}: got {fraction}, expected about {expected}");
    }
}

#[test]
fn corner_border_rule_beats_neighbour_count() {
    let mut grid = Grid::filled(5, 5, Cell::Open);
    grid.set(0, 1, Cell::Wall);
    grid.set(1, 0, Cell::Wall);
    grid.set(1, 1, Cell::Wall);

    assert_eq!(grid.count_wall_neighbors(0, 0), 3);
    assert_eq!(smooth(&grid).get(0, 0), Some(Cell::Wall));

    // an open corner with no wall neighbours is closed too
    let open = Grid::filled(5, 5, Cell::Open);
    assert_eq!(smooth(&open).get(4, 4), Some(Cell::Wall));
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        (config(0, 10, 50, 1, 0), InvalidConfig::NonPositiveWidth(0)),
        (config(10, 0, 50, 1, 0), InvalidConfig::NonPositiveHeight(0)),
        (config(10, 10, 150, 1, 0), InvalidConfig::NoiseDensityOutOfRange(150)),
        (config(10, 10, 50, -1, 0), InvalidConfig::NegativeIterations(-1)),
    ];

    for (config, expected) in cases {
        let mut source = ScriptedSource::new(vec![42]);
        assert_eq!(generate(&config, &mut source), Err(expected));
        assert_eq!(source.draws(), 0, "{expected} should be detected before seeding");
        assert_eq!(generate_seeded(&config), Err(expected));
    }
}

#[test]
fn all_open_five_by_five_single_pass() {
    let mut source = ScriptedSource::new(vec![50]);
    let grid = generate(&config(5, 5, 0, 1, 0), &mut source).unwrap();

    assert_eq!(grid.get(2, 2), Some(Cell::Open), "the centre has no wall neighbours and stays open");
    let border = border_cells(&grid);
    assert_eq!(border.len(), 16);
    for (x, y) in border {
        assert_eq!(grid.get(x, y), Some(Cell::Wall));
    }
    assert_eq!(grid.wall_count(), 16, "only the perimeter should be walled");
}

#[test]
fn error_messages_name_the_field() {
    assert_eq!(
        InvalidConfig::NoiseDensityOutOfRange(150).to_string(),
        "invalid config: noise density must be within 0..=100, got 150"
    );
    assert_eq!(
        InvalidConfig::NegativeIterations(-1).to_string(),
        "invalid config: iterations must not be negative, got -1"
    );
}
