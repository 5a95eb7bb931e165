use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Cell, Row};

/// How the first generation is laid out
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Seed {
    /// All dead except the cell at `len / 2`
    #[default]
    SingleCenter,
    /// Each cell alive with probability `density`.
    /// A fixed `rng_seed` makes the layout reproducible.
    Random { density: f64, rng_seed: Option<u64> },
}

impl Seed {
    pub fn name(&self) -> &'static str {
        match self {
            Seed::SingleCenter => "Single",
            Seed::Random { .. } => "Random",
        }
    }

    /// True when `density` is a probability in 0..=1
    pub fn is_valid_density(density: f64) -> bool {
        (0.0..=1.0).contains(&density)
    }

    /// Pin a random seed without `rng_seed` to a freshly drawn one, so
    /// every rebuild of the first generation lays out the same cells
    pub fn resolve(self) -> Self {
        match self {
            Seed::Random { density, rng_seed: None } => Seed::Random {
                density,
                rng_seed: Some(rand::random()),
            },
            seed => seed,
        }
    }

    /// Build the first generation for a row of `len` cells
    pub fn build(&self, len: usize) -> Row {
        match *self {
            Seed::SingleCenter => Row::single_center(len),
            Seed::Random { density, rng_seed } => {
                // NaN counts as an empty row
                let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
                let mut rng = match rng_seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_rng(&mut rand::rng()),
                };
                let cells = (0..len).map(|_| Cell::from(rng.random_bool(density))).collect();
                Row::from_cells(cells)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_center() {
        let row = Seed::SingleCenter.build(11);
        assert_eq!(row.bits(), vec![0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_single_center_even_width() {
        let row = Seed::SingleCenter.build(4);
        assert_eq!(row.bits(), vec![0, 0, 1, 0]);
    }

    #[test]
    fn test_random_is_reproducible() {
        let seed = Seed::Random { density: 0.5, rng_seed: Some(42) };
        assert_eq!(seed.build(200).cells(), seed.build(200).cells());
    }

    #[test]
    fn test_random_density_extremes() {
        let full = Seed::Random { density: 1.0, rng_seed: Some(1) }.build(50);
        assert_eq!(full.count_alive(), 50);

        let empty = Seed::Random { density: 0.0, rng_seed: Some(1) }.build(50);
        assert_eq!(empty.count_alive(), 0);

        // Out-of-range density is clamped
        let clamped = Seed::Random { density: 3.0, rng_seed: None }.build(20);
        assert_eq!(clamped.count_alive(), 20);
    }

    #[test]
    fn test_nan_density_builds_empty_row() {
        let row = Seed::Random { density: f64::NAN, rng_seed: Some(1) }.build(10);
        assert_eq!(row.count_alive(), 0);
        assert!(!Seed::is_valid_density(f64::NAN));
        assert!(!Seed::is_valid_density(-0.1));
        assert!(Seed::is_valid_density(1.0));
    }

    #[test]
    fn test_resolve_pins_rng_seed() {
        let resolved = Seed::Random { density: 0.5, rng_seed: None }.resolve();
        assert!(matches!(resolved, Seed::Random { density, rng_seed: Some(_) } if density == 0.5));
        assert_eq!(resolved.build(100).cells(), resolved.build(100).cells());

        let fixed = Seed::Random { density: 0.5, rng_seed: Some(3) };
        assert_eq!(fixed.resolve(), fixed);
        assert_eq!(Seed::SingleCenter.resolve(), Seed::SingleCenter);
    }
}
