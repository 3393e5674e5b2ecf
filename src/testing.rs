use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate `n` samples with strictly increasing knots and values,
/// starting from the origin, with random spacing in both directions.
pub fn increasing_samples(rng: &mut StdRng, n: usize) -> (Vec<f64>, Vec<f64>) {
    let dx: Vec<f64> = randn(rng, n);
    let dy: Vec<f64> = randn(rng, n);

    let mut x = vec![0.0; n];
    let mut y = vec![0.0; n];
    for i in 1..n {
        x[i] = x[i - 1] + 0.05 + dx[i];
        y[i] = y[i - 1] + 0.01 + dy[i];
    }

    (x, y)
}
