//! Synthetic scan source for demos and tests.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::utils::Point;

/// Generates frames made of a few Gaussian blobs.
///
/// Every frame draws 2 to 4 blob centres uniformly in `[-15, 15]` on both
/// axes and 10 to 29 points per blob with a standard deviation of 1.
#[derive(Debug, Clone)]
pub struct SimulatedScan {
    rng: Xoshiro256PlusPlus,
}

impl SimulatedScan {
    pub fn new() -> Self {
        SimulatedScan::with_rng(Xoshiro256PlusPlus::from_entropy())
    }
    /// Reproducible source
    pub fn seeded(seed: u64) -> Self {
        SimulatedScan::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
    fn with_rng(rng: Xoshiro256PlusPlus) -> Self {
        SimulatedScan { rng }
    }
    /// Blob centres and the points drawn around them
    pub fn next_frame_with_centers(&mut self) -> (Vec<Point>, Vec<Point>) {
        let n_clusters = self.rng.gen_range(2..5);
        let centers: Vec<Point> = (0..n_clusters)
            .map(|_| Point::new(self.rng.gen_range(-15.0..15.0), self.rng.gen_range(-15.0..15.0)))
            .collect();
        let mut points = Vec::new();
        for center in &centers {
            let n_points = self.rng.gen_range(10..30);
            for _ in 0..n_points {
                let dx: f64 = self.rng.sample(StandardNormal);
                let dy: f64 = self.rng.sample(StandardNormal);
                points.push(Point::new(center.x + dx, center.y + dy));
            }
        }
        (centers, points)
    }
    pub fn next_frame(&mut self) -> Vec<Point> {
        self.next_frame_with_centers().1
    }
}

impl Default for SimulatedScan {
    fn default() -> Self {
        SimulatedScan::new()
    }
}

impl Iterator for SimulatedScan {
    type Item = Vec<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_frame())
    }
}
