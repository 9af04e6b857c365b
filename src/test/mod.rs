use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Point, Rectangle};

mod grid;
mod reference;

pub(crate) fn random_points(seed: u64, num_items: usize, max: i32) -> Vec<Point<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_items)
        .map(|_| Point::new(rng.gen_range(0..max), rng.gen_range(0..max)))
        .collect()
}

pub(crate) fn random_rect(rng: &mut StdRng, max: i32) -> Rectangle<i32> {
    let (x0, x1) = (rng.gen_range(-5..max + 5), rng.gen_range(-5..max + 5));
    let (y0, y1) = (rng.gen_range(-5..max + 5), rng.gen_range(-5..max + 5));
    Rectangle::new(
        Point::new(x0.min(x1), y0.min(y1)),
        Point::new(x0.max(x1), y0.max(y1)),
    )
}

pub(crate) fn sorted<N: Ord>(mut values: Vec<N>) -> Vec<N> {
    values.sort();
    values
}
