#![no_main]

use arbitrary::Arbitrary;
use gaussgrid_count::{CountConfig, GrowableGrid, count_fresh, count_with};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum RadiusStep {
    /// Whole-number radius, kept small so fresh recounts stay cheap.
    Whole(u16),
    /// Fractional radius in hundredths.
    Hundredths(u32),
    /// Raw float, including negatives and non-finite values.
    Raw(f64),
}

impl RadiusStep {
    fn radius(&self) -> f64 {
        match self {
            RadiusStep::Whole(n) => f64::from(n % 2_000),
            RadiusStep::Hundredths(n) => f64::from(n % 200_000) / 100.0,
            RadiusStep::Raw(r) => *r,
        }
    }
}

fuzz_target!(|input: (bool, Vec<RadiusStep>)| {
    let (seed, steps) = input;
    let config = CountConfig::new().with_seed(seed).with_max_limit(64);
    let mut grid: Option<GrowableGrid> = None;

    for step in steps.iter().take(32) {
        let r = step.radius();
        let previous = grid.as_ref().map(GrowableGrid::len);
        match count_with(r, grid.take(), &config) {
            Ok((found, next)) => {
                assert_eq!(found, count_fresh(r).unwrap());
                if let Some(len) = previous {
                    assert!(next.len() >= len);
                }
                grid = Some(next);
            }
            // The grid is consumed on error; start over.
            Err(_) => assert!(!r.is_finite() || r < 0.0 || r.floor() >= 64.0 * 64.0),
        }
    }
});
