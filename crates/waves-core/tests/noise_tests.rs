// Property tests for the seeded noise field: determinism, output range,
// and smoothness of the interpolation.

use rand::prelude::*;
use waves_core::NoiseField;

#[test]
fn deterministic_across_instances_and_calls() {
    let a = NoiseField::new(0.123456);
    let b = NoiseField::new(0.123456);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let x = rng.gen_range(-200.0..200.0);
        let y = rng.gen_range(-200.0..200.0);
        let va = a.sample(x, y);
        assert_eq!(va.to_bits(), a.sample(x, y).to_bits());
        assert_eq!(va.to_bits(), b.sample(x, y).to_bits());
    }
}

#[test]
fn output_stays_within_unit_range() {
    let noise = NoiseField::new(0.7071);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        // Span many integer cells, both signs.
        let x = rng.gen_range(-50.0..50.0);
        let y = rng.gen_range(-50.0..50.0);
        let v = noise.sample(x, y);
        assert!(v.is_finite());
        assert!((-1.0..=1.0).contains(&v), "sample({x}, {y}) = {v} out of range");
    }
}

#[test]
fn adjacent_samples_stay_close() {
    let noise = NoiseField::new(0.31337);
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..5_000 {
        let x = rng.gen_range(-20.0..20.0);
        let y = rng.gen_range(-20.0..20.0);
        let dx = rng.gen_range(-1e-3..1e-3);
        let dy = rng.gen_range(-1e-3..1e-3);
        let step = (noise.sample(x, y) - noise.sample(x + dx, y + dy)).abs();
        assert!(step < 0.05, "discontinuity {step} at ({x}, {y})");
    }
}
