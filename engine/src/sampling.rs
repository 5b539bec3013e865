//! Smoothed value-noise sampler over the lattice hash.

use crate::hash::lattice_hash;

/// Cubic smoothstep. Zero first derivative at t=0 and t=1, so the field has
/// no visible seams at lattice boundaries.
pub fn fade(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Samples the noise field at a real-valued point, returning a value in
/// `[0, 1)`.
///
/// Trilinear interpolation of the 8 corner hashes of the surrounding unit
/// cube, with faded fractional weights. At an exact lattice point every lerp
/// collapses and the result equals that point's hash bitwise.
pub fn sample(x: f64, y: f64, z: f64) -> f64 {
    let xf = x.floor();
    let yf = y.floor();
    let zf = z.floor();
    let (i, j, k) = (xf as i64, yf as i64, zf as i64);
    let u = fade(x - xf);
    let v = fade(y - yf);
    let w = fade(z - zf);

    let c000 = lattice_hash(i, j, k);
    let c100 = lattice_hash(i + 1, j, k);
    let c010 = lattice_hash(i, j + 1, k);
    let c110 = lattice_hash(i + 1, j + 1, k);
    let c001 = lattice_hash(i, j, k + 1);
    let c101 = lattice_hash(i + 1, j, k + 1);
    let c011 = lattice_hash(i, j + 1, k + 1);
    let c111 = lattice_hash(i + 1, j + 1, k + 1);

    let x00 = lerp(c000, c100, u);
    let x10 = lerp(c010, c110, u);
    let x01 = lerp(c001, c101, u);
    let x11 = lerp(c011, c111, u);

    let y0 = lerp(x00, x10, v);
    let y1 = lerp(x01, x11, v);

    lerp(y0, y1, w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn fade_endpoints_and_midpoint() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }

    #[test]
    fn lattice_points_return_the_corner_hash_exactly() {
        for (x, y, z) in [(0, 0, 0), (1, 2, 3), (-4, 7, -9), (100, -250, 31)] {
            let sampled = sample(x as f64, y as f64, z as f64);
            let hashed = lattice_hash(x, y, z);
            assert_eq!(sampled, hashed);
        }
    }

    #[test]
    fn in_unit_range_over_random_points() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(23);
        for _ in 0..10_000 {
            let x = rng.gen_range(-100.0..100.0);
            let y = rng.gen_range(-100.0..100.0);
            let z = rng.gen_range(-100.0..100.0);
            let v = sample(x, y, z);
            assert!((0.0..1.0).contains(&v), "out of range at ({x},{y},{z}): {v}");
        }
    }

    #[test]
    fn interior_sample_stays_in_corner_hull() {
        let corners: Vec<f64> = (0..8i64)
            .map(|b| lattice_hash(b & 1, (b >> 1) & 1, (b >> 2) & 1))
            .collect();
        let min = corners.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = corners.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let v = sample(0.5, 0.5, 0.5);
        assert!(v >= min && v <= max, "{v} outside [{min}, {max}]");
    }

    #[test]
    fn continuous_across_cell_boundaries() {
        // Fine steps near integer boundaries must not jump. The field's
        // slope is bounded by 1.5 (fade derivative max) times the corner
        // spread, so 0.001 steps move the value by well under 0.01.
        for boundary in [-3.0, 0.0, 5.0] {
            let mut prev = sample(boundary - 0.05, 0.3, 0.7);
            let mut x = boundary - 0.05;
            while x < boundary + 0.05 {
                x += 0.001;
                let cur = sample(x, 0.3, 0.7);
                assert!(
                    (cur - prev).abs() < 0.01,
                    "jump of {} at x={x}",
                    (cur - prev).abs()
                );
                prev = cur;
            }
        }
    }

    #[test]
    fn deterministic_for_identical_points() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(29);
        for _ in 0..1000 {
            let x: f64 = rng.gen_range(-50.0..50.0);
            let y: f64 = rng.gen_range(-50.0..50.0);
            let z: f64 = rng.gen_range(-50.0..50.0);
            assert_eq!(sample(x, y, z), sample(x, y, z));
        }
    }
}
