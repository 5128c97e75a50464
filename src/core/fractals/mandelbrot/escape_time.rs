//! Escape-time classification of points on the complex plane.
//!
//! A point `c` is iterated under `z <- z² + c` starting from `z = 0`. The
//! number of iterations completed before `|z|² > 4` is its escape count;
//! points that survive [`MAX_ITERATIONS`] iterations are treated as members
//! of the Mandelbrot set.

use crate::core::data::complex::Complex;
use crate::core::util::map_range::map_range;

pub const MAX_ITERATIONS: u32 = 500;

/// Highest palette index an escape count can normalize to.
pub const MAX_PALETTE_INDEX: usize = 254;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of iterations `c` survives before escaping, in `[0, MAX_ITERATIONS]`.
#[inline]
#[must_use]
pub fn escape_count(c: Complex) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..MAX_ITERATIONS {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z.square() + c;
    }

    MAX_ITERATIONS
}

/// Normalizes an escape count into a palette index in `[0, MAX_PALETTE_INDEX]`.
#[inline]
#[must_use]
pub fn normalize_escape_count(count: u32) -> usize {
    map_range(
        f64::from(count),
        0.0,
        f64::from(MAX_ITERATIONS),
        0.0,
        MAX_PALETTE_INDEX as f64,
    )
    .floor() as usize
}

/// The palette index `c` is coloured with.
#[inline]
#[must_use]
pub fn escape_rate(c: Complex) -> usize {
    normalize_escape_count(escape_count(c))
}
