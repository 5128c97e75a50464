use crate::core::data::point::Point;
use std::error::Error;

/// Computes one per-pixel value of a fractal. Implementations must be pure
/// so pixels can be evaluated in any order.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
