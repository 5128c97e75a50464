use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::map_range::map_range;

/// Maps a pixel position onto the complex plane.
///
/// Column `x` maps through `[0, width)` onto `[x_min, x_max)` and row `y`
/// through `[0, height)` onto `[y_min, y_max)`, so row 0 is `y_min`.
/// Positions outside the grid extrapolate linearly.
#[inline]
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, grid: GridSize, viewport: &Viewport) -> Complex {
    Complex {
        real: map_range(
            f64::from(pixel.x),
            0.0,
            f64::from(grid.width()),
            viewport.x_min(),
            viewport.x_max(),
        ),
        imag: map_range(
            f64::from(pixel.y),
            0.0,
            f64::from(grid.height()),
            viewport.y_min(),
            viewport.y_max(),
        ),
    }
}

/// Turns a rectangle selected on the pixel grid into the viewport it covers.
///
/// The corners may be given in any drag direction. A selection with zero
/// width or height has no area and is rejected.
pub fn pixel_selection_to_viewport(
    from: Point,
    to: Point,
    grid: GridSize,
    viewport: &Viewport,
) -> Result<Viewport, ViewportError> {
    let a = pixel_to_complex_coords(from, grid, viewport);
    let b = pixel_to_complex_coords(to, grid, viewport);

    Viewport::new(
        a.real.min(b.real),
        a.real.max(b.real),
        a.imag.min(b.imag),
        a.imag.max(b.imag),
    )
}
