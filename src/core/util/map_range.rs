/// Rescales `value` from the range `[src_low, src_high]` onto
/// `[dst_low, dst_high]`.
///
/// The source and destination spans are taken as absolute widths, so the
/// result always moves away from `dst_low` as `value` moves away from
/// `src_low`. Callers must pass a non-degenerate source range; with
/// `src_low == src_high` the result is not finite.
#[inline]
#[must_use]
pub fn map_range(value: f64, src_low: f64, src_high: f64, dst_low: f64, dst_high: f64) -> f64 {
    (value - src_low) / (src_high - src_low).abs() * (dst_high - dst_low).abs() + dst_low
}
