pub mod map_range;
pub mod pixel_to_complex_coords;
