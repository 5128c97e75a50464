pub mod errors;
pub mod gradient_palette;
pub mod gradient_source;
