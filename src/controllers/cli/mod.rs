pub mod animate;
pub mod args;
pub mod render;
pub mod zoom;
