pub mod actions;
pub mod animation;
pub mod data;
pub mod fractals;
pub mod palette;
pub mod session;
pub mod util;
