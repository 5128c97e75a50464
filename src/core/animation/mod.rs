pub mod interpolate;
pub mod keyframes;
pub mod playback;
