pub mod frame_sequence;
pub mod png;
pub mod ppm;
