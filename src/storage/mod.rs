pub mod errors;
pub mod keyframe_file;
