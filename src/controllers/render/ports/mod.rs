pub mod frame_render;
