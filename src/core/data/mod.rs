pub mod canvas;
pub mod colour;
pub mod complex;
pub mod landmarks;
pub mod pixel_buffer;
pub mod screen_point;
pub mod viewport;
