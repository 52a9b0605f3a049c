pub mod fire;
pub mod hue_ramp;
pub mod matrix;
pub mod psychedelic;
