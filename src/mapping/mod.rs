//! Mapping from signal values to display quantities
//!
//! Maps oscillator output onto color channels using scaling functions.

mod color;
mod linear;
mod mapper;

pub use color::{map_to_color, ColorMapper, RgbColor, BLUE_OFFSET, GREEN_OFFSET};
pub use linear::LinearMapper;
pub use mapper::Mapper;
