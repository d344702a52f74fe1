pub mod color;
pub mod time;

pub use color::Palette;
