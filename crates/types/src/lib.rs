pub mod align;
pub mod color;
pub mod font;
pub mod geometry;

pub use align::TextAlign;
pub use color::Color;
pub use font::{FontStyle, FontWeight};
pub use geometry::{Margins, Size};
