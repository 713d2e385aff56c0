pub mod background;
pub mod dimension;
pub mod parsers;
pub mod position;
pub mod text;

pub use background::{BackgroundRepeat, ImageUrl};
pub use dimension::{Dimension, Frame, Unit};
pub use parsers::StyleParseError;
pub use position::Position;
pub use text::TextAlign;
