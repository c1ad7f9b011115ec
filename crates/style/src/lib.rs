pub mod font;
pub mod text;

pub use font::{FontStyle, FontWeight};
pub use text::TextDecoration;
