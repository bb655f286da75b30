pub mod colors;
pub mod theme;

pub use colors::Colors;
pub use theme::{ListTokens, Theme};
