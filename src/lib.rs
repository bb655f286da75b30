pub mod config;
pub mod errors;
pub mod input;
pub mod list;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::errors::ListError;
pub use crate::list::{
    handle_key, handle_mouse, FocusDirection, ListStyle, ListView, Outcome, ScrollAxis,
    ScrollList, StyleLookup,
};
