//! Report rendering and output

pub mod text;
pub use text::{render, write, BANNER};
