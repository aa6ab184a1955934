// src/review/mod.rs
pub mod render;
pub mod state;

pub use state::{Field, ReviewState, RowView};
