// src/core/mod.rs

pub mod net;
pub mod sanitize;
pub mod source;

pub use source::{FileSource, PageSource, StaticSource, UrlSource};
