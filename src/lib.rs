// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod review;
pub mod scrape;
pub mod store;
pub mod transfer;
