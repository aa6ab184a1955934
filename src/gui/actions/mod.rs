// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy, export, extract, …}.

mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod extract;  // src/gui/actions/extract.rs
mod settings; // src/gui/actions/settings.rs

pub use copy::copy;
pub use export::export;
pub use extract::{browse, extract, finish_extract};
pub use settings::save_settings;
