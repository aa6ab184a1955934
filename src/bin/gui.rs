// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use studygo_scrape::{gui, log};

fn app_icon() -> Option<IconData> {
    let decoded = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/studygo.png"
    )));
    let rgba = match decoded {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            studygo_scrape::logw!("Icon: could not decode: {}", e);
            return None;
        }
    };
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init();

    let mut viewport = ViewportBuilder::default().with_inner_size([780.0, 560.0]);
    if let Some(icon) = app_icon() {
        // eframe 0.32: icon set via viewport builder
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options) {
        studygo_scrape::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
