#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use campaign_console::run_app; // The function from lib.rs
use campaign_console::ui::UI_TEXT;

#[cfg(target_arch = "wasm32")]
use campaign_console::BudgetAllocator;
#[cfg(not(target_arch = "wasm32"))]
use campaign_console::{
    Cli, // The struct from lib.rs
    MemoryPort,
    StoragePort,
};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast; // <--- REQUIRED for .dyn_into()
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use campaign_console::persistence::LocalStoragePort;

    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    log::info!("{} starting in WASM mode...", UI_TEXT.app_title);

    // B. Setup for Web
    let web_options = eframe::WebOptions::default();

    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // C. Start the App, persisting straight to window.localStorage
    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(|cc| {
                Ok(run_app(
                    cc,
                    Box::new(LocalStoragePort),
                    BudgetAllocator::default(),
                ))
            }),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use campaign_console::persistence::JsonFilePort;
    use clap::Parser;
    use eframe::NativeOptions;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Storage. A broken state file should not stop the console from opening.
    let port: Box<dyn StoragePort> = match JsonFilePort::open(&args.state_file) {
        Ok(port) => {
            log::info!("Persisting campaign state to {}", port.path().display());
            Box::new(port)
        }
        Err(e) => {
            log::error!("{:#}. Changes will not be saved this session.", e);
            Box::new(MemoryPort::new())
        }
    };
    let allocator = args.allocator();

    // D. Run Native App
    eframe::run_native(
        UI_TEXT.app_title,
        NativeOptions::default(),
        Box::new(move |cc| Ok(run_app(cc, port, allocator))),
    )
}
