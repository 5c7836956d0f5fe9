mod app;
mod components;
mod pages;
mod router;
mod submit;

use app::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting login form, log_level={level}");
    yew::Renderer::<App>::new().render();
}
