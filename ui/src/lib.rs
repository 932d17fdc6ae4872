use anyhow::Context;
use leptos::mount::mount_to_body;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod theme;
pub mod transition;

pub use crate::app::App;

use crate::app::BootError;
use crate::config::SiteConfig;

fn boot() -> anyhow::Result<&'static SiteConfig> {
    let site = config::site().context("loading bundled site content")?;
    log::info!(
        "site content ready: {} projects, {} about sections",
        site.projects.items.len(),
        site.about.sections.len()
    );
    Ok(site)
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init(logging::default_level()) {
        leptos::leptos_dom::logging::console_warn(&format!("logger already set: {err}"));
    }

    match boot() {
        Ok(site) => mount_to_body(move || view! { <App site/> }),
        Err(err) => {
            log::error!("{err:#}");
            let message = format!("{err:#}");
            mount_to_body(move || view! { <BootError message/> })
        }
    }
}
