#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod baseline_status;
pub mod constants;
pub mod deck;
pub mod dom;
pub mod events;
pub mod fetch;
pub mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kinetic-web starting");

    // The element can be defined before parsing finishes; upgrades happen later.
    if let Err(e) = baseline_status::define() {
        log::error!("init error: {:?}", e);
    }
    dom::on_ready(|| {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = dom::document_root(&document)
        .ok_or_else(|| anyhow::anyhow!("document has no root element"))?;

    let stages = events::wire_stage_trackers(&root);
    let cards = events::wire_tilt_cards(&root);
    let title = events::wire_draggable_title(&root);
    let proximity = events::wire_finale_proximity(&document);
    let orbits = events::wire_orbit_stages(&root);
    log::info!(
        "[bridges] stages={} tilt_cards={} title={} proximity={} orbits={}",
        stages,
        cards,
        title,
        proximity,
        orbits
    );

    let vt = deck::wire_view_transitions(&document);
    let deep_cards = deck::wire_deep_cards(&root);
    let panels = deck::wire_discrete_panels(&document, &root);
    let reveal = deck::wire_slide_hooks(&window);
    log::info!(
        "[deck] view_transitions={} deep_cards={} discrete_panels={} reveal={}",
        vt,
        deep_cards,
        panels,
        reveal
    );
    Ok(())
}
