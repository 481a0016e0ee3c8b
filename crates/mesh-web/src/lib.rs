#![cfg(target_arch = "wasm32")]
//! WASM frontend: wires the core mesh simulation to a 2D canvas and to the
//! page's DOM signals (resize, visibility, pause, side menu), plus the
//! incidental site glue (sortable tables, obfuscated links).

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod menu;
mod tables;
mod ui;

use mesh_core::{MeshField, MeshParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mesh-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Site glue runs whether or not the background animates.
    ui::wire_tables(&document);
    ui::decode_obfuscated_links(&document);

    let (width, height) = dom::viewport_size(&window);

    // Small screens skip the whole animator. Not an error.
    if width < constants::MOBILE_BREAKPOINT_PX {
        if let Some(el) = document.get_element_by_id(constants::CANVAS_ID) {
            let _ = el.set_attribute("style", "display:none");
        }
        log::info!("[mesh] viewport {width}px below breakpoint; background disabled");
        menu::wire(&document, None);
        return Ok(());
    }

    // A page without the canvas keeps working; the background never draws.
    let Some(surface) = canvas::CanvasSurface::acquire(&document, width as u32, height as u32)
    else {
        log::warn!(
            "[mesh] missing #{} or its 2d context; background disabled",
            constants::CANVAS_ID
        );
        menu::wire(&document, None);
        return Ok(());
    };

    let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    let field = MeshField::new(MeshParams::default(), width, height, seed)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let field = Rc::new(RefCell::new(field));

    let animator = frame::Animator::new(field.clone(), surface);
    events::wire(&window, &document, &field, &animator);
    menu::wire(&document, Some((field.clone(), animator.clone())));
    animator.kick();
    Ok(())
}
