use mesh_core::MeshField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::PAUSE_BUTTON_ID;
use crate::dom;
use crate::frame::Animator;

/// Hook the viewport, visibility, and pause signals up to the field. Each
/// handler mutates the field fully before returning, then nudges the loop.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    field: &Rc<RefCell<MeshField>>,
    animator: &Animator,
) {
    // Resize regenerates the whole lattice and the canvas backing size.
    {
        let field = field.clone();
        let animator = animator.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                let (width, height) = dom::viewport_size(&w);
                animator.surface().borrow().resize(width as u32, height as u32);
                field.borrow_mut().on_resize(width, height);
                animator.kick();
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Tab visibility suspends the animating state; an in-flight menu
    // transition still runs.
    {
        let field = field.clone();
        let animator = animator.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            let visible = !doc.hidden();
            field.borrow_mut().on_visibility_change(visible);
            if field.borrow().should_schedule() {
                animator.kick();
            } else {
                animator.stop();
            }
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Pause button, independent of visibility.
    {
        let field = field.clone();
        let animator = animator.clone();
        dom::add_click_listener(document, PAUSE_BUTTON_ID, move || {
            let paused = field.borrow_mut().on_pause_toggle();
            log::info!("[mesh] pause toggled: {paused}");
            if field.borrow().should_schedule() {
                animator.kick();
            } else {
                animator.stop();
            }
        });
    }
}
