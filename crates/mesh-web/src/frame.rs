use mesh_core::MeshField;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas::CanvasSurface;

/// Owns the requestAnimationFrame loop. The id of the last scheduled tick
/// is held so a toggle to a non-animating state can cancel it; event
/// handlers call `kick` to restart the loop after a state change.
#[derive(Clone)]
pub struct Animator {
    field: Rc<RefCell<MeshField>>,
    surface: Rc<RefCell<CanvasSurface>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Animator {
    pub fn new(field: Rc<RefCell<MeshField>>, surface: CanvasSurface) -> Self {
        let animator = Self {
            field,
            surface: Rc::new(RefCell::new(surface)),
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        };
        let tick_self = animator.clone();
        *animator.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            tick_self.raf_id.set(None);
            let now = instant::now();
            {
                let mut field = tick_self.field.borrow_mut();
                field.advance(now);
                field.draw(&mut *tick_self.surface.borrow_mut(), now);
            }
            if tick_self.field.borrow().should_schedule() {
                tick_self.schedule();
            }
        }) as Box<dyn FnMut()>));
        animator
    }

    pub fn surface(&self) -> Rc<RefCell<CanvasSurface>> {
        self.surface.clone()
    }

    fn schedule(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                self.raf_id.set(Some(id));
            }
        }
    }

    /// Restart the loop if it is idle and the field still wants frames.
    pub fn kick(&self) {
        if self.field.borrow().should_schedule() {
            self.schedule();
        }
    }

    /// Cancel the pending tick, if any.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}
