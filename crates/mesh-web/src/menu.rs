use mesh_core::{MenuState, MeshField};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::{MENU_ID, MENU_TOGGLE_ID, MENU_WIDTH_PX};
use crate::dom;
use crate::frame::Animator;

/// Wire the hamburger button: toggle the side menu's `open` class and
/// forward the new state to the field as a bounds-change event. The menu
/// keeps working when the animator never started (`mesh` is None).
pub fn wire(document: &web::Document, mesh: Option<(Rc<RefCell<MeshField>>, Animator)>) {
    let doc = document.clone();
    dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
        let Some(menu_el) = doc.get_element_by_id(MENU_ID) else {
            return;
        };
        let class_list = menu_el.class_list();
        let is_open = !class_list.contains("open");
        let _ = class_list.toggle("open");
        log::info!("[menu] {}", if is_open { "opened" } else { "closed" });
        if let Some((field, animator)) = &mesh {
            field.borrow_mut().on_menu_state_change(
                MenuState {
                    is_open,
                    menu_width: MENU_WIDTH_PX,
                },
                instant::now(),
            );
            animator.kick();
        }
    });
}
