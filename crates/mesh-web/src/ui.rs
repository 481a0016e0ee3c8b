use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::tables::{decode_reversed, TableState};

/// Wire every `table.sortable` on the page: header clicks sort, an optional
/// `input[data-filter-for]` filters.
pub fn wire_tables(document: &web::Document) {
    let Ok(tables) = document.query_selector_all("table.sortable") else {
        return;
    };
    for t in 0..tables.length() {
        let Some(node) = tables.item(t) else { continue };
        let Ok(table) = node.dyn_into::<web::Element>() else {
            continue;
        };
        wire_one_table(document, &table);
    }
}

fn wire_one_table(document: &web::Document, table: &web::Element) {
    let state = Rc::new(RefCell::new(TableState::default()));

    let Ok(headers) = table.query_selector_all("th") else {
        return;
    };
    for col in 0..headers.length() {
        let Some(node) = headers.item(col) else { continue };
        let Ok(header) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let state = state.clone();
        let table = table.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            state.borrow_mut().on_header_click(col as usize);
            apply_state(&table, &state.borrow());
        }) as Box<dyn FnMut()>);
        let _ = header.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Filter input bound to the table by id, when both exist.
    if let Some(id) = table.get_attribute("id") {
        if let Ok(Some(input)) =
            document.query_selector(&format!("input[data-filter-for=\"{id}\"]"))
        {
            let state = state.clone();
            let table = table.clone();
            let input_el = input.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
                if let Some(i) = input_el.dyn_ref::<web::HtmlInputElement>() {
                    state.borrow_mut().on_filter_input(&i.value());
                    apply_state(&table, &state.borrow());
                }
            }) as Box<dyn FnMut()>);
            let _ =
                input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

/// Re-read the body rows, compute the new order, and re-append in place.
/// Filtered-out rows get `display:none` rather than removal, so clearing
/// the filter restores them.
fn apply_state(table: &web::Element, state: &TableState) {
    let Ok(row_nodes) = table.query_selector_all("tbody tr") else {
        return;
    };
    let mut rows: Vec<web::Element> = Vec::new();
    let mut cells: Vec<Vec<String>> = Vec::new();
    for r in 0..row_nodes.length() {
        let Some(node) = row_nodes.item(r) else { continue };
        let Ok(row) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let Ok(tds) = row.query_selector_all("td") else {
            continue;
        };
        let mut row_cells = Vec::new();
        for c in 0..tds.length() {
            if let Some(td) = tds.item(c) {
                row_cells.push(td.text_content().unwrap_or_default());
            }
        }
        rows.push(row);
        cells.push(row_cells);
    }

    let order = state.apply(&cells);
    let visible: HashSet<usize> = order.iter().copied().collect();
    for (i, row) in rows.iter().enumerate() {
        let style = if visible.contains(&i) { "" } else { "display:none" };
        let _ = row.set_attribute("style", style);
    }
    if let Some(parent) = rows.first().and_then(|r| r.parent_node()) {
        for &i in &order {
            let _ = parent.append_child(&rows[i]);
        }
    }
}

/// Swap reversed-text placeholders for live mailto links.
pub fn decode_obfuscated_links(document: &web::Document) {
    let Ok(links) = document.query_selector_all("a[data-obfuscated]") else {
        return;
    };
    for i in 0..links.length() {
        let Some(node) = links.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let Some(encoded) = el.get_attribute("data-obfuscated") else {
            continue;
        };
        let address = decode_reversed(&encoded);
        let _ = el.set_attribute("href", &format!("mailto:{address}"));
        el.set_text_content(Some(&address));
        let _ = el.remove_attribute("data-obfuscated");
    }
}
