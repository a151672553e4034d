//! DOM side of the game: the 6x5 guess grid, the on-screen keyboard and the
//! per-row result coloring.
//!
//! Nothing here owns game state. Cells are looked up by their deterministic id
//! (`guess-box-{row}-{col}`) every time they are touched, and keyboard tiles
//! never talk to the controller directly: a click dispatches the same
//! `keydown` event a physical key would, so there is one input path.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit, window};

use crate::game::{COLS, ROWS, TileStatus, box_id, evaluate_guess, is_solved};

pub mod controller;
pub mod notice;

// --- Keyboard layout ---------------------------------------------------------

pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const BACKSPACE_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" height="20" viewBox="0 0 24 24" width="20">"#,
    r#"<path d="M22 3H7c-.69 0-1.23.35-1.59.88L0 12l5.41 8.11c.36.53.9.89 1.59.89h15c1.1 "#,
    r#"0 2-.9 2-2V5c0-1.1-.9-2-2-2zm0 16H7.07L2.4 12l4.66-7H22v14zm-11.59-2L14 13.41 17.59 "#,
    r#"17 19 15.59 15.41 12 19 8.41 17.59 7 14 10.59 10.41 7 9 8.41 12.59 12 9 15.59z"></path></svg>"#
);

const RESULT_TRANSITION: &str = "background-color 100ms linear";

// --- Grid --------------------------------------------------------------------

/// Append the 30 guess cells to the grid container. Calling twice duplicates
/// the grid.
pub fn build_grid(doc: &Document, container_id: &str) -> Result<(), JsValue> {
    let holder = container(doc, container_id)?;
    for row in 0..ROWS {
        for col in 0..COLS {
            let cell = doc.create_element("div")?;
            cell.set_class_name("guess-box");
            cell.set_id(&box_id(row, col));
            holder.append_child(&cell)?;
        }
    }
    Ok(())
}

fn cell(doc: &Document, row: usize, col: usize) -> Result<HtmlElement, JsValue> {
    let id = box_id(row, col);
    let el = doc
        .get_element_by_id(&id)
        .ok_or_else(|| JsValue::from_str(&format!("missing cell #{}", id)))?;
    Ok(el.dyn_into()?)
}

/// Show (or clear, with `None`) the letter of one cell.
pub fn set_cell_letter(
    doc: &Document,
    row: usize,
    col: usize,
    letter: Option<char>,
) -> Result<(), JsValue> {
    let text = letter.map(String::from);
    cell(doc, row, col)?.set_text_content(text.as_deref());
    Ok(())
}

/// Color a submitted row and report whether the guess equals the target.
pub fn render_guess_result(
    doc: &Document,
    row: usize,
    target: &str,
    guess: &str,
) -> Result<bool, JsValue> {
    let statuses = evaluate_guess(target, guess);
    paint_row(doc, row, &statuses)?;
    Ok(is_solved(target, guess))
}

fn paint_row(doc: &Document, row: usize, statuses: &[TileStatus; COLS]) -> Result<(), JsValue> {
    for (col, status) in statuses.iter().enumerate() {
        let el = cell(doc, row, col)?;
        el.style().set_property("transition", RESULT_TRANSITION)?;
        if let Some(class) = status.css_class() {
            el.class_list().add_1(class)?;
        }
    }
    Ok(())
}

// --- Keyboard ----------------------------------------------------------------

/// Build the three QWERTY rows. Enter leads and Backspace trails the bottom
/// row.
pub fn build_keyboard(doc: &Document, container_id: &str) -> Result<(), JsValue> {
    let keyboard = container(doc, container_id)?;
    let rows = KEYBOARD_ROWS
        .iter()
        .map(|letters| keyboard_row(doc, letters))
        .collect::<Result<Vec<_>, _>>()?;

    let enter = key_tile(doc, "Enter")?;
    enter.set_id("enter");
    enter.set_text_content(Some("Enter"));

    let backspace = key_tile(doc, "Backspace")?;
    backspace.set_id("backspace");
    backspace.set_inner_html(BACKSPACE_SVG);

    if let Some(bottom) = rows.last() {
        bottom.prepend_with_node_1(&enter)?;
        bottom.append_child(&backspace)?;
    }

    for row in &rows {
        keyboard.append_child(row)?;
    }
    Ok(())
}

fn keyboard_row(doc: &Document, letters: &str) -> Result<Element, JsValue> {
    let row = doc.create_element("div")?;
    for letter in letters.chars() {
        let key = letter.to_string();
        let tile = key_tile(doc, &key)?;
        tile.set_text_content(Some(&key));
        row.append_child(&tile)?;
    }
    Ok(row)
}

/// A `keyboard-tile` div that replays `key` as a document `keydown` on click.
fn key_tile(doc: &Document, key: &str) -> Result<Element, JsValue> {
    let tile = doc.create_element("div")?;
    tile.set_class_name("keyboard-tile");
    let key = key.to_string();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        if let Some(doc) = window().and_then(|w| w.document()) {
            if let Err(err) = dispatch_key(&doc, &key) {
                log::error!("virtual key {:?} failed: {:?}", key, err);
            }
        }
    }) as Box<dyn FnMut(_)>);
    tile.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(tile)
}

/// Fire a synthetic `keydown` on the document, indistinguishable from a
/// physical press as far as the controller is concerned.
pub fn dispatch_key(doc: &Document, key: &str) -> Result<(), JsValue> {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let evt = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)?;
    doc.dispatch_event(&evt)?;
    Ok(())
}

fn container(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing container #{}", id)))
}
