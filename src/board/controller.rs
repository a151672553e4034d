//! Keyboard wiring. One `keydown` listener on the document feeds every key,
//! physical or virtual, into the session and mirrors the resulting transition
//! onto the page.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, KeyboardEvent, window};

use super::notice::Notice;
use super::{render_guess_result, set_cell_letter};
use crate::game::{Action, KeyInput, Outcome, Session, Transition};

pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters";
pub const WIN_MESSAGE: &str = "Well done!";

struct GameState {
    session: Session,
    notice: Notice,
}

thread_local! {
    static GAME_STATE: RefCell<Option<GameState>> = const { RefCell::new(None) };
}

/// Take ownership of the session and start listening for keys. The document
/// listener is installed once; a later call only swaps in the new session.
pub fn attach(doc: &Document, session: Session, notice: Notice) -> Result<(), JsValue> {
    let already_listening = GAME_STATE
        .with(|g| g.replace(Some(GameState { session, notice })))
        .is_some();
    if already_listening {
        log::debug!("keydown listener already attached, session replaced");
        return Ok(());
    }

    let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        let Some(action) = Action::from_key(&key_input(&evt)) else {
            return;
        };
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        GAME_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                if let Err(err) = step(&doc, state, action) {
                    log::error!("input {:?} failed: {:?}", action, err);
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn key_input(evt: &KeyboardEvent) -> KeyInput {
    KeyInput {
        key: evt.key(),
        ctrl: evt.ctrl_key(),
        alt: evt.alt_key(),
        meta: evt.meta_key(),
        repeat: evt.repeat(),
        composing: evt.is_composing(),
    }
}

fn step(doc: &Document, state: &mut GameState, action: Action) -> Result<(), JsValue> {
    match state.session.handle(action) {
        Transition::Ignored => {}
        Transition::Typed { row, col, letter } => set_cell_letter(doc, row, col, Some(letter))?,
        Transition::Erased { row, col } => set_cell_letter(doc, row, col, None)?,
        Transition::NotEnoughLetters => state.notice.flash(NOT_ENOUGH_LETTERS)?,
        Transition::Evaluated {
            row,
            guess,
            outcome,
            ..
        } => {
            let solved = render_guess_result(doc, row, state.session.target(), &guess)?;
            debug_assert_eq!(solved, outcome == Outcome::Won);
            log::debug!("row {} guess {} -> {:?}", row, guess, outcome);
            match outcome {
                Outcome::Won => {
                    log::info!("solved in {} guesses", row + 1);
                    state.notice.show(WIN_MESSAGE)?;
                }
                Outcome::Lost => {
                    log::info!("out of guesses");
                    state.notice.show(&state.session.target().to_lowercase())?;
                }
                Outcome::InProgress => {}
            }
        }
    }
    Ok(())
}
