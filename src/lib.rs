//! Wordle clone core crate.
//!
//! The page calls `start_game()` once. It fetches the target word, and only
//! after the word arrives builds the guess grid and keyboard and starts
//! listening for keys. A failed fetch leaves the page with an error notice and
//! no board.
//!
//! `game` holds the DOM-free rules (evaluation, cursor state machine) and is
//! usable natively; `board` is the thin web-sys layer on top.

use wasm_bindgen::prelude::*;
use web_sys::window;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod word_source;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Action, Outcome, Session, TileStatus, Transition};

pub const FETCH_FAILED_MESSAGE: &str = "Unable to pull word from server";

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Fetch the word and set up the board. Call once per page: the grid and
/// keyboard are appended on every call.
#[wasm_bindgen]
pub async fn start_game() -> Result<(), JsValue> {
    run(GameConfig::default()).await
}

/// Like `start_game`, with a JSON object overriding any `GameConfig` fields.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub async fn start_game_with_config(json: String) -> Result<(), JsValue> {
    let config = GameConfig::from_json(&json)?;
    run(config).await
}

async fn run(config: GameConfig) -> Result<(), JsValue> {
    logging::init(config.level_filter());
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let notice = board::notice::Notice::find(&doc, &config.notice_id, config.notice_dismiss_ms)?;

    let word = match word_source::fetch_word(&config.word_endpoint).await {
        Ok(word) => word,
        Err(err) => {
            // Fetch failure is terminal: no board, no listener.
            log::error!("{}", err);
            notice.show(FETCH_FAILED_MESSAGE)?;
            return Ok(());
        }
    };
    log::debug!("target word received");

    board::build_grid(&doc, &config.grid_container_id)?;
    board::build_keyboard(&doc, &config.keyboard_container_id)?;
    board::controller::attach(&doc, Session::new(word), notice)?;
    log::info!("game ready");
    Ok(())
}
