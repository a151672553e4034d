//! One-shot fetch of the target word.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, window};

use crate::error::GameError;
use crate::game::COLS;

/// GET `endpoint` and return its body as an uppercase five letter word.
/// No retry and no timeout.
pub async fn fetch_word(endpoint: &str) -> Result<String, GameError> {
    let win = window().ok_or_else(|| GameError::Dom("no window".into()))?;
    let resp: Response = JsFuture::from(win.fetch_with_str(endpoint))
        .await
        .map_err(GameError::word_fetch)?
        .dyn_into()
        .map_err(GameError::word_fetch)?;
    if !resp.ok() {
        return Err(GameError::WordFetch(format!(
            "{} {} from {}",
            resp.status(),
            resp.status_text(),
            endpoint
        )));
    }
    let body = JsFuture::from(resp.text().map_err(GameError::word_fetch)?)
        .await
        .map_err(GameError::word_fetch)?
        .as_string()
        .unwrap_or_default();
    normalize_word(&body)
}

/// Trim and uppercase a response body, rejecting anything that is not exactly
/// five ASCII letters.
pub fn normalize_word(body: &str) -> Result<String, GameError> {
    let word = body.trim();
    if word.len() == COLS && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(word.to_ascii_uppercase())
    } else {
        Err(GameError::InvalidWord(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_trimmed_and_uppercased() {
        assert_eq!(normalize_word("crane\n").unwrap(), "CRANE");
        assert_eq!(normalize_word("  Plate ").unwrap(), "PLATE");
    }

    #[test]
    fn bad_bodies_rejected() {
        for body in ["", "four", "sixsix", "cr4ne", "<html>", "cränë"] {
            assert!(
                matches!(normalize_word(body), Err(GameError::InvalidWord(_))),
                "{:?} accepted",
                body
            );
        }
    }
}
