use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("word request failed: {0}")]
    WordFetch(String),
    #[error("server returned {0:?}, expected a five letter word")]
    InvalidWord(String),
    #[error("dom: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl GameError {
    /// Stringify a rejected JS promise / thrown value.
    pub fn word_fetch(err: JsValue) -> Self {
        GameError::WordFetch(js_detail(&err))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn js_detail(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let e = GameError::InvalidWord("TOOLONG".into());
        assert_eq!(
            e.to_string(),
            "server returned \"TOOLONG\", expected a five letter word"
        );
        assert_eq!(GameError::WordFetch("404".into()).to_string(), "word request failed: 404");
    }
}
