/// Logical input understood by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Backspace,
    Submit,
}

/// The parts of a `keydown` event the game cares about. Built from a
/// `web_sys::KeyboardEvent` by the controller, or by hand in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub repeat: bool,
    pub composing: bool,
}

impl KeyInput {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    fn has_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta || self.repeat || self.composing
    }
}

impl Action {
    /// Map a key event to an action. Modified, repeated and IME keys and
    /// anything that isn't a single ASCII letter, Enter or Backspace map to
    /// `None`.
    pub fn from_key(input: &KeyInput) -> Option<Action> {
        if input.has_modifier() {
            return None;
        }
        match input.key.as_str() {
            "Enter" => Some(Action::Submit),
            "Backspace" => Some(Action::Backspace),
            key => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Action::Letter(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}
