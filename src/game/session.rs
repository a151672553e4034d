use super::{Action, Board, COLS, ROWS, TileStatus, evaluate_guess};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// What a single action changed. The DOM layer mirrors these onto the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Action had no effect (full row, empty row, or game already over).
    Ignored,
    Typed { row: usize, col: usize, letter: char },
    Erased { row: usize, col: usize },
    /// Submit with a partially filled row; cursor untouched.
    NotEnoughLetters,
    Evaluated {
        row: usize,
        guess: String,
        statuses: [TileStatus; COLS],
        outcome: Outcome,
    },
}

/// One play-through: target word, board and cursor.
///
/// The outcome is never stored; it is read back from the board and the cursor
/// row so there is a single source of truth.
#[derive(Clone, Debug)]
pub struct Session {
    target: String,
    board: Board,
    row: usize,
    col: usize,
}

impl Session {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into().to_ascii_uppercase(),
            board: Board::new(),
            row: 0,
            col: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Next writable cell as `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn outcome(&self) -> Outcome {
        if self.row >= ROWS {
            Outcome::Lost
        } else if self.board.row_solved(self.row) {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    pub fn handle(&mut self, action: Action) -> Transition {
        if self.outcome() != Outcome::InProgress {
            return Transition::Ignored;
        }
        match action {
            Action::Letter(c) => {
                if self.col >= COLS {
                    return Transition::Ignored;
                }
                let letter = c.to_ascii_uppercase();
                let (row, col) = (self.row, self.col);
                self.board.set_letter(row, col, Some(letter));
                self.col += 1;
                Transition::Typed { row, col, letter }
            }
            Action::Backspace => {
                if self.col == 0 {
                    return Transition::Ignored;
                }
                self.col -= 1;
                self.board.set_letter(self.row, self.col, None);
                Transition::Erased {
                    row: self.row,
                    col: self.col,
                }
            }
            Action::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Transition {
        let row = self.row;
        let Some(guess) = self.board.row_word(row) else {
            return Transition::NotEnoughLetters;
        };
        let statuses = evaluate_guess(&self.target, &guess);
        self.board.set_statuses(row, &statuses);
        if !self.board.row_solved(row) {
            self.col = 0;
            self.row += 1;
        }
        Transition::Evaluated {
            row,
            guess,
            statuses,
            outcome: self.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(s: &mut Session, word: &str) {
        for c in word.chars() {
            s.handle(Action::Letter(c));
        }
    }

    #[test]
    fn typing_advances_cursor() {
        let mut s = Session::new("CRANE");
        assert_eq!(
            s.handle(Action::Letter('c')),
            Transition::Typed {
                row: 0,
                col: 0,
                letter: 'C',
            }
        );
        assert_eq!(s.cursor(), (0, 1));
        assert_eq!(s.board().cell(0, 0).letter, Some('C'));
    }

    #[test]
    fn backspace_clears_previous_cell() {
        let mut s = Session::new("CRANE");
        type_word(&mut s, "CR");
        assert_eq!(s.handle(Action::Backspace), Transition::Erased { row: 0, col: 1 });
        assert_eq!(s.cursor(), (0, 1));
        assert_eq!(s.board().cell(0, 1).letter, None);
    }

    #[test]
    fn submit_short_row_keeps_cursor() {
        let mut s = Session::new("CRANE");
        type_word(&mut s, "CRA");
        assert_eq!(s.handle(Action::Submit), Transition::NotEnoughLetters);
        assert_eq!(s.cursor(), (0, 3));
        assert_eq!(s.outcome(), Outcome::InProgress);
    }

    #[test]
    fn lowercase_target_is_normalized() {
        let mut s = Session::new("crane");
        type_word(&mut s, "crane");
        match s.handle(Action::Submit) {
            Transition::Evaluated { outcome, .. } => assert_eq!(outcome, Outcome::Won),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(s.target(), "CRANE");
    }

    #[test]
    fn submitted_row_is_frozen() {
        let mut s = Session::new("CRANE");
        type_word(&mut s, "PLATE");
        s.handle(Action::Submit);
        assert_eq!(s.cursor(), (1, 0));
        // backspace on the new row cannot reach the submitted one
        assert_eq!(s.handle(Action::Backspace), Transition::Ignored);
        assert_eq!(s.board().row_word(0).as_deref(), Some("PLATE"));
    }
}
