//! DOM-free game model: board, cells, guess evaluation and the input state
//! machine. Everything here runs natively so it can be unit tested without a
//! browser.

mod evaluate;
mod input;
mod session;

pub use evaluate::{count_correct, evaluate_guess, is_solved};
pub use input::{Action, KeyInput};
pub use session::{Outcome, Session, Transition};

/// Number of guesses a player gets.
pub const ROWS: usize = 6;
/// Letters per word.
pub const COLS: usize = 5;

// --- Cells -------------------------------------------------------------------

/// Evaluation state of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileStatus {
    #[default]
    Empty,
    Correct,
    /// Letter is in the target but at another position.
    Present,
    Absent,
}

impl TileStatus {
    /// CSS class applied to a submitted cell. `Empty` cells carry none.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TileStatus::Empty => None,
            TileStatus::Correct => Some("correct"),
            TileStatus::Present => Some("almost"),
            TileStatus::Absent => Some("wrong"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: TileStatus,
}

// --- Board -------------------------------------------------------------------

/// Fixed 6x5 grid, row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    pub fn row(&self, row: usize) -> &[Cell; COLS] {
        &self.cells[row]
    }

    /// Concatenated letters of a row, or `None` while any cell is blank.
    pub fn row_word(&self, row: usize) -> Option<String> {
        self.cells[row].iter().map(|c| c.letter).collect()
    }

    /// True once a row has been submitted and every cell matched.
    pub fn row_solved(&self, row: usize) -> bool {
        self.cells[row]
            .iter()
            .all(|c| c.status == TileStatus::Correct)
    }

    fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.cells[row][col].letter = letter;
    }

    fn set_statuses(&mut self, row: usize, statuses: &[TileStatus; COLS]) {
        for (cell, status) in self.cells[row].iter_mut().zip(statuses) {
            cell.status = *status;
        }
    }
}

/// Deterministic DOM id of a guess cell.
pub fn box_id(row: usize, col: usize) -> String {
    format!("guess-box-{}-{}", row, col)
}
