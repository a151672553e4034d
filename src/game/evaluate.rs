use super::{COLS, TileStatus};

/// Classify each guess letter against the target.
///
/// Exact positional matches are `Correct`; a letter found anywhere else in the
/// target is `Present`; everything else is `Absent`. Repeated guess letters are
/// checked independently, so a doubled letter whose target holds only one copy
/// is reported `Present` (or `Correct`) at both positions.
///
/// Only the first `COLS` letters of `guess` are classified; use [`is_solved`]
/// to decide a win.
pub fn evaluate_guess(target: &str, guess: &str) -> [TileStatus; COLS] {
    let target: Vec<char> = target.chars().collect();
    let mut out = [TileStatus::Absent; COLS];
    for (i, g) in guess.chars().take(COLS).enumerate() {
        out[i] = if target.get(i) == Some(&g) {
            TileStatus::Correct
        } else if target.contains(&g) {
            TileStatus::Present
        } else {
            TileStatus::Absent
        };
    }
    out
}

pub fn count_correct(statuses: &[TileStatus; COLS]) -> usize {
    statuses
        .iter()
        .filter(|s| **s == TileStatus::Correct)
        .count()
}

/// True iff `guess` equals `target` and both are `COLS` letters long.
pub fn is_solved(target: &str, guess: &str) -> bool {
    guess.chars().count() == COLS
        && target.chars().count() == COLS
        && count_correct(&evaluate_guess(target, guess)) == COLS
}

#[cfg(test)]
mod tests {
    use super::*;
    use TileStatus::*;

    #[test]
    fn exact_guess_is_all_correct() {
        let r = evaluate_guess("CRANE", "CRANE");
        assert_eq!(r, [Correct; 5]);
        assert_eq!(count_correct(&r), 5);
    }

    #[test]
    fn longer_or_shorter_guess_never_solves() {
        assert_eq!(count_correct(&evaluate_guess("CRANE", "CRANES")), COLS);
        assert!(!is_solved("CRANE", "CRANES"));
        assert!(!is_solved("CRANE", "CRAN"));
        assert!(!is_solved("CRANES", "CRANE"));
        assert!(is_solved("CRANE", "CRANE"));
    }

    #[test]
    fn plate_against_crane() {
        let r = evaluate_guess("CRANE", "PLATE");
        assert_eq!(r, [Absent, Absent, Correct, Absent, Correct]);
        assert_eq!(count_correct(&r), 2);
    }

    #[test]
    fn misplaced_letters_are_present() {
        let r = evaluate_guess("CRANE", "NACRE");
        assert_eq!(r, [Present, Present, Present, Present, Correct]);
    }

    #[test]
    fn repeated_letter_checked_independently() {
        // target has a single E, both guess Es are flagged
        let r = evaluate_guess("CRANE", "EERIE");
        assert_eq!(r, [Present, Present, Present, Absent, Correct]);
    }

    #[test]
    fn correct_count_matches_positional_equality() {
        let words = ["CRANE", "PLATE", "SLATE", "CRATE", "TRACE", "AAAAA", "ZZZZZ"];
        for t in words {
            for g in words {
                let r = evaluate_guess(t, g);
                let expected = t.chars().zip(g.chars()).filter(|(a, b)| a == b).count();
                assert_eq!(count_correct(&r), expected, "{} vs {}", g, t);
                assert_eq!(count_correct(&r) == COLS, t == g);
                assert_eq!(is_solved(t, g), t == g);
            }
        }
    }
}
