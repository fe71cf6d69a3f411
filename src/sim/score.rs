//! Score thresholds
//!
//! Scores are never clamped: a catch can land past a threshold (105, -55).

use super::state::{DropKind, EndReason};
use crate::consts::{LOSS_SCORE, WIN_SCORE};

/// Terminal outcome for a score, if any
pub fn score_outcome(score: i32) -> Option<EndReason> {
    if score >= WIN_SCORE {
        Some(EndReason::Won)
    } else if score <= LOSS_SCORE {
        Some(EndReason::Lost)
    } else {
        None
    }
}

/// Apply one catch to a running score and report whether it is now terminal
pub fn apply_catch(score: &mut i32, kind: DropKind) -> Option<EndReason> {
    *score += kind.score_delta();
    score_outcome(*score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(score_outcome(0), None);
        assert_eq!(score_outcome(99), None);
        assert_eq!(score_outcome(100), Some(EndReason::Won));
        assert_eq!(score_outcome(105), Some(EndReason::Won));
        assert_eq!(score_outcome(-49), None);
        assert_eq!(score_outcome(-50), Some(EndReason::Lost));
        assert_eq!(score_outcome(-55), Some(EndReason::Lost));
    }

    #[test]
    fn test_apply_catch() {
        let mut score = 90;
        assert_eq!(apply_catch(&mut score, DropKind::Water), Some(EndReason::Won));
        assert_eq!(score, 100);

        let mut score = -40;
        assert_eq!(apply_catch(&mut score, DropKind::Bomb), Some(EndReason::Lost));
        assert_eq!(score, -50);

        let mut score = 0;
        assert_eq!(apply_catch(&mut score, DropKind::Bomb), None);
        assert_eq!(score, -10);
    }
}
