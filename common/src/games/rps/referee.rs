use crate::games::Side;

use super::{Move, Outcome, RpsError, RuleSet, resolve};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedRound {
    pub human: Move,
    pub computer: Move,
    pub winner: Option<Side>,
}

pub fn judge_round(
    human: Move,
    computer: Move,
    rules: &RuleSet,
) -> Result<(PlayedRound, Option<String>), RpsError> {
    if !rules.contains(human) {
        return Err(RpsError::UnknownMove(human.to_string()));
    }

    let (winner, line) = if computer == Move::Dynamite {
        (Some(Side::Computer), Some("BOOM!".to_string()))
    } else if !rules.contains(computer) {
        (Some(Side::Human), Some(format!("{} beats {}.", human.title(), computer)))
    } else {
        let resolution = resolve(human, computer, rules)?;
        let winner = match resolution.outcome {
            Outcome::A => Some(Side::Human),
            Outcome::B => Some(Side::Computer),
            Outcome::Tie => None,
        };
        (winner, resolution.line.map(str::to_string))
    };

    Ok((PlayedRound { human, computer, winner }, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_round_uses_rules() {
        let rules = RuleSet::lizard_spock();
        let (round, line) = judge_round(Move::Spock, Move::Scissors, &rules).unwrap();
        assert_eq!(round.winner, Some(Side::Human));
        assert_eq!(line.as_deref(), Some("Spock smashes scissors."));

        let (round, _) = judge_round(Move::Rock, Move::Paper, &rules).unwrap();
        assert_eq!(round.winner, Some(Side::Computer));
    }

    #[test]
    fn test_tie_has_no_line() {
        let rules = RuleSet::classic();
        let (round, line) = judge_round(Move::Paper, Move::Paper, &rules).unwrap();
        assert_eq!(round.winner, None);
        assert_eq!(line, None);
    }

    #[test]
    fn test_dynamite_always_wins() {
        let rules = RuleSet::classic();
        for &mv in rules.moves() {
            let (round, line) = judge_round(mv, Move::Dynamite, &rules).unwrap();
            assert_eq!(round.winner, Some(Side::Computer));
            assert_eq!(line.as_deref(), Some("BOOM!"));
        }
    }

    #[test]
    fn test_nonsense_always_loses() {
        let rules = RuleSet::lizard_spock();
        let (round, line) = judge_round(Move::Lizard, Move::Noun("trousers"), &rules).unwrap();
        assert_eq!(round.winner, Some(Side::Human));
        assert_eq!(line.as_deref(), Some("Lizard beats trousers."));
    }

    #[test]
    fn test_human_must_play_by_the_rules() {
        let rules = RuleSet::classic();
        assert!(judge_round(Move::Spock, Move::Rock, &rules).is_err());
    }
}
