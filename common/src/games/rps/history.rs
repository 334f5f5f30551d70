use std::collections::BTreeMap;

use super::{Move, RuleSetKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovePair {
    pub human: Move,
    pub computer: Move,
}

#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    rounds: BTreeMap<RuleSetKind, Vec<MovePair>>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: RuleSetKind, human: Move, computer: Move) {
        self.rounds.entry(kind).or_default().push(MovePair { human, computer });
    }

    pub fn get(&self, kind: RuleSetKind) -> &[MovePair] {
        self.rounds.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_kept_per_rule_set_in_order() {
        let mut history = MoveHistory::new();
        assert!(history.is_empty());

        history.record(RuleSetKind::Classic, Move::Rock, Move::Paper);
        history.record(RuleSetKind::LizardSpock, Move::Spock, Move::Lizard);
        history.record(RuleSetKind::Classic, Move::Scissors, Move::Dynamite);

        assert!(!history.is_empty());
        assert_eq!(
            history.get(RuleSetKind::Classic),
            &[
                MovePair { human: Move::Rock, computer: Move::Paper },
                MovePair { human: Move::Scissors, computer: Move::Dynamite },
            ]
        );
        assert_eq!(history.get(RuleSetKind::LizardSpock).len(), 1);
    }

    #[test]
    fn test_unplayed_rule_set_has_empty_history() {
        let history = MoveHistory::new();
        assert!(history.get(RuleSetKind::LizardSpock).is_empty());
    }
}
