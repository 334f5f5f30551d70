use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Move, RpsError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSetKind {
    Classic,
    LizardSpock,
}

impl RuleSetKind {
    pub const ALL: [RuleSetKind; 2] = [RuleSetKind::Classic, RuleSetKind::LizardSpock];

    pub fn title(&self) -> &'static str {
        match self {
            RuleSetKind::Classic => "Rock Paper Scissors",
            RuleSetKind::LizardSpock => "Rock Paper Scissors Lizard Spock",
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        match self {
            RuleSetKind::Classic => RuleSet::classic(),
            RuleSetKind::LizardSpock => RuleSet::lizard_spock(),
        }
    }
}

// (winner, loser, description)
type Rule = (Move, Move, &'static str);

const CLASSIC_MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

const CLASSIC_RULES: [Rule; 3] = [
    (Move::Paper, Move::Rock, "Paper covers rock."),
    (Move::Scissors, Move::Paper, "Scissors cut paper."),
    (Move::Rock, Move::Scissors, "Rock crushes scissors."),
];

const LIZARD_SPOCK_MOVES: [Move; 5] = [
    Move::Rock,
    Move::Paper,
    Move::Scissors,
    Move::Spock,
    Move::Lizard,
];

const LIZARD_SPOCK_RULES: [Rule; 10] = [
    (Move::Paper, Move::Rock, "Paper covers rock."),
    (Move::Scissors, Move::Paper, "Scissors cut paper."),
    (Move::Paper, Move::Spock, "Paper disproves Spock."),
    (Move::Lizard, Move::Paper, "Lizard eats paper."),
    (Move::Rock, Move::Scissors, "Rock crushes scissors."),
    (Move::Spock, Move::Rock, "Spock vaporizes rock."),
    (Move::Rock, Move::Lizard, "Rock crushes lizard."),
    (Move::Lizard, Move::Spock, "Lizard poisons Spock."),
    (Move::Scissors, Move::Lizard, "Scissors decapitate lizard."),
    (Move::Spock, Move::Scissors, "Spock smashes scissors."),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Beat {
    pub winner: Move,
    pub line: &'static str,
}

#[derive(Clone, Debug)]
pub struct RuleSet {
    kind: RuleSetKind,
    moves: Vec<Move>,
    rules: Vec<Rule>,
    relation: HashMap<(Move, Move), Beat>,
}

fn pair_key(a: Move, b: Move) -> (Move, Move) {
    if a <= b { (a, b) } else { (b, a) }
}

impl RuleSet {
    pub fn classic() -> Self {
        Self::build(RuleSetKind::Classic, CLASSIC_MOVES.to_vec(), CLASSIC_RULES.to_vec())
    }

    pub fn lizard_spock() -> Self {
        Self::build(
            RuleSetKind::LizardSpock,
            LIZARD_SPOCK_MOVES.to_vec(),
            LIZARD_SPOCK_RULES.to_vec(),
        )
    }

    pub fn from_rules(
        kind: RuleSetKind,
        moves: Vec<Move>,
        rules: Vec<(Move, Move, &'static str)>,
    ) -> Result<Self, RpsError> {
        let rule_set = Self::build(kind, moves, rules);
        rule_set.validate()?;
        Ok(rule_set)
    }

    fn build(kind: RuleSetKind, moves: Vec<Move>, rules: Vec<Rule>) -> Self {
        let relation = rules
            .iter()
            .map(|&(winner, loser, line)| (pair_key(winner, loser), Beat { winner, line }))
            .collect();
        Self {
            kind,
            moves,
            rules,
            relation,
        }
    }

    pub fn validate(&self) -> Result<(), RpsError> {
        if self.relation.len() != self.rules.len() {
            return Err(RpsError::InvalidRule(format!(
                "{} rules given but only {} distinct pairs",
                self.rules.len(),
                self.relation.len()
            )));
        }

        for &(winner, loser, line) in &self.rules {
            if winner == loser {
                return Err(RpsError::InvalidRule(format!("'{}' pits {} against itself", line, winner)));
            }
            for side in [winner, loser] {
                if !self.contains(side) {
                    return Err(RpsError::UnknownMove(side.to_string()));
                }
            }
        }

        for (i, &a) in self.moves.iter().enumerate() {
            for &b in &self.moves[i + 1..] {
                if !self.relation.contains_key(&pair_key(a, b)) {
                    return Err(RpsError::IncompleteRuleSet(a, b));
                }
            }
        }

        Ok(())
    }

    pub fn kind(&self) -> RuleSetKind {
        self.kind
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }

    pub fn beat(&self, a: Move, b: Move) -> Option<&Beat> {
        self.relation.get(&pair_key(a, b))
    }

    pub fn lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|&(_, _, line)| line)
    }

    pub fn parse_move(&self, input: &str) -> Result<Move, RpsError> {
        let choice = input.trim().to_lowercase();
        self.moves
            .iter()
            .copied()
            .find(|mv| mv.name() == choice || mv.short_name() == choice)
            .ok_or(RpsError::UnknownMove(choice))
    }
}
