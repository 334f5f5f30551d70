use super::{Move, RpsError, RuleSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub line: Option<&'static str>,
}

pub fn resolve(a: Move, b: Move, rules: &RuleSet) -> Result<Resolution, RpsError> {
    for mv in [a, b] {
        if !rules.contains(mv) {
            return Err(RpsError::UnknownMove(mv.to_string()));
        }
    }

    if a == b {
        return Ok(Resolution {
            outcome: Outcome::Tie,
            line: None,
        });
    }

    let beat = rules.beat(a, b).ok_or(RpsError::IncompleteRuleSet(a, b))?;
    let outcome = if beat.winner == a { Outcome::A } else { Outcome::B };
    Ok(Resolution {
        outcome,
        line: Some(beat.line),
    })
}

pub fn moves_that_beat(target: Move, rules: &RuleSet) -> Result<Vec<Move>, RpsError> {
    let mut winners = Vec::new();
    for &candidate in rules.moves() {
        if resolve(candidate, target, rules)?.outcome == Outcome::A {
            winners.push(candidate);
        }
    }
    Ok(winners)
}
