use crate::games::{MatchScore, SessionRng, Side};

use super::{
    ComputerStrategy, Move, MoveHistory, Personality, PlayedRound, RpsError, RuleSet,
    RuleSetKind, StrategyContext, judge_round,
};

// Strategies see this before the first throw of every match.
const OPENING_ROUND: PlayedRound = PlayedRound {
    human: Move::Rock,
    computer: Move::Rock,
    winner: Some(Side::Human),
};

pub struct RpsMatch {
    rules: RuleSet,
    computer_name: &'static str,
    strategy: Box<dyn ComputerStrategy>,
    score: MatchScore,
    last_round: Option<PlayedRound>,
}

impl RpsMatch {
    pub fn new(kind: RuleSetKind, personality: Personality, wins_needed: u32, rng: &mut SessionRng) -> Self {
        let computer_name = personality.pick_name(rng);
        crate::log!("New {} match against {:?} ({})", kind.title(), personality, computer_name);
        Self {
            rules: kind.rule_set(),
            computer_name,
            strategy: personality.strategy(),
            score: MatchScore::new(wins_needed),
            last_round: Some(OPENING_ROUND),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn computer_name(&self) -> &'static str {
        self.computer_name
    }

    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    pub fn champion(&self) -> Option<Side> {
        self.score.champion()
    }

    pub fn play_round(
        &mut self,
        human: Move,
        history: &mut MoveHistory,
        rng: &mut SessionRng,
    ) -> Result<(PlayedRound, Option<String>), RpsError> {
        if !self.rules.contains(human) {
            return Err(RpsError::UnknownMove(human.to_string()));
        }

        let context = StrategyContext {
            last_round: self.last_round,
            rules: &self.rules,
        };
        let computer = self.strategy.choose_move(&context, rng);
        crate::log!("{} throws {}", self.computer_name, computer);

        let (round, line) = judge_round(human, computer, &self.rules)?;
        history.record(self.rules.kind(), human, computer);
        self.score.record(round.winner);
        self.last_round = Some(round);
        Ok((round, line))
    }
}
