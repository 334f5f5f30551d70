mod error;
mod game;
mod history;
mod moves;
mod referee;
mod resolver;
mod ruleset;
mod strategy;

pub use error::RpsError;
pub use game::RpsMatch;
pub use history::{MoveHistory, MovePair};
pub use moves::Move;
pub use referee::{PlayedRound, judge_round};
pub use resolver::{Outcome, Resolution, moves_that_beat, resolve};
pub use ruleset::{Beat, RuleSet, RuleSetKind};
pub use strategy::{
    ComputerStrategy, CopyBot, Personality, RandoBot, RandomComputer, ScissorsBot,
    StrategyContext, Terminator,
};
