use crate::games::{SessionRng, Side};

use super::{Move, PlayedRound, RuleSet, moves_that_beat};

const COMPUTER_NAMES: [&str; 3] = ["GoBot", "Optimus Prime", "Johnny 5"];

const NOUNS: &[&str] = &[
    "trousers", "cough", "trip", "hands", "wound", "pigs", "carriage", "shirt", "territory",
    "blade", "string", "error", "effect", "touch", "watch", "locket", "swim", "structure",
    "minister", "hole", "dock", "arch", "underwear", "summer", "eye", "rake", "screw",
    "cherries", "basketball", "can", "metal", "dogs", "key", "taste", "whistle", "leather",
    "pig", "plate", "scent", "boundary", "passenger", "plot", "adjustment", "cattle", "needle",
    "authority", "ocean", "quince", "range", "oatmeal", "root", "bridge", "flag", "whip", "cub",
    "protest", "quicksand", "stream", "reading", "thought", "frogs", "belief", "profit",
    "society", "soup", "sock", "button", "run", "exchange", "pies", "way", "camp", "skate",
    "pear", "shape", "tax", "hall", "brake", "country", "water", "reward", "jeans",
    "invention", "ducks", "crime", "pipe", "pollution", "duck", "song", "produce", "marble",
    "title", "creature", "fish", "toad", "wool", "skin", "spark", "plants", "afterthought",
];

pub struct StrategyContext<'a> {
    pub last_round: Option<PlayedRound>,
    pub rules: &'a RuleSet,
}

impl StrategyContext<'_> {
    pub fn last_human(&self) -> Option<Move> {
        self.last_round.map(|round| round.human)
    }

    pub fn last_computer(&self) -> Option<Move> {
        self.last_round.map(|round| round.computer)
    }
}

pub trait ComputerStrategy {
    fn choose_move(&self, context: &StrategyContext<'_>, rng: &mut SessionRng) -> Move;
}

fn random_move(rules: &RuleSet, rng: &mut SessionRng) -> Move {
    rng.choose(rules.moves()).copied().unwrap_or(Move::Rock)
}

pub struct RandomComputer;

impl ComputerStrategy for RandomComputer {
    fn choose_move(&self, context: &StrategyContext<'_>, rng: &mut SessionRng) -> Move {
        random_move(context.rules, rng)
    }
}

pub struct ScissorsBot;

impl ScissorsBot {
    fn after_computer_win(computer_last: Move, rules: &RuleSet) -> Option<Move> {
        let expected_human = moves_that_beat(computer_last, rules).ok()?;

        let mut counts: Vec<(Move, usize)> = rules.moves().iter().map(|&mv| (mv, 0)).collect();
        for expected in expected_human {
            for answer in moves_that_beat(expected, rules).ok()? {
                if let Some(entry) = counts.iter_mut().find(|(mv, _)| *mv == answer) {
                    entry.1 += 1;
                }
            }
        }

        let best = counts.iter().map(|&(_, count)| count).max()?;
        if best == 0 {
            return None;
        }
        counts.into_iter().find(|&(_, count)| count == best).map(|(mv, _)| mv)
    }

    fn after_human_win(human_last: Move, rules: &RuleSet, rng: &mut SessionRng) -> Option<Move> {
        let answers = moves_that_beat(human_last, rules).ok()?;
        rng.choose(&answers).copied()
    }
}

impl ComputerStrategy for ScissorsBot {
    fn choose_move(&self, context: &StrategyContext<'_>, rng: &mut SessionRng) -> Move {
        let rules = context.rules;
        let planned = match context.last_round {
            Some(round) => match round.winner {
                Some(Side::Computer) => Self::after_computer_win(round.computer, rules),
                Some(Side::Human) => Self::after_human_win(round.human, rules, rng),
                None => None,
            },
            None => None,
        };
        planned.unwrap_or_else(|| random_move(rules, rng))
    }
}

pub struct CopyBot;

impl ComputerStrategy for CopyBot {
    fn choose_move(&self, context: &StrategyContext<'_>, _rng: &mut SessionRng) -> Move {
        context.last_human().unwrap_or(Move::Rock)
    }
}

pub struct Terminator;

impl ComputerStrategy for Terminator {
    fn choose_move(&self, _context: &StrategyContext<'_>, _rng: &mut SessionRng) -> Move {
        Move::Dynamite
    }
}

pub struct RandoBot;

impl ComputerStrategy for RandoBot {
    fn choose_move(&self, _context: &StrategyContext<'_>, rng: &mut SessionRng) -> Move {
        rng.choose(NOUNS).map(|&noun| Move::Noun(noun)).unwrap_or(Move::Noun("sock"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Personality {
    Computer,
    ScissorsBot,
    CopyBot,
    Terminator,
    RandoBot,
}

impl Personality {
    pub const ALL: [Personality; 5] = [
        Personality::Computer,
        Personality::ScissorsBot,
        Personality::CopyBot,
        Personality::Terminator,
        Personality::RandoBot,
    ];

    pub fn random(rng: &mut SessionRng) -> Self {
        rng.choose(&Self::ALL).copied().unwrap_or(Personality::Computer)
    }

    pub fn strategy(&self) -> Box<dyn ComputerStrategy> {
        match self {
            Personality::Computer => Box::new(RandomComputer),
            Personality::ScissorsBot => Box::new(ScissorsBot),
            Personality::CopyBot => Box::new(CopyBot),
            Personality::Terminator => Box::new(Terminator),
            Personality::RandoBot => Box::new(RandoBot),
        }
    }

    pub fn pick_name(&self, rng: &mut SessionRng) -> &'static str {
        match self {
            Personality::Computer => rng.choose(&COMPUTER_NAMES).copied().unwrap_or("GoBot"),
            Personality::ScissorsBot => "ScissorsBot",
            Personality::CopyBot => "Copybot",
            Personality::Terminator => "Terminator",
            Personality::RandoBot => "Randobot",
        }
    }
}
