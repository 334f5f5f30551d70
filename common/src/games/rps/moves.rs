use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
    Dynamite,
    Noun(&'static str),
}

impl Move {
    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
            Move::Dynamite => "dynamite",
            Move::Noun(noun) => *noun,
        }
    }

    pub fn short_name(&self) -> &'static str {
        let name = self.name();
        name.get(..2).unwrap_or(name)
    }

    pub fn title(&self) -> String {
        let mut chars = self.name().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
