#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchScore {
    wins_needed: u32,
    human: u32,
    computer: u32,
}

impl MatchScore {
    pub fn new(wins_needed: u32) -> Self {
        Self {
            wins_needed: wins_needed.max(1),
            human: 0,
            computer: 0,
        }
    }

    pub fn wins_needed(&self) -> u32 {
        self.wins_needed
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    pub fn record(&mut self, winner: Option<Side>) {
        if self.champion().is_some() {
            return;
        }
        match winner {
            Some(Side::Human) => self.human += 1,
            Some(Side::Computer) => self.computer += 1,
            None => {}
        }
    }

    pub fn champion(&self) -> Option<Side> {
        if self.human >= self.wins_needed {
            Some(Side::Human)
        } else if self.computer >= self.wins_needed {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.human = 0;
        self.computer = 0;
    }
}
