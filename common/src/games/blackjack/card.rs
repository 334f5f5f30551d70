use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn base_value(self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => Card::ACE_HIGH,
            number => number as u32,
        }
    }
}

// A dealt card. Only an ace's value ever changes, from 11 down to 1, and only
// through `Hand::adjust_aces`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    value: u32,
}

impl Card {
    pub const ACE_HIGH: u32 = 11;
    pub const ACE_LOW: u32 = 1;

    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            value: rank.base_value(),
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_high_ace(&self) -> bool {
        self.rank == Rank::Ace && self.value == Self::ACE_HIGH
    }

    pub(super) fn soften(&mut self) -> bool {
        if !self.is_high_ace() {
            return false;
        }
        self.value = Self::ACE_LOW;
        true
    }

    pub fn same_card(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    pub fn describe(&self) -> String {
        let article = match self.rank {
            Rank::Eight | Rank::Ace => "an",
            _ => "a",
        };
        format!("{} {}", article, self)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("Jack"),
            Rank::Queen => f.write_str("Queen"),
            Rank::King => f.write_str("King"),
            Rank::Ace => f.write_str("Ace"),
            number => write!(f, "{}", *number as u32),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_values() {
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).value(), 2);
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).value(), 10);
        assert_eq!(Card::new(Rank::Jack, Suit::Spades).value(), 10);
        assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).value(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Hearts).value(), 10);
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).value(), 11);
    }

    #[test]
    fn test_only_high_ace_softens() {
        let mut king = Card::new(Rank::King, Suit::Hearts);
        assert!(!king.soften());
        assert_eq!(king.value(), 10);

        let mut ace = Card::new(Rank::Ace, Suit::Spades);
        assert!(ace.soften());
        assert_eq!(ace.value(), 1);
        assert!(!ace.soften());
        assert_eq!(ace.value(), 1);
    }

    #[test]
    fn test_describe_uses_article() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).describe(), "an Ace of Spades");
        assert_eq!(Card::new(Rank::Eight, Suit::Clubs).describe(), "an 8 of Clubs");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).describe(), "a 10 of Hearts");
        assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).describe(), "a Queen of Diamonds");
    }
}
