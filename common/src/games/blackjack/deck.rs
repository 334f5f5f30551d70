use crate::games::SessionRng;

use super::{BlackjackError, Card, Hand, Rank, Suit};

pub const DECK_SIZE: usize = 52;

// A single 52-card deck. Cards leave from the top (the end of the vector)
// and are never put back.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn new_shuffled(rng: &mut SessionRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        crate::log!("Shuffled a new deck (session seed {})", rng.seed());
        deck
    }

    // Deck whose last card is dealt first.
    #[cfg(test)]
    pub(crate) fn stacked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn deal(&mut self, hand: &mut Hand) -> Result<Card, BlackjackError> {
        let card = self.cards.pop().ok_or(BlackjackError::EmptyDeck)?;
        hand.push(card);
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<(Rank, Suit)> =
            deck.cards.iter().map(|c| (c.rank(), c.suit())).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_shuffled_deck_is_a_permutation() {
        let mut rng = SessionRng::new(42);
        let deck = Deck::new_shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<(Rank, Suit)> =
            deck.cards.iter().map(|c| (c.rank(), c.suit())).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Deck::new_shuffled(&mut SessionRng::new(9));
        let b = Deck::new_shuffled(&mut SessionRng::new(9));
        assert_eq!(a.cards, b.cards);
    }

    #[test]
    fn test_deal_moves_one_card() {
        let mut rng = SessionRng::new(42);
        let mut deck = Deck::new_shuffled(&mut rng);
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for i in 0..DECK_SIZE {
            let hand = if i % 2 == 0 { &mut player } else { &mut dealer };
            let before_deck = deck.len();
            let before_hand = hand.len();
            let card = deck.deal(hand).unwrap();
            assert_eq!(deck.len(), before_deck - 1);
            assert_eq!(hand.len(), before_hand + 1);
            assert!(hand.cards().last().unwrap().same_card(&card));
            assert_eq!(deck.len() + player.len() + dealer.len(), DECK_SIZE);
        }
        assert!(deck.is_empty());
    }

    #[test]
    fn test_deal_from_empty_deck_leaves_hand_unchanged() {
        let mut deck = Deck::stacked(Vec::new());
        let mut hand = Hand::new();
        assert_eq!(deck.deal(&mut hand), Err(BlackjackError::EmptyDeck));
        assert!(hand.is_empty());
    }
}
