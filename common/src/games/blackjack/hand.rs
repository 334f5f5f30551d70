use super::Card;

pub const WIN_THRESHOLD: u32 = 21;
pub const DEALER_STAY_THRESHOLD: u32 = 17;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(super) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn total(&self) -> u32 {
        self.cards.iter().map(Card::value).sum()
    }

    // Softens high aces one at a time, in the order they were dealt, until
    // the hand is no longer bust. A hand at or under 21 is left alone.
    pub fn adjust_aces(&mut self) {
        for index in 0..self.cards.len() {
            if self.total() <= WIN_THRESHOLD {
                break;
            }
            self.cards[index].soften();
        }
    }

    pub fn is_bust(&self) -> bool {
        self.total() > WIN_THRESHOLD
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == WIN_THRESHOLD
    }

    pub fn dealer_should_hit(&self) -> bool {
        self.total() < DEALER_STAY_THRESHOLD
    }

    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::blackjack::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts)
    }

    fn values(hand: &Hand) -> Vec<u32> {
        hand.cards().iter().map(Card::value).collect()
    }

    #[test]
    fn test_ace_king_is_blackjack() {
        let mut hand = Hand::from_cards(vec![card(Rank::Ace), card(Rank::King)]);
        hand.adjust_aces();
        assert_eq!(hand.total(), 21);
        assert!(!hand.is_bust());
        assert!(hand.is_blackjack());
    }

    #[test]
    fn test_two_aces_and_nine_softens_exactly_one_ace() {
        let mut hand = Hand::from_cards(vec![card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)]);
        assert_eq!(hand.total(), 31);
        assert!(hand.is_bust());

        hand.adjust_aces();
        assert_eq!(values(&hand), vec![1, 11, 9]);
        assert_eq!(hand.total(), 21);
        assert!(!hand.is_bust());
    }

    #[test]
    fn test_pair_of_aces_becomes_twelve() {
        let mut hand = Hand::from_cards(vec![card(Rank::Ace), card(Rank::Ace)]);
        hand.adjust_aces();
        assert_eq!(hand.total(), 12);
    }

    #[test]
    fn test_adjust_aces_is_idempotent() {
        let mut hand = Hand::from_cards(vec![card(Rank::Ace), card(Rank::Six), card(Rank::Ace)]);
        hand.adjust_aces();
        let once = values(&hand);
        hand.adjust_aces();
        hand.adjust_aces();
        assert_eq!(values(&hand), once);
        assert_eq!(hand.total(), 18);
    }

    #[test]
    fn test_adjust_aces_leaves_unbusted_hand_alone() {
        let mut hand = Hand::from_cards(vec![card(Rank::Ace), card(Rank::Nine)]);
        hand.adjust_aces();
        assert_eq!(values(&hand), vec![11, 9]);
    }

    #[test]
    fn test_adjust_aces_cannot_save_hard_bust() {
        let mut hand = Hand::from_cards(vec![card(Rank::King), card(Rank::Queen), card(Rank::Ace), card(Rank::Five)]);
        hand.adjust_aces();
        assert_eq!(hand.total(), 26);
        assert!(hand.is_bust());
    }

    #[test]
    fn test_adjust_aces_idempotent_for_every_ace_hand_of_four() {
        let ranks = Rank::ALL;
        for a in ranks {
            for b in ranks {
                for c in ranks {
                    let mut hand = Hand::from_cards(vec![card(Rank::Ace), card(a), card(b), card(c)]);
                    hand.adjust_aces();
                    if hand.total() <= WIN_THRESHOLD {
                        let before = values(&hand);
                        hand.adjust_aces();
                        assert_eq!(values(&hand), before);
                    } else {
                        assert!(hand.cards().iter().all(|c| !c.is_high_ace()));
                    }
                }
            }
        }
    }

    #[test]
    fn test_dealer_stays_on_seventeen() {
        let sixteen = Hand::from_cards(vec![card(Rank::King), card(Rank::Six)]);
        let seventeen = Hand::from_cards(vec![card(Rank::King), card(Rank::Seven)]);
        assert!(sixteen.dealer_should_hit());
        assert!(!seventeen.dealer_should_hit());
    }
}
