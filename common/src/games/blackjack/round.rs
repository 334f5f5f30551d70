use crate::games::{SessionRng, Side};

use super::{BlackjackError, Card, Deck, Hand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    Player,
    Dealer,
    Push,
}

impl RoundResult {
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundResult::Player => Some(Side::Human),
            RoundResult::Dealer => Some(Side::Computer),
            RoundResult::Push => None,
        }
    }
}

pub fn resolve_round(player: &Hand, dealer: &Hand) -> RoundResult {
    if dealer.is_bust() {
        return RoundResult::Player;
    }
    if player.is_bust() {
        return RoundResult::Dealer;
    }
    match player.total().cmp(&dealer.total()) {
        std::cmp::Ordering::Greater => RoundResult::Player,
        std::cmp::Ordering::Less => RoundResult::Dealer,
        std::cmp::Ordering::Equal => RoundResult::Push,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    PlayerTurn,
    DealerTurn,
    Finished,
}

#[derive(Debug)]
pub struct BlackjackRound {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: RoundPhase,
}

impl BlackjackRound {
    pub fn deal(rng: &mut SessionRng) -> Result<Self, BlackjackError> {
        Self::with_deck(Deck::new_shuffled(rng))
    }

    pub fn with_deck(deck: Deck) -> Result<Self, BlackjackError> {
        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: RoundPhase::PlayerTurn,
        };
        for _ in 0..2 {
            round.deck.deal(&mut round.player)?;
            round.deck.deal(&mut round.dealer)?;
        }
        round.player.adjust_aces();
        round.dealer.adjust_aces();
        Ok(round)
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    pub fn dealer_upcard(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    pub fn player_hit(&mut self) -> Result<Card, BlackjackError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(BlackjackError::OutOfTurn(self.phase));
        }
        let card = self.deck.deal(&mut self.player)?;
        self.player.adjust_aces();
        if self.player.is_bust() {
            crate::log!("Player busts with {}", self.player.total());
            self.phase = RoundPhase::Finished;
        }
        Ok(card)
    }

    pub fn player_stay(&mut self) -> Result<(), BlackjackError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(BlackjackError::OutOfTurn(self.phase));
        }
        self.phase = RoundPhase::DealerTurn;
        Ok(())
    }

    pub fn play_dealer(&mut self) -> Result<Vec<Card>, BlackjackError> {
        match self.phase {
            RoundPhase::PlayerTurn => return Err(BlackjackError::OutOfTurn(self.phase)),
            RoundPhase::Finished => return Ok(Vec::new()),
            RoundPhase::DealerTurn => {}
        }

        let mut drawn = Vec::new();
        while self.dealer.dealer_should_hit() {
            drawn.push(self.deck.deal(&mut self.dealer)?);
            self.dealer.adjust_aces();
        }
        crate::log!("Dealer finishes on {} after {} hit(s)", self.dealer.total(), drawn.len());
        self.phase = RoundPhase::Finished;
        Ok(drawn)
    }

    pub fn outcome(&self) -> Option<RoundResult> {
        if self.phase != RoundPhase::Finished {
            return None;
        }
        Some(resolve_round(&self.player, &self.dealer))
    }
}
