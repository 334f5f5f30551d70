use std::io::{BufRead, Write};

use console_games_common::games::blackjack::{
    BlackjackError, BlackjackRound, Card, DEALER_STAY_THRESHOLD, Hand, RoundPhase, RoundResult,
    WIN_THRESHOLD,
};
use console_games_common::games::{MatchScore, SessionRng, Side};
use console_games_common::log;

use crate::config::BlackjackConfig;
use crate::console::{Console, joinor};
use crate::error::ClientError;

const DEALER_NAME: &str = "Dealer";
const DECORATION: &str = "***********************";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerAction {
    Hit,
    Stay,
}

fn parse_action(answer: &str) -> Result<PlayerAction, String> {
    match answer.trim().to_lowercase().as_str() {
        "h" | "hit" => Ok(PlayerAction::Hit),
        "s" | "stay" => Ok(PlayerAction::Stay),
        _ => Err("Sorry, that's not a valid input.".to_string()),
    }
}

fn describe_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(Card::describe).collect();
    joinor(&cards, ", ", "and")
}

struct Table<'a> {
    config: &'a BlackjackConfig,
    score: MatchScore,
}

impl Table<'_> {
    fn name(&self, side: Side) -> &str {
        match side {
            Side::Human => self.config.player_name.as_str(),
            Side::Computer => DEALER_NAME,
        }
    }

    fn welcome<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<(), ClientError> {
        let rounds = self.config.rounds_to_win;
        console.clear()?;
        console.print(format!("** Welcome to {}! **", WIN_THRESHOLD))?;
        console.blank_line()?;
        console.say("Each card has a point value:")?;
        console.say("Number cards are worth face value.")?;
        console.say("Face cards are worth 10.")?;
        console.say(format!(
            "Aces are worth 11, unless the sum of the hand would be over {}.",
            WIN_THRESHOLD
        ))?;
        console.say("Then an ace is worth 1.")?;
        console.say(format!("The dealer will stay at {} or above.", DEALER_STAY_THRESHOLD))?;
        console.say(format!(
            "The winner of each hand is the closest to {} without going over.",
            WIN_THRESHOLD
        ))?;
        console.say(format!(
            "The winner of {} hand{} is the champion!",
            rounds,
            if rounds > 1 { "s" } else { "" }
        ))?;
        console.blank_line()?;
        Ok(())
    }

    fn show_score<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<(), ClientError> {
        console.print(format!("* Best of {} *", self.score.wins_needed()))?;
        console.print(DECORATION)?;
        for side in [Side::Human, Side::Computer] {
            console.print(format!("{}: {}", self.name(side), self.score.wins(side)))?;
        }
        console.print(DECORATION)?;
        console.blank_line()?;
        Ok(())
    }

    fn show_hand<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        side: Side,
        hand: &Hand,
    ) -> Result<(), ClientError> {
        console.say(format!("{} has {}.", self.name(side), describe_hand(hand)))?;
        console.say(format!("{}'s point total is {}.", self.name(side), hand.total()))?;
        Ok(())
    }

    fn play_hand<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        rng: &mut SessionRng,
    ) -> Result<RoundResult, ClientError> {
        console.say("Dealing...")?;
        let mut round = BlackjackRound::deal(rng)?;

        if let Some(upcard) = round.dealer_upcard() {
            console.say(format!("{}'s upcard is {}.", DEALER_NAME, upcard.describe()))?;
        }
        self.show_hand(console, Side::Human, round.player())?;
        if round.player().is_blackjack() {
            console.say("Blackjack!")?;
        }

        while round.phase() == RoundPhase::PlayerTurn {
            match console.ask("Would you like to hit ('h') or stay ('s')?", parse_action)? {
                PlayerAction::Hit => {
                    console.say(format!("{} decided to hit.", self.config.player_name))?;
                    let card = round.player_hit()?;
                    console.say(format!("{} drew {}.", self.config.player_name, card.describe()))?;
                    self.show_hand(console, Side::Human, round.player())?;
                }
                PlayerAction::Stay => {
                    console.say(format!("{} decided to stay. Dealer's turn!", self.config.player_name))?;
                    round.player_stay()?;
                }
            }
        }

        if !round.player().is_bust() {
            console.say(format!("{} flips over the hole card.", DEALER_NAME))?;
            self.show_hand(console, Side::Computer, round.dealer())?;
            for card in round.play_dealer()? {
                console.say(format!("{} hits and draws {}.", DEALER_NAME, card.describe()))?;
            }
            if !round.dealer().is_bust() {
                console.say(format!("{} stays.", DEALER_NAME))?;
            }
            self.show_hand(console, Side::Computer, round.dealer())?;
        }

        let result = round
            .outcome()
            .ok_or(BlackjackError::OutOfTurn(round.phase()))?;
        self.announce(console, &round, result)?;
        Ok(result)
    }

    fn announce<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        round: &BlackjackRound,
        result: RoundResult,
    ) -> Result<(), ClientError> {
        let player = self.config.player_name.as_str();
        console.blank_line()?;
        if round.player().is_bust() {
            console.say(format!("{} busted. {} loses this hand.", player, player))?;
        } else if round.dealer().is_bust() {
            console.say(format!("{} busted. {} wins this hand!", DEALER_NAME, player))?;
        } else {
            match result.winner() {
                Some(side) => console.say(format!("{} wins this hand!", self.name(side)))?,
                None => console.say("This hand is a draw.")?,
            }
        }
        log!("Hand finished: {:?}, {} cards left in the deck", result, round.cards_left());
        Ok(())
    }
}

pub fn run_blackjack<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &BlackjackConfig,
    rng: &mut SessionRng,
) -> Result<(), ClientError> {
    let mut table = Table {
        config,
        score: MatchScore::new(config.rounds_to_win),
    };
    table.welcome(console)?;

    loop {
        while table.score.champion().is_none() {
            table.show_score(console)?;
            let result = table.play_hand(console, rng)?;
            table.score.record(result.winner());
            console.pause()?;
        }

        table.show_score(console)?;
        if let Some(champion) = table.score.champion() {
            console.say(format!("{} is the champion of this match!", table.name(champion)))?;
        }

        if !console.ask_yes_no("Would you like to play another match? (y/n)")? {
            break;
        }
        table.score.reset();
        console.clear()?;
    }

    console.say(format!("Thanks for playing {}, goodbye!", WIN_THRESHOLD))?;
    Ok(())
}
