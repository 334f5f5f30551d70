use std::io::{BufRead, Write};

use console_games_common::games::rps::{
    Move, MoveHistory, Personality, RpsMatch, RuleSet, RuleSetKind,
};
use console_games_common::games::{SessionRng, Side};

use crate::config::RpsConfig;
use crate::console::{Console, parse_name, parse_positive};
use crate::error::ClientError;

fn parse_variant(answer: &str) -> Result<RuleSetKind, String> {
    match answer.trim() {
        "1" => Ok(RuleSetKind::Classic),
        "2" => Ok(RuleSetKind::LizardSpock),
        _ => Err("Please enter 1 or 2!".to_string()),
    }
}

fn choose_variant<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &RpsConfig,
) -> Result<RuleSetKind, ClientError> {
    if let Some(kind) = config.default_variant {
        return Ok(kind);
    }
    console.say("Would you like to play:")?;
    for (number, kind) in RuleSetKind::ALL.iter().enumerate() {
        console.say(format!("{}) {}", number + 1, kind.title()))?;
    }
    Ok(console.ask("Please enter 1 or 2:", parse_variant)?)
}

fn choice_prompt(rules: &RuleSet) -> String {
    let names: Vec<&str> = rules.moves().iter().map(Move::name).collect();
    let shortcuts: Vec<&str> = rules.moves().iter().map(Move::short_name).collect();
    format!(
        "Choose one: {}\n=> Or, enter the first two letters of your choice: {}",
        names.join(", "),
        shortcuts.join(", ")
    )
}

fn show_history<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    history: &MoveHistory,
) -> Result<(), ClientError> {
    for kind in RuleSetKind::ALL {
        console.say(format!("{} moves (player, computer):", kind.title()))?;
        for pair in history.get(kind) {
            console.print(format!("({}, {})", pair.human, pair.computer))?;
        }
        console.blank_line()?;
    }
    Ok(())
}

fn play_match<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player_name: &str,
    config: &RpsConfig,
    history: &mut MoveHistory,
    rng: &mut SessionRng,
) -> Result<(), ClientError> {
    console.clear()?;
    let kind = choose_variant(console, config)?;
    console.say(format!("Welcome to {}, {}!", kind.title(), player_name))?;
    console.say("Here are the rules of the game:")?;
    for line in kind.rule_set().lines() {
        console.say(line)?;
    }

    let limit = console.ask("How many rounds would you like to play in this match?", parse_positive)?;
    console.clear()?;
    console.say(format!(
        "Great, the first to win {} {} is the grand champ!",
        limit,
        if limit > 1 { "rounds" } else { "round" }
    ))?;

    let mut game = RpsMatch::new(kind, Personality::random(rng), limit, rng);
    let computer_name = game.computer_name();
    console.say(format!("Your opponent is {}.", computer_name))?;

    while game.champion().is_none() {
        let prompt = choice_prompt(game.rules());
        let human = console.ask(&prompt, |answer| {
            game.rules()
                .parse_move(answer)
                .map_err(|_| "That's not a valid choice.".to_string())
        })?;

        let (round, line) = game.play_round(human, history, rng)?;
        console.say(format!("{} chose {}.", player_name, round.human))?;
        console.say(format!("{} chose {}.", computer_name, round.computer))?;
        if let Some(line) = line {
            console.say(line)?;
        }
        match round.winner {
            Some(Side::Human) => console.say(format!("{} wins!", player_name))?,
            Some(Side::Computer) => console.say(format!("{} wins!", computer_name))?,
            None => console.say("It's a tie!")?,
        }
        console.say(format!(
            "The score is {}: {} and {}: {}.",
            player_name,
            game.score().wins(Side::Human),
            computer_name,
            game.score().wins(Side::Computer)
        ))?;
    }

    match game.champion() {
        Some(Side::Human) => console.say(format!(
            "{} is the grand champ! {} rocks! (pun intended)",
            player_name, player_name
        ))?,
        _ => console.say(format!("{} is the grand champ!", computer_name))?,
    }
    Ok(())
}

pub fn run_rps<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &RpsConfig,
    rng: &mut SessionRng,
) -> Result<(), ClientError> {
    console.clear()?;
    let player_name = console.ask("Hi there, what's your name?", parse_name)?;
    let mut history = MoveHistory::new();

    loop {
        play_match(console, &player_name, config, &mut history, rng)?;
        if !console.ask_yes_no("Would you like to play another match? (y/n)")? {
            break;
        }
    }

    if !history.is_empty()
        && console.ask_yes_no("Would you like to view the move history for your matches? (y/n)")?
    {
        show_history(console, &history)?;
    }
    console.say("Thanks for playing Rock Paper Scissors (Lizard Spock). Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{output_of, scripted};

    #[test]
    fn test_parse_variant() {
        assert_eq!(parse_variant("1"), Ok(RuleSetKind::Classic));
        assert_eq!(parse_variant(" 2 "), Ok(RuleSetKind::LizardSpock));
        assert!(parse_variant("3").is_err());
    }

    #[test]
    fn test_choice_prompt_lists_shortcuts() {
        let prompt = choice_prompt(&RuleSet::lizard_spock());
        assert!(prompt.contains("rock, paper, scissors, spock, lizard"));
        assert!(prompt.contains("ro, pa, sc, sp, li"));
    }

    #[test]
    fn test_scripted_session_records_history() {
        let config = RpsConfig {
            default_variant: Some(RuleSetKind::Classic),
        };
        // name, round limit, then varied throws until someone wins a round
        let mut script = String::from("ada\n1\nlizard\n");
        script.push_str(&"ro\npa\nsc\n".repeat(10));
        script.push_str("n\ny\n");
        let mut console = scripted(&script);
        let mut rng = SessionRng::new(42);

        run_rps(&mut console, &config, &mut rng).unwrap();

        let output = output_of(console);
        assert!(output.contains("Welcome to Rock Paper Scissors, Ada!"));
        assert!(output.contains("That's not a valid choice."));
        assert!(output.contains("is the grand champ!"));
        assert!(output.contains("Rock Paper Scissors moves (player, computer):"));
        assert!(output.contains("(rock, "));
        assert!(output.contains("Goodbye!"));
    }
}
