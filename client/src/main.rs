mod config;
mod console;
mod error;
mod runners;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use console_games_common::config::ConfigError;
use console_games_common::games::SessionRng;
use console_games_common::{log, logger};

use config::{GamesConfig, get_config_manager};
use console::Console;
use error::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameKind {
    Blackjack,
    Rps,
    Tictactoe,
}

impl GameKind {
    const ALL: [GameKind; 3] = [GameKind::Blackjack, GameKind::Rps, GameKind::Tictactoe];

    fn title(&self) -> &'static str {
        match self {
            GameKind::Blackjack => "Twenty-One",
            GameKind::Rps => "Rock Paper Scissors (Lizard Spock)",
            GameKind::Tictactoe => "Tic Tac Toe",
        }
    }
}

#[derive(Parser)]
#[command(name = "console_games", version, about = "Twenty-One, Rock Paper Scissors Lizard Spock and Tic Tac Toe in the terminal")]
struct Args {
    game: Option<GameKind>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn parse_menu_choice(answer: &str) -> Result<Option<GameKind>, String> {
    let answer = answer.trim().to_lowercase();
    if answer == "q" || answer == "quit" {
        return Ok(None);
    }
    answer
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| GameKind::ALL.get(index).copied())
        .map(Some)
        .ok_or_else(|| format!("Please enter 1 to {} or q.", GameKind::ALL.len()))
}

fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: GameKind,
    config: &GamesConfig,
    rng: &mut SessionRng,
) -> Result<(), ClientError> {
    log!("Starting {:?}", game);
    match game {
        GameKind::Blackjack => runners::run_blackjack(console, &config.blackjack, rng),
        GameKind::Rps => runners::run_rps(console, &config.rps, rng),
        GameKind::Tictactoe => runners::run_tictactoe(console, &config.tictactoe, rng),
    }
}

fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GamesConfig,
    rng: &mut SessionRng,
) -> Result<(), ClientError> {
    loop {
        console.clear()?;
        console.say("Which game would you like to play?")?;
        for (number, game) in GameKind::ALL.iter().enumerate() {
            console.say(format!("{}) {}", number + 1, game.title()))?;
        }
        let Some(game) = console.ask("Enter a number, or q to quit:", parse_menu_choice)? else {
            return Ok(());
        };
        play(console, game, config, rng)?;
        console.pause()?;
    }
}

fn load_config(args: &Args) -> Result<GamesConfig, ConfigError> {
    let config_manager = get_config_manager(args.config.as_deref());
    match config_manager.get_or_create_config() {
        Err(ConfigError::Write { path, source }) => {
            log!("Could not write default config to {}: {}", path, source);
            Ok(GamesConfig::default())
        }
        result => result,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.log);

    let config = load_config(&args)?;
    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), &config.display);

    let result = match args.game {
        Some(game) => play(&mut console, game, &config, &mut rng),
        None => run_menu(&mut console, &config, &mut rng),
    };

    match result {
        Err(err) if err.is_end_of_input() => {
            log!("Input closed, leaving");
            Ok(())
        }
        other => Ok(other?),
    }
}
