use std::io::{BufRead, Write};

use console_games_common::games::tictactoe::{
    Board, GameStatus, Marker, TicTacToeError, TicTacToeGame, pick_computer_name,
    winning_line,
};
use console_games_common::games::{MatchScore, SessionRng, Side};
use console_games_common::log;

use crate::config::TicTacToeConfig;
use crate::console::{Console, joinor, parse_name};
use crate::error::ClientError;

const PADDING_ROW: &str = "     |     |";
const DIVIDER_ROW: &str = "-----+-----+-----";

fn draw_grid(label: impl Fn(usize) -> String) -> String {
    let mut lines = Vec::new();
    for row in 0..3 {
        if row > 0 {
            lines.push(DIVIDER_ROW.to_string());
        }
        let first = row * 3 + 1;
        lines.push(PADDING_ROW.to_string());
        lines.push(format!(
            "  {}  |  {}  |  {}",
            label(first),
            label(first + 1),
            label(first + 2)
        ));
        lines.push(PADDING_ROW.to_string());
    }
    lines.join("\n")
}

fn draw_board(board: &Board) -> String {
    draw_grid(|position| {
        board
            .get(position)
            .map(|marker| marker.to_string())
            .unwrap_or_else(|| " ".to_string())
    })
}

fn parse_marker(answer: &str, computer: Marker) -> Result<Marker, String> {
    let complaint = || format!("Sorry, you must enter one character that's not {}", computer);
    let mut chars = answer.trim().chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        return Err(complaint());
    };
    match Marker::new(symbol) {
        Ok(marker) if marker != computer => Ok(marker),
        _ => Err(complaint()),
    }
}

fn parse_square(answer: &str) -> Result<usize, String> {
    answer
        .trim()
        .parse::<usize>()
        .map_err(|_| "Sorry, that's not a valid choice.".to_string())
}

struct Players {
    human_name: String,
    human_marker: Marker,
    computer_name: &'static str,
    computer_marker: Marker,
}

impl Players {
    fn name(&self, side: Side) -> &str {
        match side {
            Side::Human => self.human_name.as_str(),
            Side::Computer => self.computer_name,
        }
    }
}

fn show_board<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    players: &Players,
    score: &MatchScore,
    board: &Board,
) -> Result<(), ClientError> {
    console.clear()?;
    console.print(format!(
        "{}'s marker is {}. {}'s marker is {}.",
        players.human_name, players.human_marker, players.computer_name, players.computer_marker
    ))?;
    console.print(format!(
        "{} wins: {} | {} wins: {}",
        players.human_name,
        score.wins(Side::Human),
        players.computer_name,
        score.wins(Side::Computer)
    ))?;
    console.blank_line()?;
    console.print(draw_board(board))?;
    console.blank_line()?;
    Ok(())
}

fn human_move<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut TicTacToeGame,
) -> Result<(), ClientError> {
    loop {
        let choices = joinor(&game.board().unmarked_keys(), ", ", "or");
        let position = console.ask(&format!("Choose a square ({}):", choices), parse_square)?;
        match game.play(Side::Human, position) {
            Ok(()) => return Ok(()),
            Err(TicTacToeError::InvalidPosition(_) | TicTacToeError::OccupiedSquare(_)) => {
                console.say("Sorry, that's not a valid choice.")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    players: &Players,
    score: &MatchScore,
    first_to_move: Side,
    rng: &mut SessionRng,
) -> Result<GameStatus, ClientError> {
    let mut game = TicTacToeGame::new(players.human_marker, players.computer_marker, first_to_move)?;

    while !game.is_over() {
        match game.current_turn() {
            Side::Human => {
                show_board(console, players, score, game.board())?;
                human_move(console, &mut game)?;
            }
            Side::Computer => {
                let position = game.play_computer(rng)?;
                log!("{} marks square {}", players.computer_name, position);
            }
        }
    }

    show_board(console, players, score, game.board())?;
    match game.status().winner() {
        Some(side) => {
            let squares = winning_line(game.board())
                .map(|line| format!(" (squares {})", joinor(&line, ", ", "and")))
                .unwrap_or_default();
            console.say(format!("{} won this game!{}", players.name(side), squares))?;
        }
        None => console.say("The board is full.")?,
    }
    Ok(game.status())
}

pub fn run_tictactoe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &TicTacToeConfig,
    rng: &mut SessionRng,
) -> Result<(), ClientError> {
    let computer_marker = Marker::new(config.computer_marker)?;

    console.clear()?;
    console.say("Welcome to Tic Tac Toe!")?;
    console.say(format!(
        "The first player to win {} games wins the match.",
        config.games_per_match
    ))?;
    console.blank_line()?;

    let human_name = console.ask("Please enter your name:", |answer| {
        parse_name(answer).map_err(|_| "Sorry, you must enter at least one character.".to_string())
    })?;
    console.say(format!("Welcome, {}!", human_name))?;
    console.blank_line()?;

    console.say("The squares are numbered as follows:")?;
    console.print(draw_grid(|position| position.to_string()))?;
    console.blank_line()?;

    console.say(format!(
        "Your marker can be any single character (other than {})",
        computer_marker
    ))?;
    let human_marker = console.ask("Please choose your marker:", |answer| {
        parse_marker(answer, computer_marker)
    })?;

    let players = Players {
        human_name,
        human_marker,
        computer_name: pick_computer_name(rng),
        computer_marker,
    };
    console.say(format!("You will be playing against {}.", players.computer_name))?;
    console.pause()?;

    let mut score = MatchScore::new(config.games_per_match);
    loop {
        while score.champion().is_none() {
            let status = play_game(console, &players, &score, config.first_to_move.into(), rng)?;
            score.record(status.winner());
            console.pause()?;
        }

        if let Some(champion) = score.champion() {
            console.blank_line()?;
            console.say(format!("{} won {} games.", players.name(champion), score.wins_needed()))?;
            console.say(format!("{} won this match!", players.name(champion)))?;
            console.blank_line()?;
        }

        if !console.ask_yes_no("Would you like to play another match? (y/n)")? {
            break;
        }
        console.say("Let's play again!")?;
        score.reset();
    }

    console.say("Thanks for playing, goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{output_of, scripted};
    use console_games_common::games::tictactoe::FirstToMove;

    #[test]
    fn test_parse_marker() {
        assert_eq!(parse_marker(" # ", Marker::O), Marker::new('#').map_err(|e| e.to_string()));
        assert!(parse_marker("O", Marker::O).is_err());
        assert!(parse_marker("XY", Marker::O).is_err());
        assert!(parse_marker("", Marker::O).is_err());
    }

    #[test]
    fn test_draw_board_shows_markers() {
        let mut board = Board::new();
        board.apply_move(1, Marker::X).unwrap();
        board.apply_move(9, Marker::O).unwrap();
        let drawing = draw_board(&board);
        assert!(drawing.starts_with("     |     |\n  X  |     |   \n"));
        assert!(drawing.contains("  O\n"));
        assert_eq!(drawing.lines().count(), 11);
    }

    #[test]
    fn test_computer_wins_against_lowest_square_player() {
        // X 1, O 5, X 2, O blocks 3, X 4, O completes 3-5-7
        let config = TicTacToeConfig {
            games_per_match: 1,
            computer_marker: 'O',
            first_to_move: FirstToMove::Human,
        };
        let mut console = scripted("ada\nO\nX\n1\n2\n3\n4\nn\n");
        let mut rng = SessionRng::new(42);

        run_tictactoe(&mut console, &config, &mut rng).unwrap();

        let output = output_of(console);
        assert!(output.contains("Sorry, you must enter one character that's not O"));
        assert!(output.contains("Sorry, that's not a valid choice."));
        assert!(output.contains("won this game! (squares 3, 5, and 7)"));
        assert!(output.contains("won this match!"));
        assert!(output.contains("Welcome, Ada!"));
        assert!(output.contains("Thanks for playing, goodbye!"));
    }
}
