use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};
use std::time::Duration;

use crate::config::DisplayConfig;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    pause: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, display: &DisplayConfig) -> Self {
        Self {
            input,
            output,
            clear_screen: display.clear_screen,
            pause: display.pause(),
        }
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "=> {}", message)
    }

    pub fn print(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> io::Result<T> {
        self.say(question)?;
        loop {
            let answer = self.read_line()?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(complaint) => self.say(complaint)?,
            }
        }
    }

    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        self.ask(question, parse_yes_no)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    pub fn pause(&mut self) -> io::Result<()> {
        self.output.flush()?;
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
        Ok(())
    }
}

pub fn parse_yes_no(answer: &str) -> Result<bool, String> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("Sorry, please enter y or n.".to_string()),
    }
}

pub fn parse_positive(answer: &str) -> Result<u32, String> {
    match answer.trim().parse::<u32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err("Sorry, please enter a whole number greater than zero!".to_string()),
    }
}

pub fn parse_name(answer: &str) -> Result<String, String> {
    let mut chars = answer.trim().chars();
    match chars.next() {
        Some(first) => Ok(first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()),
        None => Err("Sorry, must enter a value.".to_string()),
    }
}

pub fn joinor<T: Display>(items: &[T], delimiter: &str, last_word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first, last_word, second),
        [rest @ .., last] => {
            let head: Vec<String> = rest.iter().map(ToString::to_string).collect();
            format!("{}{}{} {}", head.join(delimiter), delimiter, last_word, last)
        }
    }
}
