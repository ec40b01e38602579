//! Interactive play mode
//!
//! Timed rounds in the terminal. Input is read on a helper thread so the
//! round clock keeps ticking while the player thinks.

use crate::game::{GameSession, GameState, Submission};
use crate::output::{print_guess_error, print_round_header, print_round_summary, print_used_words};
use crate::wordlists::RootWordList;
use anyhow::Result;
use colored::Colorize;
use crossbeam_channel::{Receiver, select, tick};
use log::debug;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Player input that is not a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    EndRound,
    Words,
    Help,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            ":quit" | ":q" | ":exit" => Some(Self::Quit),
            ":new" | ":n" => Some(Self::NewGame),
            ":end" | ":stop" => Some(Self::EndRound),
            ":words" | ":w" => Some(Self::Words),
            ":help" | ":h" | "?" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Run interactive rounds until the player quits or input ends
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn run_play(session: &mut GameSession, root_words: &RootWordList) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Scramble - Play Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let input = spawn_input_reader();
    let ticker = tick(Duration::from_secs(1));

    start_new_round(session, root_words);
    prompt()?;

    loop {
        select! {
            recv(ticker) -> _ => {
                if session.state() == GameState::InProgress {
                    on_tick(session)?;
                }
            }
            recv(input) -> line => {
                let Ok(line) = line else {
                    debug!("Input closed, leaving play mode");
                    session.end_round();
                    println!();
                    return Ok(());
                };

                match Command::parse(&line) {
                    Some(Command::Quit) => {
                        session.end_round();
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    Some(Command::NewGame) => start_new_round(session, root_words),
                    Some(Command::EndRound) => {
                        if session.state() == GameState::InProgress {
                            session.end_round();
                            show_summary(session);
                        }
                    }
                    Some(Command::Words) => print_used_words(session.used_words()),
                    Some(Command::Help) => print_help(),
                    None => submit(session, &line),
                }
                prompt()?;
            }
        }
    }
}

fn on_tick(session: &mut GameSession) -> io::Result<()> {
    if session.tick() == GameState::Over {
        println!("\n\n{}", "⏰ Time's up!".bright_yellow().bold());
        show_summary(session);
        prompt()?;
    } else if announce_time(session.time_remaining()) {
        println!(
            "\n{}",
            format!("⏳ {} seconds left", session.time_remaining()).bright_black()
        );
        prompt()?;
    }
    Ok(())
}

fn submit(session: &mut GameSession, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    match session.submit_guess(line) {
        Ok(Submission::Accepted(used)) => {
            println!(
                "  {} {} {}   score {}  ⏳ {}s",
                "✓".green().bold(),
                used.word.to_uppercase().bright_white().bold(),
                format!("+{}", used.score).green(),
                session.score().to_string().bright_cyan(),
                session.time_remaining()
            );
        }
        Ok(Submission::HighScoreReset) => {
            println!("  {}", "High score reset to 0".bright_magenta());
        }
        Err(e) => print_guess_error(&e),
    }
}

fn start_new_round(session: &mut GameSession, root_words: &RootWordList) {
    let root = root_words.choose(&mut rand::rng()).clone();
    session.start_round(root);
    if let Some(root) = session.root_word() {
        print_round_header(root, session.time_remaining(), session.high_score());
    }
}

fn show_summary(session: &GameSession) {
    if let Some(summary) = session.summary() {
        print_round_summary(summary);
    }
    println!("Type {} for another round or {} to leave.", ":new".bold(), ":quit".bold());
}

/// Announce the clock every 15 seconds and each of the last 5
const fn announce_time(remaining: u32) -> bool {
    remaining > 0 && (remaining % 15 == 0 || remaining <= 5)
}

fn print_help() {
    println!("Find words of 3 to 8 letters hidden in the root word.");
    println!("Longer words score more: 3→3, 4→4, 5→6, 6→8, 7→13, 8→18.\n");
    println!("Commands: ':new' new game, ':end' end round, ':words' your words, ':quit' exit\n");
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// Forward stdin lines over a channel; the channel closes at end of input
fn spawn_input_reader() -> Receiver<String> {
    let (sender, receiver) = crossbeam_channel::unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(":quit"), Some(Command::Quit));
        assert_eq!(Command::parse(" :n "), Some(Command::NewGame));
        assert_eq!(Command::parse(":end"), Some(Command::EndRound));
        assert_eq!(Command::parse("?"), Some(Command::Help));
    }

    #[test]
    fn guesses_are_not_commands() {
        assert_eq!(Command::parse("drink"), None);
        assert_eq!(Command::parse("quit"), None);
        assert_eq!(Command::parse("XXX"), None);
    }

    #[test]
    fn time_announcements() {
        assert!(announce_time(60));
        assert!(announce_time(45));
        assert!(announce_time(5));
        assert!(announce_time(1));
        assert!(!announce_time(44));
        assert!(!announce_time(0));
    }
}
