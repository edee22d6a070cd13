//! Interactive console player.
//!
//! Every prompt is one loop over a fixed command set: a number from the menu,
//! `?` for the probability table, `x` to leave. Consecutive invalid inputs are
//! capped by `GameConfig::max_invalid_inputs`.

use crate::render;
use async_trait::async_trait;
use fair_dice_core::{
    Actor, CounterpartValueProvider, DieChoiceRequest, FrgError, GameConfig, GameEvent, Player,
    ProbabilityMatrix, Result, ValueRequest,
};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};

/// One line of user input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Pick(u64),
    Help,
    Exit,
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == "?" {
            Command::Help
        } else if line.eq_ignore_ascii_case("x") {
            Command::Exit
        } else {
            line.parse().map(Command::Pick).unwrap_or(Command::Invalid)
        }
    }
}

pub struct ConsolePlayer<R = BufReader<Stdin>> {
    lines: Lines<R>,
    matrix: ProbabilityMatrix,
    config: GameConfig,
    audit_json: bool,
}

impl ConsolePlayer<BufReader<Stdin>> {
    /// Player reading from the process's standard input
    pub fn stdin(matrix: ProbabilityMatrix, config: GameConfig, audit_json: bool) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), matrix, config, audit_json)
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsolePlayer<R> {
    pub fn new(
        reader: R,
        matrix: ProbabilityMatrix,
        config: GameConfig,
        audit_json: bool,
    ) -> Self {
        Self {
            lines: reader.lines(),
            matrix,
            config,
            audit_json,
        }
    }

    /// Show `menu` and read until the user picks one of its values, asks to
    /// leave, or runs out of attempts
    async fn select(&mut self, menu: &[(u64, String)]) -> Result<u64> {
        let mut invalid = 0;
        loop {
            for (value, label) in menu {
                println!("{value} - {label}");
            }
            println!("X - exit");
            println!("? - help");
            print!("Your selection: ");
            if let Err(e) = std::io::stdout().flush() {
                warn!(error = %e, "Failed to flush stdout");
            }

            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return Err(FrgError::CounterpartAbandoned),
                Err(e) => {
                    warn!(error = %e, "Failed to read from stdin");
                    return Err(FrgError::CounterpartAbandoned);
                }
            };

            match Command::parse(&line) {
                Command::Exit => return Err(FrgError::CounterpartAbandoned),
                Command::Help => self.print_help(),
                Command::Pick(value) if menu.iter().any(|(v, _)| *v == value) => {
                    return Ok(value)
                }
                Command::Pick(_) | Command::Invalid => {
                    invalid += 1;
                    debug!(input = %line.trim(), invalid, "Rejected input");
                    if invalid >= self.config.max_invalid_inputs {
                        println!("Too many invalid inputs.");
                        return Err(FrgError::CounterpartAbandoned);
                    }
                    println!("Invalid selection, try again.");
                }
            }
        }
    }

    fn print_help(&self) {
        println!("Probability of the win for the user:");
        println!(
            "{}",
            render::probability_table(&self.matrix, self.config.probability_precision)
        );
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> CounterpartValueProvider for ConsolePlayer<R> {
    async fn provide_value(&mut self, request: &ValueRequest) -> Result<u64> {
        println!(
            "{}",
            render::commitment_line(request.purpose, request.max, &request.commitment.to_string())
        );
        let menu: Vec<(u64, String)> = (request.min..=request.max)
            .map(|v| (v, v.to_string()))
            .collect();
        self.select(&menu).await
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for ConsolePlayer<R> {
    async fn choose_die(&mut self, request: &DieChoiceRequest) -> Result<usize> {
        println!("Choose your dice:");
        let menu: Vec<(u64, String)> = request
            .available
            .iter()
            .map(|(i, die)| (*i as u64, die.to_string()))
            .collect();
        let picked = self.select(&menu).await?;
        usize::try_from(picked).map_err(|_| FrgError::ProtocolViolation("die index overflow".into()))
    }

    fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundRevealed { result } => {
                println!("{}", render::reveal_line(result));
                if self.audit_json {
                    match serde_json::to_string(result) {
                        Ok(json) => println!("{json}"),
                        Err(e) => warn!(error = %e, "Failed to encode audit record"),
                    }
                }
            }
            GameEvent::FirstMove { actor } => println!("{}", render::first_move_line(*actor)),
            GameEvent::DieSelected { actor, die, .. } => match actor {
                Actor::User => println!("You chose the {die} dice."),
                Actor::Computer => println!("I choose the {die} dice."),
            },
            GameEvent::Rolled { actor, face, .. } => match actor {
                Actor::User => println!("Your roll result is {face}."),
                Actor::Computer => println!("My roll result is {face}."),
            },
            GameEvent::Finished { report } => println!("{}", render::outcome_line(report)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_dice_core::{Commitment, DiceSet, Die, RoundId, RoundPurpose};

    fn player(input: &'static [u8], max_invalid_inputs: usize) -> ConsolePlayer<&'static [u8]> {
        let dice = DiceSet::parse(["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"]).unwrap();
        let config = GameConfig {
            max_invalid_inputs,
            ..GameConfig::default()
        };
        ConsolePlayer::new(input, dice.probability_matrix(), config, false)
    }

    fn first_move_request() -> ValueRequest {
        ValueRequest {
            round: RoundId::new(),
            purpose: RoundPurpose::FirstMove,
            min: 0,
            max: 1,
            commitment: Commitment::from_bytes([7u8; 32]),
        }
    }

    #[tokio::test]
    async fn test_gives_up_after_max_invalid_inputs() {
        let mut console = player(b"a\nb\nc\n1\n", 3);
        assert_eq!(
            console.provide_value(&first_move_request()).await,
            Err(FrgError::CounterpartAbandoned)
        );
    }

    #[tokio::test]
    async fn test_out_of_menu_number_is_reprompted() {
        let mut console = player(b"7\n1\n", 3);
        assert_eq!(console.provide_value(&first_move_request()).await, Ok(1));
    }

    #[tokio::test]
    async fn test_help_does_not_use_an_attempt() {
        let mut console = player(b"bad\n?\n?\n?\n0\n", 2);
        assert_eq!(console.provide_value(&first_move_request()).await, Ok(0));
    }

    #[tokio::test]
    async fn test_exit_command_abandons() {
        let mut console = player(b"X\n0\n", 3);
        assert_eq!(
            console.provide_value(&first_move_request()).await,
            Err(FrgError::CounterpartAbandoned)
        );
    }

    #[tokio::test]
    async fn test_end_of_input_abandons() {
        let mut console = player(b"", 3);
        assert_eq!(
            console.provide_value(&first_move_request()).await,
            Err(FrgError::CounterpartAbandoned)
        );

        let mut console = player(b"oops\n", 3);
        assert_eq!(
            console.provide_value(&first_move_request()).await,
            Err(FrgError::CounterpartAbandoned)
        );
    }

    #[tokio::test]
    async fn test_die_choice_limited_to_available() {
        let die = Die::parse("1,2,3").unwrap();
        let request = DieChoiceRequest {
            available: vec![(0, die.clone()), (2, die.clone())],
            computer_die: Some(die),
        };
        let mut console = player(b"1\n2\n", 3);
        assert_eq!(console.choose_die(&request).await, Ok(2));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("3"), Command::Pick(3));
        assert_eq!(Command::parse("  0\n"), Command::Pick(0));
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("x"), Command::Exit);
        assert_eq!(Command::parse("X"), Command::Exit);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for input in ["", "-1", "1.5", "help", "exit", "??"] {
            assert_eq!(Command::parse(input), Command::Invalid, "{input:?}");
        }
    }
}
