use super::history::History;
use super::input::{Line, LineSource};
use crate::calculator::Evaluate;
use crate::errors::{Error, Result};
use log::{debug, info};
use std::io::Write;

pub const DEFAULT_PROMPT: &str = "Enter command: ";

pub const BANNER: &str =
    "Calculator REPL started. Type 'help' for instructions or 'exit' to quit.";

pub const INTERRUPTED: &str = "Keyboard interrupt detected. Exiting calculator. Goodbye!";

pub const HELP: &str = "
Calculator REPL Help
--------------------
Usage:
    <operation> <number1> <number2>
    - Perform a calculation with the specified operation and two numbers.
    - Supported operations:
        add       : Adds two numbers.
        subtract  : Subtracts the second number from the first.
        multiply  : Multiplies two numbers.
        divide    : Divides the first number by the second.

Special Commands:
    help      : Display this help message.
    history   : Show the history of calculations.
    exit      : Exit the calculator.

Examples:
    add 10 5
    subtract 15.5 3.2
    multiply 7 8
    divide 20 4
";

/// How a session came to an end. Every variant is a normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Command,
    Interrupted,
    EndOfInput,
}

/// An interactive calculator session, owning its calculation history
pub struct Session<E: Evaluate> {
    evaluator: E,
    history: History,
    prompt: String,
}

impl<E: Evaluate> Session<E> {
    /// Returns a new session dispatching calculations to the given evaluator
    pub fn new(evaluator: E) -> Session<E> {
        Session {
            evaluator,
            history: History::new(),
            prompt: String::from(DEFAULT_PROMPT),
        }
    }

    /// Replaces the prompt displayed before each line
    pub fn with_prompt(mut self, prompt: &str) -> Session<E> {
        self.prompt = prompt.to_string();
        self
    }

    /// Returns the calculations performed so far
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Reads and handles lines until the user exits or input ends
    pub fn run(&mut self, input: &mut impl LineSource, out: &mut impl Write) -> Result<Exit> {
        info!("calculator session started");
        writeln!(out, "{}", BANNER)?;

        let exit = loop {
            out.flush()?;

            let exit = match input.read_line(&self.prompt)? {
                Line::Text(line) => self.handle(&line, out)?,
                Line::Interrupted => {
                    writeln!(out, "\n{}", INTERRUPTED)?;
                    Some(Exit::Interrupted)
                }
                Line::EndOfInput => {
                    writeln!(out, "\nEOF detected. Exiting calculator. Goodbye!")?;
                    Some(Exit::EndOfInput)
                }
            };

            if let Some(exit) = exit {
                break exit;
            }
        };

        out.flush()?;
        info!(
            "calculator session ended ({:?}) after {} calculations",
            exit,
            self.history.len()
        );

        Ok(exit)
    }

    /// Handles a single line of input, returning the reason to stop if the
    /// line ends the session
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<Option<Exit>> {
        let line = line.trim();

        match line {
            "exit" => {
                writeln!(out, "Exiting calculator. Goodbye!")?;
                return Ok(Some(Exit::Command));
            }
            "help" => writeln!(out, "{}", HELP)?,
            "history" => self.history.display(out)?,
            _ => self.calculate(line, out)?,
        }

        Ok(None)
    }

    fn calculate(&mut self, line: &str, out: &mut impl Write) -> Result<()> {
        let outcome = parse_request(line)
            .and_then(|(op, a, b)| self.evaluator.evaluate(op, a, b));

        match outcome {
            Ok(rendered) => {
                writeln!(out, "Result: {}", rendered)?;
                self.history.push(rendered);
            }
            Err(Error::InvalidFormat) => {
                writeln!(
                    out,
                    "Invalid input. Please follow the format: <operation> <num1> <num2>"
                )?;
                writeln!(out, "Type 'help' for more information.")?;
            }
            Err(Error::InvalidNumber(token)) => {
                debug!("rejected operand '{}'", token);
                writeln!(out, "Invalid input. Please ensure numbers are valid.")?;
            }
            Err(e @ Error::UnsupportedOperation { .. }) => {
                writeln!(out, "{}", e)?;
                writeln!(out, "Type 'help' to see the list of supported operations.")?;
            }
            Err(Error::DivisionByZero) => {
                writeln!(out, "Cannot divide by zero.")?;
            }
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => {
                debug!("calculation '{}' failed: {}", line, e);
                writeln!(
                    out,
                    "An error occurred during calculation: {}. Please try again.",
                    e
                )?;
            }
        }

        Ok(())
    }
}

/// Splits a line into an operation name and two numeric operands
pub fn parse_request(line: &str) -> Result<(&str, f64, f64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [op, a, b] = tokens.as_slice() else {
        return Err(Error::InvalidFormat);
    };

    Ok((*op, parse_operand(a)?, parse_operand(b)?))
}

/// Parses a numeric operand. Underscores are accepted as digit separators
/// when they sit between two digits, as in "1_000".
fn parse_operand(token: &str) -> Result<f64> {
    let invalid = || Error::InvalidNumber(token.to_string());

    let bytes = token.as_bytes();
    for (i, c) in bytes.iter().enumerate() {
        if *c != b'_' {
            continue;
        }

        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let between_digits =
            before.is_some_and(|b| b.is_ascii_digit()) && after.is_some_and(|b| b.is_ascii_digit());
        if !between_digits {
            return Err(invalid());
        }
    }

    token.replace('_', "").parse::<f64>().map_err(|_| invalid())
}
