use crate::repl::DEFAULT_PROMPT;
use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Command line options for the calculator
pub struct Options {
    /// Text displayed before each input line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Read plain lines from standard input instead of using the line editor
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity on standard error (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    /// Returns the log level selected by the verbosity flag
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
