use opcalc::calculator::{Evaluate, Registry};
use opcalc::errors::Result;
use opcalc::repl::{Exit, Line, LineSource, Reader, Session};
use std::collections::VecDeque;
use std::io::Cursor;

/// Replays a fixed sequence of input events, then reports end of input
pub struct Scripted {
    lines: VecDeque<Line>,
}

impl Scripted {
    pub fn new(lines: Vec<Line>) -> Scripted {
        Scripted {
            lines: lines.into(),
        }
    }
}

impl LineSource for Scripted {
    fn read_line(&mut self, _prompt: &str) -> Result<Line> {
        Ok(self.lines.pop_front().unwrap_or(Line::EndOfInput))
    }
}

/// Helper function to run a session over the given input text, returning how
/// it ended, everything it wrote, and the session itself
pub fn run<E: Evaluate>(evaluator: E, input: &str) -> (Exit, String, Session<E>) {
    let mut session = Session::new(evaluator);
    let mut source = Reader::new(Cursor::new(input.to_string()), std::io::sink());
    let mut out = Vec::new();

    let exit = session
        .run(&mut source, &mut out)
        .expect("session failed");

    (
        exit,
        String::from_utf8(out).expect("output is not utf-8"),
        session,
    )
}

#[allow(dead_code)]
/// Helper function to run a standard calculator session over the given input
pub fn run_standard(input: &str) -> (Exit, String, Session<Registry>) {
    run(Registry::standard().expect("bad registry"), input)
}
