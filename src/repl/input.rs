//! Sources of input lines for the REPL

use crate::errors::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};

/// The outcome of waiting for one line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Text(String),
    Interrupted,
    EndOfInput,
}

/// Produces input lines, displaying a prompt before each one
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<Line> {
        (**self).read_line(prompt)
    }
}

/// Reads lines from the terminal with line editing and recall
pub struct Editor {
    editor: DefaultEditor,
}

impl Editor {
    /// Returns a new line editor
    pub fn new() -> Result<Editor> {
        Ok(Editor {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<Line> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Line::Text(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::EndOfInput),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads lines from any buffered reader, writing prompts to a separate sink
pub struct Reader<R: BufRead, W: Write> {
    input: R,
    prompts: W,
}

impl<R: BufRead, W: Write> Reader<R, W> {
    /// Returns a new reader
    pub fn new(input: R, prompts: W) -> Reader<R, W> {
        Reader { input, prompts }
    }
}

impl<R: BufRead, W: Write> LineSource for Reader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Line> {
        write!(self.prompts, "{}", prompt)?;
        self.prompts.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(Line::EndOfInput);
        }

        let len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(len);

        Ok(Line::Text(buf))
    }
}
