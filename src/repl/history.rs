use std::io::Write;

/// Rendered calculations in the order they succeeded
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Returns an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rendered calculation
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// Returns the number of recorded calculations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no calculations have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Writes a numbered listing of the history, starting at 1
    pub fn display(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.entries.is_empty() {
            writeln!(out, "No calculations performed yet.")?;
            return Ok(());
        }

        writeln!(out, "Calculation History:")?;
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, entry)?;
        }

        Ok(())
    }
}
