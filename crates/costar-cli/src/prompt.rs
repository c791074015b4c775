//! Line-oriented terminal prompts

use std::io::{self, BufRead, Write};

use costar_core::{Candidate, Disambiguator};

/// Prompts on a writer and reads answers from a line reader
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    /// Print `prompt` and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_for_choice(
        &mut self,
        name: &str,
        candidates: &[Candidate<'_>],
    ) -> io::Result<Option<String>> {
        self.say(&format!("Which '{}'?", name))?;
        for candidate in candidates {
            let birth = candidate.birth.map(|b| b.to_string()).unwrap_or_default();
            self.say(&format!(
                "ID: {}, Name: {}, Birth: {}",
                candidate.id, candidate.name, birth
            ))?;
        }
        self.ask("Intended Person ID: ")
    }
}

impl<R: BufRead, W: Write> Disambiguator for Console<R, W> {
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Option<String> {
        match self.ask_for_choice(name, candidates) {
            Ok(choice) => choice,
            Err(e) => {
                tracing::warn!("Could not read a selection: {}", e);
                None
            }
        }
    }
}
