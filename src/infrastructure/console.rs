//! Console input and output used by the interactive flows

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Line-oriented console: print text, ask for a line of input
pub trait Console {
    /// Print a line of output
    fn say(&mut self, text: &str) -> Result<()>;

    /// Show `prompt` and read one line, without the trailing newline.
    ///
    /// End of input yields an empty line.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Console bound to any reader and writer
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process stdin and stdout
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Console fed from a fixed list of answers, recording everything shown
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: std::collections::VecDeque<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedConsole {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything printed or prompted, joined by newlines
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// Answers not consumed by the flow
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) -> Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_reads_lines_and_echoes_prompt() {
        let input = io::Cursor::new("first\r\nsecond\n");
        let mut console = Terminal::new(input, Vec::new());

        assert_eq!(console.ask("> ").unwrap(), "first");
        assert_eq!(console.ask("> ").unwrap(), "second");
        assert_eq!(console.ask("> ").unwrap(), "");
        console.say("done").unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "> > > done\n");
    }

    #[test]
    fn test_scripted_console_records_transcript() {
        let mut console = ScriptedConsole::new(&["yes"]);
        console.say("hello").unwrap();
        assert_eq!(console.ask("Sure? ").unwrap(), "yes");
        assert_eq!(console.ask("Again? ").unwrap(), "");
        assert_eq!(console.remaining(), 0);
        assert_eq!(console.output(), "hello\nSure? \nAgain? ");
    }
}
