//! CLI command definitions

use crate::error::{NtzError, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ntz")]
#[command(about = "Remember short notes, grouped by category", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command followed by up to two arguments (e.g. `r "buy milk"`)
    #[arg(value_name = "ARGS", allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn invocation(self) -> Invocation {
        Invocation::new(self.args)
    }
}

/// Positional arguments of one run, without the program name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    args: Vec<String>,
}

/// A recognized command with the arguments it was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every category and note
    ListAll,
    /// `ntz <any> <note> <category>`: append without prompting
    QuickRemember { note: String, category: String },
    /// `r [note]`
    Remember { note: Option<String> },
    /// `-c [name]`
    CreateCategory { name: Option<String> },
    /// `l [category]`
    ListCategory { category: Option<String> },
    /// `e`
    Edit,
    /// `f`
    Forget,
    /// `clear`
    Clear,
}

impl Invocation {
    pub fn new(args: Vec<String>) -> Self {
        Invocation { args }
    }

    /// Positional argument counting the program name as 0
    fn arg(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.args.get(i))
            .map(String::as_str)
    }

    /// Resolve the arguments to a command
    pub fn command(&self) -> Result<Command> {
        if self.args.is_empty() {
            return Ok(Command::ListAll);
        }

        if self.args.len() == 3 {
            return Ok(Command::QuickRemember {
                note: self.args[1].clone(),
                category: self.args[2].clone(),
            });
        }

        let second = self.arg(2).map(str::to_string);
        match self.args[0].as_str() {
            "r" => Ok(Command::Remember { note: second }),
            "-c" => Ok(Command::CreateCategory { name: second }),
            "l" => Ok(Command::ListCategory { category: second }),
            "e" => Ok(Command::Edit),
            "f" => Ok(Command::Forget),
            "clear" => Ok(Command::Clear),
            other => Err(NtzError::UnknownCommand(other.to_string())),
        }
    }
}
