use clap::Parser;
use ntz::application::Dispatcher;
use ntz::cli::Cli;
use ntz::error::NtzError;
use ntz::infrastructure::{init_logging, Config, NoteRepository, Terminal, YamlRepository};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), NtzError> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;

    let _logger = match init_logging(&config.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    // Resolve the command before touching the storage file
    let command = cli.invocation().command()?;

    let repository = YamlRepository::new(config.storage.clone());
    if config.create_missing {
        repository.initialize()?;
    }

    let mut console = Terminal::stdio();
    Dispatcher::new(repository).execute(&command, &mut console)?;
    Ok(())
}
