use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod clock;
mod commands;
mod logging;
mod session;

use studypal_core::Config;

#[derive(Parser)]
#[command(name = "studypal", version, about = "StudyPal CLI")]
struct Cli {
    /// Config file to use instead of ~/.config/studypal/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive study session (default)
    Repl,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) if path.exists() => Ok(Config::load_from(path)?),
        Some(_) => Ok(Config::default()),
        None => Ok(Config::load_or_default()),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_ref())?;
    logging::init(&config.log.filter);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let mut session = session::Session::new(config, Box::new(clock::SystemClock));
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session.run(stdin.lock(), &mut stdout)?;
        }
        Commands::Config { action } => commands::config::run(action, config, cli.config)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
