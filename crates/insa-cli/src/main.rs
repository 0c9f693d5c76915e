use anyhow::Result;
use clap::Parser;
use insa_core::{run_session, Console, PromptConfig, SessionOutcome};
use log::LevelFilter;
use std::io;

#[derive(Parser, Debug)]
#[clap(name = "insa", author, version = "0.1.0", about = "Asks for a name and an age, then says hello")]
struct Cli {
    #[clap(
        long,
        short,
        default_value = "warn",
        help = "Diagnostic log level written to stderr (off, error, warn, info, debug, trace)"
    )]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the console transcript on stdout stays clean
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    let config = PromptConfig::default();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match run_session(&mut console, &config) {
        Ok(SessionOutcome::Greeted { age, .. }) => {
            log::info!("Session finished with age {}", age);
            Ok(())
        }
        Ok(SessionOutcome::Quit) => {
            log::info!("Session ended by quit keyword");
            Ok(())
        }
        Err(e) => {
            log::error!("Console failed: {}", e);
            Err(e.into())
        }
    }
}
