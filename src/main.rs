use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod cli;
mod clipboard;
mod core;
mod generators;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    log::info!("🔐 Starting FaunaPass - password generator");

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        if let Err(e) = ctrlc::set_handler(move || {
            should_exit.store(true, Ordering::SeqCst);
            println!("\n👋 Goodbye!");
            process::exit(0);
        }) {
            log::warn!("failed to set Ctrl+C handler: {}", e);
        }
    }

    if let Err(e) = run(args, &config, should_exit) {
        log::error!("{}", e);
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn run(args: Args, config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    match args.command {
        Some(CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            symbols,
            copy,
        }) => {
            let options =
                config.generation_options(length, no_uppercase, no_lowercase, no_numbers, symbols);
            cli::handlers::handle_generate(config, &options, args.json, copy)
        }
        Some(CliCommand::Analyze { password }) => cli::handlers::handle_analyze(&password, args.json),
        None => cli::menu::run_menu(config, should_exit),
    }
}
