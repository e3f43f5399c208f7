use std::path::PathBuf;
use std::{env, process};

use anyhow::Result;
use habitree_config::Config;
use habitree_engine::{TtlCache, io};

mod commands;
mod viewer;

use commands::Command;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", commands::USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = run(command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Help => println!("{}", commands::USAGE),
        Command::Title(text) => print!("{}", commands::title(&text)),
        Command::Links(path) => print!("{}", commands::links(&commands::read_note(&path)?)),
        Command::Render { path, html } => {
            let output = commands::render(&commands::read_note(&path)?, html);
            if html {
                println!("{output}");
            } else {
                print!("{output}");
            }
        }
        Command::Strip(path) => print!("{}", commands::strip(&commands::read_note(&path)?)),
        Command::View(path) => view(path)?,
    }
    Ok(())
}

/// Opens the note viewer on `notes_path`, or on the configured notes folder.
fn view(notes_path: Option<PathBuf>) -> Result<()> {
    let config_path = Config::config_path();
    let config = Config::load()?;

    let (notes_path, from_config) = match (notes_path, &config) {
        (Some(path), _) => (path, false),
        (None, Some(config)) => {
            log::info!("using notes path from {}", config_path.display());
            (config.notes_path.clone(), true)
        }
        (None, None) => anyhow::bail!(
            "no notes folder given and no config file found; create {} with `notes_path = \"...\"`",
            config_path.display()
        ),
    };

    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        anyhow::bail!(
            "notes path '{}'{source} is invalid: {e}",
            notes_path.display()
        );
    }

    let cache = match &config {
        Some(config) => TtlCache::with_default_ttl(config.cache_ttl()),
        None => TtlCache::new(),
    };
    viewer::run(notes_path, cache)
}
