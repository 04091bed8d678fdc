//! # CLI Layer
//!
//! One UI client for cinedex. This is the only place that knows about stdout, stdin,
//! exit codes and argument parsing.
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `init_context()`: resolves config and data file, builds the `CinedexApi`
//! - `handle_*()`: call the API and print the result
//!
//! Ambiguous titles on delete/update are resolved here: the candidates are printed and
//! the complete title is read from stdin, unless `--exact` was given.

use super::print::{movie_line, print_catalog, print_messages, print_movies};
use super::setup::{Cli, Commands};
use cinedex::api::CinedexApi;
use cinedex::commands::{self, MutationOutcome};
use cinedex::config::CinedexConfig;
use cinedex::enrich::HttpEnricher;
use cinedex::error::{CinedexError, Result};
use cinedex::store::{self, StorageBackend};
use clap::Parser;
use directories::ProjectDirs;
use log::debug;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const CONFIG_DIR_ENV: &str = "CINEDEX_CONFIG_DIR";

const EXACT_PROMPT: &str = "Please enter the complete movie name: ";

type AppApi = CinedexApi<Box<dyn StorageBackend>, HttpEnricher>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::Add { title }) => handle_add(&api, &title),
        Some(Commands::Delete { title, exact }) => handle_delete(&api, &title, exact),
        Some(Commands::Update { title, note, exact }) => {
            handle_update(&api, &title, &note, exact)
        }
        Some(Commands::Stats) => handle_stats(&api),
        Some(Commands::Random) => handle_random(&api),
        Some(Commands::Search { keyword }) => handle_search(&api, &keyword),
        Some(Commands::Sorted) => handle_sorted(&api),
        Some(Commands::Website) => handle_website(&api),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config {
        return Ok(dir.clone());
    }
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    ProjectDirs::from("", "", "cinedex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CinedexError::Config("could not determine config directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppApi> {
    let config_dir = config_dir(cli)?;
    let mut config = CinedexConfig::load(&config_dir)?;
    if let Some(file) = &cli.file {
        config.data_file = file.clone();
    }
    debug!(
        "config from {}, catalog at {}",
        config_dir.display(),
        config.data_file.display()
    );

    let backend = store::open_backend(config.data_file.clone())?;
    let enricher = HttpEnricher::new(config.clone())?;
    Ok(CinedexApi::new(backend, enricher, config))
}

fn handle_list(api: &AppApi) -> Result<()> {
    let movies = api.list()?;
    print_catalog(&movies);
    Ok(())
}

fn handle_add(api: &AppApi, title: &str) -> Result<()> {
    let movie = api.add(title)?;
    print_messages(&[commands::add::describe(&movie)]);
    Ok(())
}

fn handle_delete(api: &AppApi, title: &str, exact: bool) -> Result<()> {
    let mut outcome = if exact {
        api.delete_exact(title)?
    } else {
        api.delete(title)?
    };
    if let MutationOutcome::Ambiguous { .. } = outcome {
        print_messages(&[commands::delete::describe(&outcome)]);
        let complete = prompt_complete_title()?;
        outcome = api.delete_exact(&complete)?;
    }
    print_messages(&[commands::delete::describe(&outcome)]);
    Ok(())
}

fn handle_update(api: &AppApi, title: &str, note: &str, exact: bool) -> Result<()> {
    let mut outcome = if exact {
        api.update_exact(title, note)?
    } else {
        api.update(title, note)?
    };
    if let MutationOutcome::Ambiguous { .. } = outcome {
        print_messages(&[commands::update::describe(&outcome)]);
        let complete = prompt_complete_title()?;
        outcome = api.update_exact(&complete, note)?;
    }
    print_messages(&[commands::update::describe(&outcome)]);
    Ok(())
}

fn handle_stats(api: &AppApi) -> Result<()> {
    let stats = api.stats()?;
    print_messages(&stats.messages());
    Ok(())
}

fn handle_random(api: &AppApi) -> Result<()> {
    let movie = api.random()?;
    println!("Your movie for tonight: {}", movie_line(&movie));
    Ok(())
}

fn handle_search(api: &AppApi, keyword: &str) -> Result<()> {
    let movies = api.search(keyword)?;
    print_movies(&movies);
    Ok(())
}

fn handle_sorted(api: &AppApi) -> Result<()> {
    let movies = api.sorted_by_rating()?;
    print_catalog(&movies);
    Ok(())
}

fn handle_website(api: &AppApi) -> Result<()> {
    let output = api.generate_website()?;
    print_messages(&[commands::website::describe(&output)]);
    Ok(())
}

fn prompt_complete_title() -> Result<String> {
    print!("{}", EXACT_PROMPT);
    let _ = io::stdout().flush();
    read_title(io::stdin().lock())
}

fn read_title<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| CinedexError::Read {
            path: PathBuf::from("<stdin>"),
            reason: e.to_string(),
        })?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
