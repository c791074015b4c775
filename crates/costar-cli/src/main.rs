//! degrees - How many co-starring links separate two people?

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use costar_cli::config::Config;
use costar_cli::logging;
use costar_cli::output::{format_report, OutputFormat, SeparationReport};
use costar_cli::prompt::Console;
use costar_core::{GraphStore, NameResolver, PathFinder, PersonId};
use costar_search::NameSuggester;

#[derive(Parser)]
#[command(name = "degrees")]
#[command(
    author,
    version,
    about = "Degrees of separation between two people in a movie graph"
)]
pub struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(env = "COSTAR_DATA_DIR")]
    pub directory: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn prompt_for_person<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &GraphStore,
) -> anyhow::Result<Option<PersonId>> {
    let Some(name) = console.ask("Name: ")? else {
        report_not_found(store, "");
        return Ok(None);
    };

    let resolved = NameResolver::new(store).resolve(&name, console);
    if resolved.is_none() {
        report_not_found(store, &name);
    }
    Ok(resolved)
}

fn report_not_found(store: &GraphStore, name: &str) {
    eprintln!("Person not found.");

    let suggestions = NameSuggester::new().suggest(store, name);
    if !suggestions.is_empty() {
        eprintln!("Did you mean:");
        for suggestion in suggestions {
            match suggestion.person.birth {
                Some(birth) => eprintln!("  {} ({})", suggestion.person.name, birth),
                None => eprintln!("  {}", suggestion.person.name),
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = Config::load();
    let directory = cli
        .directory
        .clone()
        .unwrap_or_else(|| config.data_dir.clone());
    let format = OutputFormat::from(cli.format.as_deref().unwrap_or(&config.format));

    tracing::debug!("Starting degrees with data directory {:?}", directory);

    // In json mode stdout carries only the report
    let prompt_output: Box<dyn Write> = match format {
        OutputFormat::Json => Box::new(io::stderr()),
        OutputFormat::Table => Box::new(io::stdout()),
    };
    let mut console = Console::new(io::stdin().lock(), prompt_output);

    console.say("Loading data...")?;
    let store = GraphStore::load(&directory)
        .with_context(|| format!("Failed to load data from {}", directory.display()))?;
    console.say("Data loaded.")?;

    tracing::info!(
        "Loaded {} people and {} movies",
        store.person_count(),
        store.movie_count()
    );

    let Some(source) = prompt_for_person(&mut console, &store)? else {
        std::process::exit(1);
    };
    let Some(target) = prompt_for_person(&mut console, &store)? else {
        std::process::exit(1);
    };

    let outcome = PathFinder::new(&store).search(&source, &target);
    tracing::info!(
        "Search expanded {} people, examined {} neighbors, frontier peaked at {}",
        outcome.stats.nodes_expanded,
        outcome.stats.neighbors_examined,
        outcome.stats.max_frontier
    );

    let report = SeparationReport::new(&store, &source, &target, outcome.path.as_ref());
    println!("{}", format_report(&report, format));

    Ok(())
}
