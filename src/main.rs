//! Search-Engines command line entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use search_engines::{
    config::{self, CONFIG_PATH_ENV},
    EngineDescriptor, EngineLoader, EngineRegistry, SearchPlanner, SearchRequest,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Inspect configured search engines and build their query URLs
#[derive(Parser, Debug)]
#[command(name = "search-engines", version, about)]
struct Cli {
    /// Path to the engine configuration file (JSON or YAML)
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Fail instead of continuing with zero engines when loading fails
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all loaded engines
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every supported language code
    Languages,
    /// List engines supporting a language
    Lang { code: String },
    /// Show one engine by name
    Find { name: String },
    /// Build query URLs
    Url {
        query: String,
        /// Engine name (all matching engines when omitted)
        #[arg(short, long)]
        engine: Option<String>,
        /// Language code
        #[arg(short, long)]
        lang: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting search-engines v{}", search_engines::VERSION);

    let cli = Cli::parse();
    let path = config::resolve_path(cli.config);

    let registry = if cli.strict {
        EngineLoader::load(&path)
            .with_context(|| format!("failed to load engines from {}", path.display()))?
    } else {
        EngineLoader::load_or_empty(&path)
    };

    run(cli.command, &registry)
}

fn run(command: Command, registry: &EngineRegistry) -> Result<()> {
    match command {
        Command::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(registry.list_all())?);
            } else {
                for engine in registry {
                    print_engine(engine);
                }
            }
        }
        Command::Languages => {
            for language in registry.languages() {
                println!("{}", language);
            }
        }
        Command::Lang { code } => {
            for engine in registry.filter_by_language(&code) {
                println!("{}", engine.name());
            }
        }
        Command::Find { name } => match registry.find_by_name(&name) {
            Some(engine) => print_engine(engine),
            None => anyhow::bail!("search engine \"{}\" not found", name),
        },
        Command::Url {
            query,
            engine,
            lang,
            json,
        } => {
            let request = SearchRequest {
                query,
                engine,
                language: lang,
            };
            let targets = SearchPlanner::new(registry).plan(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&targets)?);
            } else {
                for target in targets {
                    println!("{}\t{}", target.engine, target.url);
                }
            }
        }
    }

    Ok(())
}

fn print_engine(engine: &EngineDescriptor) {
    println!("- {} ({})", engine.name(), engine.base_url());
    println!("  query parameter: {}", engine.query_param());
    if let Some(lang_param) = engine.lang_param() {
        println!("  language parameter: {}", lang_param);
    }
    if !engine.supported_languages().is_empty() {
        println!("  supports: {}", engine.supported_languages().join(", "));
    }
}
