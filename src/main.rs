use std::path::PathBuf;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use opensearch_engines::{resolve, Config, EngineRegistry, EnvLocale, FixedLocale, LocaleProvider};
use tracing::Level;

/// Load OpenSearch descriptors and build search requests from them.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON configuration file (directories, locale, result_type)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Descriptor directory; repeatable, loaded after the configured ones
    #[arg(long = "dir")]
    dirs: Vec<PathBuf>,
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded engines
    List,
    /// Build the request for a query
    Query {
        /// Engine short name or descriptor file name
        engine: String,
        /// Search terms; joined with spaces
        #[arg(required = true)]
        terms: Vec<String>,
        /// Result type (defaults to text/html)
        #[arg(long = "type")]
        result_type: Option<String>,
        /// Locale for {language}; defaults to the environment
        #[arg(long)]
        locale: Option<String>,
        /// Print the request as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // Build configuration: file first, CLI on top.
    let mut config = match args.config.as_deref() {
        Some(path) => match Config::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };
    config.directories.extend(args.dirs);

    let (registry, _) = EngineRegistry::load_paths(&config.directories);

    match args.command {
        Command::List => list(&registry),
        Command::Query { engine, terms, result_type, locale, json } => {
            let Some(eng) = registry.find_by_name(&engine) else {
                eprintln!("No search engine named `{engine}`");
                std::process::exit(1);
            };
            let locale: Box<dyn LocaleProvider> = match locale.or(config.locale) {
                Some(l) => Box::new(FixedLocale::new(l)),
                None => Box::new(EnvLocale),
            };
            let result_type = result_type.or(config.result_type);
            let Some(req) = resolve(eng, &terms.join(" "), result_type.as_deref(), &*locale) else {
                eprintln!("`{engine}` does not support this result type");
                std::process::exit(1);
            };

            if json {
                match serde_json::to_string_pretty(&req) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Cannot serialize request: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{} {}", req.method, req.url);
                if let Some(ct) = &req.content_type {
                    println!("Content-Type: {ct}");
                }
                if let Some(body) = &req.body {
                    println!();
                    println!("{body}");
                }
            }
        }
    }
}

fn list(registry: &EngineRegistry) {
    for (key, eng) in registry.iter().sorted_by_key(|(k, _)| *k) {
        let types = eng.urls.keys().sorted().join(", ");
        println!("{key}\t{}\t{types}", eng.name.as_deref().unwrap_or("-"));
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
