use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use semfix::catalogue::{self, Catalogue};
use semfix::config::Config;
use semfix::diagnostics::FixtureError;
use semfix::encode::Expected;

#[derive(Parser)]
#[command(name = "semfix", version, about = "Semantic analyzer conformance fixture generator")]
struct Cli {
    /// Config file (defaults to ./semfix.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every fixture as <name>.in / <name>.out
    Generate {
        /// Destination directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List fixture names in emission order
    List {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print one fixture's input and expected output
    Show {
        /// Fixture name
        name: String,
    },
    /// Compare a generated directory against the catalogue
    Check {
        /// Directory to check
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config, FixtureError> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(Path::new(".")),
    }
}

fn init_logging(level: &str) {
    let level = level.parse::<tracing::Level>().unwrap_or_else(|_| {
        eprintln!("warning: unknown log level '{level}', using warn");
        tracing::Level::WARN
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn list(catalogue: &Catalogue, json: bool) -> Result<(), FixtureError> {
    if json {
        println!("{}", catalogue.to_json()?);
    } else {
        for case in catalogue.enumerate() {
            println!("{:<8} {}", case.expected.label(), case.name);
        }
    }
    Ok(())
}

fn show(catalogue: &Catalogue, name: &str) -> Result<(), FixtureError> {
    let case = catalogue.get(name).ok_or_else(|| FixtureError::unknown(name))?;
    println!("── {name}.in");
    println!("{}", case.input_text());
    println!("── {name}.out");
    print!("{}", case.output_text());
    if let Expected::Failure(diag) = &case.expected {
        semfix::diagnostics::render_expected(case.input_text(), name, diag);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<i32, FixtureError> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level));

    match cli.command {
        Commands::Generate { out } => {
            let dir = out.unwrap_or(config.output_dir);
            let report = semfix::generate(&dir)?;
            println!("{}", report.summary());
            println!("Make sure to run 'make' before testing.");
        }
        Commands::List { json } => list(&catalogue::standard()?, json)?,
        Commands::Show { name } => show(&catalogue::standard()?, &name)?,
        Commands::Check { dir } => {
            let dir = dir.unwrap_or(config.output_dir);
            let drift = semfix::check(&dir)?;
            if !drift.is_empty() {
                for d in &drift {
                    eprintln!("{d}");
                }
                eprintln!("{} fixture file(s) out of date in '{}'", drift.len(), dir.display());
                return Ok(1);
            }
            println!("fixtures in '{}' are up to date", dir.display());
        }
    }
    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            semfix::diagnostics::render_error(&err);
            std::process::exit(1);
        }
    }
}
