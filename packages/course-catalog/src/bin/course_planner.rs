//! course-planner - interactive course catalog for academic advisors
//!
//! Without a subcommand, runs the interactive menu on stdin/stdout.
//! `list` and `show` answer a single query against a course file and exit.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use catalog::{menu, CatalogConfig, CatalogSession};

#[derive(Parser, Debug)]
#[command(name = "course-planner", version, about = "Course catalog for academic advisors")]
struct Cli {
    /// YAML config file (bucket_count, delimiter)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of hash buckets in the course index
    #[arg(long, global = true)]
    buckets: Option<usize>,

    /// Field separator of the course file
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every course sorted by course number
    List {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print one course with its prerequisites
    Show {
        file: PathBuf,
        course: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "catalog=debug" } else { "catalog=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false).without_time())
        .with(filter)
        .init();
}

fn resolve_config(cli: &Cli) -> anyhow::Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CatalogConfig::default(),
    };
    if let Some(buckets) = cli.buckets {
        config.bucket_count = buckets;
    }
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = resolve_config(&cli)?;
    let mut session = CatalogSession::with_config(&config)?;
    tracing::debug!(?config, "session ready");

    match cli.command {
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            menu::run(&mut session, stdin.lock(), &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::List { file, format }) => {
            load(&mut session, &file)?;
            answer(session.list_all(), format, |rows| {
                for row in rows {
                    println!("{}", row);
                }
            })
        }
        Some(Command::Show { file, course, format }) => {
            load(&mut session, &file)?;
            answer(session.detail(&course), format, |course| println!("{}", course))
        }
    }
}

fn load(session: &mut CatalogSession, file: &Path) -> anyhow::Result<()> {
    session.try_load(file)?;
    Ok(())
}

/// Print a query result; misses go to stderr with a failing exit code.
fn answer<T, F>(result: catalog::Result<T>, format: Format, print_text: F) -> anyhow::Result<ExitCode>
where
    T: serde::Serialize,
    F: FnOnce(T),
{
    match result {
        Ok(value) => {
            match format {
                Format::Text => print_text(value),
                Format::Json => println!("{}", serde_json::to_string_pretty(&value)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_query_miss() => {
            eprintln!("{}", err);
            Ok(ExitCode::from(2))
        }
        Err(err) => Err(err.into()),
    }
}
