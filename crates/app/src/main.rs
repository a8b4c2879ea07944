use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, QuizLoopService, ShareService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://globetrotter.sqlite3";
const DEFAULT_DATASET: &str = "scripts/expanded_dataset.json";
const DEFAULT_PLAY_URL: &str = "https://globetrotter.example/";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidDataset { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidDataset { raw } => write!(f, "invalid --dataset value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    share: Arc<ShareService>,
    link_opener: LinkOpenerRef,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn share(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    db_url: String,
    dataset: PathBuf,
    play_url: String,
}

impl Args {
    fn from_env() -> Self {
        Self {
            db_url: std::env::var("GLOBETROTTER_DB_URL")
                .ok()
                .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url),
            dataset: std::env::var("GLOBETROTTER_DATASET")
                .map_or_else(|_| PathBuf::from(DEFAULT_DATASET), PathBuf::from),
            play_url: std::env::var("GLOBETROTTER_PLAY_URL")
                .unwrap_or_else(|_| DEFAULT_PLAY_URL.into()),
        }
    }

    fn parse(
        mut self,
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match (cmd, arg.as_str()) {
                (_, "--db") => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    self.db_url = normalize_sqlite_url(value);
                }
                (Command::Import, "--dataset") => {
                    let value = require_value(args, "--dataset")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataset { raw: value });
                    }
                    self.dataset = PathBuf::from(value.trim());
                }
                (Command::Ui, "--play-url") => {
                    self.play_url = require_value(args, "--play-url")?;
                }
                (_, "--help" | "-h") => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(self)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--play-url <url>]");
    eprintln!("  cargo run -p app -- import [--db <sqlite_url>] [--dataset <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --dataset {DEFAULT_DATASET}");
    eprintln!("  --play-url {DEFAULT_PLAY_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GLOBETROTTER_DB_URL, GLOBETROTTER_DATASET, GLOBETROTTER_PLAY_URL, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Import,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "import" => Some(Self::Import),
            _ => None,
        }
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::from_env()
        .parse(cmd, &mut argv.into_iter())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    init_tracing();

    // Open + migrate SQLite here so core and services stay storage-agnostic.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::system(), &parsed.play_url).await?;
    info!(db = %parsed.db_url, "storage ready");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_loop: services.quiz_loop(),
                share: services.share(),
                link_opener: Arc::new(DesktopLinkOpener),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Globetrotter")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Import => {
            let report = services.import().import_file(&parsed.dataset).await?;
            println!(
                "Import finished: {} imported, {} skipped, {} rejected.",
                report.imported.len(),
                report.skipped.len(),
                report.rejected.len()
            );
            for (city, err) in &report.rejected {
                eprintln!("Rejected {city}: {err}");
            }
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
