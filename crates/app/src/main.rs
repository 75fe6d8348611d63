use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, GatewayConfig, SessionStore};
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://artlearn.sqlite3";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--api <base_url>] [--verbose]");
    eprintln!("  cargo run -p app -- logout [--db <sqlite_url>] [--verbose]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --api http://127.0.0.1:8080");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ARTLEARN_DB_URL, ARTLEARN_API_BASE_URL, ARTLEARN_<RESOURCE>_URL,");
    eprintln!("  ARTLEARN_HTTP_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Logout,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "logout" => Some(Self::Logout),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    api_base: Option<String>,
    verbose: bool,
    help: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            db_url: env_db_url.map_or_else(
                || normalize_sqlite_url(DEFAULT_DB_URL.into()),
                normalize_sqlite_url,
            ),
            api_base: None,
            verbose: false,
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    parsed.db_url = normalize_sqlite_url(value);
                }
                "--api" => {
                    let value = require_value(args, "--api")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    parsed.api_base = Some(value.trim().to_string());
                }
                "--verbose" | "-v" => parsed.verbose = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, std::env::var("ARTLEARN_DB_URL").ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing(parsed.verbose);
    prepare_sqlite_file(&parsed.db_url)?;
    tracing::debug!(db_url = %parsed.db_url, ?cmd, "starting");

    match cmd {
        Command::Ui => {
            let config = GatewayConfig::from_env_with_base(parsed.api_base)?;
            let services = AppServices::new_sqlite(&parsed.db_url, config).await?;
            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("ArtLearn")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Logout => {
            let storage = Storage::sqlite(&parsed.db_url).await?;
            let session = SessionStore::new(Arc::clone(&storage.local));
            match session.get().await {
                Some(user) => {
                    session.clear().await?;
                    eprintln!("signed out {}", user.username);
                }
                None => eprintln!("no active profile"),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter, None)
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/art.sqlite3".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/art.sqlite3"), "{url}");
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/a.sqlite3".into()),
            "sqlite:///tmp/a.sqlite3"
        );
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&["--db", "sqlite::memory:", "--api", "http://localhost:9000", "-v"])
            .unwrap();
        assert_eq!(args.db_url, "sqlite::memory:");
        assert_eq!(args.api_base.as_deref(), Some("http://localhost:9000"));
        assert!(args.verbose);
        assert!(!args.help);
    }

    #[test]
    fn bad_flags_are_reported() {
        assert_eq!(
            parse(&["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        );
        assert_eq!(
            parse(&["--token"]),
            Err(ArgsError::UnknownArg("--token".into()))
        );
        assert!(matches!(
            parse(&["--api", " "]),
            Err(ArgsError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn memory_database_needs_no_file() {
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_file("postgres://nope").is_err());
    }
}
