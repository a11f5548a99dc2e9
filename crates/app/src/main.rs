use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use finder_core::RecordFilter;
use finder_core::model::{Record, Region, TagName};
use services::config::{parse_base_url, parse_batch_size, parse_timeout_secs};
use services::{
    CatalogLoader, CatalogSessions, FinderConfig, FinderServices, SinkError, TagService,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::vm::build_tile;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Config(services::ConfigError),
    Core(finder_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Config(err) => write!(f, "{err}"),
            ArgsError::Core(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<services::ConfigError> for ArgsError {
    fn from(err: services::ConfigError) -> Self {
        ArgsError::Config(err)
    }
}

impl From<finder_core::Error> for ArgsError {
    fn from(err: finder_core::Error) -> Self {
        ArgsError::Core(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    region: Region,
    services: FinderServices,
}

impl UiApp for DesktopApp {
    fn initial_region(&self) -> Region {
        self.region
    }

    fn loader(&self) -> Arc<CatalogLoader> {
        self.services.loader()
    }

    fn tags(&self) -> Arc<TagService> {
        self.services.tags()
    }

    fn sessions(&self) -> Arc<CatalogSessions> {
        self.services.sessions()
    }
}

struct Args {
    config: FinderConfig,
    search: Option<String>,
    tags: Vec<TagName>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--region <name>] [--batch-size <n>] [--api <url>] [--timeout <secs>]");
    eprintln!("  cargo run -p app -- list [--region <name>] [--batch-size <n>] [--api <url>] [--timeout <secs>]");
    eprintln!("                           [--search <text>] [--tag <name>]...");
    eprintln!();
    eprintln!("Regions:");
    let names: Vec<String> = Region::ALL.iter().map(ToString::to_string).collect();
    eprintln!("  {}", names.join(", "));
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FINDER_API_BASE_URL, FINDER_BATCH_SIZE, FINDER_TIMEOUT_SECS, FINDER_REGION, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = FinderConfig::from_env()?;
        let mut search = None;
        let mut tags = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--region" => {
                    let value = require_value(args, "--region")?;
                    config.region = value.parse::<Region>().map_err(finder_core::Error::from)?;
                }
                "--batch-size" => {
                    let value = require_value(args, "--batch-size")?;
                    config.batch_size = parse_batch_size(&value)?;
                }
                "--api" => {
                    let value = require_value(args, "--api")?;
                    config.api_base_url = parse_base_url(&value)?;
                }
                "--timeout" => {
                    let value = require_value(args, "--timeout")?;
                    config.request_timeout = parse_timeout_secs(&value)?;
                }
                "--search" if cmd == Command::List => {
                    search = Some(require_value(args, "--search")?);
                }
                "--tag" if cmd == Command::List => {
                    let value = require_value(args, "--tag")?;
                    tags.push(TagName::new(value).map_err(finder_core::Error::from)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            config,
            search,
            tags,
        })
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
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

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let region = parsed.config.region;
    let services = FinderServices::http(parsed.config.clone())?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { region, services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Card Finder")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::List => list(&services, region, parsed.search, parsed.tags).await,
    }
}

async fn list(
    services: &FinderServices,
    region: Region,
    search: Option<String>,
    tags: Vec<TagName>,
) -> Result<(), Box<dyn std::error::Error>> {
    let sessions = services.sessions();
    let handle = sessions.begin(region);
    let loader = services.loader();

    let mut progress = |snapshot: Vec<Record>| -> Result<(), SinkError> {
        eprintln!("loaded {}/{}", snapshot.len(), region.len());
        Ok(())
    };
    let records = {
        let mut guarded = handle.guard(&mut progress);
        loader.load_region(region, &mut guarded).await?
    };
    handle.dispose();

    let mut filter = RecordFilter::new().with_region(region).with_tags(tags);
    if let Some(text) = search {
        filter.set_text(text);
    }

    let visible = filter.apply(&records);
    for record in &visible {
        let tile = build_tile(record);
        let tag_names: Vec<&str> = record.tags().iter().map(TagName::as_str).collect();
        println!(
            "{}\t{}\t{}\t{}\t{}",
            tile.number,
            tile.name,
            tag_names.join("/"),
            tile.image,
            tile.search_url
        );
    }

    let fallbacks = records.iter().filter(|r| r.image().is_fallback()).count();
    info!(%region, total = records.len(), shown = visible.len(), fallbacks, "listing done");
    eprintln!(
        "{} of {} records shown, {} fallback",
        visible.len(),
        records.len(),
        fallbacks
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // Binary glue: print once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
