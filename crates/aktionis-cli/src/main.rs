use std::process;

use aktionis::{WatchConfig, WebScraper};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "aktionis")]
#[command(about = "Lists aktionis.ch deals and shouts when a brand is on sale", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "warn",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        short = 'b',
        long,
        default_value = aktionis::DEFAULT_BRAND,
        help = "Brand to watch for in deal names, matched as typed (first letter capitalized) or all lower case"
    )]
    brand: String,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    format: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let config = WatchConfig::default().with_brand(cli.brand);

    let scraper = WebScraper::with_config(config).unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    });

    let report = scraper.fetch_report().await.unwrap_or_else(|e| {
        log::error!("Error fetching deals from {}: {}", scraper.config().url, e);
        process::exit(1);
    });

    match cli.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Error serializing to JSON: {}", e);
                process::exit(1);
            }
        },
    }
}
