use std::time::Duration;

use clap::{ArgAction, Parser};
use reqwest::Client;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::fmt::MakeWriter;

use super::model::{HostList, RequestCount};

/// Per-attempt request timeout, covering connect through the end of the body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Test HTTP availability of a set of servers.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct AppConfig {
    /// Comma-separated list of URLs, e.g. https://ya.ru,https://google.com
    #[arg(short = 'H', long, value_parser = clap::value_parser!(HostList))]
    pub hosts: HostList,

    /// Number of requests per host
    #[arg(
        short = 'C',
        long,
        default_value = "1",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(RequestCount)
    )]
    pub count: RequestCount,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl AppConfig {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Parse the command line. On a usage error clap prints the message together
/// with the usage line to stderr and exits with status 2.
pub fn load_config() -> AppConfig {
    AppConfig::parse()
}

/// Plain one-line-per-event `fmt` subscriber writing to `writer`.
pub fn log_subscriber<W>(level: LevelFilter, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish()
}

/// Install the subscriber on stderr so stdout only carries the report.
pub fn setup_logging(level: LevelFilter) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(log_subscriber(level, std::io::stderr))
}

/// Build the HTTP client shared by every attempt.
/// Proxy settings from the environment are ignored.
pub fn setup_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .no_proxy()
        .build()
}
