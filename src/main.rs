use config::app_config::{load_config, setup_client, setup_logging};

pub mod config;
pub mod error;
pub mod http_probe;
use http_probe::prelude::*;
pub mod report;
use report::print_summary;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    setup_logging(config.log_level())?;

    let client = setup_client()?;

    tracing::debug!(
        hosts = config.hosts.len(),
        count = config.count.get(),
        "starting probe run"
    );

    // Hosts run strictly one after another, in the order given.
    for host in config.hosts.iter() {
        let stats = probe_host(&client, host.as_str(), host.url(), config.count).await;
        print_summary(host.as_str(), &stats);
    }

    Ok(())
}
