use anyhow::Context;
use fhub::kernel::config::load_config;
use fhub_logger::Logger;
use fhub_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    // Optional config file path as the first argument; env-only boot otherwise.
    let builder = match std::env::args().nth(1) {
        Some(path) => Server::builder().config_file(path)?,
        None => {
            let cfg = load_config(None::<&str>).context("Critical: Configuration is malformed")?;
            Server::builder().config(cfg)
        }
    };

    builder.build().await?.run().await
}
