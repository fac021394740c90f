use anyhow::Context;
use devops_info_service::{ServerOpts, StartClock, serve};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let clock = StartClock::now();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let opts = ServerOpts::from_env().context("read HOST/PORT")?;
    serve(opts, clock).await.context("serve")?;
    Ok(())
}
