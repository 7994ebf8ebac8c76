//! `genai-probe`: send one prompt to one model and print the reply.

mod logging;

use genai_probe::{Client, Probe, ProbeConfig};

#[tokio::main]
async fn main() -> genai_probe::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let client = Client::from_env()?;
    let probe = Probe::new(client, ProbeConfig::from_env())?;
    tracing::info!(model = %probe.config().model, "starting probe");

    let mut stdout = std::io::stdout().lock();
    probe.run(&mut stdout).await?;
    Ok(())
}
