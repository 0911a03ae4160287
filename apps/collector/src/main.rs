mod config;
mod main_lib;
mod scheduler;

use config::Config;
use main_lib::{build_state, init_tracing};
use scheduler::Scheduler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_tracing();

    let state = build_state(&config)?;

    let scheduler = Scheduler::new(state, config.poll_interval);
    scheduler
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await;

    // Scheduler (and with it the pool) is gone by now; nothing left to flush.
    tracing::info!("Shutdown complete");
    Ok(())
}
