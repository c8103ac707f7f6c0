//! Storefront console binary
//!
//! Loads the startup snapshot, then settles one purchase request per stdin
//! line (`app_id item_id user_id`), printing receipts and balance summaries
//! to stdout and diagnostics to stderr.

mod config;
mod input;
mod render;

use anyhow::Context;
use config::Config;
use input::parse_request;
use render::ConsoleObserver;
use rewards::RewardEngine;
use settlement::SettlementEngine;
use std::io::BufRead;
use store_core::Snapshot;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; diagnostics go to stderr so stdout stays clean
    // for receipts
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    tracing::info!(snapshot = %config.snapshot_path.display(), "starting storefront");

    let snapshot = Snapshot::from_file(&config.snapshot_path)
        .with_context(|| format!("loading snapshot {}", config.snapshot_path.display()))?;
    let mut store = snapshot.build().context("building store from snapshot")?;

    let engine = SettlementEngine::new(RewardEngine::new(config.reward));
    let mut console = ConsoleObserver::new(store.reward_currency().clone());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading request line")?;
        if line.trim().is_empty() {
            continue;
        }

        let request = match parse_request(&line) {
            Ok(request) => request,
            Err(err) => {
                eprintln!("Invalid Input: {err}");
                continue;
            }
        };

        match engine.purchase(
            &mut store,
            &request.app_id,
            &request.item_id,
            &request.user_id,
            &mut console,
        ) {
            Ok(_) => {}
            Err(err) if err.is_validation() => eprintln!("ERROR: {err}"),
            // Anything else is broken ledger state, not a bad request
            Err(err) => return Err(err).context("ledger defect"),
        }
    }

    tracing::info!(
        transactions = store.transactions().len(),
        "input closed, shutting down"
    );
    Ok(())
}
