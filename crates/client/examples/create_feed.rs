//! Create, permission and fund a data feed on the devnet permissionless
//! queue, then request its first update round.

use std::{str::FromStr, sync::Arc};

use anchor_client::{
    solana_sdk::{
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair},
        signer::Signer,
    },
    Cluster,
};
use sbv2_client::{
    ops::{
        AggregatorOps, CreateAggregatorParams, CreateJobParams, CreateLeaseParams, JobOps,
        LeaseOps, PermissionOps, QueueOps, TokenOps,
    },
    oracle_job::{oracle_job::Task, OracleJob},
    Client,
};

/// The permissionless oracle queue on devnet.
const PERMISSIONLESS_QUEUE: &str = "uPeRMdfPmrPqgRWSrjAnAkH78RqAhe5kXoW6vBYRqFX";

const LEASE_FUNDING: u64 = 1_000_000;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::fmt::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let wallet = shellexpand::tilde("~/.config/solana/id.json");
    let payer = read_keypair_file(wallet.as_ref()).map_err(|err| eyre::eyre!("{err}"))?;
    let client = Client::new(Cluster::Devnet, Arc::new(payer))?;
    tracing::info!(payer=%client.payer(), "connected");

    let queue = client
        .load_queue(&Pubkey::from_str(PERMISSIONLESS_QUEUE)?)
        .await?;

    // Create the aggregator first so the job, permission and lease can
    // reference it.
    let aggregator = Keypair::new();
    client
        .create_aggregator(
            &aggregator,
            CreateAggregatorParams::builder()
                .queue(queue.pubkey())
                .batch_size(3)
                .min_oracle_results(2)
                .min_job_results(1)
                .min_update_delay_seconds(6)
                .disable_crank(true)
                .build(),
        )
        .await?
        .send()
        .await?;
    tracing::info!(aggregator=%aggregator.pubkey(), "aggregator created");

    // One HTTP fetch and one JSONPath extraction, submitted on chain in
    // length-delimited form.
    let oracle_job = OracleJob::new(vec![
        Task::http("https://www.binance.us/api/v3/ticker/price?symbol=SOLUSD"),
        Task::json_parse("$.price"),
    ]);
    let job = Keypair::new();
    client
        .create_job(&job, &oracle_job, CreateJobParams::default())?
        .send()
        .await?;
    tracing::info!(job=%job.pubkey(), "job created");

    client
        .add_job(&aggregator.pubkey(), &job.pubkey(), None)
        .send()
        .await?;

    client
        .create_permission(&queue.authority(), &queue.pubkey(), &aggregator.pubkey())
        .send()
        .await?;

    // Wrap native SOL to fund the lease.
    let funder = Keypair::new();
    client
        .create_wrapped_native_account(&funder, LEASE_FUNDING)
        .await?
        .send()
        .await?;

    client
        .create_lease(
            &queue,
            &aggregator.pubkey(),
            CreateLeaseParams::builder()
                .funder(funder.pubkey())
                .load_amount(LEASE_FUNDING)
                .build(),
        )
        .send()
        .await?;
    tracing::info!("lease created and funded");

    client
        .open_round(&queue, &aggregator.pubkey(), &funder.pubkey(), 0)
        .send()
        .await?;

    println!(
        "Feed info at: https://switchboard.xyz/explorer/2/{}",
        aggregator.pubkey()
    );

    Ok(())
}
