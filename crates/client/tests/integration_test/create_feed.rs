use anchor_client::solana_sdk::{signature::Keypair, signer::Signer};
use sbv2_client::{
    ops::{
        AggregatorOps, CreateAggregatorParams, CreateJobParams, CreateLeaseParams, JobOps,
        LeaseOps, PermissionOps, QueueOps, TokenOps,
    },
    oracle_job::{oracle_job::Task, OracleJob},
};

use super::setup::init;

const LEASE_FUNDING: u64 = 1_000_000;

/// Runs the full feed-creation sequence against the configured cluster:
/// aggregator, job, permission, escrow, lease, then the first update round.
/// Later steps depend on addresses created by earlier ones, so the order is
/// fixed.
#[tokio::test]
async fn create_feed() -> eyre::Result<()> {
    let Some(test) = init().await? else {
        return Ok(());
    };

    let client = test.client();
    let queue = client.load_queue(test.queue()).await?;
    tracing::info!(payer=%client.payer(), queue=%queue.pubkey(), authority=%queue.authority(), "creating feed");

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

    let oracle_job = OracleJob::new(vec![
        Task::http("https://www.binance.us/api/v3/ticker/price?symbol=SOLUSD"),
        Task::json_parse("$.price"),
    ]);
    let job = Keypair::new();
    client
        .create_job(&job, &oracle_job, CreateJobParams::default())?
        .send()
        .await?;

    client
        .add_job(&aggregator.pubkey(), &job.pubkey(), None)
        .send()
        .await?;

    client
        .create_permission(&queue.authority(), &queue.pubkey(), &aggregator.pubkey())
        .send()
        .await?;

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

    client
        .open_round(&queue, &aggregator.pubkey(), &funder.pubkey(), 0)
        .send()
        .await?;

    tracing::info!(
        "Feed info at: https://switchboard.xyz/explorer/2/{}",
        aggregator.pubkey()
    );

    Ok(())
}
