use std::{future::Future, ops::Deref};

use anchor_client::{
    solana_sdk::{
        pubkey::Pubkey, signature::Keypair, signer::Signer, system_instruction,
    },
    ClientError, RequestBuilder,
};
use anchor_spl::token;
use typed_builder::TypedBuilder;

use crate::{
    accounts,
    instructions::{self, BorshDecimal},
    pda,
    states::OracleQueue,
    utils::str_to_fixed,
};

/// Size of an aggregator account, discriminator included.
pub const AGGREGATOR_ACCOUNT_SIZE: usize = 3851;

/// Parameters for [`AggregatorOps::create_aggregator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateAggregatorParams {
    /// The queue the aggregator requests updates from.
    pub queue: Pubkey,
    /// Number of oracles assigned to an update round.
    pub batch_size: u32,
    /// Minimum oracle results before a round can be validated.
    pub min_oracle_results: u32,
    /// Minimum job results an oracle must resolve to report.
    pub min_job_results: u32,
    /// Minimum seconds between update rounds.
    pub min_update_delay_seconds: u32,
    #[builder(default, setter(into))]
    pub name: String,
    #[builder(default, setter(into))]
    pub metadata: String,
    /// Unix timestamp before which no update rounds are allowed.
    #[builder(default)]
    pub start_after: i64,
    #[builder(default)]
    pub variance_threshold: BorshDecimal,
    #[builder(default)]
    pub force_report_period: i64,
    #[builder(default)]
    pub expiration: i64,
    #[builder(default)]
    pub disable_crank: bool,
    /// Aggregator authority. Defaults to the payer.
    #[builder(default)]
    pub authority: Option<Pubkey>,
}

/// Aggregator (feed) operations.
pub trait AggregatorOps<C> {
    /// Create an aggregator account on the given queue.
    ///
    /// Allocates the program-owned account for the `aggregator` keypair and
    /// initializes it in one transaction.
    fn create_aggregator<'a>(
        &'a self,
        aggregator: &'a Keypair,
        params: CreateAggregatorParams,
    ) -> impl Future<Output = crate::Result<RequestBuilder<'a, C>>>;

    /// Attach a job to an aggregator. The payer must be the aggregator
    /// authority.
    fn add_job<'a>(
        &'a self,
        aggregator: &Pubkey,
        job: &Pubkey,
        weight: Option<u8>,
    ) -> RequestBuilder<'a, C>;

    /// Request an update round, paying the servicing oracle from the feed's
    /// lease escrow into `payout_wallet`.
    ///
    /// The aggregator's lease and permission accounts must exist.
    fn open_round<'a>(
        &'a self,
        queue: &OracleQueue,
        aggregator: &Pubkey,
        payout_wallet: &Pubkey,
        jitter: u8,
    ) -> RequestBuilder<'a, C>;
}

impl<C, S> AggregatorOps<C> for crate::Client<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    async fn create_aggregator<'a>(
        &'a self,
        aggregator: &'a Keypair,
        params: CreateAggregatorParams,
    ) -> crate::Result<RequestBuilder<'a, C>> {
        let program = self.oracle();
        let lamports = program
            .async_rpc()
            .get_minimum_balance_for_rent_exemption(AGGREGATOR_ACCOUNT_SIZE)
            .await
            .map_err(ClientError::from)?;
        let (program_state, state_bump) = self.find_program_state_address();
        let authority = params.authority.unwrap_or(self.payer());
        tracing::debug!(aggregator=%aggregator.pubkey(), queue=%params.queue, "creating aggregator");
        let request = program
            .request()
            .instruction(system_instruction::create_account(
                &self.payer(),
                &aggregator.pubkey(),
                lamports,
                AGGREGATOR_ACCOUNT_SIZE as u64,
                &program.id(),
            ))
            .args(instructions::AggregatorInit {
                params: instructions::AggregatorInitParams {
                    name: str_to_fixed(&params.name),
                    metadata: str_to_fixed(&params.metadata),
                    batch_size: params.batch_size,
                    min_oracle_results: params.min_oracle_results,
                    min_job_results: params.min_job_results,
                    min_update_delay_seconds: params.min_update_delay_seconds,
                    start_after: params.start_after,
                    variance_threshold: params.variance_threshold,
                    force_report_period: params.force_report_period,
                    expiration: params.expiration,
                    state_bump,
                    disable_crank: params.disable_crank,
                },
            })
            .accounts(accounts::AggregatorInit {
                aggregator: aggregator.pubkey(),
                authority,
                queue: params.queue,
                program_state,
            })
            .signer(aggregator);
        Ok(request)
    }

    fn add_job<'a>(
        &'a self,
        aggregator: &Pubkey,
        job: &Pubkey,
        weight: Option<u8>,
    ) -> RequestBuilder<'a, C> {
        self.oracle()
            .request()
            .args(instructions::AggregatorAddJob {
                params: instructions::AggregatorAddJobParams { weight },
            })
            .accounts(accounts::AggregatorAddJob {
                aggregator: *aggregator,
                authority: self.payer(),
                job: *job,
            })
    }

    fn open_round<'a>(
        &'a self,
        queue: &OracleQueue,
        aggregator: &Pubkey,
        payout_wallet: &Pubkey,
        jitter: u8,
    ) -> RequestBuilder<'a, C> {
        let (program_state, state_bump) = self.find_program_state_address();
        let (lease, lease_bump) = self.find_lease_address(&queue.pubkey(), aggregator);
        let (permission, permission_bump) =
            self.find_permission_address(&queue.authority(), &queue.pubkey(), aggregator);
        let escrow = pda::find_lease_escrow_address(&lease, &queue.mint());
        self.oracle()
            .request()
            .args(instructions::AggregatorOpenRound {
                params: instructions::AggregatorOpenRoundParams {
                    state_bump,
                    lease_bump,
                    permission_bump,
                    jitter,
                },
            })
            .accounts(accounts::AggregatorOpenRound {
                aggregator: *aggregator,
                lease,
                oracle_queue: queue.pubkey(),
                queue_authority: queue.authority(),
                permission,
                escrow,
                program_state,
                payout_wallet: *payout_wallet,
                token_program: token::ID,
                data_buffer: queue.data_buffer(),
                mint: queue.mint(),
            })
    }
}
