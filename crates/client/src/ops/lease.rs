use std::ops::Deref;

use anchor_client::{
    solana_sdk::{pubkey::Pubkey, signer::Signer, system_program},
    RequestBuilder,
};
use anchor_spl::token;
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use typed_builder::TypedBuilder;

use crate::{accounts, instructions, pda, states::OracleQueue};

/// Parameters for [`LeaseOps::create_lease`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateLeaseParams {
    /// Token account the initial funding is drawn from. Its authority must
    /// be the payer.
    pub funder: Pubkey,
    /// Amount moved from the funder into the lease escrow.
    pub load_amount: u64,
    /// Authority allowed to withdraw remaining escrow funds. Defaults to the
    /// payer.
    #[builder(default)]
    pub withdraw_authority: Option<Pubkey>,
}

/// Lease operations.
pub trait LeaseOps<C> {
    /// Create the lease binding `aggregator` to `queue` and load it with
    /// funds from the given funder token account.
    ///
    /// The lease escrow is the associated token account of the lease PDA for
    /// the queue mint; it is created idempotently in the same transaction.
    fn create_lease<'a>(
        &'a self,
        queue: &OracleQueue,
        aggregator: &Pubkey,
        params: CreateLeaseParams,
    ) -> RequestBuilder<'a, C>;
}

impl<C, S> LeaseOps<C> for crate::Client<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    fn create_lease<'a>(
        &'a self,
        queue: &OracleQueue,
        aggregator: &Pubkey,
        params: CreateLeaseParams,
    ) -> RequestBuilder<'a, C> {
        let (lease, lease_bump) = self.find_lease_address(&queue.pubkey(), aggregator);
        let (program_state, state_bump) = self.find_program_state_address();
        let mint = queue.mint();
        let escrow = pda::find_lease_escrow_address(&lease, &mint);
        tracing::debug!(%lease, %escrow, load_amount = params.load_amount, "creating lease");
        self.oracle()
            .request()
            .instruction(create_associated_token_account_idempotent(
                &self.payer(),
                &lease,
                &mint,
                &token::ID,
            ))
            .args(instructions::LeaseInit {
                params: instructions::LeaseInitParams {
                    load_amount: params.load_amount,
                    withdraw_authority: params.withdraw_authority.unwrap_or(self.payer()),
                    lease_bump,
                    state_bump,
                    wallet_bumps: Vec::new(),
                },
            })
            .accounts(accounts::LeaseInit {
                lease,
                queue: queue.pubkey(),
                aggregator: *aggregator,
                funder: params.funder,
                payer: self.payer(),
                system_program: system_program::ID,
                token_program: token::ID,
                owner: self.payer(),
                escrow,
                program_state,
                mint,
            })
    }
}
