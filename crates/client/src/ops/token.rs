use std::{future::Future, ops::Deref};

use anchor_client::{
    anchor_lang::solana_program::program_pack::Pack,
    solana_sdk::{signature::Keypair, signer::Signer, system_instruction},
    ClientError, RequestBuilder,
};

/// Token escrow operations.
pub trait TokenOps<C> {
    /// Create a token account for the `account` keypair holding `amount`
    /// lamports of wrapped SOL, owned by the payer.
    ///
    /// The account is funded with rent plus `amount`, so the wrapped balance
    /// equals `amount`.
    fn create_wrapped_native_account<'a>(
        &'a self,
        account: &'a Keypair,
        amount: u64,
    ) -> impl Future<Output = crate::Result<RequestBuilder<'a, C>>>;
}

impl<C, S> TokenOps<C> for crate::Client<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    async fn create_wrapped_native_account<'a>(
        &'a self,
        account: &'a Keypair,
        amount: u64,
    ) -> crate::Result<RequestBuilder<'a, C>> {
        let space = spl_token::state::Account::LEN;
        let rent = self
            .oracle()
            .async_rpc()
            .get_minimum_balance_for_rent_exemption(space)
            .await
            .map_err(ClientError::from)?;
        tracing::debug!(account=%account.pubkey(), amount, "creating wrapped SOL account");
        let request = self
            .oracle()
            .request()
            .instruction(system_instruction::create_account(
                &self.payer(),
                &account.pubkey(),
                rent + amount,
                space as u64,
                &spl_token::id(),
            ))
            .instruction(spl_token::instruction::initialize_account(
                &spl_token::id(),
                &account.pubkey(),
                &spl_token::native_mint::id(),
                &self.payer(),
            )?)
            .signer(account);
        Ok(request)
    }
}
