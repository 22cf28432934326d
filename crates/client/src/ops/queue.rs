use std::{future::Future, ops::Deref};

use anchor_client::{
    solana_sdk::{pubkey::Pubkey, signer::Signer},
    ClientError,
};

use crate::states::{OracleQueue, OracleQueueAccountData, SbState};

/// Oracle queue operations.
pub trait QueueOps<C> {
    /// Load and decode an oracle queue account.
    fn load_queue(&self, address: &Pubkey) -> impl Future<Output = crate::Result<OracleQueue>>;

    /// Load and decode the program state account.
    fn load_program_state(&self) -> impl Future<Output = crate::Result<SbState>>;
}

impl<C, S> QueueOps<C> for crate::Client<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    async fn load_queue(&self, address: &Pubkey) -> crate::Result<OracleQueue> {
        let rpc = self.oracle().async_rpc();
        let account = rpc
            .get_account_with_commitment(address, rpc.commitment())
            .await
            .map_err(ClientError::from)?
            .value
            .ok_or(crate::Error::NotFound)?;
        let data = OracleQueueAccountData::decode(&account.data)?;
        tracing::debug!(queue=%address, authority=%data.authority, "loaded oracle queue");
        Ok(OracleQueue::new(*address, data))
    }

    async fn load_program_state(&self) -> crate::Result<SbState> {
        let (address, _) = self.find_program_state_address();
        let rpc = self.oracle().async_rpc();
        let account = rpc
            .get_account_with_commitment(&address, rpc.commitment())
            .await
            .map_err(ClientError::from)?
            .value
            .ok_or(crate::Error::NotFound)?;
        Ok(SbState::decode(&account.data)?)
    }
}
