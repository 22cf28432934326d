use std::ops::Deref;

use anchor_client::{
    solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signer::Signer},
    Cluster, Program,
};

use typed_builder::TypedBuilder;

/// Switchboard V2 Oracle Program Address.
///
/// `SW1TCH7qEPTdLsDHRgPuMQjbQxKdH2aBStViMFnt64f` on both mainnet-beta and
/// devnet.
pub const ORACLE_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    6, 136, 81, 198, 140, 104, 50, 240, 47, 165, 129, 177, 191, 73, 27, 119, 202, 65, 119, 107,
    162, 185, 136, 181, 166, 250, 186, 142, 227, 162, 236, 144,
]);

/// Options for [`Client`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ClientOptions {
    #[builder(default)]
    oracle_program_id: Option<Pubkey>,
    #[builder(default = CommitmentConfig::confirmed())]
    commitment: CommitmentConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Switchboard V2 Client.
pub struct Client<C> {
    wallet: C,
    anchor: anchor_client::Client<C>,
    oracle: Program<C>,
}

impl<C: Clone + Deref<Target = impl Signer>> Client<C> {
    /// Create a new [`Client`] with the given options.
    pub fn new_with_options(
        cluster: Cluster,
        payer: C,
        options: ClientOptions,
    ) -> crate::Result<Self> {
        let ClientOptions {
            oracle_program_id,
            commitment,
        } = options;
        let anchor = anchor_client::Client::new_with_options(cluster, payer.clone(), commitment);
        Ok(Self {
            wallet: payer,
            oracle: anchor.program(oracle_program_id.unwrap_or(ORACLE_PROGRAM_ID))?,
            anchor,
        })
    }

    /// Create a new [`Client`] with default options.
    pub fn new(cluster: Cluster, payer: C) -> crate::Result<Self> {
        Self::new_with_options(cluster, payer, ClientOptions::default())
    }

    /// Get payer.
    pub fn payer(&self) -> Pubkey {
        self.wallet.pubkey()
    }

    /// Create other program using client's wallet.
    pub fn program(&self, program_id: Pubkey) -> crate::Result<Program<C>> {
        Ok(self.anchor.program(program_id)?)
    }

    /// Get the oracle program.
    pub fn oracle(&self) -> &Program<C> {
        &self.oracle
    }

    /// Get the program id of the oracle program.
    pub fn oracle_program_id(&self) -> Pubkey {
        self.oracle().id()
    }

    /// Find PDA for the program state account.
    pub fn find_program_state_address(&self) -> (Pubkey, u8) {
        crate::pda::find_program_state_address(&self.oracle_program_id())
    }

    /// Find PDA for the permission account of the given grant.
    pub fn find_permission_address(
        &self,
        authority: &Pubkey,
        granter: &Pubkey,
        grantee: &Pubkey,
    ) -> (Pubkey, u8) {
        crate::pda::find_permission_address(authority, granter, grantee, &self.oracle_program_id())
    }

    /// Find PDA for the lease binding the given aggregator to the given queue.
    pub fn find_lease_address(&self, queue: &Pubkey, aggregator: &Pubkey) -> (Pubkey, u8) {
        crate::pda::find_lease_address(queue, aggregator, &self.oracle_program_id())
    }
}
