use std::ops::Deref;

use anchor_client::{
    solana_sdk::{pubkey::Pubkey, signer::Signer, system_program},
    RequestBuilder,
};

use crate::{accounts, instructions};

/// Permission operations.
pub trait PermissionOps<C> {
    /// Create the permission account linking `grantee` to `granter` under the
    /// given authority. For a feed this is the queue as granter, the
    /// aggregator as grantee and the queue authority as authority.
    ///
    /// Only the payer signs; the authority takes effect once it approves the
    /// grant (or the queue runs unpermissioned).
    fn create_permission<'a>(
        &'a self,
        authority: &Pubkey,
        granter: &Pubkey,
        grantee: &Pubkey,
    ) -> RequestBuilder<'a, C>;
}

impl<C, S> PermissionOps<C> for crate::Client<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    fn create_permission<'a>(
        &'a self,
        authority: &Pubkey,
        granter: &Pubkey,
        grantee: &Pubkey,
    ) -> RequestBuilder<'a, C> {
        let (permission, _) = self.find_permission_address(authority, granter, grantee);
        tracing::debug!(%permission, %granter, %grantee, "creating permission");
        self.oracle()
            .request()
            .args(instructions::PermissionInit {
                params: instructions::PermissionInitParams {},
            })
            .accounts(accounts::PermissionInit {
                permission,
                authority: *authority,
                granter: *granter,
                grantee: *grantee,
                payer: self.payer(),
                system_program: system_program::ID,
            })
    }
}
