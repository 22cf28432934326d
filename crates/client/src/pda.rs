use anchor_client::solana_sdk::pubkey::Pubkey;
use anchor_spl::associated_token::get_associated_token_address;

/// Seed for the program state account.
pub const STATE_SEED: &[u8] = b"STATE";

/// Seed prefix for permission accounts.
pub const PERMISSION_SEED: &[u8] = b"PermissionAccountData";

/// Seed prefix for lease accounts.
pub const LEASE_SEED: &[u8] = b"LeaseAccountData";

/// Find PDA for the program state (`SbState`) account.
pub fn find_program_state_address(oracle_program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED], oracle_program_id)
}

/// Find PDA for the permission account granting `grantee` use of `granter`,
/// controlled by `authority`.
pub fn find_permission_address(
    authority: &Pubkey,
    granter: &Pubkey,
    grantee: &Pubkey,
    oracle_program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PERMISSION_SEED,
            authority.as_ref(),
            granter.as_ref(),
            grantee.as_ref(),
        ],
        oracle_program_id,
    )
}

/// Find PDA for the lease binding `aggregator` to `queue`.
pub fn find_lease_address(
    queue: &Pubkey,
    aggregator: &Pubkey,
    oracle_program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LEASE_SEED, queue.as_ref(), aggregator.as_ref()],
        oracle_program_id,
    )
}

/// The lease escrow is the associated token account of the lease PDA for the
/// queue mint.
pub fn find_lease_escrow_address(lease: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(lease, mint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ORACLE_PROGRAM_ID;

    #[test]
    fn derivations_are_deterministic() {
        let authority = Pubkey::new_unique();
        let queue = Pubkey::new_unique();
        let aggregator = Pubkey::new_unique();

        let state = find_program_state_address(&ORACLE_PROGRAM_ID);
        assert_eq!(state, find_program_state_address(&ORACLE_PROGRAM_ID));

        let permission = find_permission_address(&authority, &queue, &aggregator, &ORACLE_PROGRAM_ID);
        assert_eq!(
            permission,
            find_permission_address(&authority, &queue, &aggregator, &ORACLE_PROGRAM_ID)
        );

        let lease = find_lease_address(&queue, &aggregator, &ORACLE_PROGRAM_ID);
        assert_eq!(lease, find_lease_address(&queue, &aggregator, &ORACLE_PROGRAM_ID));

        assert_ne!(state.0, permission.0);
        assert_ne!(permission.0, lease.0);
    }

    #[test]
    fn permission_depends_on_every_seed() {
        let authority = Pubkey::new_unique();
        let granter = Pubkey::new_unique();
        let grantee = Pubkey::new_unique();
        let base = find_permission_address(&authority, &granter, &grantee, &ORACLE_PROGRAM_ID);
        let other = find_permission_address(&authority, &grantee, &granter, &ORACLE_PROGRAM_ID);
        assert_ne!(base.0, other.0);
    }
}
