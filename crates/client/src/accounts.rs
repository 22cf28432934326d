//! Account metas for the oracle program instructions, in the order the
//! program expects them.

use anchor_client::{
    anchor_lang::ToAccountMetas,
    solana_sdk::{instruction::AccountMeta, pubkey::Pubkey},
};

pub struct AggregatorInit {
    pub aggregator: Pubkey,
    pub authority: Pubkey,
    pub queue: Pubkey,
    pub program_state: Pubkey,
}

impl ToAccountMetas for AggregatorInit {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.aggregator, false),
            AccountMeta::new_readonly(self.authority, false),
            AccountMeta::new_readonly(self.queue, false),
            AccountMeta::new_readonly(self.program_state, false),
        ]
    }
}

pub struct JobInit {
    pub job: Pubkey,
    pub authority: Pubkey,
    pub program_state: Pubkey,
    pub payer: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for JobInit {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.job, true),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new_readonly(self.program_state, false),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub struct JobSetData {
    pub job: Pubkey,
    pub authority: Pubkey,
}

impl ToAccountMetas for JobSetData {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.job, false),
            AccountMeta::new_readonly(self.authority, true),
        ]
    }
}

pub struct AggregatorAddJob {
    pub aggregator: Pubkey,
    pub authority: Pubkey,
    pub job: Pubkey,
}

impl ToAccountMetas for AggregatorAddJob {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.aggregator, false),
            AccountMeta::new_readonly(self.authority, true),
            AccountMeta::new(self.job, false),
        ]
    }
}

pub struct PermissionInit {
    pub permission: Pubkey,
    pub authority: Pubkey,
    pub granter: Pubkey,
    pub grantee: Pubkey,
    pub payer: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for PermissionInit {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.permission, false),
            AccountMeta::new_readonly(self.authority, false),
            AccountMeta::new_readonly(self.granter, false),
            AccountMeta::new_readonly(self.grantee, false),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub struct LeaseInit {
    pub lease: Pubkey,
    pub queue: Pubkey,
    pub aggregator: Pubkey,
    pub funder: Pubkey,
    pub payer: Pubkey,
    pub system_program: Pubkey,
    pub token_program: Pubkey,
    pub owner: Pubkey,
    pub escrow: Pubkey,
    pub program_state: Pubkey,
    pub mint: Pubkey,
}

impl ToAccountMetas for LeaseInit {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.lease, false),
            AccountMeta::new(self.queue, false),
            AccountMeta::new_readonly(self.aggregator, false),
            AccountMeta::new(self.funder, false),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new(self.owner, true),
            AccountMeta::new(self.escrow, false),
            AccountMeta::new_readonly(self.program_state, false),
            AccountMeta::new_readonly(self.mint, false),
        ]
    }
}

pub struct AggregatorOpenRound {
    pub aggregator: Pubkey,
    pub lease: Pubkey,
    pub oracle_queue: Pubkey,
    pub queue_authority: Pubkey,
    pub permission: Pubkey,
    pub escrow: Pubkey,
    pub program_state: Pubkey,
    pub payout_wallet: Pubkey,
    pub token_program: Pubkey,
    pub data_buffer: Pubkey,
    pub mint: Pubkey,
}

impl ToAccountMetas for AggregatorOpenRound {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.aggregator, false),
            AccountMeta::new(self.lease, false),
            AccountMeta::new(self.oracle_queue, false),
            AccountMeta::new_readonly(self.queue_authority, false),
            AccountMeta::new(self.permission, false),
            AccountMeta::new(self.escrow, false),
            AccountMeta::new_readonly(self.program_state, false),
            AccountMeta::new(self.payout_wallet, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.data_buffer, false),
            AccountMeta::new_readonly(self.mint, false),
        ]
    }
}
