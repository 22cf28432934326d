//! Instruction data for the oracle program, written against its on-chain
//! interface: 8-byte Anchor sighash followed by the borsh-encoded params.

use anchor_client::{
    anchor_lang::{
        prelude::{borsh, AnchorSerialize},
        Discriminator, InstructionData,
    },
    solana_sdk::pubkey::Pubkey,
};

/// Decimal as encoded in instruction params.
#[derive(Debug, Clone, Copy, Default, AnchorSerialize)]
pub struct BorshDecimal {
    pub mantissa: i128,
    pub scale: u32,
}

#[derive(AnchorSerialize)]
pub struct AggregatorInitParams {
    pub name: [u8; 32],
    pub metadata: [u8; 128],
    pub batch_size: u32,
    pub min_oracle_results: u32,
    pub min_job_results: u32,
    pub min_update_delay_seconds: u32,
    pub start_after: i64,
    pub variance_threshold: BorshDecimal,
    pub force_report_period: i64,
    pub expiration: i64,
    pub state_bump: u8,
    pub disable_crank: bool,
}

#[derive(AnchorSerialize)]
pub struct AggregatorInit {
    pub params: AggregatorInitParams,
}

impl Discriminator for AggregatorInit {
    const DISCRIMINATOR: [u8; 8] = [200, 41, 88, 11, 36, 21, 181, 110];
}

impl InstructionData for AggregatorInit {}

#[derive(AnchorSerialize)]
pub struct JobInitParams {
    pub name: [u8; 32],
    pub expiration: i64,
    pub state_bump: u8,
    pub data: Vec<u8>,
    pub size: Option<u32>,
}

#[derive(AnchorSerialize)]
pub struct JobInit {
    pub params: JobInitParams,
}

impl Discriminator for JobInit {
    const DISCRIMINATOR: [u8; 8] = [101, 86, 105, 192, 34, 201, 147, 159];
}

impl InstructionData for JobInit {}

#[derive(AnchorSerialize)]
pub struct JobSetDataParams {
    pub data: Vec<u8>,
    pub chunk_idx: u8,
}

#[derive(AnchorSerialize)]
pub struct JobSetData {
    pub params: JobSetDataParams,
}

impl Discriminator for JobSetData {
    const DISCRIMINATOR: [u8; 8] = [225, 207, 69, 27, 161, 171, 223, 104];
}

impl InstructionData for JobSetData {}

#[derive(AnchorSerialize)]
pub struct AggregatorAddJobParams {
    pub weight: Option<u8>,
}

#[derive(AnchorSerialize)]
pub struct AggregatorAddJob {
    pub params: AggregatorAddJobParams,
}

impl Discriminator for AggregatorAddJob {
    const DISCRIMINATOR: [u8; 8] = [132, 30, 35, 51, 115, 142, 186, 10];
}

impl InstructionData for AggregatorAddJob {}

#[derive(AnchorSerialize)]
pub struct PermissionInitParams {}

#[derive(AnchorSerialize)]
pub struct PermissionInit {
    pub params: PermissionInitParams,
}

impl Discriminator for PermissionInit {
    const DISCRIMINATOR: [u8; 8] = [177, 116, 201, 233, 16, 2, 11, 179];
}

impl InstructionData for PermissionInit {}

#[derive(AnchorSerialize)]
pub struct LeaseInitParams {
    pub load_amount: u64,
    pub withdraw_authority: Pubkey,
    pub lease_bump: u8,
    pub state_bump: u8,
    pub wallet_bumps: Vec<u8>,
}

#[derive(AnchorSerialize)]
pub struct LeaseInit {
    pub params: LeaseInitParams,
}

impl Discriminator for LeaseInit {
    const DISCRIMINATOR: [u8; 8] = [168, 190, 157, 252, 159, 226, 241, 89];
}

impl InstructionData for LeaseInit {}

#[derive(AnchorSerialize)]
pub struct AggregatorOpenRoundParams {
    pub state_bump: u8,
    pub lease_bump: u8,
    pub permission_bump: u8,
    pub jitter: u8,
}

#[derive(AnchorSerialize)]
pub struct AggregatorOpenRound {
    pub params: AggregatorOpenRoundParams,
}

impl Discriminator for AggregatorOpenRound {
    const DISCRIMINATOR: [u8; 8] = [239, 69, 229, 179, 156, 246, 118, 191];
}

impl InstructionData for AggregatorOpenRound {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_data_starts_with_discriminator() {
        let data = PermissionInit {
            params: PermissionInitParams {},
        }
        .data();
        assert_eq!(data, PermissionInit::DISCRIMINATOR);

        let data = AggregatorAddJob {
            params: AggregatorAddJobParams { weight: None },
        }
        .data();
        assert_eq!(&data[..8], AggregatorAddJob::DISCRIMINATOR);
        assert_eq!(&data[8..], [0]);
    }

    #[test]
    fn job_init_encodes_framed_bytes_verbatim() {
        let framed = vec![4u8, 1, 2, 3, 4];
        let data = JobInit {
            params: JobInitParams {
                name: [0; 32],
                expiration: 0,
                state_bump: 255,
                data: framed.clone(),
                size: Some(framed.len() as u32),
            },
        }
        .data();
        assert_eq!(&data[..8], JobInit::DISCRIMINATOR);
        // name + expiration + state_bump, then the vec length prefix.
        let offset = 8 + 32 + 8 + 1 + 4;
        assert_eq!(&data[offset..offset + framed.len()], framed.as_slice());
        // Option tag + u32 size.
        assert_eq!(data.len(), offset + framed.len() + 1 + 4);
    }

    #[test]
    fn lease_init_layout_size() {
        let data = LeaseInit {
            params: LeaseInitParams {
                load_amount: 1_000_000,
                withdraw_authority: Pubkey::new_unique(),
                lease_bump: 254,
                state_bump: 255,
                wallet_bumps: vec![],
            },
        }
        .data();
        assert_eq!(data.len(), 8 + 8 + 32 + 1 + 1 + 4);
    }

    #[test]
    fn open_round_layout_size() {
        let data = AggregatorOpenRound {
            params: AggregatorOpenRoundParams {
                state_bump: 255,
                lease_bump: 254,
                permission_bump: 253,
                jitter: 0,
            },
        }
        .data();
        assert_eq!(data.len(), 8 + 4);
    }
}
