use anchor_client::{
    anchor_lang::prelude::borsh::{self, BorshDeserialize, BorshSerialize},
    solana_sdk::pubkey::Pubkey,
};

/// Decimal as stored by the oracle program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, BorshDeserialize, BorshSerialize)]
pub struct SwitchboardDecimal {
    pub mantissa: i128,
    pub scale: u32,
}

/// Program state (`SbState`) account data.
///
/// Prefix view: only the leading fields are decoded, trailing reserved bytes
/// are ignored.
#[derive(Debug, Clone, BorshDeserialize, BorshSerialize)]
pub struct SbState {
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub token_vault: Pubkey,
    pub dao_mint: Pubkey,
}

impl SbState {
    pub const DISCRIMINATOR: [u8; 8] = [159, 42, 192, 191, 139, 62, 168, 28];

    /// Decode from raw account data.
    pub fn decode(data: &[u8]) -> crate::Result<Self> {
        let mut data = strip_discriminator(data, &Self::DISCRIMINATOR)?;
        Ok(Self::deserialize(&mut data)?)
    }
}

/// Oracle queue account data.
#[derive(Debug, Clone, BorshDeserialize, BorshSerialize)]
pub struct OracleQueueAccountData {
    pub name: [u8; 32],
    pub metadata: [u8; 64],
    pub authority: Pubkey,
    pub oracle_timeout: u32,
    pub reward: u64,
    pub min_stake: u64,
    pub slashing_enabled: bool,
    pub variance_tolerance_multiplier: SwitchboardDecimal,
    pub feed_probation_period: u32,
    pub curr_idx: u32,
    pub size: u32,
    pub gc_idx: u32,
    pub consecutive_feed_failure_limit: u64,
    pub consecutive_oracle_failure_limit: u64,
    pub unpermissioned_feeds_enabled: bool,
    pub unpermissioned_vrf_enabled: bool,
    pub curator_reward_cut: SwitchboardDecimal,
    pub lock_lease_funding: bool,
    pub mint: Pubkey,
    pub enable_buffer_relayers: bool,
    pub ebuf: [u8; 968],
    pub max_size: u32,
    pub data_buffer: Pubkey,
}

impl OracleQueueAccountData {
    pub const DISCRIMINATOR: [u8; 8] = [164, 207, 200, 51, 199, 113, 35, 109];

    /// Decode from raw account data.
    pub fn decode(data: &[u8]) -> crate::Result<Self> {
        let mut data = strip_discriminator(data, &Self::DISCRIMINATOR)?;
        Ok(Self::deserialize(&mut data)?)
    }
}

/// An oracle queue account together with its decoded data.
#[derive(Debug, Clone)]
pub struct OracleQueue {
    pubkey: Pubkey,
    data: OracleQueueAccountData,
}

impl OracleQueue {
    pub(crate) fn new(pubkey: Pubkey, data: OracleQueueAccountData) -> Self {
        Self { pubkey, data }
    }

    /// Get the queue address.
    pub fn pubkey(&self) -> Pubkey {
        self.pubkey
    }

    /// Get the decoded account data.
    pub fn data(&self) -> &OracleQueueAccountData {
        &self.data
    }

    /// Get the queue authority.
    pub fn authority(&self) -> Pubkey {
        self.data.authority
    }

    /// Get the queue's oracle ring buffer account.
    pub fn data_buffer(&self) -> Pubkey {
        self.data.data_buffer
    }

    /// Get the mint the queue pays rewards in. A queue created without an
    /// explicit mint uses wrapped SOL.
    pub fn mint(&self) -> Pubkey {
        if self.data.mint == Pubkey::default() {
            spl_token::native_mint::id()
        } else {
            self.data.mint
        }
    }
}

fn strip_discriminator<'a>(data: &'a [u8], expected: &[u8; 8]) -> crate::Result<&'a [u8]> {
    let Some((discriminator, rest)) = data.split_at_checked(8) else {
        return Err(crate::Error::InvalidDiscriminator);
    };
    if discriminator != expected {
        return Err(crate::Error::InvalidDiscriminator);
    }
    Ok(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_queue() -> OracleQueueAccountData {
        OracleQueueAccountData {
            name: [0; 32],
            metadata: [0; 64],
            authority: Pubkey::new_unique(),
            oracle_timeout: 180,
            reward: 12_500,
            min_stake: 0,
            slashing_enabled: false,
            variance_tolerance_multiplier: SwitchboardDecimal::default(),
            feed_probation_period: 0,
            curr_idx: 0,
            size: 7,
            gc_idx: 0,
            consecutive_feed_failure_limit: 1_000,
            consecutive_oracle_failure_limit: 1_000,
            unpermissioned_feeds_enabled: true,
            unpermissioned_vrf_enabled: false,
            curator_reward_cut: SwitchboardDecimal::default(),
            lock_lease_funding: false,
            mint: Pubkey::default(),
            enable_buffer_relayers: false,
            ebuf: [0; 968],
            max_size: 100,
            data_buffer: Pubkey::new_unique(),
        }
    }

    fn to_account_data(queue: &OracleQueueAccountData) -> Vec<u8> {
        let mut data = OracleQueueAccountData::DISCRIMINATOR.to_vec();
        queue.serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn decode_queue_account() {
        let queue = sample_queue();
        let decoded = OracleQueueAccountData::decode(&to_account_data(&queue)).unwrap();
        assert_eq!(decoded.authority, queue.authority);
        assert_eq!(decoded.data_buffer, queue.data_buffer);
        assert_eq!(decoded.max_size, queue.max_size);
    }

    #[test]
    fn reject_wrong_discriminator() {
        let mut data = to_account_data(&sample_queue());
        data[0] ^= 0xff;
        assert!(matches!(
            OracleQueueAccountData::decode(&data),
            Err(crate::Error::InvalidDiscriminator)
        ));
    }

    #[test]
    fn default_queue_mint_falls_back_to_wrapped_sol() {
        let queue = OracleQueue::new(Pubkey::new_unique(), sample_queue());
        assert_eq!(queue.mint(), spl_token::native_mint::id());
    }

    #[test]
    fn state_decode_ignores_trailing_bytes() {
        let state = SbState {
            authority: Pubkey::new_unique(),
            token_mint: spl_token::native_mint::id(),
            token_vault: Pubkey::new_unique(),
            dao_mint: Pubkey::new_unique(),
        };
        let mut data = SbState::DISCRIMINATOR.to_vec();
        state.serialize(&mut data).unwrap();
        data.extend_from_slice(&[0; 992]);
        let decoded = SbState::decode(&data).unwrap();
        assert_eq!(decoded.token_mint, state.token_mint);
    }
}
