use std::{str::FromStr, sync::Arc};

use anchor_client::{solana_sdk::signature::read_keypair_file, Cluster};
use sbv2_client::Client;
use serde_with::DisplayFromStr;
use solana_sdk::pubkey::Pubkey;

const ENV_SBV2_IT: &str = "SBV2_IT";
const SBV2_IT_PREFIX: &str = "SBV2_IT_";

/// The permissionless oracle queue on devnet.
const DEFAULT_QUEUE: &str = "uPeRMdfPmrPqgRWSrjAnAkH78RqAhe5kXoW6vBYRqFX";

/// Config for [`TestClient`].
#[serde_with::serde_as]
#[derive(serde::Deserialize)]
pub struct Config {
    #[serde(default = "default_cluster")]
    #[serde_as(as = "DisplayFromStr")]
    cluster: Cluster,
    wallet: String,
    #[serde(default)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    queue: Option<Pubkey>,
}

fn default_cluster() -> Cluster {
    Cluster::Devnet
}

/// A test client for the feed-creation integration test.
pub struct TestClient {
    client: Client<Arc<solana_sdk::signature::Keypair>>,
    queue: Pubkey,
}

impl TestClient {
    /// Get client.
    pub fn client(&self) -> &Client<Arc<solana_sdk::signature::Keypair>> {
        &self.client
    }

    /// Get the oracle queue under test.
    pub fn queue(&self) -> &Pubkey {
        &self.queue
    }

    /// Build from the environment. Returns `None` when no config is present,
    /// which skips the integration test.
    pub fn from_envs() -> eyre::Result<Option<Self>> {
        use figment::{
            providers::{Env, Format, Toml},
            Figment,
        };
        use std::env;

        let config = match env::var(ENV_SBV2_IT) {
            Ok(path) => {
                tracing::trace!("Using config: {path}");
                Some(
                    Figment::new()
                        .merge(Toml::file(path))
                        .merge(Env::prefixed(SBV2_IT_PREFIX))
                        .extract::<Config>()?,
                )
            }
            Err(_) => Figment::new()
                .merge(Env::prefixed(SBV2_IT_PREFIX))
                .extract()
                .ok(),
        };
        let Some(config) = config else {
            return Ok(None);
        };

        let wallet = shellexpand::tilde(&config.wallet);
        let payer = read_keypair_file(wallet.as_ref()).map_err(|err| eyre::eyre!("{err}"))?;
        let client = Client::new(config.cluster, Arc::new(payer))?;
        let queue = match config.queue {
            Some(queue) => queue,
            None => Pubkey::from_str(DEFAULT_QUEUE)?,
        };

        Ok(Some(Self { client, queue }))
    }
}
