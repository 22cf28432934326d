/// Error type for `sbv2-client`.
pub mod error;

/// Client for the Switchboard V2 oracle program.
pub mod client;

/// PDA derivations.
pub mod pda;

/// Job definition schema and length-delimited framing.
pub mod oracle_job;

/// On-chain account data.
pub mod states;

/// Instruction data for the oracle program.
pub mod instructions;

/// Account metas for the oracle program.
pub mod accounts;

/// Operations on oracle program accounts.
pub mod ops;

/// Utils.
pub mod utils;

pub use client::{Client, ClientOptions, ORACLE_PROGRAM_ID};
pub use error::Error;
pub use oracle_job::OracleJob;

pub type Result<T> = std::result::Result<T, Error>;
