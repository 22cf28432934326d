use anchor_client::solana_sdk;

/// Error type for `sbv2-client`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client Error.
    #[error("{0:#?}")]
    Client(#[from] anchor_client::ClientError),
    /// Protobuf decode error.
    #[error("prost: {0}")]
    Decode(#[from] prost::DecodeError),
    /// Program error from an instruction builder.
    #[error("program: {0}")]
    Program(#[from] solana_sdk::program_error::ProgramError),
    /// IO Error.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// Account not found.
    #[error("account not found")]
    NotFound,
    /// Account data did not start with the expected discriminator.
    #[error("invalid account discriminator")]
    InvalidDiscriminator,
    /// Invalid Arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create "invalid argument" error.
    pub fn invalid_argument(msg: impl ToString) -> Self {
        Self::InvalidArgument(msg.to_string())
    }
}
