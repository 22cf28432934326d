//! Operations on oracle program accounts, one trait per entity.
//!
//! Every operation returns an anchor [`RequestBuilder`](anchor_client::RequestBuilder)
//! so callers decide how to compose and send transactions. Operations are
//! independent: a failed send aborts the caller's sequence and leaves
//! accounts created by earlier operations on chain.

/// Aggregator (feed) operations.
pub mod aggregator;

/// Job operations.
pub mod job;

/// Oracle queue operations.
pub mod queue;

/// Permission operations.
pub mod permission;

/// Lease operations.
pub mod lease;

/// Token escrow operations.
pub mod token;

pub use self::{
    aggregator::{AggregatorOps, CreateAggregatorParams, AGGREGATOR_ACCOUNT_SIZE},
    job::{CreateJobParams, JobOps, JOB_CHUNK_SIZE, JOB_MAX_SIZE},
    lease::{CreateLeaseParams, LeaseOps},
    permission::PermissionOps,
    queue::QueueOps,
    token::TokenOps,
};
