use std::ops::Deref;

use anchor_client::{
    solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer, system_program},
    RequestBuilder,
};
use typed_builder::TypedBuilder;

use crate::{accounts, instructions, oracle_job::OracleJob, utils::str_to_fixed};

/// Maximum framed size of a job definition, in bytes.
pub const JOB_MAX_SIZE: usize = 6400;

/// Largest framed job that fits in a single `job_init` instruction. Larger
/// jobs are initialized empty and uploaded with [`JobOps::set_job_data`].
pub const JOB_CHUNK_SIZE: usize = 800;

/// Parameters for [`JobOps::create_job`].
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct CreateJobParams {
    #[builder(default, setter(into))]
    pub name: String,
    /// Unix timestamp after which the job is no longer valid.
    #[builder(default)]
    pub expiration: i64,
}

/// Job operations.
pub trait JobOps<C> {
    /// Create a job account holding the length-delimited encoding of
    /// `oracle_job`. The payer becomes the job authority.
    ///
    /// Jobs over [`JOB_CHUNK_SIZE`] framed bytes are created empty; upload
    /// the remaining chunks with [`JobOps::set_job_data`] before use.
    fn create_job<'a>(
        &'a self,
        job: &'a Keypair,
        oracle_job: &OracleJob,
        params: CreateJobParams,
    ) -> crate::Result<RequestBuilder<'a, C>>;

    /// Upload one chunk of a job definition created empty by
    /// [`JobOps::create_job`].
    fn set_job_data<'a>(&'a self, job: &Pubkey, chunk_idx: u8, data: Vec<u8>)
        -> RequestBuilder<'a, C>;
}

impl<C, S> JobOps<C> for crate::Client<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    fn create_job<'a>(
        &'a self,
        job: &'a Keypair,
        oracle_job: &OracleJob,
        params: CreateJobParams,
    ) -> crate::Result<RequestBuilder<'a, C>> {
        let framed = oracle_job.encode_delimited();
        if framed.len() > JOB_MAX_SIZE {
            return Err(crate::Error::invalid_argument(format!(
                "job definitions must encode to at most {JOB_MAX_SIZE} bytes, got {}",
                framed.len()
            )));
        }
        let size = framed.len() as u32;
        let data = if framed.len() <= JOB_CHUNK_SIZE {
            framed
        } else {
            Vec::new()
        };
        let (program_state, state_bump) = self.find_program_state_address();
        tracing::debug!(job=%job.pubkey(), size, "creating job");
        let request = self
            .oracle()
            .request()
            .args(instructions::JobInit {
                params: instructions::JobInitParams {
                    name: str_to_fixed(&params.name),
                    expiration: params.expiration,
                    state_bump,
                    data,
                    size: Some(size),
                },
            })
            .accounts(accounts::JobInit {
                job: job.pubkey(),
                authority: self.payer(),
                program_state,
                payer: self.payer(),
                system_program: system_program::ID,
            })
            .signer(job);
        Ok(request)
    }

    fn set_job_data<'a>(
        &'a self,
        job: &Pubkey,
        chunk_idx: u8,
        data: Vec<u8>,
    ) -> RequestBuilder<'a, C> {
        self.oracle()
            .request()
            .args(instructions::JobSetData {
                params: instructions::JobSetDataParams { data, chunk_idx },
            })
            .accounts(accounts::JobSetData {
                job: *job,
                authority: self.payer(),
            })
    }
}
