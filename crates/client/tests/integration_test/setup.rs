use tokio::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use super::test_client::TestClient;

/// Get the shared test client, or `None` when the integration test is not
/// configured for this environment.
pub async fn init() -> eyre::Result<Option<&'static TestClient>> {
    static CLIENT: OnceCell<Option<TestClient>> = OnceCell::const_new();

    Ok(CLIENT
        .get_or_try_init::<eyre::Error, _, _>(|| async {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::builder().from_env_lossy())
                .try_init();
            let client = TestClient::from_envs()?;
            if client.is_none() {
                eprintln!("integration test is not enabled, skipping");
            }
            Ok(client)
        })
        .await?
        .as_ref())
}
