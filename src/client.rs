use std::time::Duration;

use tracing::instrument;

use crate::error::Result;
use crate::fetch;
use crate::model::*;

const DEFAULT_ENDPOINT: &str = "https://leetcode.com/graphql";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how long to query.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint every query is POSTed to.
    pub endpoint: String,
    /// Per-request deadline; elapsing it counts as a transport failure.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The main entry point for looking up LeetCode users.
///
/// `LeetCodeClient` wraps a [`reqwest::Client`] and exposes the full
/// aggregated lookup as well as each individual sub-query.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> leetcode_profile::Result<()> {
/// use leetcode_profile::LeetCodeClient;
///
/// let client = LeetCodeClient::new();
/// let record = client.get_user("lee215").await?;
/// println!("{} solved {} problems", record.username, record.solved.total);
/// # Ok(())
/// # }
/// ```
pub struct LeetCodeClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl LeetCodeClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client pointed at a custom endpoint or timeout.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, TLS, etc. The fixed
    /// request headers and the per-request timeout are still applied.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// Look up a user and merge profile, contest and badge data.
    ///
    /// Fails when the profile cannot be fetched or the user does not exist.
    /// Contest and badge failures only leave their part of the record empty.
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<AggregateRecord> {
        fetch::get_user(&self.http, &self.config, username).await
    }

    /// Fetch only the matched user from the profile query.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, username: &str) -> Result<MatchedUser> {
        fetch::get_profile(&self.http, &self.config, username).await
    }

    /// Fetch normalized contest data, `None` if unavailable.
    #[instrument(skip(self))]
    pub async fn get_contest(&self, username: &str) -> Option<ContestResult> {
        fetch::get_contest(&self.http, &self.config, username).await
    }

    /// Fetch the user's badges, `None` if unavailable.
    #[instrument(skip(self))]
    pub async fn get_badges(&self, username: &str) -> Option<BadgesResult> {
        fetch::get_badges(&self.http, &self.config, username).await
    }
}

impl Default for LeetCodeClient {
    fn default() -> Self {
        Self::new()
    }
}
