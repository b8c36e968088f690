use tracing::{debug, instrument, warn};

use crate::aggregate;
use crate::client::ClientConfig;
use crate::error::{LeetCodeError, Result};
use crate::graphql;
use crate::model::{
    AggregateRecord, BadgesData, BadgesResult, ContestData, ContestResult, MatchedUser,
    ProfileData,
};
use crate::query::QueryKind;

/// Fetch the matched user. Any failure here ends the lookup.
#[instrument(skip(client, config))]
pub(crate) async fn get_profile(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
) -> Result<MatchedUser> {
    let response =
        graphql::post_query::<ProfileData>(client, config, QueryKind::Profile, username).await?;
    let graphql_error = response.error();

    match response.data {
        Some(ProfileData {
            matched_user: Some(user),
        }) if !user.username.is_empty() => Ok(user),
        // "user does not exist" is reported as an error next to a null matchedUser
        Some(_) => Err(LeetCodeError::UserNotFound {
            username: username.to_owned(),
        }),
        None => Err(graphql_error.unwrap_or_else(|| LeetCodeError::UserNotFound {
            username: username.to_owned(),
        })),
    }
}

/// Fetch and normalize contest data. Failures degrade to `None`.
#[instrument(skip(client, config))]
pub(crate) async fn get_contest(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
) -> Option<ContestResult> {
    let response =
        graphql::post_query::<ContestData>(client, config, QueryKind::Contest, username).await;
    let data = optional_data(QueryKind::Contest, response)?;
    let contest = aggregate::normalize_contest(data);
    debug!(found = contest.is_some(), "parsed contest ranking");
    contest
}

/// Fetch the badge list. Failures degrade to `None`.
#[instrument(skip(client, config))]
pub(crate) async fn get_badges(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
) -> Option<BadgesResult> {
    let response =
        graphql::post_query::<BadgesData>(client, config, QueryKind::Badges, username).await;
    let badges = optional_data(QueryKind::Badges, response)?.matched_user;
    debug!(
        count = badges.as_ref().map(|b| b.badges.len()).unwrap_or_default(),
        "parsed badges"
    );
    badges
}

/// Unwrap the payload of an enrichment query, logging and dropping any failure.
fn optional_data<T>(kind: QueryKind, response: Result<graphql::GraphQlResponse<T>>) -> Option<T> {
    let response = match response {
        Ok(response) => response,
        Err(e) => {
            warn!(%kind, failure = %e.kind(), error = %e, "dropping optional data");
            return None;
        }
    };
    if let Some(e) = response.error() {
        warn!(%kind, error = %e, "dropping optional data");
        return None;
    }
    response.data
}

/// Run the three queries in order and merge them into one record.
#[instrument(skip(client, config))]
pub(crate) async fn get_user(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
) -> Result<AggregateRecord> {
    let username = username.trim();
    if username.is_empty() {
        return Err(LeetCodeError::EmptyUsername);
    }

    let profile = get_profile(client, config, username).await?;
    let contest = get_contest(client, config, username).await;
    let badges = get_badges(client, config, username).await;

    let record = aggregate::merge(profile, contest, badges);
    debug!(
        total_solved = record.solved.total,
        has_contest = record.contest.is_some(),
        has_badges = record.badges.is_some(),
        "built aggregate record"
    );
    Ok(record)
}
