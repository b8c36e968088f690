use reqwest::header::{CONTENT_TYPE, REFERER, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::client::ClientConfig;
use crate::error::{LeetCodeError, Result};
use crate::model::null_as_default;
use crate::query::QueryKind;

/// The endpoint rejects requests that do not look like they come from a browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const LEETCODE_ORIGIN: &str = "https://leetcode.com";

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GraphQlErrorMessage {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    pub fn error(&self) -> Option<LeetCodeError> {
        if self.errors.is_empty() {
            return None;
        }
        Some(LeetCodeError::GraphQl {
            messages: self.errors.iter().map(|e| e.message.clone()).collect(),
        })
    }
}

/// POST one query to the configured endpoint and decode the response envelope.
pub(crate) async fn post_query<T: DeserializeOwned>(
    client: &reqwest::Client,
    config: &ClientConfig,
    kind: QueryKind,
    username: &str,
) -> Result<GraphQlResponse<T>> {
    let url = config.endpoint.as_str();
    debug!(url, %kind, username, "posting graphql query");

    let response = client
        .post(url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .header(CONTENT_TYPE, "application/json")
        .header(REFERER, LEETCODE_ORIGIN)
        .timeout(config.timeout)
        .json(&kind.request(username))
        .send()
        .await
        .map_err(|e| LeetCodeError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LeetCodeError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| LeetCodeError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| LeetCodeError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProfileData;

    #[test]
    fn test_envelope_with_errors_and_null_data() {
        let body = r#"{"errors":[{"message":"That user does not exist."}],"data":{"matchedUser":null}}"#;
        let response: GraphQlResponse<ProfileData> = serde_json::from_str(body).unwrap();
        assert!(response.data.unwrap().matched_user.is_none());
        assert_eq!(response.errors.len(), 1);
    }

    #[test]
    fn test_envelope_without_errors() {
        let body = r#"{"data":{"matchedUser":{"username":"lee215"}},"errors":null}"#;
        let response: GraphQlResponse<ProfileData> = serde_json::from_str(body).unwrap();
        assert!(response.error().is_none());
        assert_eq!(response.data.unwrap().matched_user.unwrap().username, "lee215");
    }
}
