use serde::{Deserialize, Serialize};

use super::common::{null_as_default, Coerced};

/// `data` payload of the `userContestRankingInfo` query, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContestData {
    pub user_contest_ranking: Option<RawContestRanking>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_contest_ranking_history: Vec<ContestHistoryEntry>,
}

/// Contest ranking exactly as the API sends it; `rating` and `global_ranking`
/// are loosely typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawContestRanking {
    pub attended_contests_count: Option<u32>,
    pub rating: Option<serde_json::Value>,
    pub global_ranking: Option<serde_json::Value>,
    pub total_participants: Option<u64>,
    pub top_percentage: Option<f64>,
    pub badge: Option<ContestRankingBadge>,
}

/// Normalized contest data attached to an aggregate record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestResult {
    pub ranking: ContestRanking,
    pub history: Vec<ContestHistoryEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestRanking {
    pub attended_contests_count: u32,
    /// Rounded to two decimals when numeric.
    pub rating: Option<Coerced<f64>>,
    /// Truncated to an integer when numeric.
    pub global_ranking: Option<Coerced<i64>>,
    pub total_participants: Option<u64>,
    pub top_percentage: Option<f64>,
    pub badge: Option<ContestRankingBadge>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestRankingBadge {
    pub name: Option<String>,
}

/// One contest in a user's chronological history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContestHistoryEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub attended: bool,
    pub trend_direction: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub problems_solved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_problems: u32,
    pub finish_time_in_seconds: Option<u64>,
    pub rating: Option<f64>,
    pub ranking: Option<u64>,
    pub contest: Option<ContestInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContestInfo {
    pub title: String,
    pub start_time: Option<i64>,
}
