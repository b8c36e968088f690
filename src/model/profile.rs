use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::common::null_as_default;

/// `data` payload of the `userPublicProfile` query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub matched_user: Option<MatchedUser>,
}

/// The primary subject of a lookup. Its absence means the user does not exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchedUser {
    pub username: String,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub contest_badge: Option<ContestBadge>,
    pub profile: Option<UserProfile>,
    #[serde(deserialize_with = "null_as_default")]
    pub problems_solved_beats_stats: Vec<BeatsStat>,
    pub submit_stats_global: Option<SubmitStats>,
}

impl MatchedUser {
    /// Accepted submission counts, or an empty slice when the stats block is missing.
    pub fn accepted(&self) -> &[SubmissionCount] {
        self.submit_stats_global
            .as_ref()
            .map(|s| s.ac_submission_num.as_slice())
            .unwrap_or_default()
    }
}

/// Badge earned through contest rating (Knight, Guardian, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContestBadge {
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub expired: bool,
    pub hover_text: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub ranking: Option<i64>,
    pub user_avatar: Option<String>,
    pub real_name: Option<String>,
    pub about_me: Option<String>,
    pub school: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub websites: Vec<String>,
    pub country_name: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skill_tags: Vec<String>,
    pub post_view_count: Option<i64>,
    pub post_view_count_diff: Option<i64>,
    pub reputation: Option<i64>,
    pub reputation_diff: Option<i64>,
}

/// Percentage of users a profile beats within one difficulty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeatsStat {
    pub difficulty: String,
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitStats {
    #[serde(deserialize_with = "null_as_default")]
    pub ac_submission_num: Vec<SubmissionCount>,
}

/// Accepted submissions for one difficulty bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionCount {
    pub difficulty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub submissions: u64,
}

/// The fixed difficulty buckets problems are grouped into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
