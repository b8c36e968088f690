use serde::Serialize;

use super::badges::BadgesResult;
use super::contest::ContestResult;
use super::profile::MatchedUser;

/// Everything known about one user after a lookup.
///
/// Only produced when the profile query found the user; contest and badge
/// data are independently optional.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRecord {
    pub username: String,
    pub profile: MatchedUser,
    pub solved: SolvedStats,
    pub contest: Option<ContestResult>,
    pub badges: Option<BadgesResult>,
}

/// Accepted problem counts split into the fixed difficulty buckets.
///
/// `total` sums every entry, including difficulties that fall in no bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedStats {
    pub total: u64,
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coerced, ContestRanking};

    #[test]
    fn test_json_keys_are_camel_case() {
        let record = AggregateRecord {
            username: "alice".to_string(),
            profile: MatchedUser {
                username: "alice".to_string(),
                github_url: Some("https://github.com/alice".to_string()),
                ..Default::default()
            },
            solved: SolvedStats::default(),
            contest: Some(ContestResult {
                ranking: ContestRanking {
                    attended_contests_count: 3,
                    rating: Some(Coerced::Converted(1500.25)),
                    global_ranking: Some(Coerced::Raw(serde_json::json!("n/a"))),
                    total_participants: None,
                    top_percentage: None,
                    badge: None,
                },
                history: vec![],
            }),
            badges: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        let ranking = &value["contest"]["ranking"];
        assert_eq!(ranking["attendedContestsCount"], 3);
        assert_eq!(ranking["rating"], 1500.25);
        assert_eq!(ranking["globalRanking"], "n/a");
        assert!(ranking.get("attended_contests_count").is_none());
        assert_eq!(value["profile"]["githubUrl"], "https://github.com/alice");
        assert_eq!(value["solved"]["total"], 0);
    }
}
