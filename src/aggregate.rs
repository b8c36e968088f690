use std::str::FromStr;

use serde_json::Value;

use crate::model::{
    AggregateRecord, BadgesResult, BeatsStat, Coerced, ContestData, ContestRanking,
    ContestResult, Difficulty, MatchedUser, RawContestRanking, SolvedStats,
};

/// Read a finite float out of a JSON number or numeric string.
fn finite_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Convert a global ranking to an integer, truncating any fraction.
/// Values that are not numeric are returned unchanged.
pub fn coerce_ranking(value: Value) -> Coerced<i64> {
    if let Some(n) = value.as_i64() {
        return Coerced::Converted(n);
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    match finite_f64(&value).map(f64::trunc) {
        Some(n) if n >= i64::MIN as f64 && n < i64::MAX as f64 => Coerced::Converted(n as i64),
        _ => Coerced::Raw(value),
    }
}

/// Round a rating to two decimal places. Values that are not numeric are
/// returned unchanged.
pub fn round_rating(value: Value) -> Coerced<f64> {
    match finite_f64(&value) {
        Some(n) => Coerced::Converted((n * 100.0).round() / 100.0),
        None => Coerced::Raw(value),
    }
}

fn normalize_ranking(raw: RawContestRanking) -> ContestRanking {
    ContestRanking {
        attended_contests_count: raw.attended_contests_count.unwrap_or_default(),
        rating: raw.rating.map(round_rating),
        global_ranking: raw.global_ranking.map(coerce_ranking),
        total_participants: raw.total_participants,
        top_percentage: raw.top_percentage,
        badge: raw.badge,
    }
}

/// Turn the contest payload into a [`ContestResult`], or `None` when the
/// user has no contest ranking.
pub fn normalize_contest(data: ContestData) -> Option<ContestResult> {
    let ranking = data.user_contest_ranking?;
    Some(ContestResult {
        ranking: normalize_ranking(ranking),
        history: data.user_contest_ranking_history,
    })
}

/// Bucket accepted submission counts by difficulty.
pub fn solved_stats(user: &MatchedUser) -> SolvedStats {
    user.accepted()
        .iter()
        .fold(SolvedStats::default(), |mut stats, entry| {
            stats.total = stats.total.saturating_add(entry.count);
            match Difficulty::from_str(&entry.difficulty) {
                Ok(Difficulty::Easy) => stats.easy = entry.count,
                Ok(Difficulty::Medium) => stats.medium = entry.count,
                Ok(Difficulty::Hard) => stats.hard = entry.count,
                Err(_) => {}
            }
            stats
        })
}

/// Beats percentages that are actually known, in API order.
pub fn known_beats(user: &MatchedUser) -> impl Iterator<Item = (&str, f64)> {
    user.problems_solved_beats_stats
        .iter()
        .filter_map(|BeatsStat { difficulty, percentage }| {
            percentage.map(|p| (difficulty.as_str(), p))
        })
}

/// Beats percentage for one difficulty bucket, if the API reported one.
pub fn beats_for(user: &MatchedUser, difficulty: Difficulty) -> Option<f64> {
    known_beats(user)
        .find(|(name, _)| Difficulty::from_str(name).is_ok_and(|d| d == difficulty))
        .map(|(_, p)| p)
}

/// Combine the three sub-results into one record keyed by the profile's username.
pub fn merge(
    profile: MatchedUser,
    contest: Option<ContestResult>,
    badges: Option<BadgesResult>,
) -> AggregateRecord {
    AggregateRecord {
        username: profile.username.clone(),
        solved: solved_stats(&profile),
        profile,
        contest,
        badges,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{SubmissionCount, SubmitStats};

    fn user_with(counts: &[(&str, u64)]) -> MatchedUser {
        MatchedUser {
            username: "alice".to_string(),
            submit_stats_global: Some(SubmitStats {
                ac_submission_num: counts
                    .iter()
                    .map(|(difficulty, count)| SubmissionCount {
                        difficulty: difficulty.to_string(),
                        count: *count,
                        submissions: 0,
                    })
                    .collect(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_ranking_from_numeric_string() {
        assert_eq!(coerce_ranking(json!("12345.0")), Coerced::Converted(12345));
        assert_eq!(coerce_ranking(json!(987.9)), Coerced::Converted(987));
        assert_eq!(coerce_ranking(json!(42)), Coerced::Converted(42));
    }

    #[test]
    fn test_ranking_passes_through_non_numeric() {
        assert_eq!(coerce_ranking(json!("n/a")), Coerced::Raw(json!("n/a")));
        assert_eq!(coerce_ranking(json!("inf")), Coerced::Raw(json!("inf")));
        assert_eq!(coerce_ranking(json!([1])), Coerced::Raw(json!([1])));
    }

    #[test]
    fn test_ranking_out_of_i64_range_stays_raw() {
        assert_eq!(coerce_ranking(json!(1e19)), Coerced::Raw(json!(1e19)));
        assert_eq!(coerce_ranking(json!("-1e30")), Coerced::Raw(json!("-1e30")));
        assert_eq!(
            coerce_ranking(json!(-9.0e18)),
            Coerced::Converted(-9_000_000_000_000_000_000)
        );
    }

    #[test]
    fn test_huge_counts_saturate() {
        let stats = solved_stats(&user_with(&[("All", u64::MAX), ("Easy", 3)]));
        assert_eq!(stats.total, u64::MAX);
        assert_eq!(stats.easy, 3);
    }

    #[test]
    fn test_rating_rounds_to_two_decimals() {
        assert_eq!(round_rating(json!(1234.567)), Coerced::Converted(1234.57));
        assert_eq!(round_rating(json!("1500.004")), Coerced::Converted(1500.0));
        assert_eq!(round_rating(json!(true)), Coerced::Raw(json!(true)));
    }

    #[test]
    fn test_normalize_contest_without_ranking() {
        let data = ContestData {
            user_contest_ranking: None,
            user_contest_ranking_history: vec![Default::default()],
        };
        assert!(normalize_contest(data).is_none());
    }

    #[test]
    fn test_normalize_contest_ranking() {
        let data: ContestData = serde_json::from_value(json!({
            "userContestRanking": {
                "attendedContestsCount": 12,
                "rating": 1834.2871,
                "globalRanking": "23456.0",
                "totalParticipants": 500000,
                "topPercentage": 7.31,
                "badge": null
            },
            "userContestRankingHistory": null
        }))
        .unwrap();
        let contest = normalize_contest(data).unwrap();
        assert_eq!(contest.ranking.attended_contests_count, 12);
        assert_eq!(contest.ranking.rating, Some(Coerced::Converted(1834.29)));
        assert_eq!(contest.ranking.global_ranking, Some(Coerced::Converted(23456)));
        assert!(contest.history.is_empty());
    }

    #[test]
    fn test_total_is_sum_regardless_of_order() {
        let a = solved_stats(&user_with(&[("Hard", 3), ("Easy", 10), ("Medium", 7)]));
        let b = solved_stats(&user_with(&[("Medium", 7), ("Hard", 3), ("Easy", 10)]));
        assert_eq!(a, b);
        assert_eq!(
            a,
            SolvedStats {
                total: 20,
                easy: 10,
                medium: 7,
                hard: 3
            }
        );
    }

    #[test]
    fn test_unknown_difficulty_counts_toward_total_only() {
        let stats = solved_stats(&user_with(&[("All", 5), ("Easy", 2)]));
        assert_eq!(stats.total, 7);
        assert_eq!(stats.easy, 2);
        assert_eq!(stats.medium, 0);
        assert_eq!(stats.hard, 0);
    }

    #[test]
    fn test_missing_submission_stats() {
        let user = MatchedUser {
            username: "bob".to_string(),
            ..Default::default()
        };
        assert_eq!(solved_stats(&user), SolvedStats::default());
    }

    #[test]
    fn test_known_beats_skips_nulls() {
        let user = MatchedUser {
            problems_solved_beats_stats: vec![
                BeatsStat {
                    difficulty: "Easy".to_string(),
                    percentage: Some(80.5),
                },
                BeatsStat {
                    difficulty: "Hard".to_string(),
                    percentage: None,
                },
            ],
            ..Default::default()
        };
        let beats: Vec<_> = known_beats(&user).collect();
        assert_eq!(beats, vec![("Easy", 80.5)]);
    }

    #[test]
    fn test_beats_for_bucket() {
        let user = MatchedUser {
            problems_solved_beats_stats: vec![BeatsStat {
                difficulty: "Medium".to_string(),
                percentage: Some(64.2),
            }],
            ..Default::default()
        };
        assert_eq!(beats_for(&user, Difficulty::Medium), Some(64.2));
        assert_eq!(beats_for(&user, Difficulty::Easy), None);
    }

    #[test]
    fn test_merge_keeps_profile_username() {
        let record = merge(user_with(&[("Easy", 1)]), None, None);
        assert_eq!(record.username, "alice");
        assert_eq!(record.solved.total, 1);
        assert!(record.contest.is_none());
        assert!(record.badges.is_none());
    }
}
