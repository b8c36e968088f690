use serde::Serialize;

const PROFILE_QUERY: &str = r#"
query userPublicProfile($username: String!) {
    matchedUser(username: $username) {
        contestBadge {
            name
            expired
            hoverText
            icon
        }
        username
        githubUrl
        twitterUrl
        linkedinUrl
        profile {
            ranking
            userAvatar
            realName
            aboutMe
            school
            websites
            countryName
            company
            jobTitle
            skillTags
            postViewCount
            postViewCountDiff
            reputation
            reputationDiff
        }
        problemsSolvedBeatsStats {
            difficulty
            percentage
        }
        submitStatsGlobal {
            acSubmissionNum {
                difficulty
                count
                submissions
            }
        }
    }
}
"#;

const CONTEST_QUERY: &str = r#"
query userContestRankingInfo($username: String!) {
    userContestRanking(username: $username) {
        attendedContestsCount
        rating
        globalRanking
        totalParticipants
        topPercentage
        badge {
            name
        }
    }
    userContestRankingHistory(username: $username) {
        attended
        trendDirection
        problemsSolved
        totalProblems
        finishTimeInSeconds
        rating
        ranking
        contest {
            title
            startTime
        }
    }
}
"#;

const BADGES_QUERY: &str = r#"
query userBadges($username: String!) {
    matchedUser(username: $username) {
        badges {
            id
            displayName
            icon
            creationDate
        }
        activeBadge {
            id
            displayName
            icon
        }
    }
}
"#;

/// The three queries issued for every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum QueryKind {
    Profile,
    Contest,
    Badges,
}

impl QueryKind {
    pub fn document(self) -> &'static str {
        match self {
            QueryKind::Profile => PROFILE_QUERY,
            QueryKind::Contest => CONTEST_QUERY,
            QueryKind::Badges => BADGES_QUERY,
        }
    }

    /// Build the POST body for this query.
    pub fn request(self, username: &str) -> GraphQlRequest<'_> {
        GraphQlRequest {
            query: self.document(),
            variables: Variables { username },
        }
    }
}

/// JSON body of a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: Variables<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Variables<'a> {
    pub username: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(QueryKind::Contest.request("lee215")).unwrap();
        assert_eq!(body["variables"]["username"], "lee215");
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("userContestRanking(username: $username)"));
        assert!(query.contains("userContestRankingHistory"));
    }

    #[test]
    fn test_queries_are_distinct() {
        assert!(QueryKind::Profile.document().contains("submitStatsGlobal"));
        assert!(QueryKind::Badges.document().contains("activeBadge"));
        assert!(!QueryKind::Badges.document().contains("submitStatsGlobal"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(QueryKind::Profile.to_string(), "profile");
        assert_eq!(QueryKind::Badges.to_string(), "badges");
    }
}
