//! CSV export of aggregate records, one row per user.

use csv::Writer;
use itertools::Itertools;

use crate::aggregate;
use crate::error::Result;
use crate::model::{AggregateRecord, Coerced, Difficulty};

/// Which column groups appear in the export. `Username` is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvSections {
    pub profile: bool,
    pub stats: bool,
    pub contest: bool,
    pub badges: bool,
}

impl Default for CsvSections {
    fn default() -> Self {
        Self {
            profile: true,
            stats: true,
            contest: true,
            badges: true,
        }
    }
}

const PROFILE_COLUMNS: [&str; 5] = ["RealName", "Ranking", "Company", "School", "Country"];
const STATS_COLUMNS: [&str; 7] = [
    "TotalSolved",
    "EasySolved",
    "MediumSolved",
    "HardSolved",
    "EasyPercentage",
    "MediumPercentage",
    "HardPercentage",
];
const CONTEST_COLUMNS: [&str; 4] = [
    "ContestRating",
    "GlobalRanking",
    "ContestsAttended",
    "TopPercentage",
];
const BADGE_COLUMNS: [&str; 3] = ["ContestBadge", "TotalBadges", "BadgeList"];

impl CsvSections {
    /// Header row for these sections.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["Username"];
        if self.profile {
            columns.extend(PROFILE_COLUMNS);
        }
        if self.stats {
            columns.extend(STATS_COLUMNS);
        }
        if self.contest {
            columns.extend(CONTEST_COLUMNS);
        }
        if self.badges {
            columns.extend(BADGE_COLUMNS);
        }
        columns
    }

    /// Data row for one record, aligned with [`CsvSections::columns`].
    pub fn row(&self, record: &AggregateRecord) -> Vec<String> {
        let mut row = vec![record.username.clone()];
        if self.profile {
            row.extend(profile_cells(record));
        }
        if self.stats {
            row.extend(stats_cells(record));
        }
        if self.contest {
            row.extend(contest_cells(record));
        }
        if self.badges {
            row.extend(badge_cells(record));
        }
        row
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn percent(value: Option<f64>) -> String {
    value.map(|p| format!("{p:.2}")).unwrap_or_default()
}

fn profile_cells(record: &AggregateRecord) -> [String; 5] {
    let Some(profile) = &record.profile.profile else {
        return Default::default();
    };
    [
        text(profile.real_name.as_deref()),
        profile.ranking.map(|r| r.to_string()).unwrap_or_default(),
        text(profile.company.as_deref()),
        text(profile.school.as_deref()),
        text(profile.country_name.as_deref()),
    ]
}

fn stats_cells(record: &AggregateRecord) -> [String; 7] {
    let solved = record.solved;
    let beats = |d| percent(aggregate::beats_for(&record.profile, d));
    [
        solved.total.to_string(),
        solved.easy.to_string(),
        solved.medium.to_string(),
        solved.hard.to_string(),
        beats(Difficulty::Easy),
        beats(Difficulty::Medium),
        beats(Difficulty::Hard),
    ]
}

fn contest_cells(record: &AggregateRecord) -> [String; 4] {
    let Some(contest) = &record.contest else {
        return [String::new(), String::new(), "0".to_string(), String::new()];
    };
    let ranking = &contest.ranking;
    let rating = match &ranking.rating {
        Some(Coerced::Converted(rating)) => format!("{rating:.2}"),
        Some(raw) => raw.to_string(),
        None => String::new(),
    };
    [
        rating,
        ranking
            .global_ranking
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_default(),
        ranking.attended_contests_count.to_string(),
        percent(ranking.top_percentage),
    ]
}

fn badge_cells(record: &AggregateRecord) -> [String; 3] {
    let badges = record
        .badges
        .as_ref()
        .map(|b| b.badges.as_slice())
        .unwrap_or_default();
    [
        text(
            record
                .profile
                .contest_badge
                .as_ref()
                .and_then(|b| b.name.as_deref()),
        ),
        badges.len().to_string(),
        badges
            .iter()
            .filter_map(|b| b.display_name.as_deref())
            .join(", "),
    ]
}

/// Write a header row followed by one row per record.
pub fn to_csv(records: &[AggregateRecord], sections: CsvSections) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(sections.columns())?;
    for record in records {
        writer.write_record(sections.row(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{Badge, BadgesResult, ContestRanking, ContestResult, MatchedUser};

    fn record() -> AggregateRecord {
        let profile: MatchedUser = serde_json::from_value(json!({
            "username": "alice",
            "contestBadge": { "name": "Knight", "expired": false },
            "profile": {
                "ranking": 4821,
                "realName": "Alice Liddell",
                "school": "Oxford",
                "countryName": "United Kingdom"
            },
            "problemsSolvedBeatsStats": [
                { "difficulty": "Easy", "percentage": 91.234 },
                { "difficulty": "Medium", "percentage": null },
                { "difficulty": "Hard", "percentage": 40.0 }
            ],
            "submitStatsGlobal": {
                "acSubmissionNum": [
                    { "difficulty": "Easy", "count": 120 },
                    { "difficulty": "Medium", "count": 80 },
                    { "difficulty": "Hard", "count": 5 }
                ]
            }
        }))
        .unwrap();
        let contest = ContestResult {
            ranking: ContestRanking {
                attended_contests_count: 14,
                rating: Some(Coerced::Converted(1987.5)),
                global_ranking: Some(Coerced::Converted(12345)),
                total_participants: None,
                top_percentage: Some(3.456),
                badge: None,
            },
            history: vec![],
        };
        let badges = BadgesResult {
            badges: ["50 Days Badge 2024", "Annual Badge 2023"]
                .iter()
                .map(|name| Badge {
                    display_name: Some(name.to_string()),
                    ..Default::default()
                })
                .collect(),
            active_badge: None,
        };
        aggregate::merge(profile, Some(contest), Some(badges))
    }

    #[test]
    fn test_header_and_row() {
        let text = to_csv(&[record()], CsvSections::default()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Username,RealName,Ranking,Company,School,Country,\
             TotalSolved,EasySolved,MediumSolved,HardSolved,\
             EasyPercentage,MediumPercentage,HardPercentage,\
             ContestRating,GlobalRanking,ContestsAttended,TopPercentage,\
             ContestBadge,TotalBadges,BadgeList"
        );
        assert_eq!(
            lines.next().unwrap(),
            "alice,Alice Liddell,4821,,Oxford,United Kingdom,\
             205,120,80,5,91.23,,40.00,\
             1987.50,12345,14,3.46,\
             Knight,2,\"50 Days Badge 2024, Annual Badge 2023\""
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_sections_limit_columns() {
        let sections = CsvSections {
            profile: false,
            stats: true,
            contest: false,
            badges: false,
        };
        let text = to_csv(&[record()], sections).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Username,TotalSolved,EasySolved,MediumSolved,HardSolved,\
             EasyPercentage,MediumPercentage,HardPercentage"
        );
        assert_eq!(lines.next().unwrap(), "alice,205,120,80,5,91.23,,40.00");
    }

    #[test]
    fn test_missing_contest_and_badges() {
        let mut record = record();
        record.contest = None;
        record.badges = None;
        let sections = CsvSections {
            profile: false,
            stats: false,
            contest: true,
            badges: true,
        };
        let row = sections.row(&record);
        assert_eq!(row, vec!["alice", "", "", "0", "", "Knight", "0", ""]);
    }
}
