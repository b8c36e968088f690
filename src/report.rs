//! Plain-text rendering of an [`AggregateRecord`].

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::aggregate;
use crate::model::{AggregateRecord, BadgesResult, Coerced, ContestResult, MatchedUser};

const HEADER_RULE_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 30;
const BADGE_PREVIEW_LEN: usize = 5;

/// Banner printed before a lookup starts.
pub struct Header<'a>(pub &'a str);

impl Display for Header<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔍 Fetching data for user: {}", self.0)?;
        writeln!(f, "{}", "=".repeat(HEADER_RULE_WIDTH))
    }
}

/// Every report section for one record, in display order.
pub struct Report<'a>(pub &'a AggregateRecord);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let record = self.0;
        write_profile(f, &record.profile)?;
        writeln!(f)?;
        write_solved(f, record)?;
        writeln!(f)?;
        write_contest(f, record.contest.as_ref())?;
        writeln!(f)?;
        write_badges(f, &record.profile, record.badges.as_ref())
    }
}

/// Render the report sections for a record.
pub fn render(record: &AggregateRecord) -> String {
    Report(record).to_string()
}

/// Render the header followed by the report, or only the header when the
/// lookup produced nothing.
pub fn render_lookup(username: &str, record: Option<&AggregateRecord>) -> String {
    let mut out = Header(username).to_string();
    if let Some(record) = record {
        out.push_str(&render(record));
    }
    out
}

fn section(f: &mut Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))
}

/// `1234567` -> `1,234,567`
fn thousands(n: i64) -> String {
    let grouped = n
        .unsigned_abs()
        .to_string()
        .chars()
        .rev()
        .chunks(3)
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .join(",")
        .chars()
        .rev()
        .collect::<String>();
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn write_profile(f: &mut Formatter<'_>, user: &MatchedUser) -> fmt::Result {
    section(f, "👤 PROFILE INFORMATION")?;
    writeln!(f, "Username: {}", user.username)?;
    let Some(profile) = &user.profile else {
        return Ok(());
    };
    if let Some(name) = non_empty(&profile.real_name) {
        writeln!(f, "Real Name: {name}")?;
    }
    if let Some(ranking) = profile.ranking.filter(|r| *r != 0) {
        writeln!(f, "Global Ranking: #{}", thousands(ranking))?;
    }
    if let Some(company) = non_empty(&profile.company) {
        writeln!(f, "Company: {company}")?;
    }
    if let Some(school) = non_empty(&profile.school) {
        writeln!(f, "School: {school}")?;
    }
    if let Some(country) = non_empty(&profile.country_name) {
        writeln!(f, "Country: {country}")?;
    }
    Ok(())
}

fn write_solved(f: &mut Formatter<'_>, record: &AggregateRecord) -> fmt::Result {
    section(f, "📊 PROBLEMS SOLVED")?;
    if !record.profile.accepted().is_empty() {
        let solved = record.solved;
        writeln!(f, "Total Problems Solved: {}", solved.total)?;
        writeln!(f, "Easy: {}", solved.easy)?;
        writeln!(f, "Medium: {}", solved.medium)?;
        writeln!(f, "Hard: {}", solved.hard)?;
    }

    let mut beats = aggregate::known_beats(&record.profile).peekable();
    if beats.peek().is_some() {
        writeln!(f)?;
        section(f, "📈 PERFORMANCE PERCENTILES")?;
        for (difficulty, percentage) in beats {
            writeln!(f, "{difficulty}: Beats {percentage:.1}% of users")?;
        }
    }
    Ok(())
}

fn write_contest(f: &mut Formatter<'_>, contest: Option<&ContestResult>) -> fmt::Result {
    section(f, "🏆 CONTEST INFORMATION")?;
    let Some(ContestResult { ranking, .. }) = contest else {
        return writeln!(f, "No contest data available");
    };

    match &ranking.rating {
        Some(Coerced::Converted(rating)) => writeln!(f, "Contest Rating: {rating:.2}")?,
        Some(raw) => writeln!(f, "Contest Rating: {raw}")?,
        None => writeln!(f, "Contest Rating: N/A")?,
    }
    match &ranking.global_ranking {
        Some(Coerced::Converted(rank)) => writeln!(f, "Global Ranking: #{}", thousands(*rank))?,
        Some(raw) => writeln!(f, "Global Ranking: #{raw}")?,
        None => writeln!(f, "Global Ranking: N/A")?,
    }
    writeln!(f, "Contests Attended: {}", ranking.attended_contests_count)?;
    if let Some(top) = ranking.top_percentage.filter(|p| *p != 0.0) {
        writeln!(f, "Top {top:.2}%")?;
    }
    if let Some(name) = ranking.badge.as_ref().and_then(|b| non_empty(&b.name)) {
        writeln!(f, "Contest Badge: {name}")?;
    }
    Ok(())
}

fn write_badges(
    f: &mut Formatter<'_>,
    user: &MatchedUser,
    badges: Option<&BadgesResult>,
) -> fmt::Result {
    section(f, "🏅 BADGES")?;

    if let Some(badge) = &user.contest_badge {
        let status = if badge.expired { "Expired" } else { "Active" };
        let name = badge.name.as_deref().unwrap_or("N/A");
        writeln!(f, "Contest Badge: {name} ({status})")?;
    }

    if let Some(active) = badges.and_then(|b| b.active_badge.as_ref()) {
        let name = active.display_name.as_deref().unwrap_or("N/A");
        writeln!(f, "Active Badge: {name}")?;
    }

    let list = badges.map(|b| b.badges.as_slice()).unwrap_or_default();
    if list.is_empty() {
        return writeln!(f, "No badges earned yet");
    }

    writeln!(f, "Total Badges: {}", list.len())?;
    writeln!(f, "Badge List:")?;
    for badge in list.iter().take(BADGE_PREVIEW_LEN) {
        let name = badge.display_name.as_deref().unwrap_or("Unknown Badge");
        let earned = badge.creation_date.as_deref().unwrap_or("Unknown Date");
        writeln!(f, "  • {name} (Earned: {earned})")?;
    }
    if list.len() > BADGE_PREVIEW_LEN {
        writeln!(f, "  ... and {} more badges", list.len() - BADGE_PREVIEW_LEN)?;
    }
    Ok(())
}
