use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// `data` payload of the `userBadges` query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgesData {
    pub matched_user: Option<BadgesResult>,
}

/// Every badge a user has earned, plus the one shown on their profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgesResult {
    #[serde(deserialize_with = "null_as_default")]
    pub badges: Vec<Badge>,
    pub active_badge: Option<ActiveBadge>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Badge {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub icon: Option<String>,
    pub creation_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveBadge {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub icon: Option<String>,
}
