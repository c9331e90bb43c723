use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::roster::csv::SheetRow;
use crate::roster::models::Creator;
use crate::roster::normalize::clean_number;

/// Business exceptions applied during reconciliation. These live in config so
/// the exception list is auditable without a code change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSettings {
    /// Case-insensitive substrings; a sheet row whose name contains one of
    /// these is dropped (legacy/retired talent).
    #[serde(default)]
    pub excluded_names: Vec<String>,
    /// Per-creator follower fallbacks for when the sheet is incomplete.
    #[serde(default)]
    pub follower_overrides: Vec<FollowerOverride>,
    #[serde(default)]
    pub default_media: MediaDefaults,
}

/// Fallback counts keyed by a case-insensitive substring of the name. Only
/// fills fields the sheet left absent; never overwrites sheet data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowerOverride {
    pub name_contains: String,
    #[serde(default)]
    pub instagram_followers: Option<u64>,
    #[serde(default)]
    pub tiktok_followers: Option<u64>,
    #[serde(default)]
    pub youtube_subscribers: Option<u64>,
    #[serde(default)]
    pub facebook_followers: Option<u64>,
}

/// Placeholder assets used when a sheet row has no media columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDefaults {
    pub profile_image: String,
    pub photo: String,
    pub video: String,
}

impl Default for MediaDefaults {
    fn default() -> Self {
        MediaDefaults {
            profile_image: "/media/creators/sophia/sophia-poster.jpg".to_string(),
            photo: "/media/creators/sophia/sophia-poster.jpg".to_string(),
            video: "/media/creators/sophia/sophia-hover.mp4".to_string(),
        }
    }
}

/// Build the canonical roster from freshly fetched sheet rows and the
/// bundled starter entries. Remote rows win on name collision; starter
/// entries absent from the sheet are retained unchanged, after the mapped
/// remote rows in sheet order.
pub fn reconcile(rows: &[SheetRow], starter: &[Creator], settings: &RosterSettings) -> Vec<Creator> {
    let mut mapped: Vec<Creator> = rows
        .iter()
        .filter_map(|row| map_row(row, settings))
        .filter(|c| !is_excluded(&c.name, settings))
        .collect();

    for creator in &mut mapped {
        apply_overrides(creator, settings);
    }

    let remote_names: HashSet<String> = mapped.iter().map(|c| c.name_key()).collect();
    let retained = starter
        .iter()
        .filter(|c| !remote_names.contains(&c.name_key()))
        .cloned();
    mapped.extend(retained);
    mapped
}

/// Map one sheet row to a Creator, applying field defaults. Rows without a
/// name are dropped.
fn map_row(row: &SheetRow, settings: &RosterSettings) -> Option<Creator> {
    let name = field(row, "name")?;

    Some(Creator {
        name,
        category: field(row, "category").unwrap_or_else(|| "Lifestyle".to_string()),
        instagram: field(row, "instagram"),
        tiktok: field(row, "tiktok"),
        youtube: field(row, "youtube"),
        facebook: field(row, "facebook"),
        email: field(row, "email"),
        location: field(row, "location"),
        instagram_followers: count(row, "instagram_followers"),
        tiktok_followers: count(row, "tiktok_followers"),
        youtube_subscribers: count(row, "youtube_subscribers"),
        facebook_followers: count(row, "facebook_followers"),
        profile_image: field(row, "profile_image")
            .unwrap_or_else(|| settings.default_media.profile_image.clone()),
        photo: field(row, "photo").unwrap_or_else(|| settings.default_media.photo.clone()),
        video: field(row, "video").or_else(|| Some(settings.default_media.video.clone())),
        tags: list(row, "tags"),
        bio: field(row, "bio"),
        top_audience: list(row, "top_audience"),
        roster_visible: true,
    })
}

fn field(row: &SheetRow, key: &str) -> Option<String> {
    row.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from)
}

fn count(row: &SheetRow, key: &str) -> Option<u64> {
    clean_number(row.get(key).map(String::as_str)).map(|n| n.round() as u64)
}

fn list(row: &SheetRow, key: &str) -> Vec<String> {
    row.get(key)
        .map(|v| {
            v.split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn is_excluded(name: &str, settings: &RosterSettings) -> bool {
    let lower = name.to_lowercase();
    settings
        .excluded_names
        .iter()
        .any(|pattern| !pattern.is_empty() && lower.contains(&pattern.to_lowercase()))
}

fn apply_overrides(creator: &mut Creator, settings: &RosterSettings) {
    let lower = creator.name.to_lowercase();
    for o in &settings.follower_overrides {
        if !lower.contains(&o.name_contains.to_lowercase()) {
            continue;
        }
        if creator.instagram_followers.is_none() {
            creator.instagram_followers = o.instagram_followers;
        }
        if creator.tiktok_followers.is_none() {
            creator.tiktok_followers = o.tiktok_followers;
        }
        if creator.youtube_subscribers.is_none() {
            creator.youtube_subscribers = o.youtube_subscribers;
        }
        if creator.facebook_followers.is_none() {
            creator.facebook_followers = o.facebook_followers;
        }
    }
}
