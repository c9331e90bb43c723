use serde::{Deserialize, Serialize};

use crate::roster::normalize::slugify;

/// One talent-roster entry. `name` is the natural key; everything else is
/// optional with sheet-level defaults applied by the reconciler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub instagram_followers: Option<u64>,
    #[serde(default)]
    pub tiktok_followers: Option<u64>,
    #[serde(default)]
    pub youtube_subscribers: Option<u64>,
    #[serde(default)]
    pub facebook_followers: Option<u64>,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub top_audience: Vec<String>,
    #[serde(default = "default_visible")]
    pub roster_visible: bool,
}

fn default_category() -> String {
    "Lifestyle".to_string()
}

fn default_visible() -> bool {
    true
}

impl Creator {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Lowercased name, the merge key used during reconciliation.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl Default for Creator {
    fn default() -> Self {
        Creator {
            name: String::new(),
            category: default_category(),
            instagram: None,
            tiktok: None,
            youtube: None,
            facebook: None,
            email: None,
            location: None,
            instagram_followers: None,
            tiktok_followers: None,
            youtube_subscribers: None,
            facebook_followers: None,
            profile_image: String::new(),
            photo: String::new(),
            video: None,
            tags: Vec::new(),
            bio: None,
            top_audience: Vec::new(),
            roster_visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_comes_from_name() {
        let creator = Creator {
            name: "The Olive Tree Family".to_string(),
            ..Default::default()
        };
        assert_eq!(creator.slug(), "the-olive-tree-family");
    }

    #[test]
    fn defaults_apply_when_fields_missing() {
        let creator: Creator = serde_json::from_str(r#"{"name":"Zophia"}"#).unwrap();
        assert_eq!(creator.category, "Lifestyle");
        assert!(creator.roster_visible);
        assert!(creator.instagram_followers.is_none());
    }
}
