use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::roster::{FollowerOverride, RosterSettings};

const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSe2hqUTFYnlYQVFXLmR0G2bI_APH9kkJqL7XJIvFIloG7QEjBAJqXkxGrUBYrvoaTg7jS-ucCQ1Uzj/pub?output=csv";
const DEFAULT_SITE_URL: &str = "https://weardmgmt.com";
const DEFAULT_CONTACT_EMAIL: &str = "info@weardmgmt.com";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub sheet_url: String,
    pub site_url: String,
    pub contact_email: String,
    /// Roster re-fetch interval, seconds. One hour in production.
    pub refresh_interval_secs: u64,
    pub web_host: Option<String>,
    pub web_port: Option<u16>,
    /// Built SPA assets served by the web layer.
    pub static_dir: Option<String>,
    pub emailjs_service_id: Option<String>,
    pub emailjs_brand_template_id: Option<String>,
    pub emailjs_talent_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub roster: RosterSettings,
}

impl Config {
    const CONFIG_PATH: &'static str = "weardmgmt.conf";

    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::load(Self::CONFIG_PATH)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if path.as_ref().exists() {
            let config: Config = toml::from_str(&fs::read_to_string(&path)?)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.save_to(Self::CONFIG_PATH)
    }

    fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    pub fn is_emailjs_configured(&self, template_id: &Option<String>) -> bool {
        self.emailjs_service_id.is_some() && self.emailjs_public_key.is_some() && template_id.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sheet_url: DEFAULT_SHEET_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            refresh_interval_secs: 60 * 60,
            web_host: None,
            web_port: None,
            static_dir: None,
            emailjs_service_id: None,
            emailjs_brand_template_id: None,
            emailjs_talent_template_id: None,
            emailjs_public_key: None,
            log_level: LogLevel::default(),
            roster: RosterSettings {
                excluded_names: vec!["amelie".to_string(), "amy wyg".to_string()],
                follower_overrides: vec![FollowerOverride {
                    name_contains: "sophia".to_string(),
                    instagram_followers: Some(721000),
                    tiktok_followers: Some(552900),
                    youtube_subscribers: None,
                    facebook_followers: None,
                }],
                default_media: Default::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.sheet_url, config.sheet_url);
        assert_eq!(parsed.refresh_interval_secs, 3600);
        assert_eq!(parsed.roster.excluded_names, config.roster.excluded_names);
    }

    #[test]
    fn emailjs_needs_all_three_credentials() {
        let mut config = Config::default();
        assert!(!config.is_emailjs_configured(&config.emailjs_brand_template_id.clone()));

        config.emailjs_service_id = Some("svc".to_string());
        config.emailjs_public_key = Some("key".to_string());
        config.emailjs_brand_template_id = Some("tpl".to_string());
        assert!(config.is_emailjs_configured(&config.emailjs_brand_template_id.clone()));
        assert!(!config.is_emailjs_configured(&config.emailjs_talent_template_id.clone()));
    }
}
