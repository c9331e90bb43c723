use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use log::{info, warn};
use serde_json::{json, Value};

use crate::prerender::html::set_meta_tags;
use crate::roster::csv::parse_csv;
use crate::roster::models::Creator;
use crate::roster::normalize::username_from_url;
use crate::roster::reconciler::{reconcile, RosterSettings};
use crate::roster::{RosterError, SheetSource};
use crate::routes::static_paths;

pub struct PrerenderOptions {
    pub dist_dir: PathBuf,
    pub site_url: String,
}

/// Generate one prerendered HTML document per admitted creator plus a
/// sitemap covering the static routes and every creator route.
///
/// A failed sheet fetch skips the creator pages with a warning but still
/// writes the sitemap of static routes.
pub async fn run(
    options: &PrerenderOptions,
    source: &dyn SheetSource,
    settings: &RosterSettings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let index_path = options.dist_dir.join("index.html");
    let base_html = fs::read_to_string(&index_path)?;

    let creators = match fetch_creators(source, settings).await {
        Ok(creators) => creators,
        Err(e) => {
            warn!("Creator prerender skipped: failed to fetch sheet: {}", e);
            Vec::new()
        }
    };

    // First occurrence of a slug wins; later duplicates are dropped.
    let mut seen = HashSet::new();
    let pages: Vec<Creator> = creators
        .into_iter()
        .filter(|c| {
            let slug = c.slug();
            !slug.is_empty() && seen.insert(slug)
        })
        .collect();

    for creator in &pages {
        let slug = creator.slug();
        let html = render_page(&base_html, creator, &options.site_url);
        let out_dir = options.dist_dir.join("creators").join(&slug);
        fs::create_dir_all(&out_dir)?;
        fs::write(out_dir.join("index.html"), html)?;
    }
    info!("Prerendered {} creator pages", pages.len());

    let urls: Vec<String> = static_paths()
        .map(|p| format!("{}{}", options.site_url, p))
        .chain(pages.iter().map(|c| format!("{}/creators/{}", options.site_url, c.slug())))
        .collect();
    fs::write(options.dist_dir.join("sitemap.xml"), build_sitemap(&urls))?;

    Ok(())
}

async fn fetch_creators(
    source: &dyn SheetSource,
    settings: &RosterSettings,
) -> Result<Vec<Creator>, RosterError> {
    let csv = source.fetch_csv().await?;
    let rows = parse_csv(&csv)?;
    // Same admission rules and slug computation as the live roster, with no
    // starter entries mixed in: only sheet-backed creators get pages.
    Ok(reconcile(&rows, &[], settings))
}

fn render_page(base_html: &str, creator: &Creator, site_url: &str) -> String {
    let title = format!("{} • WEARD Management", creator.name);
    let description = page_description(creator);
    let canonical = format!("{}/creators/{}", site_url, creator.slug());
    let json_ld = person_json_ld(creator, site_url, &description, &canonical);
    set_meta_tags(base_html, &title, &description, &canonical, &json_ld)
}

fn page_description(creator: &Creator) -> String {
    if let Some(bio) = creator.bio.as_deref().filter(|b| !b.is_empty()) {
        return bio.to_string();
    }
    let handles: Vec<String> = [&creator.instagram, &creator.tiktok, &creator.youtube]
        .iter()
        .filter_map(|url| username_from_url(url.as_deref()))
        .map(|h| format!("@{}", h))
        .collect();
    let handles = if handles.is_empty() { "creator".to_string() } else { handles.join(", ") };
    format!(
        "{} ({}) represented by WEARD Management for global influencer campaigns and creator representation.",
        creator.name, handles
    )
}

fn person_json_ld(creator: &Creator, site_url: &str, description: &str, canonical: &str) -> Value {
    let same_as: Vec<&String> = [&creator.instagram, &creator.tiktok, &creator.youtube]
        .into_iter()
        .filter_map(|url| url.as_ref())
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": creator.name,
        "description": description,
        "jobTitle": "Creator",
        "affiliation": {
            "@type": "Organization",
            "name": "WEARD Management",
            "url": site_url,
        },
        "url": canonical,
        "sameAs": same_as,
    })
}

pub fn build_sitemap(urls: &[String]) -> String {
    let lastmod = Utc::now().to_rfc3339();
    let body: Vec<String> = urls
        .iter()
        .map(|url| format!("  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>", url, lastmod))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>",
        body.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;

    struct StubSheet(Result<String, RosterError>);

    #[async_trait]
    impl SheetSource for StubSheet {
        async fn fetch_csv(&self) -> Result<String, RosterError> {
            match &self.0 {
                Ok(csv) => Ok(csv.clone()),
                Err(RosterError::Status(code)) => Err(RosterError::Status(*code)),
                Err(e) => Err(RosterError::Fetch(e.to_string())),
            }
        }
    }

    fn options(dir: &Path) -> PrerenderOptions {
        PrerenderOptions {
            dist_dir: dir.to_path_buf(),
            site_url: "https://weardmgmt.com".to_string(),
        }
    }

    #[tokio::test]
    async fn writes_creator_pages_and_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<html><head><title>WEARD</title></head><body></body></html>",
        )
        .unwrap();

        let sheet = StubSheet(Ok(
            "name,instagram,bio\nSophia Price,https://www.instagram.com/xsophiapriceyx,Thai-British creator".to_string(),
        ));
        run(&options(dir.path()), &sheet, &RosterSettings::default()).await.unwrap();

        let page = fs::read_to_string(dir.path().join("creators/sophia-price/index.html")).unwrap();
        assert!(page.contains("<title>Sophia Price • WEARD Management</title>"));
        assert!(page.contains(r#"data-prerender="creator""#));
        assert!(page.contains("https://weardmgmt.com/creators/sophia-price"));

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://weardmgmt.com/roster</loc>"));
        assert!(sitemap.contains("<loc>https://weardmgmt.com/creators/sophia-price</loc>"));
        assert!(sitemap.contains("<lastmod>"));
    }

    #[tokio::test]
    async fn failed_fetch_still_writes_static_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html><head></head></html>").unwrap();

        let sheet = StubSheet(Err(RosterError::Status(500)));
        run(&options(dir.path()), &sheet, &RosterSettings::default()).await.unwrap();

        assert!(!dir.path().join("creators").exists());
        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://weardmgmt.com/</loc>"));
        assert!(!sitemap.contains("/creators/"));
    }

    #[test]
    fn duplicate_slugs_keep_the_first_page() {
        let mut seen = HashSet::new();
        let creators = vec![
            Creator { name: "Sophia Price".to_string(), ..Default::default() },
            Creator { name: "sophia price".to_string(), ..Default::default() },
        ];
        let pages: Vec<&Creator> = creators
            .iter()
            .filter(|c| seen.insert(c.slug()))
            .collect();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].name, "Sophia Price");
    }

    #[test]
    fn description_falls_back_to_handles() {
        let creator = Creator {
            name: "Zophia".to_string(),
            instagram: Some("https://www.instagram.com/zophia.zz/".to_string()),
            ..Default::default()
        };
        let description = page_description(&creator);
        assert!(description.starts_with("Zophia (@zophia.zz)"));

        let bare = Creator { name: "Nobody".to_string(), ..Default::default() };
        assert!(page_description(&bare).contains("(creator)"));
    }
}
