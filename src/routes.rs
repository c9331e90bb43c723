/// Fixed page-key to URL-path table, shared by route resolution and the
/// prerendered sitemap so the two never drift apart.
pub const PAGE_PATHS: [(&str, &str); 13] = [
    ("home", "/"),
    ("about", "/about"),
    ("roster", "/roster"),
    ("contact", "/contact"),
    ("brands", "/brands"),
    ("privacy", "/privacy"),
    ("asia-influencer-marketing", "/asia-influencer-marketing"),
    ("apac-influencer-marketing", "/apac-influencer-marketing"),
    ("thailand-influencer-marketing", "/thailand-influencer-marketing"),
    ("hong-kong-influencer-management", "/hong-kong-influencer-management"),
    ("asia-to-uk-influencer-marketing", "/asia-to-uk-influencer-marketing"),
    ("asia-to-us-influencer-marketing", "/asia-to-us-influencer-marketing"),
    ("case-studies", "/case-studies"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// One of the fixed pages, by key.
    Page(&'static str),
    /// A creator profile, by slug.
    Creator(String),
}

pub fn path_for(key: &str) -> Option<&'static str> {
    PAGE_PATHS.iter().find(|(k, _)| *k == key).map(|(_, p)| *p)
}

/// Resolve a request path. Trailing slashes are ignored, `/creators/<slug>`
/// becomes a profile route, and anything unknown falls back to home.
pub fn resolve(path: &str) -> Route {
    let normalized = path.trim_end_matches('/');
    let normalized = if normalized.is_empty() { "/" } else { normalized };

    if let Some(rest) = normalized.strip_prefix("/creators/") {
        let slug = rest.split('/').next().unwrap_or("");
        if !slug.is_empty() {
            return Route::Creator(slug.to_string());
        }
    }

    let key = PAGE_PATHS
        .iter()
        .find(|(_, p)| *p == normalized)
        .map(|(k, _)| *k)
        .unwrap_or("home");
    Route::Page(key)
}

pub fn static_paths() -> impl Iterator<Item = &'static str> {
    PAGE_PATHS.iter().map(|(_, p)| *p)
}
