use url::Url;

const SOCIAL_HOSTS: [&str; 3] = ["instagram.com", "tiktok.com", "youtube.com"];

/// Coerce a raw sheet value into a number. Strips everything that is not a
/// digit or decimal point before parsing, so "1,234 followers" comes back as
/// 1234.0 and arbitrary garbage comes back as None rather than an error.
pub fn clean_number(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    match digits.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Compact follower-count rendering: 999 -> "999", 1500 -> "1.5K",
/// 1000000 -> "1M". Absent counts render as an em-dash placeholder.
pub fn short_format(n: Option<u64>) -> String {
    let n = match n {
        Some(n) => n,
        None => return "—".to_string(),
    };
    if n < 1_000 {
        return n.to_string();
    }
    if n < 1_000_000 {
        return if n % 1_000 == 0 {
            format!("{:.0}K", n as f64 / 1_000.0)
        } else {
            format!("{:.1}K", n as f64 / 1_000.0)
        };
    }
    if n % 1_000_000 == 0 {
        format!("{:.0}M", n as f64 / 1_000_000.0)
    } else {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    }
}

/// Extract a lowercase handle from a social profile URL. YouTube prefers an
/// @handle path segment; Instagram/TikTok use the first segment with any
/// leading @ stripped. Strings that fail URL parsing get a plain scan for
/// a known social host followed by a handle.
pub fn username_from_url(url: Option<&str>) -> Option<String> {
    let url = url?;
    if url.is_empty() {
        return None;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            let first = parsed.path_segments()?.find(|s| !s.is_empty())?.to_string();
            let host = parsed.host_str().unwrap_or("").to_lowercase();
            if host.ends_with("youtube.com") {
                let handle = first.strip_prefix('@').unwrap_or(&first);
                Some(handle.to_lowercase())
            } else {
                Some(first.trim_start_matches('@').to_lowercase())
            }
        }
        Err(_) => scan_for_handle(url),
    }
}

// Fallback for plain strings that are not valid absolute URLs,
// e.g. "instagram.com/somebody". Lowercasing can shift byte offsets, so
// both the search and the slice use the lowered copy.
fn scan_for_handle(raw: &str) -> Option<String> {
    let lower = raw.to_lowercase();
    for host in SOCIAL_HOSTS {
        if let Some(idx) = lower.find(host) {
            let rest = &lower[idx + host.len()..];
            let rest = rest.strip_prefix('/')?;
            let rest = rest.strip_prefix('@').unwrap_or(rest);
            let handle: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
                .collect();
            if !handle.is_empty() {
                return Some(handle);
            }
        }
    }
    None
}

/// URL-safe identifier for a creator: lowercase, runs of non-alphanumerics
/// collapsed to a single hyphen, no leading/trailing hyphens. Shared by the
/// live routes and the prerender output so slugs never diverge.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_number_strips_noise() {
        assert_eq!(clean_number(Some("1,234 followers")), Some(1234.0));
        assert_eq!(clean_number(Some("715000")), Some(715000.0));
        assert_eq!(clean_number(Some("")), None);
        assert_eq!(clean_number(Some("n/a")), None);
        assert_eq!(clean_number(None), None);
    }

    #[test]
    fn short_format_boundaries() {
        assert_eq!(short_format(Some(999)), "999");
        assert_eq!(short_format(Some(1000)), "1K");
        assert_eq!(short_format(Some(1500)), "1.5K");
        assert_eq!(short_format(Some(1000000)), "1M");
        assert_eq!(short_format(Some(1300000)), "1.3M");
        assert_eq!(short_format(None), "—");
    }

    #[test]
    fn username_from_tiktok_and_youtube() {
        assert_eq!(
            username_from_url(Some("https://www.tiktok.com/@sophiapriceyyy")),
            Some("sophiapriceyyy".to_string())
        );
        assert_eq!(
            username_from_url(Some("https://www.youtube.com/@Handle")),
            Some("handle".to_string())
        );
        assert_eq!(
            username_from_url(Some("https://www.youtube.com/channel/UCKDFGIM9V")),
            Some("channel".to_string())
        );
        assert_eq!(
            username_from_url(Some("https://www.instagram.com/xsophiapriceyx")),
            Some("xsophiapriceyx".to_string())
        );
    }

    #[test]
    fn username_fallback_scan_for_bare_strings() {
        assert_eq!(
            username_from_url(Some("instagram.com/@emily.uddman")),
            Some("emily.uddman".to_string())
        );
        assert_eq!(username_from_url(Some("not a url at all")), None);
        assert_eq!(username_from_url(None), None);
        assert_eq!(username_from_url(Some("")), None);
    }

    #[test]
    fn username_scan_survives_multibyte_text() {
        // U+0130 lowercases to two code points, shifting byte offsets.
        assert_eq!(
            username_from_url(Some("\u{130}instagram.com/@emily")),
            Some("emily".to_string())
        );
        assert_eq!(username_from_url(Some("\u{130}instagram.com\u{e9}")), None);
    }

    #[test]
    fn username_ignores_query_and_trailing_slash() {
        assert_eq!(
            username_from_url(Some("https://www.instagram.com/verybritishkorean/?hl=en")),
            Some("verybritishkorean".to_string())
        );
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("Sophia Price"), "sophia-price");
        assert_eq!(slugify("  The Olive Tree Family!  "), "the-olive-tree-family");
        assert_eq!(slugify("Very   British--Problems"), "very-british-problems");
        assert_eq!(slugify("***"), "");
    }
}
