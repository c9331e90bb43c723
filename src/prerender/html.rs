use serde_json::Value;

/// Minimal escaping for attribute/text positions in the rewritten head.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Rewrite the SEO-relevant head tags of a built `index.html` for one
/// creator page. Tags already present are replaced in place; missing ones
/// are inserted before `</head>`.
pub fn set_meta_tags(
    html: &str,
    title: &str,
    description: &str,
    canonical: &str,
    json_ld: &Value,
) -> String {
    let mut out = replace_block(
        html,
        "<title",
        "</title>",
        &format!("<title>{}</title>", escape_html(title)),
    );

    for (marker, replacement) in [
        (
            r#"name="description""#,
            format!(r#"<meta name="description" content="{}" />"#, escape_html(description)),
        ),
        (
            r#"rel="canonical""#,
            format!(r#"<link rel="canonical" href="{}" />"#, escape_html(canonical)),
        ),
        (
            r#"property="og:title""#,
            format!(r#"<meta property="og:title" content="{}" />"#, escape_html(title)),
        ),
        (
            r#"property="og:description""#,
            format!(
                r#"<meta property="og:description" content="{}" />"#,
                escape_html(description)
            ),
        ),
        (
            r#"property="og:url""#,
            format!(r#"<meta property="og:url" content="{}" />"#, escape_html(canonical)),
        ),
        (
            r#"name="twitter:title""#,
            format!(r#"<meta name="twitter:title" content="{}" />"#, escape_html(title)),
        ),
        (
            r#"name="twitter:description""#,
            format!(
                r#"<meta name="twitter:description" content="{}" />"#,
                escape_html(description)
            ),
        ),
    ] {
        out = replace_tag(&out, marker, &replacement);
    }

    let script = format!(
        r#"<script type="application/ld+json" data-prerender="creator">{}</script>"#,
        json_ld
    );
    replace_block(&out, r#"data-prerender="creator""#, "</script>", &script)
}

// Case-insensitive marker search; byte offsets are stable because the
// lowercase copy is ASCII-only folding.
fn find_marker(html: &str, marker: &str) -> Option<usize> {
    html.to_ascii_lowercase().find(&marker.to_ascii_lowercase())
}

/// Replace the single tag containing `marker`, or insert `replacement`
/// before `</head>` when absent.
fn replace_tag(html: &str, marker: &str, replacement: &str) -> String {
    if let Some(pos) = find_marker(html, marker) {
        if let (Some(start), Some(end)) = (html[..pos].rfind('<'), html[pos..].find('>')) {
            let end = pos + end + 1;
            return format!("{}{}{}", &html[..start], replacement, &html[end..]);
        }
    }
    insert_before_head_close(html, replacement)
}

/// Replace everything from the tag containing `marker` through `closing`,
/// or insert when absent.
fn replace_block(html: &str, marker: &str, closing: &str, replacement: &str) -> String {
    if let Some(pos) = find_marker(html, marker) {
        if let Some(start) = html[..pos + 1].rfind('<') {
            if let Some(close) = find_marker(&html[pos..], closing) {
                let end = pos + close + closing.len();
                return format!("{}{}{}", &html[..start], replacement, &html[end..]);
            }
        }
    }
    insert_before_head_close(html, replacement)
}

fn insert_before_head_close(html: &str, replacement: &str) -> String {
    match find_marker(html, "</head>") {
        Some(pos) => format!("{}{}\n{}", &html[..pos], replacement, &html[pos..]),
        None => format!("{}\n{}", html, replacement),
    }
}
