use crate::roster::models::Creator;

/// Bundled fallback roster. Every session starts from these entries and the
/// sheet refresh replaces or extends them; they are never mutated in place.
pub fn starter_roster() -> Vec<Creator> {
    vec![
        Creator {
            name: "Sophia Price".to_string(),
            category: "Fashion".to_string(),
            instagram: Some("https://www.instagram.com/xsophiapriceyx".to_string()),
            tiktok: Some("https://www.tiktok.com/@sophiapriceyyy".to_string()),
            youtube: Some("https://www.youtube.com/channel/UCKDFGIM9V-KRGxlISDODpPQ".to_string()),
            email: Some("sophia@weardmgmt.com".to_string()),
            location: Some("Thailand".to_string()),
            instagram_followers: Some(715000),
            tiktok_followers: Some(656900),
            youtube_subscribers: Some(8380),
            profile_image: "/media/creators/sophia/sophia-hero.jpg".to_string(),
            photo: "/media/creators/sophia/sophia-poster.jpg".to_string(),
            video: Some("/media/creators/sophia/sophia-hover.mp4".to_string()),
            tags: vec!["Fashion".to_string(), "Beauty".to_string(), "Travel".to_string()],
            bio: Some(
                "Sophia Pricey is a Thai-British fashion, beauty and travel content creator \
                 known for her trend-setting style and high-engagement global audience. She \
                 shares fashion hauls, beauty tutorials and aspirational travel content across \
                 Instagram and TikTok, reaching over 1.3 million followers."
                    .to_string(),
            ),
            top_audience: vec!["United States".to_string(), "Thailand".to_string()],
            ..Default::default()
        },
        Creator {
            name: "Josefine Uddman".to_string(),
            category: "Beauty".to_string(),
            instagram: Some("https://www.instagram.com/josefine.ku.ud/".to_string()),
            tiktok: Some("https://www.tiktok.com/@josefine.ku.ud".to_string()),
            email: Some("josefine@weardmgmt.com".to_string()),
            location: Some("Thailand".to_string()),
            instagram_followers: Some(9490),
            tiktok_followers: Some(83600),
            profile_image: "/media/creators/josefine/josefine-hero-v2.jpg".to_string(),
            photo: "/media/creators/josefine/josefine-poster-v2.jpg".to_string(),
            video: Some("/media/creators/josefine/josefine-hover-v2.mp4".to_string()),
            tags: vec!["Beauty".to_string(), "Lifestyle".to_string()],
            bio: Some(
                "Josefine Uddman is a Swedish-Thai fashion, beauty and lifestyle creator whose \
                 content reflects a distinctive cross-cultural perspective, connecting with a \
                 growing global audience across Instagram and TikTok."
                    .to_string(),
            ),
            top_audience: vec!["Thailand".to_string(), "Sweden".to_string()],
            ..Default::default()
        },
        Creator {
            name: "The Olive Tree Family".to_string(),
            category: "Family".to_string(),
            instagram: Some("https://www.instagram.com/theolivetreefamily".to_string()),
            tiktok: Some("https://www.tiktok.com/@theolivetreefamily".to_string()),
            youtube: Some("https://www.youtube.com/@theolivetreefamily".to_string()),
            email: Some("theolivetreefamily@weardmgmt.com".to_string()),
            location: Some("UK".to_string()),
            instagram_followers: Some(56400),
            tiktok_followers: Some(63900),
            youtube_subscribers: Some(6140),
            profile_image: "/media/creators/theolivetreefamily/olivetreefamily-hero.jpg".to_string(),
            photo: "/media/creators/theolivetreefamily/olivetreefamily-poster.jpg".to_string(),
            video: Some("/media/creators/theolivetreefamily/olivetreefamily-hover.mp4".to_string()),
            tags: vec!["Family".to_string(), "Lifestyle".to_string(), "Travel".to_string()],
            bio: Some(
                "The Olive Tree Family is a lively Scottish household turning everyday life \
                 into authentic stories, from family food content to travel adventures, with a \
                 thriving TikTok and Instagram community across the UK and beyond."
                    .to_string(),
            ),
            top_audience: vec!["United Kingdom".to_string()],
            ..Default::default()
        },
        Creator {
            name: "Very British Korean".to_string(),
            category: "Lifestyle".to_string(),
            instagram: Some("https://www.instagram.com/verybritishkorean/?hl=en".to_string()),
            tiktok: Some("https://www.tiktok.com/@verybritishkorean".to_string()),
            location: Some("UK".to_string()),
            instagram_followers: Some(85100),
            tiktok_followers: Some(9900),
            profile_image: "/media/creators/verybritishkorean/verybritishkorean-hero.jpg".to_string(),
            photo: "/media/creators/verybritishkorean/verybritishkorean-poster.jpg".to_string(),
            video: Some("/media/creators/verybritishkorean/verybritishkorean-hover.mp4".to_string()),
            tags: vec!["Lifestyle".to_string(), "Comedy".to_string(), "Beauty".to_string()],
            bio: Some(
                "Very British Korean is a culture-blending creator best known for sharp, \
                 observational humour exploring the quirks of British life through a Korean \
                 lens, with a highly engaged audience across TikTok and Instagram."
                    .to_string(),
            ),
            top_audience: vec!["United Kingdom".to_string()],
            ..Default::default()
        },
        Creator {
            name: "Very British Problems".to_string(),
            category: "Lifestyle".to_string(),
            instagram: Some("https://www.instagram.com/verybritishproblemsofficial/?hl=en".to_string()),
            tiktok: Some("https://www.tiktok.com/@verybritishproblems".to_string()),
            youtube: Some("https://www.youtube.com/@verybritishproblems".to_string()),
            facebook: Some("https://www.facebook.com/soverybritish/?locale=en_GB".to_string()),
            location: Some("UK".to_string()),
            instagram_followers: Some(1100000),
            tiktok_followers: Some(223500),
            youtube_subscribers: Some(34700),
            facebook_followers: Some(1200000),
            profile_image: "/media/creators/verybritishproblems/verybritishproblems-hero.jpg".to_string(),
            photo: "/media/creators/verybritishproblems/verybritishproblems-poster.jpg".to_string(),
            video: Some("/media/creators/verybritishproblems/verybritishproblems-hover.mp4".to_string()),
            tags: vec!["Comedy".to_string(), "Lifestyle".to_string()],
            bio: Some(
                "Very British Problems is a UK comedy and lifestyle creator capturing the \
                 everyday quirks, awkward rituals and iconic moments of British culture for a \
                 deeply engaged cross-platform audience of over 2.5 million followers."
                    .to_string(),
            ),
            top_audience: vec!["United Kingdom".to_string()],
            ..Default::default()
        },
        Creator {
            name: "Emily Uddman".to_string(),
            category: "Lifestyle".to_string(),
            instagram: Some("https://www.instagram.com/emily.uddman/?hl=en".to_string()),
            tiktok: Some("https://www.tiktok.com/@emily.uddman".to_string()),
            instagram_followers: Some(90200),
            tiktok_followers: Some(378700),
            tags: vec!["Lifestyle".to_string(), "Beauty".to_string()],
            roster_visible: false,
            ..Default::default()
        },
        Creator {
            name: "Zophia".to_string(),
            category: "Lifestyle".to_string(),
            instagram: Some("https://www.instagram.com/zophia.zz/".to_string()),
            tiktok: Some("https://www.tiktok.com/@zophia.6905?lang=en".to_string()),
            instagram_followers: Some(251000),
            tiktok_followers: Some(922400),
            tags: vec!["Lifestyle".to_string(), "Fashion".to_string()],
            roster_visible: false,
            ..Default::default()
        },
    ]
}
