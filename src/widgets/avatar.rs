//! Generated-avatar replacement for broken logo and bot images.

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/bottts/svg";
const AVATAR_BACKGROUND: &str = "0d0d1a";

/// Known image ids and the avatar seed each one falls back to.
const SEEDS: &[(&str, &str)] = &[("9k5pq0", "404xmd"), ("dgx6oa", "madmax")];
const DEFAULT_SEED: &str = "cyberdark";

/// Where the failed image sits in the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageContext<'a> {
    pub src: &'a str,
    pub is_logo: bool,
    pub in_bot_icon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    pub src: String,
    pub object_fit: &'static str,
    pub padding: &'static str,
}

pub fn avatar_seed(src: &str) -> &'static str {
    SEEDS
        .iter()
        .find(|(needle, _)| src.contains(needle))
        .map(|(_, seed)| *seed)
        .unwrap_or(DEFAULT_SEED)
}

pub fn avatar_url(seed: &str) -> String {
    format!(
        "{}?seed={}&backgroundColor={}&hair=variant08",
        AVATAR_BASE, seed, AVATAR_BACKGROUND
    )
}

pub fn is_avatar(src: &str) -> bool {
    src.starts_with(AVATAR_BASE)
}

/// Replacement for an image that failed to load, or `None` if the image is
/// not one we cover. Avatars that fail themselves are left alone.
pub fn fallback_for(image: ImageContext<'_>) -> Option<ImageFallback> {
    if is_avatar(image.src) {
        return None;
    }
    if !(image.is_logo || image.in_bot_icon || image.src.contains("catbox.moe")) {
        return None;
    }
    Some(ImageFallback {
        src: avatar_url(avatar_seed(image.src)),
        object_fit: "contain",
        padding: "10px",
    })
}
