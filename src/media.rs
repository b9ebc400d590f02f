//! Product media resolution.
//!
//! A product record carries up to three kinds of media: a hosted video link,
//! an Instagram reel, and a handful of still images. The detail view shows
//! exactly one of them, chosen by strict priority:
//!
//! ```text
//! video_link  →  Video { playable_url }        (Drive preview, YouTube embed, or as-is)
//! insta_reel  →  SocialEmbed { embed_url }     (query stripped, /embed appended)
//! images      →  ImageGallery { urls }         (Drive thumbnails; fallback when empty)
//! ```
//!
//! Blank values count as absent, so a product whose `video_link` is `"  "`
//! falls through to its reel or images. Whitespace is ignored when matching
//! a link, but a link that is not rewritten is returned exactly as given.
//!
//! ## Failure semantics
//!
//! [`resolve`] is total. Media links are operator-entered and often
//! malformed; a bad link degrades to the raw URL (or the fallback image)
//! instead of failing the page. The worst case is an iframe that does not
//! play.

use crate::drive;
use serde::{Deserialize, Serialize};

/// Raw media fields of a product, as mapped from the catalog record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductMedia {
    pub video_link: Option<String>,
    pub insta_reel: Option<String>,
    /// Candidate still images in display order (primary, secondary, ...).
    pub images: Vec<String>,
    /// Placeholder shown when no image is usable. Never empty.
    pub fallback_image: String,
}

/// The single piece of media a detail view displays for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedMedia {
    Video { playable_url: String },
    SocialEmbed { embed_url: String },
    /// `urls` always holds at least one entry.
    ImageGallery { urls: Vec<String> },
}

impl ResolvedMedia {
    /// Short label for the variant, used in CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedMedia::Video { .. } => "video",
            ResolvedMedia::SocialEmbed { .. } => "social",
            ResolvedMedia::ImageGallery { .. } => "images",
        }
    }

    /// Gallery URLs when this is an image gallery.
    pub fn gallery_urls(&self) -> Option<&[String]> {
        match self {
            ResolvedMedia::ImageGallery { urls } => Some(urls),
            _ => None,
        }
    }

    /// The URL shown first: the embed for video/social, the primary image
    /// for a gallery.
    pub fn primary_url(&self) -> &str {
        match self {
            ResolvedMedia::Video { playable_url } => playable_url,
            ResolvedMedia::SocialEmbed { embed_url } => embed_url,
            ResolvedMedia::ImageGallery { urls } => urls.first().map(String::as_str).unwrap_or(""),
        }
    }
}

/// Pick and normalize the media to display for a product.
pub fn resolve(media: &ProductMedia) -> ResolvedMedia {
    if let Some(link) = non_blank(media.video_link.as_deref()) {
        return ResolvedMedia::Video {
            playable_url: playable_video_url(link),
        };
    }

    if let Some(reel) = non_blank(media.insta_reel.as_deref()) {
        return ResolvedMedia::SocialEmbed {
            embed_url: reel_embed_url(reel),
        };
    }

    let mut urls: Vec<String> = media
        .images
        .iter()
        .filter_map(|url| non_blank(Some(url.as_str())))
        .map(gallery_image_url)
        .collect();
    if urls.is_empty() {
        urls.push(media.fallback_image.clone());
    }
    ResolvedMedia::ImageGallery { urls }
}

/// The value as given, or `None` when absent or whitespace-only.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Turn a hosted-video link into something an iframe can play.
///
/// Drive links become preview URLs, YouTube watch and short links become
/// embed URLs, anything else is assumed embeddable already. Links that are
/// not rewritten come back exactly as given.
pub fn playable_video_url(link: &str) -> String {
    let trimmed = link.trim();
    if drive::is_drive_url(trimmed) {
        return match drive::extract_file_id(trimmed) {
            Some(id) => drive::preview_url(id),
            None => {
                tracing::warn!(url = link, "no Drive file id in video link, using it as-is");
                link.to_string()
            }
        };
    }

    youtube_video_id(trimmed)
        .map(youtube_embed_url)
        .unwrap_or_else(|| link.to_string())
}

/// Video id from a `youtube.com/watch?v=` or `youtu.be/` link.
fn youtube_video_id(link: &str) -> Option<&str> {
    let id = if let Some((_, rest)) = link.split_once("youtube.com/watch?v=") {
        rest.split('&').next().unwrap_or_default()
    } else if let Some((_, rest)) = link.split_once("youtu.be/") {
        rest.split('?').next().unwrap_or_default()
    } else {
        return None;
    };
    // `watch?v=` with nothing after it has no video to embed.
    (!id.is_empty()).then_some(id)
}

fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

/// Instagram reel link → iframe embed URL.
///
/// Tracking parameters (`?utm_source=...`, `?igsh=...`) are dropped before
/// `/embed` is appended.
pub fn reel_embed_url(reel: &str) -> String {
    let reel = reel.trim();
    let clean = reel.split('?').next().unwrap_or(reel);
    if clean.ends_with('/') {
        format!("{clean}embed")
    } else {
        format!("{clean}/embed")
    }
}

/// Gallery image link → directly loadable image URL.
///
/// Drive links go through the thumbnail endpoint; everything else, including
/// Drive links without an identifier, is used as-is.
pub fn gallery_image_url(url: &str) -> String {
    let trimmed = url.trim();
    if drive::is_drive_url(trimmed) {
        if let Some(id) = drive::extract_file_id(trimmed) {
            return drive::thumbnail_url(id);
        }
        tracing::debug!(url, "no Drive file id in image link, using it as-is");
    }
    url.to_string()
}
