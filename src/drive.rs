//! Google Drive link handling.
//!
//! Operators paste Drive share links into the catalog in whatever shape the
//! Drive UI handed them. Two shapes carry the file identifier:
//!
//! - `https://drive.google.com/file/d/<ID>/view?usp=sharing` (path segment)
//! - `https://drive.google.com/open?id=<ID>&authuser=0` (query parameter)
//!
//! Once the identifier is known the link is rewritten to one of two endpoints,
//! depending on what the link is used for:
//!
//! | Use | Endpoint |
//! |-----|----------|
//! | Video (iframe) | `https://drive.google.com/file/d/<ID>/preview` |
//! | Image (`<img>`) | `https://drive.google.com/thumbnail?id=<ID>&sz=w1920` |
//!
//! The preview endpoint is the only one Drive will play inside an iframe; the
//! thumbnail endpoint serves large images without the access and timeout
//! failures of `uc?export=view`. The two shapes are never interchangeable.

use regex::Regex;
use std::sync::LazyLock;

/// Host marker that identifies a Drive-hosted link.
pub const DRIVE_HOST: &str = "drive.google.com";

/// Width requested from the thumbnail endpoint for gallery images.
pub const THUMBNAIL_WIDTH: u32 = 1920;

static PATH_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/d/([^/]+)/").unwrap());
static QUERY_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?&]id=([^&]+)").unwrap());

/// Whether the URL points at Google Drive.
pub fn is_drive_url(url: &str) -> bool {
    url.contains(DRIVE_HOST)
}

/// Extract the Drive file identifier from a share link.
///
/// Tries the `/d/<ID>/` path segment first, then the `id=<ID>` query
/// parameter. The query form stops at the next `&`, so trailing parameters
/// never leak into the identifier. Returns `None` when neither shape yields
/// a non-empty identifier.
pub fn extract_file_id(url: &str) -> Option<&str> {
    [&*PATH_ID_RE, &*QUERY_ID_RE]
        .into_iter()
        .filter_map(|re| re.captures(url))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|id| !id.is_empty())
}

/// Iframe-playable preview URL for a Drive file.
pub fn preview_url(file_id: &str) -> String {
    format!("https://{DRIVE_HOST}/file/d/{file_id}/preview")
}

/// Direct image URL for a Drive file, served by the thumbnail endpoint.
pub fn thumbnail_url(file_id: &str) -> String {
    format!("https://{DRIVE_HOST}/thumbnail?id={file_id}&sz=w{THUMBNAIL_WIDTH}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_drive_host() {
        assert!(is_drive_url("https://drive.google.com/file/d/abc/view"));
        assert!(!is_drive_url("https://images.unsplash.com/photo-1?w=800"));
    }

    #[test]
    fn extracts_id_from_path_segment() {
        assert_eq!(
            extract_file_id("https://drive.google.com/file/d/1AbC_d-E/view?usp=sharing"),
            Some("1AbC_d-E")
        );
    }

    #[test]
    fn extracts_id_from_query_parameter() {
        assert_eq!(
            extract_file_id("https://drive.google.com/open?id=1XyZ"),
            Some("1XyZ")
        );
    }

    #[test]
    fn query_id_stops_at_next_parameter() {
        assert_eq!(
            extract_file_id("https://drive.google.com/uc?id=1XyZ&export=download"),
            Some("1XyZ")
        );
        assert_eq!(
            extract_file_id("https://drive.google.com/uc?export=view&id=1XyZ&authuser=0"),
            Some("1XyZ")
        );
    }

    #[test]
    fn path_segment_wins_over_query_parameter() {
        assert_eq!(
            extract_file_id("https://drive.google.com/file/d/PATH/view?id=QUERY"),
            Some("PATH")
        );
    }

    #[test]
    fn path_segment_needs_closing_slash() {
        // No closing slash and no `id=`: nothing to extract.
        assert_eq!(extract_file_id("https://drive.google.com/file/d/abc"), None);
    }

    #[test]
    fn empty_path_segment_falls_back_to_query() {
        assert_eq!(
            extract_file_id("https://drive.google.com/file/d//view?id=Q1"),
            Some("Q1")
        );
    }

    #[test]
    fn no_identifier_in_folder_link() {
        assert_eq!(
            extract_file_id("https://drive.google.com/drive/folders"),
            None
        );
    }

    #[test]
    fn preview_and_thumbnail_shapes_differ() {
        assert_eq!(
            preview_url("ID"),
            "https://drive.google.com/file/d/ID/preview"
        );
        assert_eq!(
            thumbnail_url("ID"),
            "https://drive.google.com/thumbnail?id=ID&sz=w1920"
        );
    }
}
