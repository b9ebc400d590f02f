//! Carousel position over a resolved image gallery, and the detail view
//! that owns it.
//!
//! [`GalleryState`] is only an index; the URL list it walks lives in the
//! [`ResolvedMedia::ImageGallery`] it was opened with. Navigation wraps in
//! both directions and never touches the network: every URL is resolved
//! before the view opens.
//!
//! [`DetailView`] ties the index to a product identity so the carousel
//! always starts at the primary image, whether the view was just opened or
//! the displayed product changed underneath it.

use crate::media::ResolvedMedia;

/// Current carousel position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    current_index: usize,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.current_index
    }

    /// Back to the primary image.
    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    /// Advance one image, wrapping from the last back to the first.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
    }

    /// Step back one image, wrapping from the first to the last.
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.current_index = if self.current_index == 0 {
            len - 1
        } else {
            self.current_index - 1
        };
    }

    /// URL at the current position.
    ///
    /// An index past the end (the list shrank while the view was open) is
    /// clamped back to 0. Returns `None` only for an empty list.
    pub fn current<'a>(&mut self, urls: &'a [String]) -> Option<&'a str> {
        if self.current_index >= urls.len() {
            self.reset();
        }
        urls.get(self.current_index).map(String::as_str)
    }
}

/// A product detail view: open/closed, which product, its media, and the
/// carousel position.
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    open: bool,
    product_id: Option<String>,
    media: Option<ResolvedMedia>,
    gallery: GalleryState,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `media` for the product identified by `product_id`.
    ///
    /// The carousel resets when the view was closed or the product changed.
    /// Re-opening the same product that is already on screen keeps the
    /// position.
    pub fn open(&mut self, product_id: impl Into<String>, media: ResolvedMedia) {
        let product_id = product_id.into();
        let same_product = self.product_id.as_deref() == Some(product_id.as_str());
        if !self.open || !same_product {
            self.gallery.reset();
        }
        self.open = true;
        self.product_id = Some(product_id);
        self.media = Some(media);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn media(&self) -> Option<&ResolvedMedia> {
        self.media.as_ref()
    }

    /// Carousel index; always 0 for video and social media.
    pub fn index(&self) -> usize {
        self.gallery.index()
    }

    /// Number of gallery images, 0 when the media is not a gallery.
    pub fn gallery_len(&self) -> usize {
        self.media
            .as_ref()
            .and_then(ResolvedMedia::gallery_urls)
            .map_or(0, <[String]>::len)
    }

    pub fn next(&mut self) {
        let len = self.gallery_len();
        self.gallery.next(len);
    }

    pub fn previous(&mut self) {
        let len = self.gallery_len();
        self.gallery.previous(len);
    }

    /// URL to display right now: the embed for video/social, the current
    /// image for a gallery. `None` while closed.
    pub fn current_url(&mut self) -> Option<&str> {
        if !self.open {
            return None;
        }
        match self.media.as_ref()? {
            ResolvedMedia::Video { playable_url } => Some(playable_url.as_str()),
            ResolvedMedia::SocialEmbed { embed_url } => Some(embed_url.as_str()),
            ResolvedMedia::ImageGallery { urls } => self.gallery.current(urls),
        }
    }
}
