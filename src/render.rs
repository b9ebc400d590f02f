//! Static HTML rendering with Maud.
//!
//! Renders one category listing page: a grid of product cards followed by a
//! detail panel per product. Each detail panel shows the product's
//! [`ResolvedMedia`]:
//!
//! - `Video` / `SocialEmbed` → an iframe
//! - `ImageGallery` → the primary image, prev/next controls, and one
//!   position indicator per image
//!
//! plus the description and a WhatsApp order button. The page is plain
//! HTML with inline CSS; the carousel controls are anchors carrying
//! `data-` attributes for whatever script drives them.
//!
//! [`write_catalog`] writes every page of a listing side by side as
//! `<slug>-<n>.html`, the names the pagination links point at. The
//! workshop page is a single `workshop.html` announcement with a booking
//! button per workshop.

use crate::catalog::{self, Category, Page, Product, Workshop};
use crate::config::{self, StoreConfig};
use crate::gallery::GalleryState;
use crate::media::{self, ResolvedMedia};
use crate::whatsapp;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = r#"
body { margin: 0; background: var(--color-linen); color: var(--color-espresso); font-family: Georgia, serif; }
header { padding: 2rem; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1.5rem; padding: 0 2rem; }
.product-card { display: flex; flex-direction: column; text-decoration: none; color: inherit; }
.product-card img { width: 100%; aspect-ratio: 3 / 4; object-fit: cover; border-radius: 0.5rem; background: var(--color-champagne); }
.price { color: var(--color-gold); font-family: monospace; }
.detail { display: flex; flex-wrap: wrap; margin: 2rem; background: var(--color-white); border-radius: 0.75rem; overflow: hidden; }
.detail-media { flex: 1 1 50%; background: #000; position: relative; min-height: 24rem; }
.detail-media iframe, .detail-media img { width: 100%; height: 100%; border: 0; object-fit: cover; }
.detail-body { flex: 1 1 50%; padding: 2rem; }
.gallery-control { position: absolute; top: 50%; color: var(--color-white); text-decoration: none; font-size: 2rem; }
.gallery-control.prev { left: 1rem; }
.gallery-control.next { right: 1rem; }
.gallery-dots { position: absolute; bottom: 1rem; width: 100%; text-align: center; }
.gallery-dots span { display: inline-block; width: 0.5rem; height: 0.5rem; margin: 0 0.2rem; border-radius: 50%; background: var(--color-champagne); opacity: 0.5; }
.gallery-dots span.current { opacity: 1; }
.order { display: block; margin-top: 2rem; padding: 1rem; text-align: center; background: var(--color-espresso); color: var(--color-linen); text-decoration: none; letter-spacing: 0.2em; text-transform: uppercase; font-size: 0.75rem; }
.order:hover { background: var(--color-gold); }
.pagination { padding: 2rem; text-align: center; }
.empty { padding: 2rem; }
.workshop { display: flex; flex-wrap: wrap; margin: 2rem; background: var(--color-champagne); border-radius: 1rem; overflow: hidden; }
.workshop-body, .workshop-venue { flex: 1 1 50%; padding: 2rem; }
.badge { font-size: 0.625rem; letter-spacing: 0.2em; text-transform: uppercase; color: var(--color-gold); }
.features { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; padding: 0; list-style: none; font-size: 0.75rem; text-transform: uppercase; }
.workshop-venue img { width: 100%; border-radius: 0.5rem; }
.workshop-venue iframe { width: 100%; height: 16rem; border: 0; }
"#;

/// File name of one listing page.
pub fn page_file_name(category: Category, number: usize) -> String {
    format!("{}-{}.html", category.slug(), number)
}

/// Render every page of a category listing into `output_dir`, paginated by
/// the configured page size. An empty listing still gets its first page.
pub fn write_catalog(
    output_dir: &Path,
    category: Category,
    products: &[&Product],
    config: &StoreConfig,
) -> Result<Vec<PathBuf>, RenderError> {
    let per_page = config.catalog.items_per_page.get(category);
    let first = catalog::paginate(products, per_page, 1);

    let mut written = Vec::with_capacity(first.total_pages.max(1));
    for number in 1..=first.total_pages.max(1) {
        let page = catalog::paginate(products, per_page, number);
        let path = output_dir.join(page_file_name(category, number));
        write_catalog_page(&path, category, &page, config)?;
        written.push(path);
    }
    Ok(written)
}

/// Render a listing page and write it to `output`.
pub fn write_catalog_page(
    output: &Path,
    category: Category,
    page: &Page<'_, &Product>,
    config: &StoreConfig,
) -> Result<(), RenderError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let html = render_catalog_page(category, page, config);
    fs::write(output, html.into_string())?;
    tracing::info!(
        %category,
        page = page.number,
        products = page.items.len(),
        path = %output.display(),
        "wrote catalog page"
    );
    Ok(())
}

/// Full HTML document for one page of a category listing.
pub fn render_catalog_page(
    category: Category,
    page: &Page<'_, &Product>,
    config: &StoreConfig,
) -> Markup {
    let css = format!("{}\n{}", config::generate_color_css(&config.colors), CSS_STATIC);

    let content = html! {
        header {
            h1 { (category.title()) }
        }
        main {
            @if page.items.is_empty() {
                p.empty { "No items found." }
            } @else {
                div.product-grid {
                    @for product in page.items {
                        (render_product_card(product, &config.fallback_image))
                    }
                }
                @for product in page.items {
                    (render_product_detail(product, config))
                }
            }
            (render_pagination(category, page))
        }
    };

    base_document(category.title(), &css, content)
}

fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Craftology" }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Grid card: primary image, title, and price. Links to the detail panel.
pub fn render_product_card(product: &Product, fallback_image: &str) -> Markup {
    let media = media::resolve(&media::ProductMedia {
        video_link: None,
        insta_reel: None,
        images: product.images.clone(),
        fallback_image: fallback_image.to_string(),
    });
    html! {
        a.product-card href={ "#product-" (product.id) } {
            img src=(media.primary_url()) alt=(product.title) loading="lazy";
            h3 { (product.title) }
            span.price { (product.price_label()) }
        }
    }
}

/// Detail panel: resolved media on one side, description and order button
/// on the other.
pub fn render_product_detail(product: &Product, config: &StoreConfig) -> Markup {
    let resolved = media::resolve(&product.media(&config.fallback_image));
    let order_link = whatsapp::order_link(&config.whatsapp.number, product);

    html! {
        section.detail id={ "product-" (product.id) } data-media=(resolved.kind()) {
            div.detail-media {
                (render_media(&product.title, &resolved))
            }
            div.detail-body {
                h2 { (product.title) }
                p.price { (product.price_label()) }
                h3 { "Description" }
                p { (product.display_description()) }
                a.order href=(order_link) target="_blank" rel="noopener" {
                    "Order on WhatsApp"
                }
            }
        }
    }
}

/// Media area for a resolved product.
pub fn render_media(title: &str, resolved: &ResolvedMedia) -> Markup {
    match resolved {
        ResolvedMedia::Video { playable_url } => html! {
            iframe src=(playable_url) title=(title) allow="autoplay; fullscreen" allowfullscreen {}
        },
        ResolvedMedia::SocialEmbed { embed_url } => html! {
            iframe src=(embed_url) title=(title) scrolling="no" allowfullscreen {}
        },
        ResolvedMedia::ImageGallery { urls } => render_gallery(title, urls, GalleryState::new()),
    }
}

/// Image carousel at `state`'s position.
///
/// A single image gets no controls or indicators.
pub fn render_gallery(title: &str, urls: &[String], mut state: GalleryState) -> Markup {
    let current = state.current(urls).unwrap_or_default();
    let index = state.index();
    let multiple = urls.len() > 1;

    html! {
        img src=(current) alt=(title) data-index=(index);
        @if multiple {
            a.gallery-control.prev href="#" data-gallery="previous" aria-label="Previous image" { "‹" }
            a.gallery-control.next href="#" data-gallery="next" aria-label="Next image" { "›" }
            div.gallery-dots {
                @for (i, url) in urls.iter().enumerate() {
                    span class=[(i == index).then_some("current")] data-src=(url) {}
                }
            }
        }
    }
}

fn render_pagination(category: Category, page: &Page<'_, &Product>) -> Markup {
    html! {
        @if page.total_pages > 1 {
            nav.pagination {
                @if page.has_previous() {
                    a href=(page_file_name(category, page.number - 1)) { "Previous" }
                    " "
                }
                span { "Page " (page.number) " of " (page.total_pages) }
                @if page.has_next() {
                    " "
                    a href=(page_file_name(category, page.number + 1)) { "Next" }
                }
            }
        }
    }
}

// =============================================================================
// Workshops
// =============================================================================

/// Render the workshop announcements and write them to `output`.
pub fn write_workshop_page(
    output: &Path,
    workshops: &[Workshop],
    config: &StoreConfig,
) -> Result<(), RenderError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let html = render_workshop_page(workshops, config);
    fs::write(output, html.into_string())?;
    tracing::info!(
        workshops = workshops.len(),
        path = %output.display(),
        "wrote workshop page"
    );
    Ok(())
}

pub fn render_workshop_page(workshops: &[Workshop], config: &StoreConfig) -> Markup {
    let css = format!("{}\n{}", config::generate_color_css(&config.colors), CSS_STATIC);

    let content = html! {
        header {
            h1 { "Workshops" }
        }
        main {
            @if workshops.is_empty() {
                p.empty { "No upcoming workshops." }
            }
            @for workshop in workshops {
                (render_workshop(workshop, config))
            }
        }
    };

    base_document("Workshops", &css, content)
}

/// One workshop: details and booking button, then the venue with its map.
pub fn render_workshop(workshop: &Workshop, config: &StoreConfig) -> Markup {
    let booking = whatsapp::booking_link(&config.whatsapp.number, workshop);

    html! {
        section.workshop id={ "workshop-" (workshop.id) } {
            div.workshop-body {
                span.badge { "Upcoming" }
                h2 { (workshop.title) }
                @if !workshop.subtitle.is_empty() {
                    p.subtitle { (workshop.subtitle) }
                }
                p { (workshop.description) }
                @if !workshop.features.is_empty() {
                    ul.features {
                        @for feature in &workshop.features {
                            li { (feature) }
                        }
                    }
                }
                p.when { (workshop.date) br; (workshop.time) }
                p.price { (catalog::format_price(workshop.price)) }
                a.order href=(booking) target="_blank" rel="noopener" {
                    "Book Your Slot"
                }
            }
            div.workshop-venue {
                @if !workshop.image.is_empty() {
                    img src=(workshop.image) alt=(workshop.title) loading="lazy";
                }
                h3 { "Location" }
                p { (workshop.location_name) }
                p { (workshop.location_address) }
                @if !workshop.map_embed_url.is_empty() {
                    iframe src=(workshop.map_embed_url) title={ "Map to " (workshop.location_name) } loading="lazy" {}
                }
                @if !workshop.map_link.is_empty() {
                    a href=(workshop.map_link) target="_blank" rel="noopener noreferrer" {
                        "Open in Google Maps"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{paginate, parse_products, parse_workshops};
    use tempfile::TempDir;
    use crate::test_helpers::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://a.example/{i}.jpg")).collect()
    }

    #[test]
    fn video_renders_iframe() {
        let media = ResolvedMedia::Video {
            playable_url: "https://www.youtube.com/embed/abc".to_string(),
        };
        let html = render_media("Box", &media).into_string();
        assert!(html.contains(r#"<iframe src="https://www.youtube.com/embed/abc""#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn social_embed_renders_iframe() {
        let media = ResolvedMedia::SocialEmbed {
            embed_url: "https://instagram.com/reel/x/embed".to_string(),
        };
        let html = render_media("Box", &media).into_string();
        assert!(html.contains("https://instagram.com/reel/x/embed"));
    }

    #[test]
    fn gallery_renders_controls_and_indicators() {
        let html = render_gallery("Box", &urls(3), GalleryState::new()).into_string();
        assert!(html.contains(r#"src="https://a.example/0.jpg""#));
        assert!(html.contains(r#"data-gallery="previous""#));
        assert!(html.contains(r#"data-gallery="next""#));
        assert_eq!(html.matches("data-src=").count(), 3);
        assert_eq!(html.matches(r#"class="current""#).count(), 1);
    }

    #[test]
    fn gallery_renders_at_state_position() {
        let mut state = GalleryState::new();
        state.previous(3);
        let html = render_gallery("Box", &urls(3), state).into_string();
        assert!(html.contains(r#"<img src="https://a.example/2.jpg""#));
    }

    #[test]
    fn single_image_has_no_controls() {
        let html = render_gallery("Box", &urls(1), GalleryState::new()).into_string();
        assert!(!html.contains("data-gallery"));
        assert!(!html.contains("gallery-dots"));
    }

    #[test]
    fn card_uses_resolved_drive_thumbnail() {
        let json = catalog_json(&[record("c1", &["https://drive.google.com/file/d/IMG/view"])]);
        let products = parse_products(&json, Category::Coin).unwrap();
        let html = render_product_card(&products[0], "/placeholder.jpg").into_string();
        assert!(html.contains("https://drive.google.com/thumbnail?id=IMG&amp;sz=w1920"));
        assert!(html.contains("₹150"));
    }

    #[test]
    fn card_without_images_uses_fallback() {
        let mut p = product("e1", &[]);
        p.images.clear();
        let html = render_product_card(&p, "/placeholder.jpg").into_string();
        assert!(html.contains(r#"src="/placeholder.jpg""#));
    }

    #[test]
    fn detail_prefers_video_and_links_whatsapp() {
        let mut p = product("e1", &[]);
        p.video_link = Some("https://youtu.be/abc123?si=x".to_string());
        p.insta_reel = Some("https://instagram.com/reel/y".to_string());
        let html = render_product_detail(&p, &StoreConfig::default()).into_string();
        assert!(html.contains(r#"data-media="video""#));
        assert!(html.contains("https://www.youtube.com/embed/abc123"));
        assert!(!html.contains("instagram.com"));
        assert!(html.contains("https://wa.me/919876543210?text="));
    }

    #[test]
    fn catalog_page_includes_brand_colors_and_pagination() {
        let records: Vec<_> = (1..=10).map(|i| record(&format!("g{i}"), &[])).collect();
        let products = parse_products(&catalog_json(&records), Category::Gaddi).unwrap();
        let refs: Vec<&Product> = products.iter().collect();
        let mut config = StoreConfig::default();
        config.catalog.items_per_page.gaddi = 4;
        let page = paginate(&refs, config.catalog.items_per_page.gaddi, 2);

        let html = render_catalog_page(Category::Gaddi, &page, &config).into_string();
        assert!(html.contains("--color-espresso: #371E10"));
        assert!(html.contains("Gaddi Boxes"));
        assert!(html.contains("Page 2 of 3"));
        assert!(html.contains(r#"href="gaddi-1.html""#));
        assert!(html.contains(r#"href="gaddi-3.html""#));
        assert_eq!(html.matches(r#"class="product-card""#).count(), 4);
    }

    #[test]
    fn write_catalog_writes_every_linked_page() {
        let tmp = TempDir::new().unwrap();
        let records: Vec<_> = (1..=10).map(|i| record(&format!("e{i}"), &[])).collect();
        let products = parse_products(&catalog_json(&records), Category::Envelope).unwrap();
        let refs: Vec<&Product> = products.iter().collect();

        let written = write_catalog(tmp.path(), Category::Envelope, &refs, &StoreConfig::default()).unwrap();
        assert_eq!(written, vec![tmp.path().join("envelope-1.html"), tmp.path().join("envelope-2.html")]);

        let first = fs::read_to_string(&written[0]).unwrap();
        assert!(first.contains(r#"href="envelope-2.html""#));
        assert!(tmp.path().join("envelope-2.html").exists());
        let second = fs::read_to_string(&written[1]).unwrap();
        assert!(second.contains(r#"href="envelope-1.html""#));
        assert_eq!(second.matches(r#"class="product-card""#).count(), 2);
    }

    #[test]
    fn write_catalog_with_no_products_writes_first_page() {
        let tmp = TempDir::new().unwrap();
        let written = write_catalog(&tmp.path().join("out"), Category::Coin, &[], &StoreConfig::default()).unwrap();
        assert_eq!(written, vec![tmp.path().join("out/coin-1.html")]);
        assert!(fs::read_to_string(&written[0]).unwrap().contains("No items found."));
    }

    #[test]
    fn workshop_renders_booking_link_and_map() {
        let json = r#"{
            "_id": "w1",
            "title": "Resin Masterclass",
            "price": 2500,
            "locationName": "Craftology Studio",
            "mapEmbedUrl": "https://www.google.com/maps/embed?pb=1",
            "mapLink": "https://maps.app.goo.gl/abc",
            "features": ["All materials", "Take home"]
        }"#;
        let workshops = parse_workshops(json).unwrap();
        let html = render_workshop(&workshops[0], &StoreConfig::default()).into_string();
        assert!(html.contains("https://wa.me/919876543210?text=I%20want%20to%20book%20a%20slot%20for%20Resin%20Masterclass"));
        assert!(html.contains("₹2500"));
        assert!(html.contains("Craftology Studio"));
        assert!(html.contains(r#"<iframe src="https://www.google.com/maps/embed?pb=1""#));
        assert!(html.contains(r#"href="https://maps.app.goo.gl/abc""#));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn workshop_without_map_omits_it() {
        let html = render_workshop(&workshop("w1", "Scrapbooking 101"), &StoreConfig::default()).into_string();
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("Open in Google Maps"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn empty_workshop_page_says_so() {
        let html = render_workshop_page(&[], &StoreConfig::default()).into_string();
        assert!(html.contains("No upcoming workshops."));
    }

    #[test]
    fn empty_catalog_page_says_so() {
        let refs: Vec<&Product> = Vec::new();
        let page = paginate(&refs, 8, 1);
        let html = render_catalog_page(Category::Resin, &page, &StoreConfig::default()).into_string();
        assert!(html.contains("No items found."));
        assert!(!html.contains("<nav"));
    }
}
