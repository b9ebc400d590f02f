//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Resolve
//!
//! ```text
//! video
//!     https://www.youtube.com/embed/abc123
//! ```
//!
//! ```text
//! images (2)
//!     1 https://drive.google.com/thumbnail?id=IMG1&sz=w1920
//!     2 https://images.example.com/b.jpg
//! ```
//!
//! ## List
//!
//! ```text
//! Envelopes — page 1 of 2 (11 products)
//! 001 Royal Shagun  ₹120
//!     Id: e1
//!     Tags: Wedding, Royal
//!     Media: video https://www.youtube.com/embed/abc123
//!     Order: https://wa.me/919876543210?text=...
//! ```
//!
//! ## Workshop
//!
//! ```text
//! 001 The Resin Masterclass  ₹2500
//!     When: Sunday, October 24th, 2025, 11:00 AM – 2:00 PM
//!     Where: Craftology Studio, 12, Lake View Road
//!     Book: https://wa.me/919876543210?text=I%20want%20to%20book...
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::catalog::{self, Category, Page, Product, Workshop};
use crate::config::StoreConfig;
use crate::media::{self, ResolvedMedia};
use crate::whatsapp;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Resolved media: the variant on one line, its URL(s) indented below.
pub fn format_resolved(resolved: &ResolvedMedia) -> Vec<String> {
    match resolved {
        ResolvedMedia::Video { playable_url } => {
            vec!["video".to_string(), format!("{}{}", indent(1), playable_url)]
        }
        ResolvedMedia::SocialEmbed { embed_url } => {
            vec!["social".to_string(), format!("{}{}", indent(1), embed_url)]
        }
        ResolvedMedia::ImageGallery { urls } => {
            let mut lines = vec![format!("images ({})", urls.len())];
            lines.extend(
                urls.iter()
                    .enumerate()
                    .map(|(i, url)| format!("{}{} {}", indent(1), i + 1, url)),
            );
            lines
        }
    }
}

pub fn print_resolved(resolved: &ResolvedMedia) {
    for line in format_resolved(resolved) {
        println!("{}", line);
    }
}

/// One listing page with each product's resolved media and order link.
pub fn format_listing(
    category: Category,
    page: &Page<'_, &Product>,
    total: usize,
    config: &StoreConfig,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{} — page {} of {} ({} products)",
        category.title(),
        page.number,
        page.total_pages.max(1),
        total
    )];

    if page.items.is_empty() {
        lines.push(format!("{}No items found.", indent(1)));
        return lines;
    }

    for (offset, product) in page.items.iter().enumerate() {
        lines.extend(format_product(page.start + offset + 1, product, config));
    }
    lines
}

fn format_product(position: usize, product: &Product, config: &StoreConfig) -> Vec<String> {
    let resolved = media::resolve(&product.media(&config.fallback_image));
    let mut lines = vec![
        format!(
            "{} {}  {}",
            format_index(position),
            product.title,
            product.price_label()
        ),
        format!("{}Id: {}", indent(1), product.id),
    ];
    if !product.tags.is_empty() {
        lines.push(format!("{}Tags: {}", indent(1), product.tags.join(", ")));
    }
    lines.push(format!(
        "{}Media: {} {}",
        indent(1),
        resolved.kind(),
        resolved.primary_url()
    ));
    if let Some(urls) = resolved.gallery_urls().filter(|urls| urls.len() > 1) {
        for url in &urls[1..] {
            lines.push(format!("{}{}", indent(2), url));
        }
    }
    lines.push(format!(
        "{}Order: {}",
        indent(1),
        whatsapp::order_link(&config.whatsapp.number, product)
    ));
    lines
}

pub fn print_listing(
    category: Category,
    page: &Page<'_, &Product>,
    total: usize,
    config: &StoreConfig,
) {
    for line in format_listing(category, page, total, config) {
        println!("{}", line);
    }
}

/// Upcoming workshops with their booking links.
pub fn format_workshops(workshops: &[Workshop], config: &StoreConfig) -> Vec<String> {
    if workshops.is_empty() {
        return vec!["No upcoming workshops.".to_string()];
    }

    let mut lines = Vec::new();
    for (i, workshop) in workshops.iter().enumerate() {
        lines.push(format!(
            "{} {}  {}",
            format_index(i + 1),
            workshop.title,
            catalog::format_price(workshop.price)
        ));
        let when = joined(&[workshop.date.as_str(), workshop.time.as_str()]);
        if !when.is_empty() {
            lines.push(format!("{}When: {}", indent(1), when));
        }
        let place = joined(&[workshop.location_name.as_str(), workshop.location_address.as_str()]);
        if !place.is_empty() {
            lines.push(format!("{}Where: {}", indent(1), place));
        }
        lines.push(format!(
            "{}Book: {}",
            indent(1),
            whatsapp::booking_link(&config.whatsapp.number, workshop)
        ));
    }
    lines
}

/// Non-empty parts joined with `", "`.
fn joined(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_workshops(workshops: &[Workshop], config: &StoreConfig) {
    for line in format_workshops(workshops, config) {
        println!("{}", line);
    }
}
