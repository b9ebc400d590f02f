//! Catalog records: the boundary between backend JSON and typed products.
//!
//! The backend serves one endpoint per category. Responses are not uniform:
//! some are bare arrays, some wrap the list in `data`, `items`, or a
//! category-named key, and records mix MongoDB `_id` with `id`, snake_case
//! with camelCase. All of that is absorbed here, once. Everything downstream
//! sees a [`Product`] or [`Workshop`] with fixed fields.
//!
//! ## Envelope lookup
//!
//! ```text
//! [ {...}, {...} ]                 bare array
//! { "data":  [ ... ] }             first wrapper checked
//! { "items": [ ... ] }
//! { "<plural>": [ ... ] }          e.g. "scrapbooks", "envelopes"
//! anything else                    → empty list
//! ```
//!
//! ## Listing
//!
//! [`TagFilter`] narrows a product list by occasion and design tag, and
//! [`paginate`] slices it into fixed-size pages, mirroring the storefront's
//! grid.

use crate::media::ProductMedia;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown category '{0}' (expected one of: envelope, coin, gaddi, resin, scrapbook)")]
    UnknownCategory(String),
}

/// Product category, one backend endpoint each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Envelope,
    Coin,
    Gaddi,
    Resin,
    Scrapbook,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Envelope,
        Category::Coin,
        Category::Gaddi,
        Category::Resin,
        Category::Scrapbook,
    ];

    /// Endpoint path segment.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Envelope => "envelope",
            Category::Coin => "coin",
            Category::Gaddi => "gaddi",
            Category::Resin => "resin",
            Category::Scrapbook => "scrapbook",
        }
    }

    /// Key some endpoints wrap their list in.
    pub fn plural_key(self) -> &'static str {
        match self {
            Category::Envelope => "envelopes",
            Category::Coin => "coins",
            Category::Gaddi => "gaddis",
            Category::Resin => "resins",
            Category::Scrapbook => "scrapbooks",
        }
    }

    /// Section heading.
    pub fn title(self) -> &'static str {
        match self {
            Category::Envelope => "Envelopes",
            Category::Coin => "Coin Boxes",
            Category::Gaddi => "Gaddi Boxes",
            Category::Resin => "Resin Art",
            Category::Scrapbook => "Scrapbooks",
        }
    }

    /// Singular noun used for untitled products.
    fn noun(self) -> &'static str {
        match self {
            Category::Envelope => "Envelope",
            Category::Coin => "Coin Box",
            Category::Gaddi => "Gaddi",
            Category::Resin => "Resin Piece",
            Category::Scrapbook => "Scrapbook",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted || c.plural_key() == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// A product as the storefront displays it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub price: f64,
    pub tags: Vec<String>,
    pub description: String,
    pub video_link: Option<String>,
    pub insta_reel: Option<String>,
    /// `image`, `image2`, `image3`, in that order, absent ones skipped.
    pub images: Vec<String>,
}

impl Product {
    /// Media fields for [`crate::media::resolve`].
    pub fn media(&self, fallback_image: &str) -> ProductMedia {
        ProductMedia {
            video_link: self.video_link.clone(),
            insta_reel: self.insta_reel.clone(),
            images: self.images.clone(),
            fallback_image: fallback_image.to_string(),
        }
    }

    /// Price with the rupee sign, without decimals for whole amounts.
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Description, or a generic line built from the first tag.
    pub fn display_description(&self) -> String {
        if !self.description.is_empty() {
            return self.description.clone();
        }
        let occasion = self
            .tags
            .first()
            .map(String::as_str)
            .unwrap_or("special occasion");
        format!(
            "This handcrafted piece adds a touch of elegance to your {occasion}. \
             Made with premium materials and designed to leave a lasting impression."
        )
    }
}

/// `₹150`, `₹149.50`.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₹{price:.0}")
    } else {
        format!("₹{price:.2}")
    }
}

/// Upcoming workshop announcement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workshop {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub time: String,
    pub price: f64,
    pub location_name: String,
    pub location_address: String,
    pub description: String,
    pub image: String,
    pub map_embed_url: String,
    pub map_link: String,
    pub features: Vec<String>,
}

// =============================================================================
// Parsing
// =============================================================================

/// Pull the record list out of a response body, whatever its wrapping.
pub fn extract_records<'a>(body: &'a Value, plural_key: &str) -> &'a [Value] {
    if let Value::Array(items) = body {
        return items;
    }
    ["data", "items", plural_key]
        .into_iter()
        .find_map(|key| body.get(key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_else(|| {
            tracing::warn!(plural_key, "response has no recognizable record list");
            &[][..]
        })
}

/// Parse a category response body into products.
///
/// Records that are not JSON objects are dropped with a warning.
pub fn parse_products(json: &str, category: Category) -> Result<Vec<Product>, CatalogError> {
    let body: Value = serde_json::from_str(json)?;
    let products = extract_records(&body, category.plural_key())
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match record.as_object() {
            Some(obj) => Some(product_from_record(obj, category, index)),
            None => {
                tracing::warn!(%category, index, "skipping non-object catalog record");
                None
            }
        })
        .collect();
    Ok(products)
}

/// Read a saved category response from disk.
pub fn load_products(
    path: &std::path::Path,
    category: Category,
) -> Result<Vec<Product>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    parse_products(&content, category)
}

/// Parse a workshop response body. Accepts a single object as well as any
/// of the list shapes [`extract_records`] understands.
pub fn parse_workshops(json: &str) -> Result<Vec<Workshop>, CatalogError> {
    let body: Value = serde_json::from_str(json)?;
    let single = body
        .as_object()
        .filter(|obj| obj.contains_key("title"))
        .map(std::slice::from_ref);
    let records = match single {
        Some(one) => one.iter().collect::<Vec<_>>(),
        None => extract_records(&body, "workshops")
            .iter()
            .filter_map(Value::as_object)
            .collect(),
    };
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(index, obj)| workshop_from_record(obj, index))
        .collect())
}

/// Read a saved workshop response from disk.
pub fn load_workshops(path: &std::path::Path) -> Result<Vec<Workshop>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    parse_workshops(&content)
}

fn product_from_record(obj: &Map<String, Value>, category: Category, index: usize) -> Product {
    let id = record_id(obj).unwrap_or_else(|| {
        let generated = format!("{}-{}", category.slug(), index + 1);
        tracing::warn!(%category, index, id = %generated, "record has no id or _id");
        generated
    });
    let title = text(obj, &["title", "name"]).unwrap_or_else(|| format!("Untitled {}", category.noun()));

    Product {
        id,
        category,
        title,
        price: number(obj, &["price"]).unwrap_or(0.0),
        tags: string_list(obj, "tags"),
        description: text(obj, &["description"]).unwrap_or_default(),
        video_link: text(obj, &["video_link", "videoLink"]),
        insta_reel: text(obj, &["insta_reel", "instaReel"]),
        images: ["image", "image2", "image3"]
            .into_iter()
            .filter_map(|key| text(obj, &[key]))
            .collect(),
    }
}

fn workshop_from_record(obj: &Map<String, Value>, index: usize) -> Workshop {
    let field = |keys: &[&str]| text(obj, keys).unwrap_or_default();
    Workshop {
        id: record_id(obj).unwrap_or_else(|| format!("workshop-{}", index + 1)),
        title: text(obj, &["title"]).unwrap_or_else(|| "Untitled Workshop".to_string()),
        subtitle: field(&["subtitle"]),
        date: field(&["date"]),
        time: field(&["time"]),
        price: number(obj, &["price"]).unwrap_or(0.0),
        location_name: field(&["location_name", "locationName"]),
        location_address: field(&["location_address", "locationAddress"]),
        description: field(&["description"]),
        image: field(&["image"]),
        map_embed_url: field(&["map_embed_url", "mapEmbedUrl"]),
        map_link: field(&["map_link", "mapLink"]),
        features: string_list(obj, "features"),
    }
}

/// `id`, falling back to MongoDB's `_id`. Numbers are stringified; an
/// `_id` of the form `{"$oid": "..."}` is unwrapped.
fn record_id(obj: &Map<String, Value>) -> Option<String> {
    ["id", "_id"].into_iter().find_map(|key| match obj.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(inner) => inner.get("$oid")?.as_str().map(String::from),
        _ => None,
    })
}

/// First non-blank string among `keys`. Null, missing, and blank are absent.
fn text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key)?.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(String::from)
}

/// Numeric field; numeric strings such as `"150"` are accepted.
fn number(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Filtering and pagination
// =============================================================================

/// Occasion tags offered in the envelope filter panel.
pub const OCCASIONS: &[&str] = &[
    "Diwali",
    "Raksha Bandhan",
    "Wedding",
    "Birthday",
    "Anniversary",
    "Baby Shower",
    "Shagun",
    "House Warming",
];

/// Design tags offered in the envelope filter panel.
pub const DESIGNS: &[&str] = &[
    "Handcrafted",
    "Floral",
    "Modern",
    "Traditional",
    "Minimalist",
    "Royal",
    "Packet Envelope",
];

/// Occasion and design selections; `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    pub occasion: Option<String>,
    pub design: Option<String>,
}

impl TagFilter {
    /// Build a filter from free-form tags, sorting each into occasion or
    /// design by the known vocabularies. Tags in neither vocabulary are
    /// treated as occasions, with a warning. `"All"` clears the occasion
    /// slot.
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        let mut filter = TagFilter::default();
        for tag in tags {
            let tag = tag.trim();
            if tag.is_empty() || tag.eq_ignore_ascii_case("all") {
                filter.occasion = None;
            } else if DESIGNS.contains(&tag) {
                filter.design = Some(tag.to_string());
            } else {
                if !Self::is_known_tag(tag) {
                    tracing::warn!(tag, "tag is not a known occasion or design, filtering by occasion");
                }
                filter.occasion = Some(tag.to_string());
            }
        }
        filter
    }

    /// Whether `tag` belongs to either filter vocabulary.
    pub fn is_known_tag(tag: &str) -> bool {
        OCCASIONS.contains(&tag) || DESIGNS.contains(&tag)
    }

    pub fn is_all(&self) -> bool {
        self.occasion.is_none() && self.design.is_none()
    }

    /// Every selected tag must be on the product.
    pub fn matches(&self, product: &Product) -> bool {
        [&self.occasion, &self.design]
            .into_iter()
            .flatten()
            .all(|wanted| product.tags.iter().any(|t| t == wanted))
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Position of `items[0]` in the full list.
    pub start: usize,
    /// 1-based page number actually shown (after clamping).
    pub number: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice `items` into page `page` (1-based) of `per_page` entries.
///
/// The page number is clamped into `1..=total_pages`; an empty list has zero
/// pages and always yields an empty page 1. `per_page` of 0 is treated as 1.
pub fn paginate<T>(items: &[T], per_page: usize, page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let number = page.clamp(1, total_pages.max(1));
    let start = ((number - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());
    Page {
        items: &items[start..end],
        start,
        number,
        total_pages,
    }
}
