//! Shared test utilities for the craftology test suite.
//!
//! Builders for catalog records, so tests state only the fields they care
//! about.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let p = product("e1", &["Diwali", "Floral"]);
//! let json = catalog_json(&[record("e1", &["https://a.example/1.jpg"])]);
//! ```

use crate::catalog::{Category, Product, Workshop};
use serde_json::{Value, json};

// =========================================================================
// Typed builders
// =========================================================================

/// An envelope with one image, a price, a description, and the given tags.
pub fn product(id: &str, tags: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        category: Category::Envelope,
        title: format!("Envelope {id}"),
        price: 120.0,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: "Hand-folded with gold foil.".to_string(),
        video_link: None,
        insta_reel: None,
        images: vec![format!("https://images.example.com/{id}.jpg")],
    }
}

/// A workshop with only identity fields filled in.
pub fn workshop(id: &str, title: &str) -> Workshop {
    Workshop {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: String::new(),
        date: String::new(),
        time: String::new(),
        price: 0.0,
        location_name: String::new(),
        location_address: String::new(),
        description: String::new(),
        image: String::new(),
        map_embed_url: String::new(),
        map_link: String::new(),
        features: Vec::new(),
    }
}

// =========================================================================
// Raw JSON builders
// =========================================================================

/// A backend record as MongoDB serves it (`_id`, snake_case, `image..image3`).
pub fn record(id: &str, images: &[&str]) -> Value {
    let mut obj = json!({
        "_id": id,
        "title": format!("Item {id}"),
        "price": 150,
        "tags": [],
    });
    for (key, url) in ["image", "image2", "image3"].iter().zip(images) {
        obj[*key] = json!(url);
    }
    obj
}

/// Wrap records in a `{ "data": [...] }` envelope and serialize.
pub fn catalog_json(records: &[Value]) -> String {
    json!({ "data": records }).to_string()
}
