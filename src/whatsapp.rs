//! WhatsApp deep links, the storefront's only ordering channel.
//!
//! Every link opens a chat with the shop's number and a pre-filled message:
//!
//! ```text
//! https://wa.me/919876543210?text=Hi%2C%20I%20am%20interested%20in%20Royal%20Shagun%20%28ID%3A%20e1%29
//! ```

use crate::catalog::{Product, Workshop};

const BASE: &str = "https://wa.me";

/// Chat link with an arbitrary pre-filled message.
pub fn contact_link(number: &str, message: &str) -> String {
    format!("{BASE}/{number}?text={}", urlencoding::encode(message))
}

/// Message sent when ordering a product.
pub fn order_message(product: &Product) -> String {
    format!(
        "Hi, I am interested in {} (ID: {})",
        product.title, product.id
    )
}

/// "Order on WhatsApp" link for a product.
pub fn order_link(number: &str, product: &Product) -> String {
    contact_link(number, &order_message(product))
}

/// "Book a slot" link for a workshop.
pub fn booking_link(number: &str, workshop: &Workshop) -> String {
    contact_link(
        number,
        &format!("I want to book a slot for {}", workshop.title),
    )
}
