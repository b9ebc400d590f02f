//! # Craftology
//!
//! The storefront core for a handicrafts shop: envelopes, coin boxes, gaddi
//! boxes, resin art, and scrapbooks, ordered over WhatsApp. There is no
//! checkout; "ordering" is a deep link into a chat with a pre-filled
//! message.
//!
//! # Architecture
//!
//! ```text
//! backend JSON ──catalog──▶ Product ──media::resolve──▶ ResolvedMedia ──▶ render / output
//!                                                            │
//!                                                    gallery::DetailView
//! ```
//!
//! The one piece with real rules is media resolution: which of a product's
//! video, reel, or images to show, and how to rewrite Drive, YouTube, and
//! Instagram links into something a page can embed. Every consumer goes
//! through [`media::resolve`]; nothing else parses media URLs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`media`] | Media priority (video → reel → images) and provider URL rewriting |
//! | [`drive`] | Google Drive file-id extraction, preview vs thumbnail endpoints |
//! | [`gallery`] | Carousel index with wraparound, and the detail view that owns it |
//! | [`catalog`] | Backend JSON → `Product`/`Workshop`, tag filters, pagination |
//! | [`whatsapp`] | Order, booking, and contact deep links |
//! | [`config`] | `store.toml` loading, merging, validation, brand-color CSS |
//! | [`render`] | Static HTML listing pages and the workshop page with Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Resolution Never Fails
//!
//! Media links are typed in by the shop owner and are frequently malformed.
//! [`media::resolve`] has no error type: a link it cannot rewrite is used
//! as-is, and a product with no usable image shows the configured fallback.
//! The worst outcome is an embed that does not play, never a broken page.
//!
//! ## Normalize Once, at the Boundary
//!
//! Backend records disagree on shape (`_id` vs `id`, `location_name` vs
//! `locationName`, bare arrays vs `{data: [...]}`). [`catalog`] maps them
//! into fixed structs in one pass; nothing downstream branches on shape.
//!
//! ## Configuration Is a Value
//!
//! Brand colors, the WhatsApp number, and the fallback image live in
//! [`config::StoreConfig`], passed explicitly to whatever needs them.

pub mod catalog;
pub mod config;
pub mod drive;
pub mod gallery;
pub mod media;
pub mod output;
pub mod render;
pub mod whatsapp;

#[cfg(test)]
pub(crate) mod test_helpers;
