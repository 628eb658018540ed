//! URL handling module for hostcrawl
//!
//! This module provides dedup-key normalization, link resolution against a
//! page's base URL, and host scope extraction.

mod domain;
mod normalize;

pub use domain::{extract_host, is_same_host};
pub use normalize::{normalize_url, parse_absolute, resolve_link};
