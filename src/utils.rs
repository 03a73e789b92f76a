use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Duration, Utc};
use rand::{Rng, seq::IndexedRandom};
use serde_json::{Value, json};

use crate::types::ItemFields;

const TITLES: &[&str] = &[
    "Midnight Drive",
    "Paper Planes",
    "Golden Hour",
    "Static Bloom",
    "Northern Lights",
    "Slow Motion",
    "Glass Houses",
    "River Song",
    "Neon Tide",
    "Quiet Storm",
];

const ARTISTS: &[&str] = &[
    "The Lanterns",
    "Mira Vale",
    "Odd Harbor",
    "Kite Club",
    "Juniper",
    "Silver Static",
    "Low Orbit",
];

/// Parses an item identifier taken from a request path.
///
/// Anything that is not a plain non-negative integer yields `None`, which the
/// store treats as an identifier that matches no item.
pub fn parse_item_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Drops attributes the client may not set, currently only `id`.
pub fn sanitize_fields(mut fields: ItemFields) -> ItemFields {
    fields.remove("id");
    fields
}

/// Builds the value of a Basic `Authorization` header for the given client.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Joins key/value pairs into a query string, percent-encoding each side.
///
/// Spaces become `%20`, never `+`.
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends `query` to `base`, respecting a query string `base` may already carry.
pub fn append_query(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query)
}

/// Generates the attributes of one synthetic playlist item.
pub fn random_item_fields<R: Rng + ?Sized>(rng: &mut R) -> ItemFields {
    let title = TITLES.choose(rng).copied().unwrap_or("Untitled");
    let artist = ARTISTS.choose(rng).copied().unwrap_or("Unknown");
    let year: u16 = rng.random_range(1970..=2025);
    let added_at = Utc::now().date_naive() - Duration::days(rng.random_range(0..365));

    let value = json!({
        "title": title,
        "artist": artist,
        "year": year,
        "addedAt": added_at.format("%Y-%m-%d").to_string(),
    });

    match value {
        Value::Object(fields) => fields,
        _ => ItemFields::new(),
    }
}
