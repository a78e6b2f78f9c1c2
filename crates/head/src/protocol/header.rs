//! Header map type and header-level predicates.

use std::collections::HashMap;

use http::header::CONNECTION;

/// Request header fields keyed by lower-cased name.
///
/// Each name maps to a single value; a repeated header replaces the earlier one.
pub type Headers = HashMap<String, String>;

const KEEP_ALIVE: &str = "keep-alive";

/// Returns true if the client explicitly asked for a persistent connection.
///
/// Only `Connection: keep-alive` (any case, surrounding whitespace ignored) counts.
/// A missing header yields `false`; HTTP/1.1 default persistence is not assumed.
pub fn supports_keep_alive(headers: &Headers) -> bool {
    headers.get(CONNECTION.as_str()).is_some_and(|value| value.trim().to_lowercase() == KEEP_ALIVE)
}
