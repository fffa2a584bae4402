// SPDX-License-Identifier: MIT

//! HTML-entity escaping for command payloads.
//!
//! The kernel embeds the payload as a JSON string field and unescapes
//! entities before parsing it, so quotes and angle brackets must not
//! appear literally. Ampersand goes first to avoid double-escaping.

/// Escape `&`, `"`, `'`, `<` and `>` for embedding inside a JSON
/// string literal on the wire.
pub fn escape_entities(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
