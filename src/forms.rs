//! URL-encoded form decoding.
//!
//! Both POST routes submit `application/x-www-form-urlencoded` bodies (the
//! only body format the portal accepts — no JSON, no multipart). Decoding
//! never fails: whatever the client sent, the caller gets a map back and
//! applies its own defaults for anything missing.

use std::collections::HashMap;

/// Decodes a URL-encoded form body into a field map.
///
/// Splits on `&` and `=`, percent-decodes keys and values, and treats `+`
/// as a space. When a key repeats, the last occurrence wins — standard form
/// semantics. Malformed segments decode to whatever survives; nothing is
/// ever reported as an error.
pub fn decode(body: &[u8]) -> HashMap<String, String> {
    // HashMap::insert on collect gives last-occurrence-wins for free.
    form_urlencoded::parse(body).into_owned().collect()
}

/// Looks up `key` in a decoded form, falling back to `default` when the
/// field is absent or submitted empty.
///
/// The decoder has no concept of required fields; presence defaults live
/// here, at the lookup site.
pub fn field_or(fields: &HashMap<String, String>, key: &str, default: &str) -> String {
    match fields.get(key) {
        Some(v) if !v.is_empty() => v.clone(),
        _ => default.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_simple_fields() {
        let form = decode(b"nombre=Ana&email=ana%40x.com&mensaje=Hola");
        assert_eq!(form.get("nombre").map(String::as_str), Some("Ana"));
        assert_eq!(form.get("email").map(String::as_str), Some("ana@x.com"));
        assert_eq!(form.get("mensaje").map(String::as_str), Some("Hola"));
    }

    #[test]
    fn plus_decodes_as_space() {
        let form = decode(b"mensaje=Hola+mundo");
        assert_eq!(form.get("mensaje").map(String::as_str), Some("Hola mundo"));
    }

    #[test]
    fn last_occurrence_of_repeated_key_wins() {
        let form = decode(b"usuario=a&usuario=b");
        assert_eq!(form.get("usuario").map(String::as_str), Some("b"));
    }

    #[test]
    fn malformed_input_yields_a_map_not_an_error() {
        // A lone token becomes a key with an empty value; stray separators
        // contribute nothing. Either way the caller gets a map.
        let form = decode(b"&&solo&a=1&");
        assert_eq!(form.get("a").map(String::as_str), Some("1"));
        assert_eq!(form.get("solo").map(String::as_str), Some(""));
        let empty = decode(b"");
        assert!(empty.is_empty());
    }

    #[test]
    fn field_or_defaults_missing_and_empty() {
        let form = decode(b"nombre=&email=ana%40x.com");
        assert_eq!(field_or(&form, "nombre", "(sin nombre)"), "(sin nombre)");
        assert_eq!(field_or(&form, "mensaje", "(sin mensaje)"), "(sin mensaje)");
        assert_eq!(field_or(&form, "email", "(sin email)"), "ana@x.com");
    }
}
