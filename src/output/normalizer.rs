//! Text normalization for raw subprocess output.
//!
//! There is no telling what encoding an external tool writes in, so the
//! decode here must be total: UTF-8 first, then the caller's fallback,
//! then lossy replacement. Downstream consumers tolerate whatever text
//! comes back.

use encoding_rs::Encoding;

/// Decode raw process output into text. Always succeeds.
///
/// Valid UTF-8 decodes exactly, ignoring any fallback. Otherwise the bytes
/// are decoded with `fallback`, an encoding label such as `"ISO 8859-1"`
/// or `"Windows-1252"`. When the fallback is absent, empty, or not a
/// recognized label, the bytes decode as UTF-8 with U+FFFD replacement so
/// callers still get text rather than an error.
pub fn normalize(raw: &[u8], fallback: Option<&str>) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_owned(),
        Err(_) => decode_with_fallback(raw, fallback),
    }
}

fn decode_with_fallback(raw: &[u8], fallback: Option<&str>) -> String {
    let encoding = fallback
        .map(canonical_label)
        .filter(|label| !label.is_empty())
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    match encoding {
        Some(encoding) => {
            let (text, _, _) = encoding.decode(raw);
            text.into_owned()
        }
        None => String::from_utf8_lossy(raw).into_owned(),
    }
}

// Editor settings write labels like "ISO 8859-1"; the WHATWG label set
// only knows the hyphenated forms.
fn canonical_label(label: &str) -> String {
    label.trim().replace([' ', '_'], "-")
}

/// Extract the codec name from an editor-style encoding label.
///
/// Detected-encoding labels carry a descriptive wrapper around the codec,
/// e.g. `"Western (ISO 8859-1)"`; the bracketed name is what decoders
/// understand. Labels without a parenthesized group pass through trimmed.
pub fn codec_from_label(label: &str) -> &str {
    match (label.rfind('('), label.rfind(')')) {
        (Some(open), Some(close)) if open < close => &label[open + 1..close],
        _ => label.trim(),
    }
}
