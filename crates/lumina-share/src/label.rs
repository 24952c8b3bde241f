//! Human-readable share labels.

use std::time::{SystemTime, UNIX_EPOCH};

use lumina_model::Document;

/// Build the short label that accompanies a share token, e.g.
/// `alexjohn_1y_sx2k4p`.
///
/// Lower-cased alphanumeric-stripped first 8 characters of the full name
/// (`cv` when empty), the experience-entry count, and a base-36 timestamp
/// suffix. Non-unique and cosmetic only; nothing ever decodes it.
#[must_use]
pub fn share_label(doc: &Document) -> String {
    let name: String = doc
        .personal_info
        .full_name
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(8)
        .collect();
    let name = if name.is_empty() { "cv".to_owned() } else { name };
    format!(
        "{name}_{}y_{}",
        doc.experience.len(),
        timestamp_suffix(now_millis())
    )
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Last 6 base-36 digits of a millisecond timestamp.
fn timestamp_suffix(millis: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut n = millis;
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    let skip = out.len().saturating_sub(6);
    String::from_utf8_lossy(&out[skip..]).into_owned()
}
