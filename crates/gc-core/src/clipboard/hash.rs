/// Stable hex digest of clipboard text, used for change detection.
pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
