//! Gallery uploads: raw image bytes to inline `data:` URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use taxisite_types::ConfigError;

/// Sniffed type wins over the declared one; an unknown payload falls back to
/// the declared type only when that is itself an `image/*` type.
pub fn image_data_url(bytes: &[u8], declared: Option<&str>) -> Result<String, ConfigError> {
    let declared = declared.map(str::trim).filter(|m| !m.is_empty());
    let mime = match (detect_from_bytes(bytes), declared) {
        (Some(detected), Some(declared)) if detected != declared => {
            debug!(declared = declared, detected = detected, "Overriding image MIME type");
            detected
        }
        (Some(detected), _) => detected,
        (None, Some(declared)) if declared.starts_with("image/") => declared,
        (None, other) => {
            return Err(ConfigError::UnsupportedImage {
                mime: other.unwrap_or("unknown").to_string(),
            })
        }
    };

    if bytes.is_empty() {
        return Err(ConfigError::UnsupportedImage { mime: "empty".to_string() });
    }
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

fn detect_from_bytes(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF8") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && bytes.get(8..12) == Some(b"WEBP".as_slice()) {
        return Some("image/webp");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn png_bytes_become_data_url() {
        let url = image_data_url(&PNG_HEADER, Some("image/png")).unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn jpeg_overrides_declared_png() {
        let url = image_data_url(&[0xFF, 0xD8, 0xFF, 0xE0], Some("image/png")).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn unknown_bytes_keep_declared_image_type() {
        let url = image_data_url(b"<svg/>", Some("image/svg+xml")).unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn non_image_is_rejected() {
        let err = image_data_url(b"%PDF-1.7", Some("application/pdf")).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedImage { mime: "application/pdf".to_string() });
        assert!(image_data_url(b"", None).is_err());
    }
}
