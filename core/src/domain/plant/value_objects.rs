use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, general_purpose},
};

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Browsers and camera SDKs disagree on trailing `=` padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A decoded image ready to be forwarded to the AI service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    /// Accepts either a `data:image/<type>;base64,<payload>` URI or a bare
    /// base64 string, which is assumed to be JPEG.
    pub fn parse(image: &str) -> Result<Self, CoreError> {
        let image = image.trim();
        if image.is_empty() {
            return Err(CoreError::Validation("Image is required".to_string()));
        }

        let (mime_type, payload) = if image.starts_with("data:image") {
            let (meta, payload) = image.split_once(',').ok_or_else(|| {
                CoreError::Validation("Malformed image data URI".to_string())
            })?;
            let mime_type = meta
                .trim_start_matches("data:")
                .split(';')
                .next()
                .unwrap_or(DEFAULT_IMAGE_MIME_TYPE);

            (mime_type.to_string(), payload)
        } else {
            (DEFAULT_IMAGE_MIME_TYPE.to_string(), image)
        };

        let compact: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if compact.is_empty() {
            return Err(CoreError::Validation("Image is required".to_string()));
        }

        let data = LENIENT_BASE64.decode(compact.as_bytes()).map_err(|e| {
            tracing::warn!("Rejected image payload: {}", e);
            CoreError::Validation("Image is not valid base64".to_string())
        })?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(CoreError::Validation(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        Ok(Self { mime_type, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_uri() {
        let payload = ImagePayload::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_parse_raw_base64_defaults_to_jpeg() {
        let payload = ImagePayload::parse("aGVsbG8=").unwrap();
        assert_eq!(payload.mime_type, DEFAULT_IMAGE_MIME_TYPE);
        assert_eq!(payload.data, b"hello");
    }

    #[test]
    fn test_parse_accepts_missing_padding_and_line_breaks() {
        let payload = ImagePayload::parse("data:image/webp;base64,aGVs\nbG8").unwrap();
        assert_eq!(payload.mime_type, "image/webp");
        assert_eq!(payload.data, b"hello");
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert_eq!(
            ImagePayload::parse("   "),
            Err(CoreError::Validation("Image is required".to_string()))
        );
        assert_eq!(
            ImagePayload::parse("data:image/png;base64,"),
            Err(CoreError::Validation("Image is required".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_uri_without_payload_separator() {
        assert_eq!(
            ImagePayload::parse("data:image/png;base64"),
            Err(CoreError::Validation("Malformed image data URI".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_base64() {
        assert_eq!(
            ImagePayload::parse("not base64!"),
            Err(CoreError::Validation("Image is not valid base64".to_string()))
        );
    }
}
