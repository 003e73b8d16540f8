use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// A video frame captured in the browser, carried as a data URL or a
/// plain base64 payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapturedFrame(String);

impl CapturedFrame {
    /// Create a new CapturedFrame with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyCapturedFrame);
        }

        // Data URLs must carry a decodable payload
        if value.starts_with("data:") {
            let payload = match value.split_once(";base64,") {
                Some((_, payload)) => payload,
                None => return Err(ValidationError::InvalidFrameEncoding),
            };

            base64::engine::general_purpose::STANDARD
                .decode(payload)
                .map_err(|_| ValidationError::InvalidFrameEncoding)?;
        }

        Ok(Self(value))
    }

    /// Get the frame as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base64 payload without any `data:<mime>;base64,` prefix
    pub fn base64_payload(&self) -> &str {
        match self.0.split_once(";base64,") {
            Some((_, payload)) => payload,
            None => &self.0,
        }
    }

    /// The MIME type declared by the data URL, if any
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let (mime, _) = rest.split_once(';')?;
        Some(mime)
    }
}

impl std::fmt::Display for CapturedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_frame() {
        assert!(CapturedFrame::new("data:image/png;base64,iVBORw0KGgo=".to_string()).is_ok());
        assert!(CapturedFrame::new("iVBORw0KGgo=".to_string()).is_ok());
    }

    #[test]
    fn test_empty_frame() {
        assert!(CapturedFrame::new("".to_string()).is_err());
        assert!(CapturedFrame::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_bad_data_url_rejected() {
        assert_eq!(
            CapturedFrame::new("data:image/png;base64,!!!not-base64!!!".to_string()).unwrap_err(),
            ValidationError::InvalidFrameEncoding
        );
        assert_eq!(
            CapturedFrame::new("data:image/png,rawpixels".to_string()).unwrap_err(),
            ValidationError::InvalidFrameEncoding
        );
    }

    #[test]
    fn test_base64_payload() {
        let frame = CapturedFrame::new("data:image/png;base64,iVBORw0KGgo=".to_string()).unwrap();
        assert_eq!(frame.base64_payload(), "iVBORw0KGgo=");
        assert_eq!(frame.mime_type(), Some("image/png"));

        let raw = CapturedFrame::new("iVBORw0KGgo=".to_string()).unwrap();
        assert_eq!(raw.base64_payload(), "iVBORw0KGgo=");
        assert_eq!(raw.mime_type(), None);
    }
}
