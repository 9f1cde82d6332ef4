// src/classifier/image.rs
use crate::classifier::ClassifierError;
use base64::Engine;
use mime::Mime;

/// An image ready to ride along as an inline-data part.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Bare base64, no data-URL prefix.
    pub data: String,
}

impl InlineImage {
    /// Accepts either a `data:<mime>;base64,<payload>` URL or bare base64.
    /// Bare payloads are assumed to be JPEG, which is what the capture form sends.
    pub fn from_payload(raw: &str) -> Result<Self, ClassifierError> {
        let raw = raw.trim();

        let (mime_type, data) = match raw.split_once("base64,") {
            Some((prefix, data)) => (parse_data_url_mime(prefix)?, data),
            None => (mime::IMAGE_JPEG, raw),
        };

        if data.is_empty() {
            return Err(ClassifierError::InvalidImage("empty payload".into()));
        }

        base64::engine::general_purpose::STANDARD
            .decode(data)
            .map_err(|e| ClassifierError::InvalidImage(e.to_string()))?;

        Ok(Self {
            mime_type: mime_type.essence_str().to_string(),
            data: data.to_string(),
        })
    }
}

/// `data:image/png;` -> `image/png`. An empty media type means JPEG.
fn parse_data_url_mime(prefix: &str) -> Result<Mime, ClassifierError> {
    let media = prefix
        .strip_prefix("data:")
        .unwrap_or(prefix)
        .trim_end_matches(';')
        .trim();

    if media.is_empty() {
        return Ok(mime::IMAGE_JPEG);
    }

    let parsed: Mime = media
        .parse()
        .map_err(|_| ClassifierError::InvalidImage(format!("bad media type '{media}'")))?;

    if parsed.type_() != mime::IMAGE {
        return Err(ClassifierError::InvalidImage(format!(
            "not an image: {parsed}"
        )));
    }

    Ok(parsed)
}
