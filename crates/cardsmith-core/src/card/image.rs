//! Card image source - tagged representation of the `imageUrl` field.
//!
//! The document format stores a single string that is either an external
//! reference or an embedded `data:` URI. Internally the two are kept as
//! explicit variants so callers never sniff prefixes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Image data for the card's main picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageSource {
    /// External reference: a URL or a local file path
    Remote(String),

    /// Embedded image bytes, carried inline as a `data:` URI on the wire
    Embedded { mime: String, data: Vec<u8> },
}

impl ImageSource {
    /// Parse the wire string form.
    ///
    /// `data:<mime>;base64,<payload>` becomes [`ImageSource::Embedded`];
    /// anything else, including a malformed data URI, is kept verbatim as
    /// [`ImageSource::Remote`] so imported documents survive untouched.
    pub fn parse(value: &str) -> Self {
        if let Some(rest) = value.strip_prefix("data:") {
            if let Some((mime, payload)) = rest.split_once(";base64,") {
                if let Ok(data) = BASE64.decode(payload) {
                    return ImageSource::Embedded {
                        mime: mime.to_string(),
                        data,
                    };
                }
            }
        }
        ImageSource::Remote(value.to_string())
    }

    /// Wrap raw bytes read from a local file.
    pub fn from_bytes(data: Vec<u8>, mime: impl Into<String>) -> Self {
        ImageSource::Embedded {
            mime: mime.into(),
            data,
        }
    }

    /// The wire string form: the URL as-is, or a `data:` URI.
    ///
    /// This is also what the preview hands to an `img` element's `src`.
    pub fn as_src(&self) -> String {
        match self {
            ImageSource::Remote(url) => url.clone(),
            ImageSource::Embedded { mime, data } => {
                format!("data:{};base64,{}", mime, BASE64.encode(data))
            }
        }
    }

    /// Whether there is anything to draw at all.
    pub fn is_available(&self) -> bool {
        match self {
            ImageSource::Remote(url) => !url.is_empty(),
            ImageSource::Embedded { data, .. } => !data.is_empty(),
        }
    }

    /// Whether the source needs a network fetch to read pixel data.
    pub fn is_network(&self) -> bool {
        match self {
            ImageSource::Remote(url) => {
                url.starts_with("http://") || url.starts_with("https://")
            }
            ImageSource::Embedded { .. } => false,
        }
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        ImageSource::parse(&value)
    }
}

impl From<ImageSource> for String {
    fn from(value: ImageSource) -> Self {
        value.as_src()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote_url() {
        let img = ImageSource::parse("https://example.com/pika.png");
        assert_eq!(
            img,
            ImageSource::Remote("https://example.com/pika.png".to_string())
        );
        assert!(img.is_network());
    }

    #[test]
    fn test_parse_data_uri() {
        let uri = format!("data:image/png;base64,{}", BASE64.encode(b"pixels"));
        let img = ImageSource::parse(&uri);
        assert_eq!(
            img,
            ImageSource::Embedded {
                mime: "image/png".to_string(),
                data: b"pixels".to_vec(),
            }
        );
        assert!(!img.is_network());
    }

    #[test]
    fn test_malformed_data_uri_kept_verbatim() {
        let img = ImageSource::parse("data:image/png;base64,%%%not-base64%%%");
        assert!(matches!(img, ImageSource::Remote(_)));
    }

    #[test]
    fn test_wire_roundtrip() {
        let img = ImageSource::from_bytes(vec![1, 2, 3, 4], "image/jpeg");
        assert_eq!(ImageSource::parse(&img.as_src()), img);

        let remote = ImageSource::Remote("/tmp/local.png".to_string());
        assert_eq!(ImageSource::parse(&remote.as_src()), remote);
        assert!(!remote.is_network());
    }

    #[test]
    fn test_empty_not_available() {
        assert!(!ImageSource::Remote(String::new()).is_available());
        assert!(!ImageSource::from_bytes(Vec::new(), "image/png").is_available());
        assert!(ImageSource::Remote("x.png".to_string()).is_available());
    }
}
