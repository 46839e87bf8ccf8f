//! Logo fetching and embedding.
//!
//! This module bridges the chart to the outside world: given a company name
//! and a logo URL, it fetches the image over HTTP, downscales it to a
//! bounded footprint preserving aspect ratio, and re-encodes it as an
//! embeddable `data:image/png` URI. The abstraction behind [`LogoResolver`]
//! keeps the engine testable without a network and makes the fetch-and-
//! resize policy replaceable without touching the dispatcher.
//!
//! Resolution failures are ordinary errors here; the dispatcher absorbs
//! them into an absent logo rather than failing the surrounding add.

use crate::errors::CoreError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::ImageOutputFormat;
use quadra_types::LogoImage;
use reqwest::Client;
use std::io::Cursor;
use std::time::Duration;

/// Bounding box for thumbnail downscaling, in pixels per side.
const THUMBNAIL_BOUND: u32 = 150;
/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default cap on the fetched body size.
const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Collaborator that turns a logo URL into an embeddable image.
#[async_trait]
pub trait LogoResolver: Send + Sync {
    /// Fetch and encode the logo for the named entity.
    async fn resolve(&self, name: &str, url: &str) -> Result<LogoImage, CoreError>;
}

/// HTTP implementation of [`LogoResolver`].
pub struct HttpLogoResolver {
    client: Client,
    max_bytes: usize,
}

impl HttpLogoResolver {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_TIMEOUT, DEFAULT_MAX_BYTES)
    }

    /// Create a resolver with a custom timeout and body-size cap.
    pub fn with_limits(timeout: Duration, max_bytes: usize) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            max_bytes,
        }
    }
}

impl Default for HttpLogoResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogoResolver for HttpLogoResolver {
    async fn resolve(&self, name: &str, url: &str) -> Result<LogoImage, CoreError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CoreError::logo_resolution(name, format!("request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| CoreError::logo_resolution(name, format!("bad response: {}", e)))?;

        if let Some(length) = response.content_length() {
            if length as usize > self.max_bytes {
                return Err(CoreError::logo_resolution(
                    name,
                    format!("body of {} bytes exceeds the {} byte cap", length, self.max_bytes),
                ));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CoreError::logo_resolution(name, format!("read failed: {}", e)))?;
        if bytes.len() > self.max_bytes {
            return Err(CoreError::logo_resolution(
                name,
                format!("body of {} bytes exceeds the {} byte cap", bytes.len(), self.max_bytes),
            ));
        }

        encode_thumbnail(&bytes).map_err(|message| CoreError::logo_resolution(name, message))
    }
}

/// Downscale raw image bytes into a bounded PNG `data:` URI.
///
/// The image keeps its aspect ratio inside a 150x150 bounding box; smaller
/// images pass through at their original size.
fn encode_thumbnail(bytes: &[u8]) -> Result<LogoImage, String> {
    let decoded = image::load_from_memory(bytes).map_err(|e| format!("decode failed: {}", e))?;
    let thumbnail = decoded.thumbnail(THUMBNAIL_BOUND, THUMBNAIL_BOUND);
    let mut encoded = Vec::new();
    thumbnail
        .write_to(&mut Cursor::new(&mut encoded), ImageOutputFormat::Png)
        .map_err(|e| format!("encode failed: {}", e))?;
    Ok(LogoImage::from_data_uri(format!(
        "data:image/png;base64,{}",
        BASE64.encode(&encoded)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let pixels = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 30, 30, 255]));
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgba8(pixels)
            .write_to(&mut Cursor::new(&mut buffer), ImageOutputFormat::Png)
            .unwrap();
        buffer
    }

    fn decode_data_uri(logo: &LogoImage) -> image::DynamicImage {
        let encoded = logo
            .as_data_uri()
            .strip_prefix("data:image/png;base64,")
            .unwrap();
        image::load_from_memory(&BASE64.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn test_thumbnail_preserves_aspect_ratio() {
        let logo = encode_thumbnail(&png_bytes(400, 200)).unwrap();
        let thumbnail = decode_data_uri(&logo);
        assert_eq!(thumbnail.width(), 150);
        assert_eq!(thumbnail.height(), 75);
    }

    #[test]
    fn test_small_images_are_not_upscaled() {
        let logo = encode_thumbnail(&png_bytes(32, 32)).unwrap();
        let thumbnail = decode_data_uri(&logo);
        assert_eq!((thumbnail.width(), thumbnail.height()), (32, 32));
    }

    #[test]
    fn test_non_image_bytes_fail_to_encode() {
        assert!(encode_thumbnail(b"definitely not an image").is_err());
    }

    #[tokio::test]
    async fn test_resolve_success_returns_data_uri() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/logo.png")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(png_bytes(64, 64))
            .create_async()
            .await;

        let resolver = HttpLogoResolver::new();
        let url = format!("{}/logo.png", server.url());
        let logo = resolver.resolve("Acme", &url).await.unwrap();
        assert!(logo.as_data_uri().starts_with("data:image/png;base64,"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_resolve_maps_http_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing.png")
            .with_status(404)
            .create_async()
            .await;

        let resolver = HttpLogoResolver::new();
        let url = format!("{}/missing.png", server.url());
        let err = resolver.resolve("Acme", &url).await.unwrap_err();
        assert!(matches!(err, CoreError::LogoResolution { .. }));
    }

    #[tokio::test]
    async fn test_resolve_rejects_non_image_bodies() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/logo.png")
            .with_status(200)
            .with_body("<html>not a logo</html>")
            .create_async()
            .await;

        let resolver = HttpLogoResolver::new();
        let url = format!("{}/logo.png", server.url());
        assert!(resolver.resolve("Acme", &url).await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_enforces_body_size_cap() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/huge.png")
            .with_status(200)
            .with_body(png_bytes(256, 256))
            .create_async()
            .await;

        let resolver = HttpLogoResolver::with_limits(DEFAULT_TIMEOUT, 16);
        let url = format!("{}/huge.png", server.url());
        let err = resolver.resolve("Acme", &url).await.unwrap_err();
        assert!(err.to_string().contains("byte cap"));
    }
}
