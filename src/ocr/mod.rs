//! Image-to-text extraction collaborator.
//!
//! OCR is an opaque function returning text: the pipeline sends image bytes
//! and gets back either extracted text or a sentinel string. Extraction
//! failures degrade to the sentinel — an unreadable image never aborts a
//! chat request.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

/// Sentinel returned when the image contains no readable text.
pub const NO_TEXT_FOUND: &str = "Resimde okunabilir bir metin bulunamadı.";

/// Sentinel returned when extraction itself failed.
pub const EXTRACTION_FAILED: &str = "Resimdeki metin okunurken bir hata oluştu.";

/// An opaque image-to-text collaborator.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract text from image bytes.
    ///
    /// Always returns a string: extracted text, [`NO_TEXT_FOUND`], or
    /// [`EXTRACTION_FAILED`]. Never fails the surrounding request.
    async fn extract(&self, image: &[u8], mime_type: &str, language_hint: &str) -> String;
}

/// Merge extracted image text into the user's prompt text.
pub fn merge_into_prompt(image_text: &str, prompt: &str) -> String {
    format!("[Resimdeki Metin: {image_text}] {prompt}")
}

#[derive(Debug, Deserialize)]
struct OcrResponse {
    text: Option<String>,
}

/// HTTP-based OCR collaborator posting image bytes to a configured endpoint.
#[derive(Debug, Clone)]
pub struct RemoteOcrClient {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteOcrClient {
    /// Create a client with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    async fn recognize(
        &self,
        image: &[u8],
        mime_type: &str,
        language_hint: &str,
    ) -> Result<Option<String>, reqwest::Error> {
        let response = self
            .client
            .post(format!("{}/recognize", self.base_url.trim_end_matches('/')))
            .header("content-type", mime_type)
            .query(&[("lang", language_hint)])
            .body(image.to_vec())
            .send()
            .await?
            .error_for_status()?;

        let body: OcrResponse = response.json().await?;
        Ok(body.text.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty()))
    }
}

#[async_trait]
impl TextExtractor for RemoteOcrClient {
    async fn extract(&self, image: &[u8], mime_type: &str, language_hint: &str) -> String {
        match self.recognize(image, mime_type, language_hint).await {
            Ok(Some(text)) => text,
            Ok(None) => NO_TEXT_FOUND.to_owned(),
            Err(e) => {
                warn!(error = %e, "ocr extraction failed");
                EXTRACTION_FAILED.to_owned()
            }
        }
    }
}
