//! Astronomy picture of the day client.

use chrono::NaiveDate;
use exo_core::{DailyImageRecord, MediaKind};

use crate::{
    ArchiveClient,
    error::FetchError,
    http::{check_response, read_body},
};

#[derive(serde::Deserialize)]
struct ApodResponse {
    media_type: String,
    #[serde(default)]
    url: String,
    title: String,
    #[serde(default)]
    explanation: String,
    date: String,
    copyright: Option<String>,
    thumbnail_url: Option<String>,
}

impl ApodResponse {
    fn into_record(self) -> Result<DailyImageRecord, FetchError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|e| FetchError::Parse(format!("invalid date {:?}: {e}", self.date)))?;
        Ok(DailyImageRecord {
            media: MediaKind::from_media_type(&self.media_type),
            url: self.url,
            title: self.title,
            explanation: self.explanation,
            date,
            copyright: self
                .copyright
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            thumbnail_url: self.thumbnail_url,
        })
    }
}

impl ArchiveClient {
    /// Fetch today's image-of-the-day record.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotConfigured`] without sending a request if no
    /// API key is set, and otherwise [`FetchError`] if the request fails,
    /// the service returns a non-success status, or the body cannot be
    /// parsed.
    pub async fn fetch_daily_image(&self) -> Result<DailyImageRecord, FetchError> {
        if !self.apod.is_configured() {
            return Err(FetchError::NotConfigured("apod.api_key"));
        }
        let url = format!(
            "{}?api_key={}&thumbs={}",
            self.apod.endpoint,
            urlencoding::encode(self.apod.api_key.trim()),
            self.apod.thumbs
        );
        tracing::debug!(endpoint = %self.apod.endpoint, "fetching image of the day");

        let resp = self
            .http
            .get(&url)
            .timeout(self.apod.timeout())
            .send()
            .await?;
        let body = read_body(check_response(resp).await?).await?;
        let data: ApodResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("invalid image response: {e}")))?;
        data.into_record()
    }
}
