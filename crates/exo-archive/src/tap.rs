//! Exoplanet archive TAP client.
//!
//! Queries go to the synchronous TAP endpoint as
//! `?request=doQuery&lang=ADQL&format=<fmt>&query=<adql>`.

use exo_core::RawTable;

use crate::{
    ArchiveClient, CatalogQuery,
    error::FetchError,
    format::parse_table,
    http::{check_response, read_body},
};

impl ArchiveClient {
    /// Fetch the newest planets, capped at the configured row limit.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails or times out, the archive
    /// returns a non-success status, or the body is empty or malformed.
    pub async fn fetch_catalog(&self) -> Result<RawTable, FetchError> {
        self.run(&CatalogQuery::latest(self.archive.row_limit)).await
    }

    /// Case-insensitive substring search over planet and host names.
    ///
    /// `term` is sanitized before it reaches the query; a term with nothing
    /// searchable left is rejected without sending a request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidQuery`] for an empty term, and otherwise
    /// the same errors as [`Self::fetch_catalog`]. No matches is
    /// [`FetchError::Empty`].
    pub async fn search_by_name_or_host(&self, term: &str) -> Result<RawTable, FetchError> {
        let query = CatalogQuery::search(term, self.archive.row_limit)?;
        self.run(&query).await
    }

    /// Execute one query against the TAP endpoint.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_catalog`].
    pub async fn run(&self, query: &CatalogQuery) -> Result<RawTable, FetchError> {
        let url = self.query_url(query);
        tracing::debug!(endpoint = %self.archive.endpoint, format = %self.archive.format, "querying archive");

        let resp = self
            .http
            .get(&url)
            .timeout(self.archive.timeout())
            .send()
            .await?;
        let body = read_body(check_response(resp).await?).await?;
        let table = parse_table(&body, self.archive.format)?;

        tracing::debug!(rows = table.len(), "archive query returned");
        Ok(table)
    }

    fn query_url(&self, query: &CatalogQuery) -> String {
        format!(
            "{}?request=doQuery&lang=ADQL&format={}&query={}",
            self.archive.endpoint,
            self.archive.format,
            urlencoding::encode(&query.to_adql())
        )
    }
}
