//! News service

use newsdesk_core::models::{Article, ArticleDraft, ImportOutcome, ReporterStats};
use reqwest::multipart::Form;
use tracing::instrument;

use crate::client::ApiClient;
use crate::error::Result;
use crate::multipart::{into_form, FieldValue, FilePart};
use crate::response::{Envelope, ListBody, Page};

/// News endpoint wrappers
pub struct NewsService<'a> {
    client: &'a ApiClient,
}

impl<'a> NewsService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn paging(page: u32, limit: u32) -> [(&'static str, String); 2] {
        [("page", page.to_string()), ("limit", limit.to_string())]
    }

    /// List published news
    pub async fn list(&self, page: u32, limit: u32) -> Result<Page<Article>> {
        let body: ListBody<Article> = self
            .client
            .get_with_query("/news", &Self::paging(page, limit))
            .await?;
        Ok(body.into_page())
    }

    /// Fetch one article
    pub async fn get(&self, id: i64) -> Result<Article> {
        let body: Envelope<Article> = self.client.get(&format!("/news/{id}")).await?;
        Ok(body.data)
    }

    /// Video-only news
    pub async fn videos(&self, page: u32, limit: u32) -> Result<Page<Article>> {
        let body: ListBody<Article> = self
            .client
            .get_with_query("/news/videos", &Self::paging(page, limit))
            .await?;
        Ok(body.into_page())
    }

    /// The signed-in reporter's own articles
    pub async fn my_news(&self, page: u32, limit: u32) -> Result<Page<Article>> {
        let body: ListBody<Article> = self
            .client
            .get_with_query("/news/reporter/mynews", &Self::paging(page, limit))
            .await?;
        Ok(body.into_page())
    }

    /// Reporter dashboard aggregates
    pub async fn stats(&self) -> Result<ReporterStats> {
        let body: Envelope<ReporterStats> = self.client.get("/news/reporter/stats").await?;
        Ok(body.data)
    }

    /// Admin news list. Filters are passed through opaquely; the server
    /// owns their meaning.
    pub async fn admin_list(
        &self,
        page: u32,
        limit: u32,
        filters: &[(&str, String)],
    ) -> Result<Page<Article>> {
        let mut query: Vec<(&str, String)> = Self::paging(page, limit).to_vec();
        query.extend(filters.iter().map(|(key, value)| (*key, value.clone())));

        let body: ListBody<Article> = self.client.get_with_query("/news/admin", &query).await?;
        Ok(body.into_page())
    }

    /// Create an article from a plain field map (see [`crate::multipart`])
    pub async fn create(&self, fields: Vec<(String, FieldValue)>) -> Result<Article> {
        self.create_form(into_form(fields)?).await
    }

    /// Create an article from a pre-built multipart form
    #[instrument(skip(self, form))]
    pub async fn create_form(&self, form: Form) -> Result<Article> {
        let body: Envelope<Article> = self.client.post_form("/news", form).await?;
        Ok(body.data)
    }

    /// Update an article from a plain field map
    pub async fn update(&self, id: i64, fields: Vec<(String, FieldValue)>) -> Result<Article> {
        self.update_form(id, into_form(fields)?).await
    }

    /// Update an article from a pre-built multipart form
    #[instrument(skip(self, form))]
    pub async fn update_form(&self, id: i64, form: Form) -> Result<Article> {
        let body: Envelope<Article> = self.client.put_form(&format!("/news/{id}"), form).await?;
        Ok(body.data)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/news/{id}")).await
    }

    /// Publish a draft article
    #[instrument(skip(self))]
    pub async fn publish(&self, id: i64) -> Result<Article> {
        let body: Envelope<Article> = self.client.post_empty(&format!("/news/{id}/publish")).await?;
        Ok(body.data)
    }

    /// Preview a bulk-import file without committing it
    pub async fn import_parse(&self, file: FilePart) -> Result<Vec<ArticleDraft>> {
        let form = into_form(vec![("file".to_string(), FieldValue::File(file))])?;
        let body: Envelope<Vec<ArticleDraft>> =
            self.client.post_form("/news/import/parse", form).await?;
        Ok(body.data)
    }

    /// Commit a bulk-import file
    #[instrument(skip(self, file), fields(filename = %file.filename))]
    pub async fn import(&self, file: FilePart) -> Result<ImportOutcome> {
        let form = into_form(vec![("file".to_string(), FieldValue::File(file))])?;
        let body: Envelope<ImportOutcome> = self.client.post_form("/news/import", form).await?;
        Ok(body.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::serve;
    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;

    fn article(id: i64) -> serde_json::Value {
        serde_json::json!({ "id": id, "title": "T", "category": "Sports" })
    }

    #[tokio::test]
    async fn test_list_sends_paging_and_normalizes() {
        let router = Router::new().route(
            "/news",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("page").map(String::as_str), Some("2"));
                assert_eq!(params.get("limit").map(String::as_str), Some("10"));
                Json(serde_json::json!({
                    "data": [article(1), article(2)],
                    "page": 2,
                    "totalPages": 3
                }))
            }),
        );
        let base = serve(router).await;
        let client = ApiClient::new(&base).unwrap();

        let page = client.news().list(2, 10).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_videos_accepts_flat_body() {
        let router = Router::new().route(
            "/news/videos",
            get(|| async { Json(serde_json::json!([article(1)])) }),
        );
        let base = serve(router).await;
        let client = ApiClient::new(&base).unwrap();

        let page = client.news().videos(1, 10).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_admin_filters_pass_through() {
        let router = Router::new().route(
            "/news/admin",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("status").map(String::as_str), Some("draft"));
                assert_eq!(params.get("category").map(String::as_str), Some("politics"));
                Json(serde_json::json!({ "data": [] }))
            }),
        );
        let base = serve(router).await;
        let client = ApiClient::new(&base).unwrap();

        let filters = [
            ("status", "draft".to_string()),
            ("category", "politics".to_string()),
        ];
        let page = client.news().admin_list(1, 20, &filters).await.unwrap();
        assert!(page.is_empty());
    }
}
