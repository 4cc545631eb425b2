//! Person detail controller

use std::sync::Arc;

use newsdesk_api::ApiClient;
use newsdesk_core::models::{Article, Person};

use crate::error::Result;

/// Person detail plus their paged news. The person and the news list
/// keep independent loading/error state.
pub struct PersonDetail {
    client: Arc<ApiClient>,
    page_size: u32,
    key: String,
    pub person: Option<Person>,
    pub loading: bool,
    pub error: Option<String>,
    pub news: Vec<Article>,
    pub news_loading: bool,
    pub news_error: Option<String>,
    pub news_page: u32,
    pub news_total_pages: u32,
}

impl PersonDetail {
    /// `key` is the route parameter: a slug or a numeric id
    pub fn new(client: Arc<ApiClient>, key: impl Into<String>, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            key: key.into(),
            person: None,
            loading: false,
            error: None,
            news: Vec::new(),
            news_loading: false,
            news_error: None,
            news_page: 1,
            news_total_pages: 1,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Route parameter changed: reset and refetch
    pub async fn set_key(&mut self, key: impl Into<String>) -> Result<()> {
        let key = key.into();
        if key == self.key {
            return Ok(());
        }
        self.key = key;
        self.person = None;
        self.news.clear();
        self.news_page = 1;
        self.load().await
    }

    /// Fetch the person, then their first news page
    pub async fn load(&mut self) -> Result<()> {
        self.load_person().await?;
        self.load_news().await
    }

    pub async fn retry(&mut self) -> Result<()> {
        self.load().await
    }

    async fn load_person(&mut self) -> Result<()> {
        self.loading = true;
        self.error = None;

        let result = self.client.people().get(&self.key).await;
        self.loading = false;

        match result {
            Ok(person) => {
                self.person = Some(person);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    pub async fn load_news(&mut self) -> Result<()> {
        self.news_loading = true;
        self.news_error = None;

        let result = self
            .client
            .people()
            .news(&self.key, self.news_page, self.page_size)
            .await;
        self.news_loading = false;

        match result {
            Ok(page) => {
                self.news_total_pages = page.total_pages;
                self.news = page.items;
                Ok(())
            }
            Err(err) => {
                self.news_error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    pub async fn next_news_page(&mut self) -> Result<()> {
        if self.news_page >= self.news_total_pages {
            return Ok(());
        }
        self.news_page += 1;
        self.load_news().await
    }

    pub async fn prev_news_page(&mut self) -> Result<()> {
        if self.news_page <= 1 {
            return Ok(());
        }
        self.news_page -= 1;
        self.load_news().await
    }
}
