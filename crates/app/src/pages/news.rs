//! News list controllers

use std::sync::Arc;

use newsdesk_api::ApiClient;
use newsdesk_core::models::Article;
use tracing::debug;

use crate::error::Result;

/// Home news feed. Refreshed manually or by the fixed-interval ticker;
/// both re-issue the current fetch.
pub struct NewsFeed {
    client: Arc<ApiClient>,
    page_size: u32,
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub total_pages: u32,
}

impl NewsFeed {
    pub fn new(client: Arc<ApiClient>, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            articles: Vec::new(),
            loading: false,
            error: None,
            page: 1,
            total_pages: 1,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        self.error = None;

        let result = self.client.news().list(self.page, self.page_size).await;
        self.loading = false;

        match result {
            Ok(page) => {
                debug!(count = page.len(), page = page.page, "Loaded news feed");
                self.total_pages = page.total_pages;
                self.articles = page.items;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Re-issue the current fetch (manual refresh button and auto-refresh)
    pub async fn refresh(&mut self) -> Result<()> {
        self.load().await
    }

    pub async fn retry(&mut self) -> Result<()> {
        self.load().await
    }

    pub async fn next_page(&mut self) -> Result<()> {
        if self.page >= self.total_pages {
            return Ok(());
        }
        self.page += 1;
        self.load().await
    }

    pub async fn prev_page(&mut self) -> Result<()> {
        if self.page <= 1 {
            return Ok(());
        }
        self.page -= 1;
        self.load().await
    }
}

/// Video-only news list
pub struct VideoNews {
    client: Arc<ApiClient>,
    page_size: u32,
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub total_pages: u32,
}

impl VideoNews {
    pub fn new(client: Arc<ApiClient>, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            articles: Vec::new(),
            loading: false,
            error: None,
            page: 1,
            total_pages: 1,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        self.error = None;

        let result = self.client.news().videos(self.page, self.page_size).await;
        self.loading = false;

        match result {
            Ok(page) => {
                self.total_pages = page.total_pages;
                self.articles = page.items;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    pub async fn retry(&mut self) -> Result<()> {
        self.load().await
    }

    pub async fn next_page(&mut self) -> Result<()> {
        if self.page >= self.total_pages {
            return Ok(());
        }
        self.page += 1;
        self.load().await
    }

    pub async fn prev_page(&mut self) -> Result<()> {
        if self.page <= 1 {
            return Ok(());
        }
        self.page -= 1;
        self.load().await
    }
}
