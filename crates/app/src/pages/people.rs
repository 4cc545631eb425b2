//! People directory controller

use std::sync::Arc;

use newsdesk_api::ApiClient;
use newsdesk_core::models::Person;

use crate::error::Result;

/// People directory: paged fetch plus a derived client-side filter
pub struct PeopleDirectory {
    client: Arc<ApiClient>,
    page_size: u32,
    pub people: Vec<Person>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub total_pages: u32,
    pub search: String,
    pub profession: Option<String>,
}

impl PeopleDirectory {
    pub fn new(client: Arc<ApiClient>, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            people: Vec::new(),
            loading: false,
            error: None,
            page: 1,
            total_pages: 1,
            search: String::new(),
            profession: None,
        }
    }

    /// Fetch the current page
    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        self.error = None;

        let result = self.client.people().list(self.page, self.page_size).await;
        self.loading = false;

        match result {
            Ok(page) => {
                self.total_pages = page.total_pages;
                self.people = page.items;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Re-issue the identical prior fetch
    pub async fn retry(&mut self) -> Result<()> {
        self.load().await
    }

    /// Advance one page; clamped at the last page (no fetch when clamped)
    pub async fn next_page(&mut self) -> Result<()> {
        if self.page >= self.total_pages {
            return Ok(());
        }
        self.page += 1;
        self.load().await
    }

    /// Go back one page; clamped at the first page (no fetch when clamped)
    pub async fn prev_page(&mut self) -> Result<()> {
        if self.page <= 1 {
            return Ok(());
        }
        self.page -= 1;
        self.load().await
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_profession(&mut self, profession: Option<String>) {
        self.profession = profession;
    }

    /// Derived filter over the fetched page, recomputed per call:
    /// case-insensitive substring on name, exact match on profession.
    /// Empty inputs leave the list untouched.
    pub fn filtered(&self) -> Vec<&Person> {
        let needle = self.search.trim().to_lowercase();
        self.people
            .iter()
            .filter(|person| {
                let name_matches =
                    needle.is_empty() || person.name.to_lowercase().contains(&needle);
                let profession_matches = self
                    .profession
                    .as_deref()
                    .map_or(true, |profession| person.profession == profession);
                name_matches && profession_matches
            })
            .collect()
    }
}
