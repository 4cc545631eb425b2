//! People service

use newsdesk_core::models::{Article, Person};
use reqwest::multipart::Form;
use tracing::instrument;

use crate::client::ApiClient;
use crate::error::Result;
use crate::multipart::{into_form, FieldValue};
use crate::response::{Envelope, ListBody, Page};

/// People endpoint wrappers. Detail endpoints accept either the numeric
/// id or the slug — `Person::address_key` picks whichever is available.
pub struct PersonService<'a> {
    client: &'a ApiClient,
}

impl<'a> PersonService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn paging(page: u32, limit: u32) -> [(&'static str, String); 2] {
        [("page", page.to_string()), ("limit", limit.to_string())]
    }

    /// List directory entries
    pub async fn list(&self, page: u32, limit: u32) -> Result<Page<Person>> {
        let body: ListBody<Person> = self
            .client
            .get_with_query("/people", &Self::paging(page, limit))
            .await?;
        Ok(body.into_page())
    }

    /// Fetch one person by id or slug
    pub async fn get(&self, key: &str) -> Result<Person> {
        let body: Envelope<Person> = self.client.get(&format!("/people/{key}")).await?;
        Ok(body.data)
    }

    /// News about a person, paginated
    pub async fn news(&self, key: &str, page: u32, limit: u32) -> Result<Page<Article>> {
        let body: ListBody<Article> = self
            .client
            .get_with_query(&format!("/people/{key}/news"), &Self::paging(page, limit))
            .await?;
        Ok(body.into_page())
    }

    /// Create a person from a plain field map (see [`crate::multipart`])
    pub async fn create(&self, fields: Vec<(String, FieldValue)>) -> Result<Person> {
        self.create_form(into_form(fields)?).await
    }

    /// Create a person from a pre-built multipart form
    #[instrument(skip(self, form))]
    pub async fn create_form(&self, form: Form) -> Result<Person> {
        let body: Envelope<Person> = self.client.post_form("/people", form).await?;
        Ok(body.data)
    }

    /// Update a person from a plain field map
    pub async fn update(&self, key: &str, fields: Vec<(String, FieldValue)>) -> Result<Person> {
        self.update_form(key, into_form(fields)?).await
    }

    /// Update a person from a pre-built multipart form
    #[instrument(skip(self, form))]
    pub async fn update_form(&self, key: &str, form: Form) -> Result<Person> {
        let body: Envelope<Person> = self.client.put_form(&format!("/people/{key}"), form).await?;
        Ok(body.data)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.client.delete(&format!("/people/{key}")).await
    }
}
