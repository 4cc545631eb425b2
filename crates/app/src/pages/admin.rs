//! Admin CRUD controllers and form payloads
//!
//! Mutations reload the backing list on success, so the screen always
//! shows server truth after a write.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use newsdesk_api::{ApiClient, FieldValue, FilePart};
use newsdesk_core::models::{Article, ArticleDraft, ImportOutcome, Person, PersonCategory, SocialLinks};

use crate::error::Result;

/// Multi-section person form; serializes into the multipart field map.
/// Socials go out as one JSON-encoded object field.
#[derive(Debug, Clone, Default)]
pub struct PersonForm {
    pub name: String,
    pub slug: Option<String>,
    pub profession: String,
    pub category: PersonCategory,
    pub description: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub website: Option<String>,
    pub socials: SocialLinks,
    pub image: Option<FilePart>,
}

impl PersonForm {
    pub fn into_fields(self) -> Vec<(String, FieldValue)> {
        let mut fields = vec![
            ("name".to_string(), FieldValue::Text(self.name)),
            ("profession".to_string(), FieldValue::Text(self.profession)),
            (
                "category".to_string(),
                FieldValue::Text(self.category.wire_name().to_string()),
            ),
            ("description".to_string(), FieldValue::Text(self.description)),
        ];
        if let Some(slug) = self.slug {
            fields.push(("slug".to_string(), FieldValue::Text(slug)));
        }
        if let Some(birth_date) = self.birth_date {
            fields.push((
                "birthDate".to_string(),
                FieldValue::Text(birth_date.to_string()),
            ));
        }
        if let Some(nationality) = self.nationality {
            fields.push(("nationality".to_string(), FieldValue::Text(nationality)));
        }
        if let Some(website) = self.website {
            fields.push(("website".to_string(), FieldValue::Text(website)));
        }
        fields.push((
            "socials".to_string(),
            FieldValue::Json(serde_json::to_value(&self.socials).unwrap_or(Value::Null)),
        ));
        if let Some(image) = self.image {
            fields.push(("image".to_string(), FieldValue::File(image)));
        }
        fields
    }
}

/// Multi-section news form; tags explode into indexed keys on the wire
#[derive(Debug, Clone, Default)]
pub struct NewsForm {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_video: bool,
    pub video_url: Option<String>,
    pub cover: Option<FilePart>,
}

impl NewsForm {
    pub fn into_fields(self) -> Vec<(String, FieldValue)> {
        let mut fields = vec![
            ("title".to_string(), FieldValue::Text(self.title)),
            ("summary".to_string(), FieldValue::Text(self.summary)),
            ("body".to_string(), FieldValue::Text(self.body)),
            ("category".to_string(), FieldValue::Text(self.category)),
        ];
        if !self.tags.is_empty() {
            fields.push((
                "tags".to_string(),
                FieldValue::List(self.tags.into_iter().map(FieldValue::Text).collect()),
            ));
        }
        fields.push((
            "isVideo".to_string(),
            FieldValue::Json(Value::Bool(self.is_video)),
        ));
        if let Some(video_url) = self.video_url {
            fields.push(("videoUrl".to_string(), FieldValue::Text(video_url)));
        }
        if let Some(cover) = self.cover {
            fields.push(("coverImage".to_string(), FieldValue::File(cover)));
        }
        fields
    }
}

/// Admin people screen: paged list plus CRUD
pub struct AdminPeople {
    client: Arc<ApiClient>,
    page_size: u32,
    pub people: Vec<Person>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub total_pages: u32,
}

impl AdminPeople {
    pub fn new(client: Arc<ApiClient>, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            people: Vec::new(),
            loading: false,
            error: None,
            page: 1,
            total_pages: 1,
        }
    }

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

    pub async fn retry(&mut self) -> Result<()> {
        self.load().await
    }

    pub async fn create(&mut self, form: PersonForm) -> Result<Person> {
        self.error = None;
        match self.client.people().create(form.into_fields()).await {
            Ok(person) => {
                self.load().await?;
                Ok(person)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    pub async fn update(&mut self, key: &str, form: PersonForm) -> Result<Person> {
        self.error = None;
        match self.client.people().update(key, form.into_fields()).await {
            Ok(person) => {
                self.load().await?;
                Ok(person)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    pub async fn delete(&mut self, key: &str) -> Result<()> {
        self.error = None;
        match self.client.people().delete(key).await {
            Ok(()) => self.load().await,
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
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

/// Admin news screen: filtered paged list, CRUD, publish, bulk import
pub struct AdminNews {
    client: Arc<ApiClient>,
    page_size: u32,
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub total_pages: u32,
    /// Opaque filter pairs forwarded to the server as-is
    pub filters: Vec<(String, String)>,
    pub import_preview: Vec<ArticleDraft>,
}

impl AdminNews {
    pub fn new(client: Arc<ApiClient>, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            articles: Vec::new(),
            loading: false,
            error: None,
            page: 1,
            total_pages: 1,
            filters: Vec::new(),
            import_preview: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        self.error = None;

        let filters: Vec<(&str, String)> = self
            .filters
            .iter()
            .map(|(key, value)| (key.as_str(), value.clone()))
            .collect();
        let result = self
            .client
            .news()
            .admin_list(self.page, self.page_size, &filters)
            .await;
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

    /// Filter change is a dependency change: back to page one, refetch
    pub async fn apply_filters(&mut self, filters: Vec<(String, String)>) -> Result<()> {
        self.filters = filters;
        self.page = 1;
        self.load().await
    }

    pub async fn create(&mut self, form: NewsForm) -> Result<Article> {
        self.error = None;
        match self.client.news().create(form.into_fields()).await {
            Ok(article) => {
                self.load().await?;
                Ok(article)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    pub async fn update(&mut self, id: i64, form: NewsForm) -> Result<Article> {
        self.error = None;
        match self.client.news().update(id, form.into_fields()).await {
            Ok(article) => {
                self.load().await?;
                Ok(article)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.error = None;
        match self.client.news().delete(id).await {
            Ok(()) => self.load().await,
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    pub async fn publish(&mut self, id: i64) -> Result<Article> {
        self.error = None;
        match self.client.news().publish(id).await {
            Ok(article) => {
                self.load().await?;
                Ok(article)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Preview a bulk-import file; rows land in `import_preview`
    pub async fn import_parse(&mut self, file: FilePart) -> Result<()> {
        self.error = None;
        match self.client.news().import_parse(file).await {
            Ok(rows) => {
                self.import_preview = rows;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Commit a bulk-import file and refresh the list
    pub async fn import(&mut self, file: FilePart) -> Result<ImportOutcome> {
        self.error = None;
        match self.client.news().import(file).await {
            Ok(outcome) => {
                self.import_preview.clear();
                self.load().await?;
                Ok(outcome)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_api::{encode_fields, EncodedPart};

    fn text_parts(fields: Vec<(String, FieldValue)>) -> Vec<(String, String)> {
        encode_fields(fields)
            .into_iter()
            .filter_map(|part| match part {
                EncodedPart::Text { name, value } => Some((name, value)),
                EncodedPart::File { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_news_form_tags_explode_into_indexed_keys() {
        let form = NewsForm {
            title: "T".to_string(),
            category: "Sports".to_string(),
            tags: vec!["football".to_string(), "derby".to_string()],
            ..Default::default()
        };

        let parts = text_parts(form.into_fields());
        assert!(parts.contains(&("tags[0]".to_string(), "football".to_string())));
        assert!(parts.contains(&("tags[1]".to_string(), "derby".to_string())));
        assert!(parts.contains(&("isVideo".to_string(), "false".to_string())));
    }

    #[test]
    fn test_person_form_socials_encode_as_json_object() {
        let form = PersonForm {
            name: "Ada".to_string(),
            category: PersonCategory::Scientist,
            socials: SocialLinks {
                twitter: Some("@ada".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let parts = text_parts(form.into_fields());
        let socials = parts
            .iter()
            .find(|(name, _)| name == "socials")
            .map(|(_, value)| value.clone())
            .unwrap();
        assert_eq!(socials, r#"{"twitter":"@ada"}"#);

        let category = parts
            .iter()
            .find(|(name, _)| name == "category")
            .map(|(_, value)| value.clone())
            .unwrap();
        assert_eq!(category, "scientist");
    }

    #[test]
    fn test_person_form_file_survives_encoding() {
        let form = PersonForm {
            name: "Ada".to_string(),
            image: Some(FilePart::new("ada.jpg", "image/jpeg", vec![1, 2])),
            ..Default::default()
        };

        let has_file = encode_fields(form.into_fields())
            .into_iter()
            .any(|part| matches!(part, EncodedPart::File { name, .. } if name == "image"));
        assert!(has_file);
    }

    #[test]
    fn test_omitted_optional_fields_send_nothing() {
        let form = NewsForm {
            title: "T".to_string(),
            category: "Sports".to_string(),
            ..Default::default()
        };

        let parts = text_parts(form.into_fields());
        assert!(!parts.iter().any(|(name, _)| name == "videoUrl"));
        assert!(!parts.iter().any(|(name, _)| name.starts_with("tags")));
    }
}
