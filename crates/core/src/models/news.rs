//! News article models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Article category, normalized from both wire shapes
///
/// The server sends categories either as a bare string or as an object
/// carrying a name and a slug. Both collapse into this one type at the
/// deserialization boundary so callers never have to guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub slug: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Detailed {
                name: String,
                #[serde(default)]
                slug: Option<String>,
            },
            Name(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Name(name) => Category { name, slug: None },
            Wire::Detailed { name, slug } => Category { name, slug },
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A news article
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    pub category: Category,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}

/// Reporter dashboard aggregates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporterStats {
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub published: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub total_views: u64,
}

/// One row of a bulk-import preview
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Result of committing a bulk import
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    #[serde(default)]
    pub imported: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_bare_string() {
        let category: Category = serde_json::from_str("\"Politics\"").unwrap();
        assert_eq!(category.name, "Politics");
        assert!(category.slug.is_none());
    }

    #[test]
    fn test_category_from_object() {
        let category: Category =
            serde_json::from_str(r#"{"name":"Politics","slug":"politics"}"#).unwrap();
        assert_eq!(category.name, "Politics");
        assert_eq!(category.slug.as_deref(), Some("politics"));
    }

    #[test]
    fn test_article_accepts_both_category_shapes() {
        let flat: Article = serde_json::from_str(
            r#"{"id":1,"title":"T","category":"Sports"}"#,
        )
        .unwrap();
        let nested: Article = serde_json::from_str(
            r#"{"id":2,"title":"T","category":{"name":"Sports","slug":"sports"}}"#,
        )
        .unwrap();
        assert_eq!(flat.category.name, nested.category.name);
    }

    #[test]
    fn test_article_defaults() {
        let article: Article =
            serde_json::from_str(r#"{"id":1,"title":"T","category":"Sports"}"#).unwrap();
        assert!(!article.is_video);
        assert!(!article.is_published());
        assert_eq!(article.view_count, 0);
    }
}
