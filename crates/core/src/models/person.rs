//! People directory models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fixed profession archetypes used for directory filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersonCategory {
    Actor,
    Musician,
    Athlete,
    Politician,
    Business,
    Scientist,
    Media,
    #[default]
    Other,
}

impl PersonCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonCategory::Actor => "Actor",
            PersonCategory::Musician => "Musician",
            PersonCategory::Athlete => "Athlete",
            PersonCategory::Politician => "Politician",
            PersonCategory::Business => "Business",
            PersonCategory::Scientist => "Scientist",
            PersonCategory::Media => "Media",
            PersonCategory::Other => "Other",
        }
    }

    /// Lowercase identifier as the server expects it
    pub fn wire_name(&self) -> &'static str {
        match self {
            PersonCategory::Actor => "actor",
            PersonCategory::Musician => "musician",
            PersonCategory::Athlete => "athlete",
            PersonCategory::Politician => "politician",
            PersonCategory::Business => "business",
            PersonCategory::Scientist => "scientist",
            PersonCategory::Media => "media",
            PersonCategory::Other => "other",
        }
    }

    /// All archetypes, in directory display order
    pub fn all() -> &'static [PersonCategory] {
        &[
            PersonCategory::Actor,
            PersonCategory::Musician,
            PersonCategory::Athlete,
            PersonCategory::Politician,
            PersonCategory::Business,
            PersonCategory::Scientist,
            PersonCategory::Media,
            PersonCategory::Other,
        ]
    }
}

impl std::fmt::Display for PersonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Social media handles for a person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// A directory entry for a public figure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub category: PersonCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub socials: SocialLinks,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub news_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Person {
    /// Addressable key for detail navigation: the server-generated slug
    /// when present, the numeric id otherwise. Both resolve to the same
    /// record on the server.
    pub fn address_key(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.is_empty() => slug.clone(),
            _ => self.id.to_string(),
        }
    }
}
