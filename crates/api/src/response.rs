//! Response envelopes and list normalization

use serde::Deserialize;

/// Detail payload wrapper: `{ "data": ... }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A normalized page of results
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// List payloads arrive either paginated (`data` plus page metadata) or
/// as a flat array. Both collapse into [`Page`] here, once, so callers
/// never branch on the wire shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Paged {
        data: Vec<T>,
        #[serde(default = "default_page")]
        page: u32,
        #[serde(default = "default_page", rename = "totalPages")]
        total_pages: u32,
        #[serde(default)]
        total: Option<u64>,
    },
    Flat(Vec<T>),
}

fn default_page() -> u32 {
    1
}

impl<T> ListBody<T> {
    /// Collapse into a page. A flat body is one complete page.
    pub fn into_page(self) -> Page<T> {
        match self {
            ListBody::Paged {
                data,
                page,
                total_pages,
                total,
            } => Page {
                items: data,
                page,
                total_pages: total_pages.max(1),
                total,
            },
            ListBody::Flat(items) => {
                let total = items.len() as u64;
                Page {
                    items,
                    page: 1,
                    total_pages: 1,
                    total: Some(total),
                }
            }
        }
    }
}
