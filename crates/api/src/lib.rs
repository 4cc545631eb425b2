//! Newsdesk API Library
//!
//! HTTP client and domain services for the Newsdesk platform REST API.
//!
//! # Architecture
//!
//! - **Client**: base origin + bearer-credential attachment, response
//!   decoding, and the request/network error taxonomy
//! - **Services**: auth, news, and people endpoint wrappers reached via
//!   accessors on the client
//! - **Multipart**: the field-map encoding used by create/update
//!   endpoints that carry files
//!
//! # Usage
//!
//! ```ignore
//! let client = ApiClient::new("https://api.example.com/api/")?;
//!
//! let user = client.auth().login(&credentials).await?;
//! client.set_token(user.token.clone().unwrap_or_default());
//!
//! let page = client.news().list(1, 10).await?;
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod multipart;
pub mod news;
pub mod people;
pub mod response;

#[cfg(test)]
pub(crate) mod testutil;

pub use auth::{AuthService, Credentials, NewUser, ProfileUpdate};
pub use client::ApiClient;
pub use error::{Error, Result};
pub use multipart::{encode_fields, into_form, EncodedPart, FieldValue, FilePart};
pub use news::NewsService;
pub use people::PersonService;
pub use response::{Envelope, ListBody, Page};
